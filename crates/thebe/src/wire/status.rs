/*
 * status.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;

use crate::wire::jupyter_message::MessageType;

/// Represents a message from the kernel reporting a change in its execution
/// state
#[derive(Debug, Serialize, Clone)]
pub struct KernelStatus {
    /// The kernel's new execution state
    pub execution_state: ExecutionState,
}

impl MessageType for KernelStatus {
    fn message_type() -> String {
        String::from("status")
    }
}

#[derive(Debug, Serialize, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionState {
    /// The kernel is processing a request
    Busy,

    /// The kernel is ready for another request
    Idle,

    /// The kernel is starting up
    Starting,
}
