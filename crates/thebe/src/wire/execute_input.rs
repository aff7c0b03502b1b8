/*
 * execute_input.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;

use crate::wire::jupyter_message::MessageType;

/// Re-broadcast of the code being executed, so that all attached frontends
/// can display it
#[derive(Debug, Serialize, Clone)]
pub struct ExecuteInput {
    /// A monotonically increasing execution counter
    pub execution_count: u32,

    /// The code being executed
    pub code: String,
}

impl MessageType for ExecuteInput {
    fn message_type() -> String {
        String::from("execute_input")
    }
}
