/*
 * stream.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;

use crate::wire::jupyter_message::MessageType;

/// Represents a message from the kernel carrying captured stream output
#[derive(Debug, Serialize, Clone)]
pub struct StreamOutput {
    /// The output captured from the stream
    pub data: String,

    /// The name of the stream the output was captured from
    pub name: Stream,
}

impl MessageType for StreamOutput {
    fn message_type() -> String {
        String::from("stream")
    }
}

#[derive(Debug, Serialize, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    /// Standard input
    Stdin,

    /// Standard output
    Stdout,
}
