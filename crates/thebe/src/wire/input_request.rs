/*
 * input_request.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;

use crate::wire::jupyter_message::MessageType;

/// Represents a request from the kernel to the frontend to prompt the user
/// for input
#[derive(Debug, Serialize, Clone)]
pub struct InputRequest {
    /// The prompt to display to the user
    pub prompt: String,
}

impl MessageType for InputRequest {
    fn message_type() -> String {
        String::from("input_request")
    }
}
