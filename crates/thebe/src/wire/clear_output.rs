/*
 * clear_output.rs
 *
 * Copyright (C) 2023 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;

use crate::wire::jupyter_message::MessageType;

/// Represents a request to the frontend to clear the output displayed for the
/// current cell
#[derive(Debug, Serialize, Clone)]
pub struct ClearOutput {
    /// Whether to defer the clear until new output arrives
    pub wait: bool,
}

impl MessageType for ClearOutput {
    fn message_type() -> String {
        String::from("clear_output")
    }
}
