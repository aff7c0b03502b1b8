/*
 * comm_close.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;

use crate::wire::jupyter_message::MessageType;

/// Represents a notification that a custom comm channel is being torn down.
#[derive(Debug, Serialize, Clone)]
pub struct CommClose {
    pub comm_id: String,
    pub data: serde_json::Value,
}

impl MessageType for CommClose {
    fn message_type() -> String {
        String::from("comm_close")
    }
}
