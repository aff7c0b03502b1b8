/*
 * comm_open.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;
use serde_json::Value;

use crate::wire::jupyter_message::MessageType;

/// Represents a request to open a custom comm channel
#[derive(Debug, Serialize, Clone)]
pub struct CommOpen {
    /// The unique ID of the comm being opened
    pub comm_id: String,

    /// The name of the comm target on the other side of the channel
    pub target_name: String,

    /// The module that supplies the target
    pub target_module: String,

    /// The data to deliver along with the open request
    pub data: Value,
}

impl MessageType for CommOpen {
    fn message_type() -> String {
        String::from("comm_open")
    }
}
