/*
 * execute_reply.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;
use serde_json::json;

use crate::wire::jupyter_message::MessageType;
use crate::wire::jupyter_message::Status;
use crate::wire::mime_bundle::MimeBundle;

/// Represents a reply from an execute_request message
#[derive(Debug, Clone)]
pub struct ExecuteReply {
    /// The status of the request
    pub status: Status,

    /// Monotonically increasing execution counter
    pub execution_count: u32,

    /// Pager output to show alongside the result, if any
    pub pager: MimeBundle,
}

impl MessageType for ExecuteReply {
    fn message_type() -> String {
        String::from("execute_reply")
    }
}

impl Serialize for ExecuteReply {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut reply = serializer.serialize_struct("ExecuteReply", 4)?;
        reply.serialize_field("status", &self.status)?;
        reply.serialize_field("execution_count", &self.execution_count)?;
        // An empty pager encodes as an empty payload list, not as a single
        // pager entry with an empty data object
        if self.pager.is_empty() {
            reply.serialize_field("payload", &json!([]))?;
        } else {
            reply.serialize_field(
                "payload",
                &json!([{
                    "source": "page",
                    "start": 0,
                    "data": &self.pager,
                }]),
            )?;
        }
        reply.serialize_field("user_expressions", &json!({}))?;
        reply.end()
    }
}
