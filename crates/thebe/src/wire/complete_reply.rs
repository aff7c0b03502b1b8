/*
 * complete_reply.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;

use crate::wire::jupyter_message::MessageType;
use crate::wire::jupyter_message::Status;

/// Represents a reply to a complete_request
#[derive(Debug, Clone)]
pub struct CompleteReply {
    /// The set of completion suggestions
    pub matches: Vec<String>,

    /// Position in the original code at which replacement starts
    pub cursor_start: u32,

    /// Position in the original code at which replacement ends
    pub cursor_end: u32,

    /// Additional metadata attached to the completions
    pub metadata: Value,

    /// Whether the completion request succeeded
    pub ok: bool,
}

impl MessageType for CompleteReply {
    fn message_type() -> String {
        String::from("complete_reply")
    }
}

impl Serialize for CompleteReply {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let status = if self.ok { Status::Ok } else { Status::Error };
        let mut reply = serializer.serialize_struct("CompleteReply", 5)?;
        reply.serialize_field("matches", &self.matches)?;
        reply.serialize_field("cursor_start", &self.cursor_start)?;
        reply.serialize_field("cursor_end", &self.cursor_end)?;
        reply.serialize_field("metadata", &self.metadata)?;
        reply.serialize_field("status", &status)?;
        reply.end()
    }
}
