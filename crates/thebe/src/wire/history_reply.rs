/*
 * history_reply.rs
 *
 * Copyright (C) 2023 Posit Software, PBC. All rights reserved.
 *
 */

use serde::ser::SerializeStruct;
use serde::ser::SerializeTuple;
use serde::Serialize;
use serde::Serializer;

use crate::wire::jupyter_message::MessageType;
use crate::wire::jupyter_message::Status;

/// Represents a reply to a history_request
#[derive(Debug, Clone)]
pub struct HistoryReply {
    /// The history entries, in execution order
    pub history: Vec<HistoryEntry>,
}

/// A single entry in the kernel's execution history
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// The ID of the session the entry was recorded in. Clients may address
    /// sessions relative to the current one with negative IDs.
    pub session: i32,

    /// The line number of the entry within its session
    pub line_number: u32,

    /// The code recorded for the entry
    pub code: HistoryCode,
}

/// The code recorded for one history entry. Not every entry has stored
/// output.
#[derive(Debug, Clone)]
pub enum HistoryCode {
    Input(String),
    InputOutput { input: String, output: String },
}

impl MessageType for HistoryReply {
    fn message_type() -> String {
        String::from("history_reply")
    }
}

impl Serialize for HistoryReply {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut reply = serializer.serialize_struct("HistoryReply", 2)?;
        reply.serialize_field("history", &self.history)?;
        reply.serialize_field("status", &Status::Ok)?;
        reply.end()
    }
}

impl Serialize for HistoryEntry {
    /// Encodes the entry as a `[session, line_number, text]` triple. When an
    /// entry has recorded output, the output replaces the input in the
    /// triple; the two are never sent together.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = match &self.code {
            HistoryCode::Input(input) => input,
            HistoryCode::InputOutput { output, .. } => output,
        };
        let mut entry = serializer.serialize_tuple(3)?;
        entry.serialize_element(&self.session)?;
        entry.serialize_element(&self.line_number)?;
        entry.serialize_element(text)?;
        entry.end()
    }
}
