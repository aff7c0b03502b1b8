/*
 * inspect_reply.rs
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

/// Represents a reply from the kernel giving code inspection results
#[derive(Debug, Clone)]
pub struct InspectReply {
    /// True if an object was found
    pub found: bool,

    /// The renderable representations of the inspected object
    pub data: MimeBundle,
}

impl MessageType for InspectReply {
    fn message_type() -> String {
        String::from("inspect_reply")
    }
}

impl Serialize for InspectReply {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The reply status mirrors the `found` flag
        let status = if self.found { Status::Ok } else { Status::Error };
        let mut reply = serializer.serialize_struct("InspectReply", 4)?;
        reply.serialize_field("status", &status)?;
        reply.serialize_field("data", &self.data)?;
        reply.serialize_field("metadata", &json!({}))?;
        reply.serialize_field("found", &self.found)?;
        reply.end()
    }
}
