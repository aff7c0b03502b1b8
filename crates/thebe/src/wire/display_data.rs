/*
 * display_data.rs
 *
 * Copyright (C) 2023 Posit Software, PBC. All rights reserved.
 *
 */

use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;
use serde_json::json;

use crate::wire::jupyter_message::MessageType;
use crate::wire::mime_bundle::MimeBundle;

/// Represents a display_data message broadcast to all frontends
#[derive(Debug, Clone)]
pub struct DisplayData {
    /// The renderable representations of the value being displayed
    pub data: MimeBundle,
}

impl MessageType for DisplayData {
    fn message_type() -> String {
        String::from("display_data")
    }
}

impl Serialize for DisplayData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut data = serializer.serialize_struct("DisplayData", 2)?;
        data.serialize_field("metadata", &json!({}))?;
        data.serialize_field("data", &self.data)?;
        data.end()
    }
}
