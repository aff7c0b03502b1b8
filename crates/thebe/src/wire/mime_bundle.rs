/*
 * mime_bundle.rs
 *
 * Copyright (C) 2024 Posit Software, PBC. All rights reserved.
 *
 */

use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;

/// MIME types whose payload arrives as a pre-serialized JSON document. These
/// are re-parsed so the frontend receives structured JSON; every other MIME
/// type's payload is embedded verbatim as a string.
const JSON_MIME_TYPES: &[&str] = &[
    "application/json",
    "application/vnd.vegalite.v4+json",
    "application/vnd.vega.v5+json",
];

/// A single renderable representation of a value, tagged with its MIME type
#[derive(Debug, Clone, PartialEq)]
pub struct MimeData {
    /// The MIME type of the representation
    pub mime_type: String,

    /// The payload text of the representation
    pub data: String,
}

impl MimeData {
    /// The wire value for this representation.
    ///
    /// A pre-serialized JSON payload that fails to parse degrades to an empty
    /// string; one malformed representation must not take down the rest of
    /// the message.
    fn to_wire(&self) -> Value {
        if !JSON_MIME_TYPES.contains(&self.mime_type.as_str()) {
            return Value::String(self.data.clone());
        }
        match serde_json::from_str(&self.data) {
            Ok(value) => value,
            Err(err) => {
                log::warn!(
                    "Discarding malformed '{}' payload ({}); substituting an empty string",
                    self.mime_type,
                    err
                );
                Value::String(String::new())
            },
        }
    }
}

/// A set of alternative representations of one value, keyed by MIME type;
/// serializes to the `data` object carried by display-oriented messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MimeBundle(pub Vec<MimeData>);

impl MimeBundle {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for MimeBundle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.mime_type, &entry.to_wire())?;
        }
        map.end()
    }
}
