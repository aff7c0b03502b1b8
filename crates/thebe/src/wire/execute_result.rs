/*
 * execute_result.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;
use serde_json::json;

use crate::wire::jupyter_message::MessageType;

/// Represents the result of an execution, broadcast to all frontends. Unlike
/// display_data, the result always carries a single plain-text rendering.
#[derive(Debug, Clone)]
pub struct ExecuteResult {
    /// A monotonically increasing execution counter
    pub execution_count: u32,

    /// The plain-text rendering of the result
    pub text: String,
}

impl MessageType for ExecuteResult {
    fn message_type() -> String {
        String::from("execute_result")
    }
}

impl Serialize for ExecuteResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut result = serializer.serialize_struct("ExecuteResult", 3)?;
        result.serialize_field("data", &json!({ "text/plain": self.text }))?;
        result.serialize_field("execution_count", &self.execution_count)?;
        result.serialize_field("metadata", &json!({}))?;
        result.end()
    }
}
