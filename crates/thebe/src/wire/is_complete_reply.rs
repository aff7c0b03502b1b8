/*
 * is_complete_reply.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;

use crate::wire::jupyter_message::MessageType;

/// Represents a reply to an is_complete_request; reports whether the code
/// fragment submitted by the frontend forms a complete statement.
///
/// The `indent` key is present on the wire only for incomplete code.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum IsCompleteReply {
    /// The code is complete and ready to execute
    Complete,

    /// The code is incomplete; `indent` is the suggested indentation for the
    /// continuation line
    Incomplete { indent: String },

    /// The code is invalid and will fail to execute
    Invalid,

    /// Completeness could not be determined
    Unknown,
}

impl MessageType for IsCompleteReply {
    fn message_type() -> String {
        String::from("is_complete_reply")
    }
}
