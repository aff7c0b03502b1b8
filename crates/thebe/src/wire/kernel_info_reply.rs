/*
 * kernel_info_reply.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;

use crate::wire::jupyter_message::MessageType;
use crate::wire::jupyter_message::Status;
use crate::wire::language_info::LanguageInfo;

/// Represents a reply to a kernel_info_request
#[derive(Debug, Serialize, Clone)]
pub struct KernelInfoReply {
    /// Version of messaging protocol
    pub protocol_version: String,

    /// A startup banner
    pub banner: String,

    /// The name of the kernel implementation
    pub implementation: String,

    /// The version of the kernel implementation
    pub implementation_version: String,

    /// Information about the language the kernel supports
    pub language_info: LanguageInfo,

    /// The execution status ("ok" or "error")
    pub status: Status,
}

impl MessageType for KernelInfoReply {
    fn message_type() -> String {
        String::from("kernel_info_reply")
    }
}
