/*
 * shutdown_reply.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;

use crate::wire::jupyter_message::MessageType;
use crate::wire::jupyter_message::Status;

/// Represents a reply from the kernel to a shutdown request, sent just before
/// the kernel exits
#[derive(Debug, Clone)]
pub struct ShutdownReply {
    /// False if final shutdown; true if shutdown precedes a restart
    pub restart: bool,
}

impl MessageType for ShutdownReply {
    fn message_type() -> String {
        String::from("shutdown_reply")
    }
}

impl Serialize for ShutdownReply {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut reply = serializer.serialize_struct("ShutdownReply", 2)?;
        reply.serialize_field("restart", &self.restart)?;
        reply.serialize_field("status", &Status::Ok)?;
        reply.end()
    }
}
