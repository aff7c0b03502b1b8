/*
 * comm_info_reply.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;

use crate::wire::jupyter_message::MessageType;
use crate::wire::jupyter_message::Status;

/// Represents a reply from the kernel listing open comms
#[derive(Debug, Clone)]
pub struct CommInfoReply {
    /// The open comms, indexed by comm ID
    pub comms: BTreeMap<String, CommInfoTargetName>,
}

/// Represents comm info for a single target
#[derive(Debug, Serialize, Clone)]
pub struct CommInfoTargetName {
    pub target_name: String,
}

impl MessageType for CommInfoReply {
    fn message_type() -> String {
        String::from("comm_info_reply")
    }
}

impl Serialize for CommInfoReply {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut reply = serializer.serialize_struct("CommInfoReply", 2)?;
        reply.serialize_field("comms", &self.comms)?;
        reply.serialize_field("status", &Status::Ok)?;
        reply.end()
    }
}
