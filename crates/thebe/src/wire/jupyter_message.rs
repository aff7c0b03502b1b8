/*
 * jupyter_message.rs
 *
 * Copyright (C) 2024 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::wire::clear_output::ClearOutput;
use crate::wire::comm_close::CommClose;
use crate::wire::comm_info_reply::CommInfoReply;
use crate::wire::comm_msg::CommMsg;
use crate::wire::comm_open::CommOpen;
use crate::wire::complete_reply::CompleteReply;
use crate::wire::display_data::DisplayData;
use crate::wire::execute_input::ExecuteInput;
use crate::wire::execute_reply::ExecuteReply;
use crate::wire::execute_request::ExecuteRequest;
use crate::wire::execute_result::ExecuteResult;
use crate::wire::history_reply::HistoryReply;
use crate::wire::input_request::InputRequest;
use crate::wire::inspect_reply::InspectReply;
use crate::wire::is_complete_reply::IsCompleteReply;
use crate::wire::kernel_info_reply::KernelInfoReply;
use crate::wire::shutdown_reply::ShutdownReply;
use crate::wire::status::KernelStatus;
use crate::wire::stream::StreamOutput;

/// Trait used to extract the wire message type from message content
pub trait MessageType {
    fn message_type() -> String;
}

/// Convenience trait for grouping traits that must be present on all Jupyter
/// protocol messages
pub trait ProtocolMessage: MessageType + Serialize + std::fmt::Debug + Clone {}
impl<T> ProtocolMessage for T where T: MessageType + Serialize + std::fmt::Debug + Clone {}

/// Represents status returned from kernel inside messages.
#[derive(Debug, Serialize, Copy, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    Error,
}

/// List of all outbound messages.
///
/// The set is closed: the dispatches below match it exhaustively with no
/// fallback arm, so a variant added here does not compile until every
/// dispatch handles it.
#[derive(Debug, Clone)]
pub enum Message {
    // Shell
    KernelInfoReply(KernelInfoReply),
    CommInfoReply(CommInfoReply),
    ExecuteRequest(ExecuteRequest),
    ExecuteReply(ExecuteReply),
    CompleteReply(CompleteReply),
    InspectReply(InspectReply),
    HistoryReply(HistoryReply),
    IsCompleteReply(IsCompleteReply),
    // Control
    ShutdownReply(ShutdownReply),
    // IOPub
    Status(KernelStatus),
    Stream(StreamOutput),
    DisplayData(DisplayData),
    ExecuteResult(ExecuteResult),
    ExecuteInput(ExecuteInput),
    ClearOutput(ClearOutput),
    // StdIn
    InputRequest(InputRequest),
    // IOPub/Shell
    CommOpen(CommOpen),
    CommMsg(CommMsg),
    CommClose(CommClose),
}

impl Message {
    /// Returns the wire type of the content carried by this message; used by
    /// the header layer to fill in the `msg_type` header field.
    pub fn message_type(&self) -> String {
        match self {
            Message::KernelInfoReply(_) => KernelInfoReply::message_type(),
            Message::CommInfoReply(_) => CommInfoReply::message_type(),
            Message::ExecuteRequest(_) => ExecuteRequest::message_type(),
            Message::ExecuteReply(_) => ExecuteReply::message_type(),
            Message::CompleteReply(_) => CompleteReply::message_type(),
            Message::InspectReply(_) => InspectReply::message_type(),
            Message::HistoryReply(_) => HistoryReply::message_type(),
            Message::IsCompleteReply(_) => IsCompleteReply::message_type(),
            Message::ShutdownReply(_) => ShutdownReply::message_type(),
            Message::Status(_) => KernelStatus::message_type(),
            Message::Stream(_) => StreamOutput::message_type(),
            Message::DisplayData(_) => DisplayData::message_type(),
            Message::ExecuteResult(_) => ExecuteResult::message_type(),
            Message::ExecuteInput(_) => ExecuteInput::message_type(),
            Message::ClearOutput(_) => ClearOutput::message_type(),
            Message::InputRequest(_) => InputRequest::message_type(),
            Message::CommOpen(_) => CommOpen::message_type(),
            Message::CommMsg(_) => CommMsg::message_type(),
            Message::CommClose(_) => CommClose::message_type(),
        }
    }

    /// Encodes the message content into the JSON document delivered on the
    /// wire. The surrounding header, signing, and framing are the transport
    /// layer's responsibility.
    pub fn content(&self) -> crate::Result<Value> {
        match self {
            Message::KernelInfoReply(msg) => to_wire(msg),
            Message::CommInfoReply(msg) => to_wire(msg),
            Message::ExecuteRequest(msg) => to_wire(msg),
            Message::ExecuteReply(msg) => to_wire(msg),
            Message::CompleteReply(msg) => to_wire(msg),
            Message::InspectReply(msg) => to_wire(msg),
            Message::HistoryReply(msg) => to_wire(msg),
            Message::IsCompleteReply(msg) => to_wire(msg),
            Message::ShutdownReply(msg) => to_wire(msg),
            Message::Status(msg) => to_wire(msg),
            Message::Stream(msg) => to_wire(msg),
            Message::DisplayData(msg) => to_wire(msg),
            Message::ExecuteResult(msg) => to_wire(msg),
            Message::ExecuteInput(msg) => to_wire(msg),
            Message::ClearOutput(msg) => to_wire(msg),
            Message::InputRequest(msg) => to_wire(msg),
            Message::CommOpen(msg) => to_wire(msg),
            Message::CommMsg(msg) => to_wire(msg),
            Message::CommClose(msg) => to_wire(msg),
        }
    }
}

/// Serializes typed message content to its wire value.
fn to_wire<T: ProtocolMessage>(content: &T) -> crate::Result<Value> {
    serde_json::to_value(content).map_err(Error::CannotSerialize)
}
