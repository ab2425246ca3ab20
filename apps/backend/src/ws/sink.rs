//! Outbound channel abstraction.
//!
//! A sink accepts an event without blocking. A full or closed sink is a
//! failed delivery; the hub evicts the session behind it.

use actix::prelude::{Recipient, SendError};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::ws::protocol::ServerEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("channel mailbox is full")]
    Full,
    #[error("channel is closed")]
    Closed,
}

pub trait EventSink: Send + 'static {
    fn deliver(&self, event: ServerEvent) -> Result<(), ChannelError>;
}

impl EventSink for Recipient<ServerEvent> {
    fn deliver(&self, event: ServerEvent) -> Result<(), ChannelError> {
        self.try_send(event).map_err(|err| match err {
            SendError::Full(_) => ChannelError::Full,
            SendError::Closed(_) => ChannelError::Closed,
        })
    }
}

impl EventSink for mpsc::Sender<ServerEvent> {
    fn deliver(&self, event: ServerEvent) -> Result<(), ChannelError> {
        self.try_send(event).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => ChannelError::Full,
            mpsc::error::TrySendError::Closed(_) => ChannelError::Closed,
        })
    }
}

impl EventSink for mpsc::UnboundedSender<ServerEvent> {
    fn deliver(&self, event: ServerEvent) -> Result<(), ChannelError> {
        self.send(event).map_err(|_| ChannelError::Closed)
    }
}
