//! Real-time channels: wire protocol, session fan-out and the WebSocket
//! transport.

pub mod hub;
pub mod protocol;
pub mod session;
pub mod sink;

pub use hub::SessionHub;
pub use protocol::{ClientMsg, GameState, ServerEvent};
pub use sink::{ChannelError, EventSink};
