//! Per-game fan-out of events to connected channels.
//!
//! The hub is owned by one game actor, so it needs no locking. Delivery is
//! best effort: a failed send evicts that session and never fails the
//! broadcast.

use time::OffsetDateTime;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::ws::protocol::ServerEvent;
use crate::ws::sink::{ChannelError, EventSink};

struct Session {
    id: Uuid,
    sink: Box<dyn EventSink>,
    connected_at: OffsetDateTime,
}

impl Session {
    /// Whole seconds since registration, for logs.
    fn connected_secs(&self) -> i64 {
        (OffsetDateTime::now_utc() - self.connected_at).whole_seconds()
    }
}

#[derive(Default)]
pub struct SessionHub {
    sessions: Vec<Session>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sink: Box<dyn EventSink>) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.push(Session {
            id,
            sink,
            connected_at: OffsetDateTime::now_utc(),
        });
        debug!(session_id = %id, player_count = self.sessions.len(), "session registered");
        id
    }

    /// Returns whether the session was still registered.
    pub fn unregister(&mut self, id: Uuid) -> bool {
        let Some(idx) = self.sessions.iter().position(|s| s.id == id) else {
            return false;
        };
        let session = self.sessions.remove(idx);
        debug!(
            session_id = %id,
            connected_secs = session.connected_secs(),
            player_count = self.sessions.len(),
            "session unregistered"
        );
        true
    }

    /// Deliver to every session. Returns how many were evicted.
    pub fn broadcast(&mut self, event: &ServerEvent) -> usize {
        self.fan_out(None, event)
    }

    /// Deliver to every session except `skip`. Returns how many were evicted.
    pub fn broadcast_except(&mut self, skip: Uuid, event: &ServerEvent) -> usize {
        self.fan_out(Some(skip), event)
    }

    /// Private delivery. The session is evicted on failure.
    pub fn send_to(&mut self, id: Uuid, event: ServerEvent) -> Result<(), ChannelError> {
        let Some(idx) = self.sessions.iter().position(|s| s.id == id) else {
            return Err(ChannelError::Closed);
        };
        let kind = event.kind();
        if let Err(err) = self.sessions[idx].sink.deliver(event) {
            let session = self.sessions.remove(idx);
            warn!(
                session_id = %id,
                event = kind,
                error = %err,
                connected_secs = session.connected_secs(),
                "evicting session after failed send"
            );
            return Err(err);
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.sessions.iter().any(|s| s.id == id)
    }

    fn fan_out(&mut self, skip: Option<Uuid>, event: &ServerEvent) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|session| {
            if Some(session.id) == skip {
                return true;
            }
            match session.sink.deliver(event.clone()) {
                Ok(()) => true,
                Err(err) => {
                    warn!(
                        session_id = %session.id,
                        event = event.kind(),
                        error = %err,
                        connected_secs = session.connected_secs(),
                        "evicting session after failed send"
                    );
                    false
                }
            }
        });
        before - self.sessions.len()
    }
}
