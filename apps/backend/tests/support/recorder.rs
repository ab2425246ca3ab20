//! In-memory channels for driving a game actor without sockets.

use std::time::Duration;

use actix::Addr;
use backend::game::{GameActor, OpenChannel};
use backend::ws::ServerEvent;
use tokio::sync::mpsc;
use uuid::Uuid;

/// A channel attached to a game, recording every event it receives.
pub struct Recorder {
    pub session_id: Uuid,
    rx: mpsc::UnboundedReceiver<ServerEvent>,
}

impl Recorder {
    /// Open an unbounded channel on `game`.
    pub async fn open(game: &Addr<GameActor>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let opened = game
            .send(OpenChannel { sink: Box::new(tx) })
            .await
            .expect("game actor should be alive");
        Self {
            session_id: opened.session_id,
            rx,
        }
    }

    /// Next event, failing the test if none arrives in time.
    pub async fn next(&mut self, timeout: Duration) -> ServerEvent {
        tokio::time::timeout(timeout, self.rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("channel closed")
    }

    /// Skip events until one of `kind` arrives.
    pub async fn next_of(&mut self, kind: &str, timeout: Duration) -> ServerEvent {
        loop {
            let event = self.next(timeout).await;
            if event.kind() == kind {
                return event;
            }
        }
    }

    /// Events already delivered, without waiting.
    pub fn drain(&mut self) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Drop the receiving end so every later send to this session fails.
    pub fn kill(self) -> Uuid {
        self.session_id
    }
}
