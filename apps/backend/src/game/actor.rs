//! One actor per game code.
//!
//! The actor owns the engine and the session hub for its game. actix
//! delivers its messages one at a time, so every command for a code runs to
//! completion before the next one starts.
//!
//! A registry-started actor stops itself once it has had no channels and no
//! commands for its idle timeout, and drops its own registry entry on stop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use dashmap::DashMap;
use tracing::{debug, info, warn};

use crate::domain::{GameCode, GameEngine};
use crate::game::messages::{
    ChannelOpened, CloseChannel, CommandResponse, EndTurn, GetState, GiveClue, MakeGuess,
    NewGame, OpenChannel, SyncChannel,
};
use crate::game::validation::validate_clue;
use crate::ws::hub::SessionHub;
use crate::ws::protocol::{GameState, ServerEvent};

/// Live games by code, shared between the registry and its actors.
pub type GameMap = DashMap<GameCode, Addr<GameActor>>;

/// How an idle actor is reclaimed.
#[derive(Clone)]
pub struct IdlePolicy {
    pub timeout: Duration,
    pub games: Arc<GameMap>,
}

pub struct GameActor {
    code: GameCode,
    engine: GameEngine,
    hub: SessionHub,
    idle: Option<IdlePolicy>,
    last_activity: Instant,
}

impl GameActor {
    pub fn new(code: GameCode, engine: GameEngine) -> Self {
        Self {
            code,
            engine,
            hub: SessionHub::new(),
            idle: None,
            last_activity: Instant::now(),
        }
    }

    /// Stop after `policy.timeout` with no channels and no commands.
    pub fn with_idle_policy(mut self, policy: IdlePolicy) -> Self {
        self.idle = Some(policy);
        self
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    fn is_idle(&self, timeout: Duration) -> bool {
        self.hub.count() == 0 && self.last_activity.elapsed() >= timeout
    }

    fn game_state(&self) -> GameState {
        GameState {
            snapshot: self.engine.snapshot(),
            game_code: self.code.clone(),
            player_count: self.hub.count(),
        }
    }

    /// Broadcast and, if that evicted dead sessions, tell the survivors the
    /// new head count. Repeats until a round evicts nobody.
    fn publish(&mut self, event: ServerEvent) {
        let mut evicted = self.hub.broadcast(&event);
        while evicted > 0 {
            self.announce_departure(evicted);
            let left = ServerEvent::PlayerLeft {
                player_count: self.hub.count(),
                game_state: self.game_state(),
            };
            evicted = self.hub.broadcast(&left);
        }
    }

    fn announce_departure(&self, evicted: usize) {
        info!(
            game_code = %self.code,
            evicted,
            player_count = self.hub.count(),
            "dead sessions evicted"
        );
    }
}

impl Actor for GameActor {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(game_code = %self.code, "game actor started");

        if let Some(timeout) = self.idle.as_ref().map(|policy| policy.timeout) {
            let every = (timeout / 4).max(Duration::from_millis(10));
            ctx.run_interval(every, move |actor, ctx| {
                if actor.is_idle(timeout) {
                    info!(game_code = %actor.code, idle_secs = timeout.as_secs(), "reclaiming idle game");
                    ctx.stop();
                }
            });
        }
    }

    fn stopped(&mut self, ctx: &mut Self::Context) {
        if let Some(policy) = &self.idle {
            let me = ctx.address();
            policy.games.remove_if(&self.code, |_, addr| *addr == me);
        }
        info!(game_code = %self.code, "game actor stopped");
    }
}

impl Handler<NewGame> for GameActor {
    type Result = MessageResult<NewGame>;

    fn handle(&mut self, _msg: NewGame, _ctx: &mut Self::Context) -> Self::Result {
        self.touch();
        self.engine.reset();
        info!(game_code = %self.code, "new board dealt");

        self.publish(ServerEvent::GameStateUpdate {
            game_state: self.game_state(),
        });
        MessageResult(self.game_state())
    }
}

impl Handler<GiveClue> for GameActor {
    type Result = CommandResponse;

    fn handle(&mut self, msg: GiveClue, _ctx: &mut Self::Context) -> Self::Result {
        self.touch();
        // Same shape rules as the HTTP layer, for callers that skip it.
        if let Err(err) = validate_clue(&msg.word, i64::from(msg.number)) {
            debug!(game_code = %self.code, reason = %err, "clue rejected");
            return CommandResponse::declined(err.to_string(), self.game_state());
        }
        let clue = match self.engine.give_clue(msg.word, msg.number) {
            Ok(clue) => clue,
            Err(err) => {
                debug!(game_code = %self.code, reason = %err, "clue declined");
                return CommandResponse::declined(err.to_string(), self.game_state());
            }
        };
        debug!(
            game_code = %self.code,
            clue = %clue.word,
            number = clue.number,
            "clue given"
        );

        self.publish(ServerEvent::ClueGiven {
            clue: clue.word.clone(),
            number: clue.number,
            game_state: self.game_state(),
        });
        CommandResponse {
            clue: Some(clue),
            ..CommandResponse::ok(self.game_state())
        }
    }
}

impl Handler<MakeGuess> for GameActor {
    type Result = CommandResponse;

    fn handle(&mut self, msg: MakeGuess, _ctx: &mut Self::Context) -> Self::Result {
        self.touch();
        let outcome = match self.engine.make_guess(msg.row, msg.col) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(game_code = %self.code, reason = %err, "guess declined");
                return CommandResponse::declined(err.to_string(), self.game_state());
            }
        };
        debug!(
            game_code = %self.code,
            row = msg.row,
            col = msg.col,
            result = ?outcome.result,
            game_over = outcome.game_over,
            "guess made"
        );
        if outcome.game_over {
            info!(game_code = %self.code, won = outcome.won, "game over");
        }

        self.publish(ServerEvent::GuessMade {
            row: msg.row,
            col: msg.col,
            result: outcome.result,
            game_state: self.game_state(),
        });
        CommandResponse {
            result: Some(outcome.result),
            game_over: outcome.game_over.then_some(true),
            won: outcome.won.then_some(true),
            ..CommandResponse::ok(self.game_state())
        }
    }
}

impl Handler<EndTurn> for GameActor {
    type Result = CommandResponse;

    fn handle(&mut self, _msg: EndTurn, _ctx: &mut Self::Context) -> Self::Result {
        self.touch();
        if let Err(err) = self.engine.end_turn() {
            debug!(game_code = %self.code, reason = %err, "end turn declined");
            return CommandResponse::declined(err.to_string(), self.game_state());
        }
        debug!(game_code = %self.code, "turn ended");

        self.publish(ServerEvent::TurnEnded {
            game_state: self.game_state(),
        });
        let game_over = self.engine.is_game_over();
        CommandResponse {
            game_over: game_over.then_some(true),
            ..CommandResponse::ok(self.game_state())
        }
    }
}

impl Handler<GetState> for GameActor {
    type Result = MessageResult<GetState>;

    fn handle(&mut self, _msg: GetState, _ctx: &mut Self::Context) -> Self::Result {
        self.touch();
        MessageResult(self.game_state())
    }
}

impl Handler<OpenChannel> for GameActor {
    type Result = ChannelOpened;

    fn handle(&mut self, msg: OpenChannel, _ctx: &mut Self::Context) -> Self::Result {
        self.touch();
        let session_id = self.hub.register(msg.sink);
        let game_state = self.game_state();
        info!(
            game_code = %self.code,
            session_id = %session_id,
            player_count = game_state.player_count,
            "player joined"
        );

        let connected = ServerEvent::Connected {
            session_id,
            game_state: game_state.clone(),
        };
        if self.hub.send_to(session_id, connected).is_err() {
            warn!(game_code = %self.code, session_id = %session_id, "new channel dropped before connect");
            return ChannelOpened {
                session_id,
                game_state: self.game_state(),
            };
        }

        let joined = ServerEvent::PlayerJoined {
            player_count: game_state.player_count,
            game_state: game_state.clone(),
        };
        let evicted = self.hub.broadcast_except(session_id, &joined);
        if evicted > 0 {
            self.announce_departure(evicted);
            self.publish(ServerEvent::PlayerLeft {
                player_count: self.hub.count(),
                game_state: self.game_state(),
            });
        }

        ChannelOpened {
            session_id,
            game_state,
        }
    }
}

impl Handler<CloseChannel> for GameActor {
    type Result = bool;

    fn handle(&mut self, msg: CloseChannel, _ctx: &mut Self::Context) -> Self::Result {
        self.touch();
        if !self.hub.unregister(msg.session_id) {
            return false;
        }
        info!(
            game_code = %self.code,
            session_id = %msg.session_id,
            player_count = self.hub.count(),
            "player left"
        );

        self.publish(ServerEvent::PlayerLeft {
            player_count: self.hub.count(),
            game_state: self.game_state(),
        });
        true
    }
}

impl Handler<SyncChannel> for GameActor {
    type Result = bool;

    fn handle(&mut self, msg: SyncChannel, _ctx: &mut Self::Context) -> Self::Result {
        self.touch();
        if !self.hub.contains(msg.session_id) {
            debug!(game_code = %self.code, session_id = %msg.session_id, "sync from evicted session");
            return false;
        }
        let update = ServerEvent::GameStateUpdate {
            game_state: self.game_state(),
        };
        if self.hub.send_to(msg.session_id, update).is_err() {
            self.publish(ServerEvent::PlayerLeft {
                player_count: self.hub.count(),
                game_state: self.game_state(),
            });
            return false;
        }
        true
    }
}
