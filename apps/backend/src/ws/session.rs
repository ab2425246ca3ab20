use std::time::Instant;

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::WsConfig;
use crate::domain::GameCode;
use crate::extractors::GameCodeParam;
use crate::game::{CloseChannel, GameActor, OpenChannel, SyncChannel};
use crate::state::AppState;
use crate::ws::protocol::{ClientMsg, ServerEvent};

/// GET /api/game/ws?gameId=CODE
///
/// Starts the game on first use and attaches this socket as a channel.
pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    code: GameCodeParam,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let code = code.into_inner();
    let game = app_state.registry.get_or_start(&code);
    let session = WsSession::new(code, game, app_state.ws);
    ws::start(session, &req, stream)
}

/// One WebSocket connection bound to one game.
pub struct WsSession {
    code: GameCode,
    game: Addr<GameActor>,
    config: WsConfig,

    /// Assigned by the game once the channel is open.
    session_id: Option<Uuid>,

    last_heartbeat: Instant,
    heartbeat_handle: Option<SpawnHandle>,
}

impl WsSession {
    pub fn new(code: GameCode, game: Addr<GameActor>, config: WsConfig) -> Self {
        Self {
            code,
            game,
            config,
            session_id: None,
            last_heartbeat: Instant::now(),
            heartbeat_handle: None,
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, event: &ServerEvent) {
        match serde_json::to_string(event) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound event"),
        }
    }

    fn close_with(ctx: &mut ws::WebsocketContext<Self>, code: ws::CloseCode, reason: &str) {
        ctx.close(Some(ws::CloseReason {
            code,
            description: Some(reason.to_string()),
        }));
        ctx.stop();
    }

    fn start_heartbeat(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        let timeout = self.config.client_timeout;
        let handle = ctx.run_interval(self.config.heartbeat_interval, move |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > timeout {
                warn!(
                    game_code = %actor.code,
                    session_id = ?actor.session_id,
                    "[WS SESSION] heartbeat timed out"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
        self.heartbeat_handle = Some(handle);
    }

    fn open_channel(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        let sink = Box::new(ctx.address().recipient::<ServerEvent>());

        // Hold other messages until the game has registered us, so a `sync`
        // can never race ahead of `connected`.
        self.game
            .send(OpenChannel { sink })
            .into_actor(self)
            .map(|res, actor, ctx| match res {
                Ok(opened) => {
                    actor.session_id = Some(opened.session_id);
                    info!(
                        game_code = %actor.code,
                        session_id = %opened.session_id,
                        player_count = opened.game_state.player_count,
                        "[WS SESSION] channel open"
                    );
                }
                Err(err) => {
                    warn!(game_code = %actor.code, error = %err, "[WS SESSION] game unavailable");
                    Self::close_with(ctx, ws::CloseCode::Error, "game unavailable");
                }
            })
            .wait(ctx);
    }

    /// Ask for a private state push. A channel the game no longer knows
    /// (evicted after a failed send) is reopened, so the client gets a fresh
    /// `connected` and the others see it rejoin.
    fn sync(&mut self, session_id: Uuid, ctx: &mut ws::WebsocketContext<Self>) {
        self.game
            .send(SyncChannel { session_id })
            .into_actor(self)
            .map(move |res, actor, ctx| match res {
                Ok(true) => {}
                Ok(false) => {
                    if actor.session_id != Some(session_id) {
                        return;
                    }
                    info!(
                        game_code = %actor.code,
                        session_id = %session_id,
                        "[WS SESSION] channel was evicted, reopening"
                    );
                    actor.session_id = None;
                    actor.open_channel(ctx);
                }
                Err(err) => {
                    warn!(game_code = %actor.code, error = %err, "[WS SESSION] game unavailable");
                    Self::close_with(ctx, ws::CloseCode::Error, "game unavailable");
                }
            })
            .wait(ctx);
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        ctx.set_mailbox_capacity(self.config.mailbox_capacity);
        debug!(game_code = %self.code, "[WS SESSION] started");

        self.open_channel(ctx);
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(session_id) = self.session_id.take() {
            self.game.do_send(CloseChannel { session_id });
        }
        info!(game_code = %self.code, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                // Anything other than a sync request is ignored.
                if let Ok(ClientMsg::Sync) = serde_json::from_str::<ClientMsg>(&text) {
                    if let Some(session_id) = self.session_id {
                        self.sync(session_id, ctx);
                    }
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                Self::close_with(ctx, ws::CloseCode::Unsupported, "binary frames not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    game_code = %self.code,
                    session_id = ?self.session_id,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<ServerEvent> for WsSession {
    type Result = ();

    fn handle(&mut self, event: ServerEvent, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &event);
    }
}
