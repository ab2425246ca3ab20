//! Game HTTP routes, mounted under `/api/game`.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{GameCodeParam, ValidatedJson};
use crate::game::{validate_clue, validate_guess, EndTurn, GetState, NewGame};
use crate::state::AppState;
use crate::ws::session;

#[derive(Debug, Serialize, Deserialize)]
pub struct ClueRequest {
    pub clue: String,
    pub number: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GuessRequest {
    pub row: i64,
    pub col: i64,
}

fn no_store<T: Serialize>(body: &T) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(CacheControl(vec![
            CacheDirective::NoCache,
            CacheDirective::NoStore,
            CacheDirective::MustRevalidate,
        ]))
        .json(body)
}

/// POST /api/game/create
///
/// Starts a game under a fresh code and returns its state.
async fn create(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (code, game) = app_state.registry.create()?;
    let state = game.send(GetState).await?;
    info!(game_code = %code, games = app_state.registry.len(), "game created");
    Ok(no_store(&state))
}

/// GET /api/game/lookup?code=CODE
///
/// Joins an existing game only; unknown codes are 404 rather than a new game.
async fn lookup(
    code: GameCodeParam,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let code = code.into_inner();
    let game = app_state.registry.get(&code).ok_or_else(|| {
        AppError::not_found(ErrorCode::GameNotFound, format!("No game with code {code}"))
    })?;
    Ok(no_store(&game.send(GetState).await?))
}

/// GET /api/game/state?gameId=CODE
async fn get_state(
    code: GameCodeParam,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = app_state.registry.get_or_start(&code.into_inner());
    Ok(no_store(&game.send(GetState).await?))
}

/// POST /api/game/new?gameId=CODE
///
/// Deals a fresh board for the same code and pushes it to every channel.
async fn new_game(
    code: GameCodeParam,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = app_state.registry.get_or_start(&code.into_inner());
    Ok(no_store(&game.send(NewGame).await?))
}

/// POST /api/game/clue?gameId=CODE  body: `{ "clue": "WATER", "number": 3 }`
async fn give_clue(
    code: GameCodeParam,
    body: ValidatedJson<ClueRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let command = validate_clue(&body.clue, body.number)?;
    let game = app_state.registry.get_or_start(&code.into_inner());
    Ok(no_store(&game.send(command).await?))
}

/// POST /api/game/guess?gameId=CODE  body: `{ "row": 0, "col": 4 }`
async fn make_guess(
    code: GameCodeParam,
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let command = validate_guess(body.row, body.col)?;
    let game = app_state.registry.get_or_start(&code.into_inner());
    Ok(no_store(&game.send(command).await?))
}

/// POST /api/game/end-turn?gameId=CODE
async fn end_turn(
    code: GameCodeParam,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = app_state.registry.get_or_start(&code.into_inner());
    Ok(no_store(&game.send(EndTurn).await?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/create", web::post().to(create))
        .route("/lookup", web::get().to(lookup))
        .route("/state", web::get().to(get_state))
        .route("/new", web::post().to(new_game))
        .route("/clue", web::post().to(give_clue))
        .route("/guess", web::post().to(make_guess))
        .route("/end-turn", web::post().to(end_turn))
        .route("/ws", web::get().to(session::upgrade));
}
