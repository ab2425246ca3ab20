// Error mapping without a running server: status codes, codes and the
// Problem Details body produced by ResponseError.
use actix_web::body::to_bytes;
use actix_web::ResponseError;

use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let app = AppError::invalid(ErrorCode::InvalidClue, "clue word must be letters only");
    assert_eq!(app.code(), ErrorCode::InvalidClue);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_not_found_to_404() {
    let app = AppError::not_found(ErrorCode::GameNotFound, "no game BAKETO");
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_mailbox_failure_to_503() {
    let app: AppError = actix::MailboxError::Closed.into();
    assert_eq!(app.code(), ErrorCode::GameUnavailable);
    assert_eq!(app.status().as_u16(), 503);
}

#[test]
fn config_errors_are_500() {
    let app = AppError::config("DUET_PORT must be a port number");
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn internal_errors_are_500() {
    let app = AppError::internal("no free game code after 64 attempts");
    assert_eq!(app.code(), ErrorCode::InternalError);
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn humanizes_codes_for_titles() {
    assert_eq!(AppError::humanize_code("GAME_NOT_FOUND"), "Game Not Found");
    assert_eq!(AppError::humanize_code("INVALID_CLUE"), "Invalid Clue");
}

#[actix_web::test]
async fn renders_problem_details_body() {
    let app = AppError::invalid(ErrorCode::InvalidGuess, "row must be in 0..5");
    let resp = app.error_response();

    assert_eq!(resp.status().as_u16(), 400);
    let header = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-trace-id header");

    let body = to_bytes(resp.into_body()).await.expect("body");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("json");

    assert_eq!(json["code"], "INVALID_GUESS");
    assert_eq!(json["status"], 400);
    assert_eq!(json["title"], "Invalid Guess");
    assert_eq!(json["detail"], "row must be in 0..5");
    assert_eq!(json["trace_id"], header.as_str());
}
