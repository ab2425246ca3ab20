use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::domain::GameCode;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game code taken from the `gameId` (or `code`) query parameter.
///
/// Only the format is checked here; whether a game exists is up to the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCodeParam(pub GameCode);

#[derive(Deserialize)]
struct CodeQuery {
    #[serde(rename = "gameId")]
    game_id: Option<String>,
    code: Option<String>,
}

impl CodeQuery {
    fn from_query(query: &str) -> Option<Self> {
        web::Query::<CodeQuery>::from_query(query)
            .ok()
            .map(web::Query::into_inner)
    }

    /// `gameId` wins when both keys are present.
    fn into_raw(self) -> Option<String> {
        self.game_id.or(self.code)
    }
}

/// Unchecked code named by a query string, for log context.
pub(crate) fn raw_game_code(query: &str) -> Option<String> {
    CodeQuery::from_query(query)?.into_raw()
}

impl GameCodeParam {
    pub fn into_inner(self) -> GameCode {
        self.0
    }

    fn parse(req: &HttpRequest) -> Result<Self, AppError> {
        let query = CodeQuery::from_query(req.query_string()).ok_or_else(|| {
            AppError::bad_request(ErrorCode::InvalidGameCode, "Malformed query string")
        })?;

        let raw = query.into_raw().ok_or_else(|| {
            AppError::bad_request(ErrorCode::InvalidGameCode, "Missing gameId parameter")
        })?;

        raw.parse::<GameCode>()
            .map(GameCodeParam)
            .map_err(|e| AppError::bad_request(ErrorCode::InvalidGameCode, e.to_string()))
    }
}

impl FromRequest for GameCodeParam {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::parse(req))
    }
}
