//! Short human-shareable game codes such as `BAKOTU`.
//!
//! A code is three consonant-vowel pairs in uppercase. Parsing is
//! case-insensitive and normalizes to uppercase.

use std::fmt;
use std::str::FromStr;

use lazy_regex::regex_is_match;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Serialize, Serializer};
use thiserror::Error;

const CONSONANTS: &[u8] = b"BCDFGHJKLMNPQRSTVWXYZ";
const VOWELS: &[u8] = b"AEIOU";
const PAIRS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameCode(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid game code: {0:?}")]
pub struct InvalidGameCode(pub String);

impl GameCode {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut code = String::with_capacity(PAIRS * 2);
        for _ in 0..PAIRS {
            // Both alphabets are non-empty constants.
            if let (Some(&c), Some(&v)) = (CONSONANTS.choose(rng), VOWELS.choose(rng)) {
                code.push(char::from(c));
                code.push(char::from(v));
            }
        }
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for GameCode {
    type Err = InvalidGameCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if regex_is_match!(r"^(?:[BCDFGHJKLMNPQRSTVWXYZ][AEIOU]){3}$", &upper) {
            Ok(Self(upper))
        } else {
            Err(InvalidGameCode(s.to_string()))
        }
    }
}

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GameCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for GameCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
