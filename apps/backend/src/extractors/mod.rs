pub mod game_code;
pub mod validated_json;

pub use game_code::GameCodeParam;
pub use validated_json::ValidatedJson;
