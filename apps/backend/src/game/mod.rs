//! Game hosting: one actor per code plus the registry that finds them.

pub mod actor;
pub mod messages;
pub mod registry;
pub mod validation;

pub use actor::{GameActor, GameMap, IdlePolicy};
pub use messages::{
    ChannelOpened, CloseChannel, CommandResponse, EndTurn, GetState, GiveClue, MakeGuess,
    NewGame, OpenChannel, SyncChannel,
};
pub use registry::{GameRegistry, RegistryConfig, DEFAULT_IDLE_TIMEOUT};
pub use validation::{validate_clue, validate_guess, ValidationError};
