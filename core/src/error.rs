use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine count must be between 1 and 255")]
    InvalidConfiguration,
    #[error("Move not allowed in the current game state")]
    InvalidState,
}

pub type Result<T> = core::result::Result<T, GameError>;
