use alloc::string::String;
use thiserror::Error;

use crate::protocol::CategoryId;

/// Failure reported by a [`TriviaProvider`](crate::TriviaProvider).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("request to trivia provider failed: {0}")]
    Request(String),
    #[error("trivia provider responded with status {0}")]
    Status(u16),
    #[error("malformed response from trivia provider: {0}")]
    Decode(String),
}

/// Why a board could not be loaded. Any of these aborts the whole load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("provider offered {available} usable categories, {requested} required")]
    NotEnoughCategories { requested: usize, available: usize },
    #[error("category {category_id} has {available} clues, {requested} required")]
    NotEnoughClues {
        category_id: CategoryId,
        requested: usize,
        available: usize,
    },
    #[error("category {category_id} has no title")]
    MissingTitle { category_id: CategoryId },
    #[error("loaded board is malformed: {0}")]
    Board(#[from] BoardError),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape is not rectangular")]
    InvalidBoardShape,
    #[error("No board has been loaded")]
    NoBoard,
}

pub type Result<T> = core::result::Result<T, BoardError>;
