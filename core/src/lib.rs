#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use error::*;
pub use grid::*;
pub use loader::*;
pub use provider::*;
pub use session::*;
pub use text::*;
pub use types::*;

pub use jeopardy_protocol as protocol;

mod board;
mod clue;
mod error;
mod grid;
mod loader;
mod provider;
mod session;
mod text;
mod types;

/// Shape of a board: how many categories across, how many clues down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub categories: Ix,
    pub questions: Ix,
}

impl BoardConfig {
    pub const DEFAULT_CATEGORIES: Ix = 6;
    pub const DEFAULT_QUESTIONS: Ix = 5;

    pub const fn new_unchecked(categories: Ix, questions: Ix) -> Self {
        Self {
            categories,
            questions,
        }
    }

    pub fn new(categories: Ix, questions: Ix) -> Self {
        Self::new_unchecked(categories.max(1), questions.max(1))
    }

    pub const fn total_cells(&self) -> usize {
        self.categories as usize * self.questions as usize
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_CATEGORIES, Self::DEFAULT_QUESTIONS)
    }
}
