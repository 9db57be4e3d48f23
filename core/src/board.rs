use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    /// Raw provider title; display casing is applied by the grid.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// All categories of one game, laid out category-major.
///
/// Every category holds the same number of clues.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let Some(first) = categories.first() else {
            return Err(BoardError::InvalidBoardShape);
        };
        let questions = first.clues.len();
        if questions == 0
            || categories.len() > Ix::MAX as usize
            || questions > Ix::MAX as usize
            || categories.iter().any(|c| c.clues.len() != questions)
        {
            return Err(BoardError::InvalidBoardShape);
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.category_count() as Ix, self.question_count() as Ix)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn question_count(&self) -> usize {
        self.categories[0].clues.len()
    }

    pub fn validate_coords(&self, coords: CellCoord) -> Result<CellCoord> {
        if usize::from(coords.category) < self.category_count()
            && usize::from(coords.clue) < self.question_count()
        {
            Ok(coords)
        } else {
            Err(BoardError::InvalidCoords)
        }
    }

    pub fn clue(&self, coords: CellCoord) -> Result<&Clue> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    pub fn reveal(&mut self, coords: CellCoord) -> Result<RevealOutcome> {
        let CellCoord { category, clue } = self.validate_coords(coords)?;
        let target = &mut self.categories[usize::from(category)].clues[usize::from(clue)];
        let outcome = target.reveal();
        log::debug!("reveal {}: {:?}", coords, outcome);
        Ok(outcome)
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.category_count()).flat_map(move |category| {
            (0..self.question_count()).map(move |clue| CellCoord::new(category as Ix, clue as Ix))
        })
    }
}

impl Index<CellCoord> for Board {
    type Output = Clue;

    fn index(&self, CellCoord { category, clue }: CellCoord) -> &Self::Output {
        &self.categories[usize::from(category)].clues[usize::from(clue)]
    }
}

impl TryFrom<Vec<Category>> for Board {
    type Error = BoardError;

    fn try_from(categories: Vec<Category>) -> Result<Self> {
        Self::new(categories)
    }
}

impl From<Board> for Vec<Category> {
    fn from(board: Board) -> Self {
        board.categories
    }
}
