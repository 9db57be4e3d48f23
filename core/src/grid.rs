use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

/// What a body cell currently displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellFace {
    /// Nothing revealed yet; drawn as a question-mark glyph.
    Placeholder,
    Question(String),
    /// Drawn with the distinguishing answer style.
    Answer(String),
}

impl CellFace {
    pub fn of(clue: &Clue) -> Self {
        match clue.showing() {
            RevealState::Hidden => Self::Placeholder,
            RevealState::Question => Self::Question(clue.question().into()),
            RevealState::Answer => Self::Answer(clue.answer().into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Placeholder => None,
            Self::Question(text) | Self::Answer(text) => Some(text),
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, Self::Answer(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub index: usize,
    pub title: String,
}

impl HeaderCell {
    pub fn element_id(&self) -> String {
        format!("cat-{}", self.index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub coords: CellCoord,
    pub face: CellFace,
}

/// Render-ready snapshot of a board: one header per category, one row per clue index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Vec<GridCell>>,
}

impl Grid {
    pub fn from_board(board: &Board) -> Self {
        let headers = board
            .categories()
            .iter()
            .enumerate()
            .map(|(index, category)| HeaderCell {
                index,
                title: title_case(category.title()),
            })
            .collect();

        let rows = (0..board.question_count())
            .map(|clue| {
                (0..board.category_count())
                    .map(|category| {
                        let coords = CellCoord::new(category as Ix, clue as Ix);
                        GridCell {
                            coords,
                            face: CellFace::of(&board[coords]),
                        }
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn cell(&self, coords: CellCoord) -> Option<&GridCell> {
        self.rows
            .get(usize::from(coords.clue))?
            .get(usize::from(coords.category))
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flatten()
    }
}
