use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::BoardError;

/// Index along one board axis, used for category and clue positions.
pub type Ix = u8;

/// Position of a single clue cell: which category column, which clue row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub category: Ix,
    pub clue: Ix,
}

impl CellCoord {
    pub const fn new(category: Ix, clue: Ix) -> Self {
        Self { category, clue }
    }
}

impl From<(Ix, Ix)> for CellCoord {
    fn from((category, clue): (Ix, Ix)) -> Self {
        Self::new(category, clue)
    }
}

/// Formats as the element id `"<category>-<clue>"`.
impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

impl FromStr for CellCoord {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, clue) = s.split_once('-').ok_or(BoardError::InvalidCoords)?;
        let category = category.parse().map_err(|_| BoardError::InvalidCoords)?;
        let clue = clue.parse().map_err(|_| BoardError::InvalidCoords)?;
        Ok(Self::new(category, clue))
    }
}
