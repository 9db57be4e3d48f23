use crate::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No game has been requested yet.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(LoadError),
}

/// Handle for one in-flight load; only the newest ticket may publish a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Sole owner and writer of the current board.
///
/// A new game replaces the board wholesale, and at most one load runs at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameSession {
    board: Option<Board>,
    state: SessionState,
    generation: u64,
}

impl GameSession {
    pub const START_LABEL: &'static str = "Start!";
    pub const RESTART_LABEL: &'static str = "Restart!";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    pub fn control_label(&self) -> &'static str {
        if self.is_started() {
            Self::RESTART_LABEL
        } else {
            Self::START_LABEL
        }
    }

    /// Clears the current board and claims the right to publish the next one.
    ///
    /// Returns `None` while another load is still in flight.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.is_loading() {
            log::debug!("load already in flight, ignoring new game request");
            return None;
        }
        self.board = None;
        self.state = SessionState::Loading;
        self.generation = self.generation.wrapping_add(1);
        Some(LoadTicket(self.generation))
    }

    /// Publishes the outcome of the load started with `ticket`.
    ///
    /// Returns whether anything changed; stale tickets are dropped.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: core::result::Result<Board, LoadError>,
    ) -> bool {
        if ticket.0 != self.generation || !self.is_loading() {
            log::warn!("dropping result of stale load {:?}", ticket);
            return false;
        }
        match result {
            Ok(board) => {
                log::debug!(
                    "board ready: {} categories x {} clues",
                    board.category_count(),
                    board.question_count()
                );
                self.board = Some(board);
                self.state = SessionState::Ready;
            }
            Err(err) => {
                log::warn!("board load failed: {}", err);
                self.state = SessionState::Failed(err);
            }
        }
        true
    }

    pub fn reveal(&mut self, coords: CellCoord) -> Result<RevealOutcome> {
        self.board
            .as_mut()
            .ok_or(BoardError::NoBoard)?
            .reveal(coords)
    }

    pub fn grid(&self) -> Option<Grid> {
        self.board.as_ref().map(Grid::from_board)
    }
}
