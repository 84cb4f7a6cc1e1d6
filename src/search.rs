//! Resumable board search with a per-call time budget.

use std::time::{Duration, Instant};

use crate::candidates::untried_values;
use crate::geometry::Geometry;
use crate::Board;

const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(30);

/// Result of one [`BoardSearch::advance`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The next board in lexicographic order, as an independent snapshot.
    Found(Board),
    /// The time budget lapsed before the next board was reached. The search
    /// position is preserved; calling `advance` again resumes the same step.
    TimedOut,
    /// No more boards exist. Terminal: every later call returns `Exhausted`
    /// without touching any state.
    Exhausted,
}

/// A steppable backtracking engine over the full board space.
///
/// Walks the same solution space as [`crate::generate::BoardGenerator`], but
/// one board per [`advance`](Self::advance) call: the cursor and working
/// board persist between calls, so each call only pays for the backtracking
/// distance from the previous board to the next, never a restart. Boards
/// come out in strictly increasing lexicographic order of their flattened
/// cells.
///
/// Each cell's stored value doubles as the resume pointer for that cell:
/// candidates are filtered to values greater than it, so revisiting a cell
/// after a backtrack continues with its untried options.
pub struct BoardSearch<'a> {
    geometry: &'a Geometry,
    board: Board,
    // linear index of the cell under consideration; None once exhausted
    cursor: Option<usize>,
    time_budget: Duration,
}

impl<'a> BoardSearch<'a> {
    pub fn new(geometry: &'a Geometry) -> Self {
        Self::with_time_budget(geometry, DEFAULT_TIME_BUDGET)
    }

    pub fn with_time_budget(geometry: &'a Geometry, time_budget: Duration) -> Self {
        Self {
            geometry,
            board: geometry.empty_board(),
            cursor: Some(0),
            time_budget,
        }
    }

    /// Replaces the time budget applied to subsequent `advance` calls.
    pub fn set_time_budget(&mut self, time_budget: Duration) {
        self.time_budget = time_budget;
    }

    /// Advances the search to the next complete board.
    ///
    /// The timer is re-armed at the start of every call; the budget never
    /// accumulates across calls.
    pub fn advance(&mut self) -> SearchOutcome {
        let start = Instant::now();
        let mut cursor = match self.cursor {
            None => return SearchOutcome::Exhausted,
            Some(cursor) => cursor,
        };
        loop {
            let mut candidates = untried_values(&self.board, self.geometry, cursor);
            while candidates.is_empty() {
                if cursor == 0 {
                    // cell 0 is intentionally left as-is; the cursor alone
                    // marks the search exhausted
                    debug!("search space exhausted");
                    self.cursor = None;
                    return SearchOutcome::Exhausted;
                }
                self.board[cursor] = 0;
                cursor -= 1;
                candidates = untried_values(&self.board, self.geometry, cursor);
            }
            if start.elapsed() >= self.time_budget {
                debug!("time budget spent at cell {}", cursor);
                self.cursor = Some(cursor);
                return SearchOutcome::TimedOut;
            }
            self.board[cursor] = candidates[0];
            if cursor + 1 == self.geometry.cell_count() {
                // stay on the last cell so the next call seeks the next
                // larger assignment there
                self.cursor = Some(cursor);
                return SearchOutcome::Found(self.board.clone());
            }
            cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{BoardSearch, SearchOutcome};
    use crate::geometry::Geometry;

    fn found(outcome: SearchOutcome) -> Vec<i32> {
        match outcome {
            SearchOutcome::Found(board) => board.to_vec(),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn drains_the_two_by_two_space() {
        let geometry = Geometry::with_default_alphabet(2, 1).unwrap();
        let mut search = BoardSearch::new(&geometry);
        assert_eq!(vec![1, 2, 2, 1], found(search.advance()));
        assert_eq!(vec![2, 1, 1, 2], found(search.advance()));
        assert_eq!(SearchOutcome::Exhausted, search.advance());
    }

    #[test]
    fn exhausted_is_terminal() {
        let geometry = Geometry::new(1, 1, 1).unwrap();
        let mut search = BoardSearch::new(&geometry);
        assert_eq!(vec![1], found(search.advance()));
        assert_eq!(SearchOutcome::Exhausted, search.advance());
        assert_eq!(SearchOutcome::Exhausted, search.advance());
        assert_eq!(SearchOutcome::Exhausted, search.advance());
    }

    #[test]
    fn zero_budget_times_out_and_resumes() {
        let geometry = Geometry::new(2, 1, 2).unwrap();
        let mut search = BoardSearch::with_time_budget(&geometry, Duration::from_secs(0));
        assert_eq!(SearchOutcome::TimedOut, search.advance());
        assert_eq!(SearchOutcome::TimedOut, search.advance());
        search.set_time_budget(Duration::from_secs(3600));
        assert_eq!(vec![1, 2, 2, 1], found(search.advance()));
    }
}
