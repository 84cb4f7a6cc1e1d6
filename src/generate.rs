//! Exhaustive lazy enumeration of every complete board.

use std::vec;

use crate::candidates::legal_values;
use crate::geometry::Geometry;
use crate::{Board, Value};

/// Depth-first enumerator over every complete board of a geometry.
///
/// Yields each valid board exactly once, in ascending lexicographic order of
/// the flattened cell values. The traversal keeps an explicit stack of
/// `(position, remaining candidates)` frames over one working board; each
/// yielded board is an independent copy, so the working board may keep
/// mutating underneath consumers. Restart by constructing a fresh instance.
pub struct BoardGenerator<'a> {
    geometry: &'a Geometry,
    board: Board,
    stack: Vec<Frame>,
}

struct Frame {
    index: usize,
    candidates: vec::IntoIter<Value>,
}

impl<'a> BoardGenerator<'a> {
    pub fn new(geometry: &'a Geometry) -> Self {
        let board = geometry.empty_board();
        let candidates = legal_values(&board, geometry, 0).into_iter();
        Self {
            geometry,
            board,
            stack: vec![Frame {
                index: 0,
                candidates,
            }],
        }
    }

    fn push_frame(&mut self, index: usize) {
        let candidates = legal_values(&self.board, self.geometry, index).into_iter();
        self.stack.push(Frame { index, candidates });
    }
}

impl Iterator for BoardGenerator<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        loop {
            let assignment = match self.stack.last_mut() {
                None => return None,
                Some(frame) => frame.candidates.next().map(|value| (frame.index, value)),
            };
            match assignment {
                None => {
                    // branch exhausted; the next candidate at the parent
                    // overwrites this cell, so no explicit undo
                    self.stack.pop();
                }
                Some((index, value)) => {
                    self.board[index] = value;
                    if index + 1 == self.geometry.cell_count() {
                        return Some(self.board.clone());
                    }
                    self.push_frame(index + 1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoardGenerator;
    use crate::geometry::Geometry;

    #[test]
    fn smallest_grid() {
        let geometry = Geometry::new(1, 1, 1).unwrap();
        let boards: Vec<_> = BoardGenerator::new(&geometry).collect();
        assert_eq!(1, boards.len());
        assert_eq!(vec![1], boards[0].to_vec());
    }

    #[test]
    fn two_by_two_latin_squares() {
        let geometry = Geometry::new(2, 1, 2).unwrap();
        let boards: Vec<_> = BoardGenerator::new(&geometry).collect();
        let flat: Vec<Vec<i32>> = boards.iter().map(|b| b.to_vec()).collect();
        assert_eq!(vec![vec![1, 2, 2, 1], vec![2, 1, 1, 2]], flat);
    }

    #[test]
    fn yielded_boards_are_independent() {
        let geometry = Geometry::new(2, 1, 2).unwrap();
        let mut generator = BoardGenerator::new(&geometry);
        let first = generator.next().unwrap();
        // drain the rest; the working board keeps mutating underneath
        assert_eq!(1, generator.count());
        assert_eq!(vec![1, 2, 2, 1], first.to_vec());
    }
}
