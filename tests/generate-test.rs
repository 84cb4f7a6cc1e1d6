use std::collections::HashSet;
use std::time::Duration;

use sudogen::error::InvalidGeometry;
use sudogen::generate::BoardGenerator;
use sudogen::geometry::Geometry;
use sudogen::search::{BoardSearch, SearchOutcome};
use sudogen::{Board, Value};

/// The number of complete 4x4 boards with 2x2 boxes over the alphabet 1..=4.
const BOARD_COUNT_4_2_4: usize = 288;

fn assert_valid(board: &Board, geometry: &Geometry) {
    let size = geometry.size();
    let box_size = geometry.box_size();
    assert!(board.iter().all(|&v| v >= 1 && v <= geometry.max_value()));
    let mut groups: Vec<Vec<Value>> = Vec::new();
    for row in board.rows() {
        groups.push(row.to_vec());
    }
    for col in 0..size {
        groups.push((0..size).map(|row| board[row * size + col]).collect());
    }
    for box_row in (0..size).step_by(box_size) {
        for box_col in (0..size).step_by(box_size) {
            groups.push(
                (box_row..box_row + box_size)
                    .flat_map(|row| {
                        (box_col..box_col + box_size).map(move |col| board[row * size + col])
                    })
                    .collect(),
            );
        }
    }
    for group in groups {
        let distinct: HashSet<_> = group.iter().collect();
        assert_eq!(group.len(), distinct.len(), "duplicate in {:?}", group);
    }
}

fn drain_search(search: &mut BoardSearch<'_>) -> Vec<Board> {
    let mut boards = Vec::new();
    loop {
        match search.advance() {
            SearchOutcome::Found(board) => boards.push(board),
            SearchOutcome::Exhausted => return boards,
            SearchOutcome::TimedOut => panic!("unexpected timeout"),
        }
    }
}

#[test]
fn generator_counts_4x4_boards() {
    let geometry = Geometry::new(4, 2, 4).unwrap();
    let boards: Vec<_> = BoardGenerator::new(&geometry).collect();
    assert_eq!(BOARD_COUNT_4_2_4, boards.len());
    for board in &boards {
        assert_valid(board, &geometry);
    }
}

#[test]
fn generator_is_deterministic() {
    let geometry = Geometry::new(4, 2, 4).unwrap();
    let first: Vec<_> = BoardGenerator::new(&geometry).collect();
    let second: Vec<_> = BoardGenerator::new(&geometry).collect();
    assert_eq!(first, second);
}

#[test]
fn generator_handles_alphabet_larger_than_grid() {
    // 2x2 grids over 1..=3: 3 choices for the corner, then 6 ways each
    let geometry = Geometry::new(2, 1, 3).unwrap();
    let boards: Vec<_> = BoardGenerator::new(&geometry).collect();
    assert_eq!(18, boards.len());
    for board in &boards {
        assert_valid(board, &geometry);
    }
}

#[test]
fn search_first_board_is_greedy_smallest() {
    let geometry = Geometry::new(4, 2, 4).unwrap();
    let mut search = BoardSearch::new(&geometry);
    let board = match search.advance() {
        SearchOutcome::Found(board) => board,
        other => panic!("expected Found, got {:?}", other),
    };
    assert_eq!(vec![1, 2, 3, 4], board.row(0).to_vec());
    assert_valid(&board, &geometry);
}

#[test]
fn search_boards_strictly_increase() {
    let geometry = Geometry::new(4, 2, 4).unwrap();
    let mut search = BoardSearch::with_time_budget(&geometry, Duration::from_secs(3600));
    let boards = drain_search(&mut search);
    assert_eq!(BOARD_COUNT_4_2_4, boards.len());
    for pair in boards.windows(2) {
        assert!(
            pair[0].to_vec() < pair[1].to_vec(),
            "boards out of order: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn engines_agree_on_the_board_set() {
    for &(size, box_size, max_value) in &[(4, 2, 4), (2, 1, 3)] {
        let geometry = Geometry::new(size, box_size, max_value).unwrap();
        let generated: HashSet<Vec<Value>> = BoardGenerator::new(&geometry)
            .map(|board| board.to_vec())
            .collect();
        let mut search = BoardSearch::with_time_budget(&geometry, Duration::from_secs(3600));
        let searched: HashSet<Vec<Value>> = drain_search(&mut search)
            .into_iter()
            .map(|board| board.to_vec())
            .collect();
        assert_eq!(generated, searched);
    }
}

#[test]
fn exhausted_search_stays_exhausted() {
    let geometry = Geometry::new(2, 1, 2).unwrap();
    let mut search = BoardSearch::new(&geometry);
    assert_eq!(2, drain_search(&mut search).len());
    assert_eq!(SearchOutcome::Exhausted, search.advance());
    assert_eq!(SearchOutcome::Exhausted, search.advance());
}

#[test]
fn zero_budget_times_out_then_resumes() {
    let geometry = Geometry::new(4, 2, 4).unwrap();
    let mut search = BoardSearch::with_time_budget(&geometry, Duration::from_secs(0));
    assert_eq!(SearchOutcome::TimedOut, search.advance());
    search.set_time_budget(Duration::from_secs(3600));
    let resumed = match search.advance() {
        SearchOutcome::Found(board) => board,
        other => panic!("expected Found, got {:?}", other),
    };
    let mut fresh = BoardSearch::with_time_budget(&geometry, Duration::from_secs(3600));
    match fresh.advance() {
        SearchOutcome::Found(board) => assert_eq!(board, resumed),
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn unfillable_grid_yields_no_boards() {
    // rows of width 4 cannot hold 4 distinct values from 1..=2
    let geometry = Geometry::new(4, 1, 2).unwrap();
    assert_eq!(0, BoardGenerator::new(&geometry).count());
    let mut search = BoardSearch::new(&geometry);
    assert_eq!(SearchOutcome::Exhausted, search.advance());
}

#[test]
fn undersized_alphabet_is_rejected() {
    assert_eq!(
        Err(InvalidGeometry::AlphabetTooSmall {
            max_value: 8,
            required: 9
        }),
        Geometry::new(9, 3, 8).map(|_| ())
    );
}
