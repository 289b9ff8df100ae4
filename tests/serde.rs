#![cfg(feature = "serde")]

use sudoku_backtrack::Puzzle;

const GRID_01: &str =
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";

#[test]
fn json_uses_line_notation() {
    let puzzle = Puzzle::from_str_line(GRID_01).unwrap();
    let json = serde_json::to_string(&puzzle).unwrap();
    assert_eq!(json, format!("\"{}\"", GRID_01));
}

#[test]
fn json_round_trip() {
    let puzzle = Puzzle::from_str_line(GRID_01).unwrap();
    let json = serde_json::to_string(&puzzle).unwrap();
    let read_back: Puzzle = serde_json::from_str(&json).unwrap();
    assert_eq!(read_back, puzzle);
}

#[test]
fn json_rejects_malformed_lines() {
    let result: Result<Puzzle, _> = serde_json::from_str("\"..3.2.6..\"");
    assert!(result.is_err());
}
