use std::io::{self, Write};
use std::{fs, process};

use sudoku_backtrack::Puzzle;

fn main() {
    print!("Enter the name of the puzzle file: ");
    io::stdout().flush().expect("failed to flush stdout");

    let mut filename = String::new();
    if let Err(err) = io::stdin().read_line(&mut filename) {
        eprintln!("error reading the file name: {}", err);
        process::exit(1);
    }
    let filename = filename.trim();

    let config = match fs::read_to_string(filename) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error accessing file {}: {}", filename, err);
            process::exit(1);
        }
    };

    let mut puzzle = match Puzzle::from_str_grid(&config) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("error reading puzzle from {}: {}", filename, err);
            process::exit(1);
        }
    };

    println!();
    println!("Here is the initial puzzle:");
    println!("{}", puzzle);
    println!();

    if puzzle.solve() {
        println!("Here is the solution:");
    } else {
        println!("No solution could be found.");
        println!("Here is the current state of the puzzle:");
    }
    println!("{}", puzzle);
}
