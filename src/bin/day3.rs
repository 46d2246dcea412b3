use std::env;
use std::process::exit;

use intcode::{input, wires};
use log::error;

fn main() {
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            error!("usage: day3 <input-file>");
            exit(1);
        }
    };

    let lines = match input::read_lines(&path) {
        Ok(lines) => lines,
        Err(err) => {
            error!("Failed to read task input: {}", err);
            exit(1);
        }
    };
    if lines.len() < 2 {
        error!("expected two wire paths, got {} line(s)", lines.len());
        exit(1);
    }

    let first = match wires::parse_path(&lines[0]) {
        Ok(segments) => segments,
        Err(err) => {
            error!("Failed to parse first wire: {}", err);
            exit(1);
        }
    };
    let second = match wires::parse_path(&lines[1]) {
        Ok(segments) => segments,
        Err(err) => {
            error!("Failed to parse second wire: {}", err);
            exit(1);
        }
    };

    match wires::closest_crossing(&first, &second) {
        Some(distance) => println!("Best distance: {}", distance),
        None => {
            error!("the wires never cross");
            exit(1);
        }
    }
    match wires::fewest_combined_steps(&first, &second) {
        Some(steps) => println!("Best steps: {}", steps),
        None => {
            error!("the wires never cross");
            exit(1);
        }
    }
}
