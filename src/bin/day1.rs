use std::env;
use std::process::exit;

use intcode::{fuel, input};
use log::error;

fn main() {
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            error!("usage: day1 <input-file>");
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

    let masses = match input::parse_integers(&lines) {
        Ok(masses) => masses,
        Err(err) => {
            error!("Failed to parse module masses: {}", err);
            exit(1);
        }
    };

    println!("Total fuel: {}", fuel::total_fuel(&masses));
    println!("Total fuel, compounded: {}", fuel::total_compounded_fuel(&masses));
}
