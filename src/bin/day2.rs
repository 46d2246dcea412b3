use std::env;
use std::process::exit;

use intcode::memory::Cell;
use intcode::program::Program;
use intcode::{execute, search};
use log::error;

const TARGET: Cell = 19690720;
const BOUND: Cell = 99;

fn main() {
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            error!("usage: day2 <input-file>");
            exit(1);
        }
    };

    let program = match Program::from_file(&path) {
        Ok(program) => program,
        Err(err) => {
            error!("Failed to read task input: {}", err);
            exit(1);
        }
    };

    // Task 1: the machine restored to its pre-fault state.
    match execute(&program, 12, 2) {
        Ok(result) => println!("Position 0: {}", result),
        Err(err) => {
            error!("Failed to run program with initial conditions 12 2: {}", err);
            exit(1);
        }
    }

    // Task 2: find the pair of initial conditions producing the target.
    match search(&program, TARGET, BOUND, BOUND) {
        Ok((noun, verb)) => {
            println!("Solution found with noun: {} verb: {}", noun, verb);
            println!("Answer: {}", 100 * noun + verb);
        }
        Err(err) => {
            error!("{}", err);
            exit(1);
        }
    }
}
