use std::env;
use std::fs;
use std::process;
use std::time::Instant;

use verity_interpreter::{repl, Environment, Evaluator, Lexer, Parser};

fn main() {
    match env::args().nth(1) {
        Some(path) => run_file(&path),
        None => {
            println!("Hello! This is the Verity programming language!");
            println!("Feel free to type in commands");
            repl::start()
        }
    }
}

fn run_file(path: &str) {
    let started = Instant::now();

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            process::exit(1);
        }
    };

    let program = match Parser::new(Lexer::new(source)).parse_program() {
        Ok(program) => program,
        Err(errors) => {
            print_timing(started);
            for err in errors.iter() {
                println!("\t{}", err);
            }
            println!("PROGRAM EXITED WITH CODE 1");
            process::exit(1);
        }
    };

    let result = Evaluator::default().eval_program(&program, &Environment::new());
    print_timing(started);
    match result {
        Ok(value) => {
            println!("{}", value);
            println!("PROGRAM EXITED WITH CODE 0");
        }
        Err(err) => {
            println!("ERROR: {}", err);
            println!("PROGRAM EXITED WITH CODE 1");
            process::exit(1);
        }
    }
}

fn print_timing(started: Instant) {
    println!(
        "Compilation Time: {} Milliseconds",
        started.elapsed().as_millis()
    );
}
