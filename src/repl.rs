// Interactive scientific calculator
//
// A line protocol over the key-driven state machine: numbers replace the
// display, single-character operators chain, '=' folds, function names
// apply to the display value, and m+/m-/mr/mc drive the memory register.

use engine::scientific::Calculator;
use std::io::{self, BufRead, Write};

const FUNCTIONS: [&str; 12] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "sqrt", "sqr", "cube", "recip",
];

pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut calc = Calculator::new();

    println!("mathkit scientific calculator");
    println!("enter numbers, + - * / =, function names, m+ m- mr mc, clear, history, quit");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "history" => {
                for entry in calc.history() {
                    println!("{}", entry);
                }
                continue;
            }
            "clear" => calc.clear(),
            "m+" => calc.memory_add(),
            "m-" => calc.memory_subtract(),
            "mr" => calc.memory_recall(),
            "mc" => calc.memory_clear(),
            "=" => calc.press_equals(),
            "+" | "-" | "*" | "/" => {
                let symbol = input.chars().next().unwrap_or('+');
                if let Err(error) = calc.press_operator(symbol) {
                    eprintln!("error: {}", error);
                    continue;
                }
            }
            name if FUNCTIONS.contains(&name) => {
                if let Err(error) = calc.apply_function(name) {
                    eprintln!("error: {}", error);
                    continue;
                }
            }
            number => {
                if let Err(error) = calc.enter_value(number) {
                    eprintln!("error: {}", error);
                    continue;
                }
            }
        }

        println!("{}", calc.display());
    }

    Ok(())
}
