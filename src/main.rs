use std::borrow::Cow;
use std::cmp::Ordering;

use calculator::{Action, BinaryOp, Calculator};
use complex::Complex;
use rustyline::{error::ReadlineError, highlight::Highlighter, Editor};
use rustyline_derive::{Completer, Helper, Hinter, Validator};

use crate::parser::complex_parser;

mod calculator;
mod complex;
mod history;
mod parser;

#[derive(Validator, Helper, Completer, Hinter)]
struct Session;

impl Highlighter for Session {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        let _ = pos;
        match complex_parser::line(line) {
            Ok(_) => Cow::Owned(ansi_term::Color::Blue.paint(line).to_string()),
            Err(_) => Cow::Borrowed(line),
        }
    }

    fn highlight_char(&self, line: &str, pos: usize) -> bool {
        let _ = (line, pos);
        true
    }
}

const MENU: &str = "\
1) add
2) subtract
3) multiply
4) divide
5) compare magnitudes
6) increment real part
7) decrement real part
8) negate
9) modulus
10) view history
11) clear history
12) exit";

fn read_action(editor: &mut Editor<Session>) -> Option<Action> {
    loop {
        let line = match editor.readline("> ") {
            Ok(l) => l,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return None,
            Err(_) => continue,
        };
        match line.trim().parse::<u32>() {
            Ok(v) => match Action::from_selector(v) {
                Some(action) => return Some(action),
                None => println!("Enter a valid number!"),
            },
            Err(_) => println!("Enter a valid number!"),
        }
    }
}

fn read_complex(editor: &mut Editor<Session>, prompt: &str) -> Option<Complex> {
    loop {
        let line = match editor.readline(prompt) {
            Ok(l) => l,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return None,
            Err(_) => continue,
        };
        editor.add_history_entry(line.clone());

        match complex_parser::line(&line) {
            Ok(v) => return Some(v),
            Err(e) => {
                if e.location.line == 1 {
                    println!("{}^", " ".repeat(e.location.column));
                }
                println!("expected one of {}", e.expected);
            }
        }
    }
}

fn run_binary(calculator: &mut Calculator, op: BinaryOp, a: Complex, b: Complex) {
    match calculator.run_binary(op, a, b) {
        Ok(result) => match op {
            BinaryOp::Compare => {
                match a.compare_magnitude(&b) {
                    Some(Ordering::Less) => println!("|{}| < |{}|", a, b),
                    Some(Ordering::Greater) => println!("|{}| > |{}|", a, b),
                    Some(Ordering::Equal) => println!("|{}| = |{}|", a, b),
                    None => println!("magnitudes are unordered"),
                }
                println!("larger magnitude: {}", result);
            }
            _ => println!("{} {} {} = {}", a, op.label(), b, result),
        },
        Err(e) => println!("{}", ansi_term::Color::Red.paint(e.to_string())),
    }
}

fn main() {
    let mut editor = Editor::new().unwrap();
    editor.set_helper(Some(Session));

    let mut calculator = Calculator::new();

    loop {
        println!("{}", MENU);
        let action = match read_action(&mut editor) {
            Some(v) => v,
            None => return,
        };

        match action {
            Action::Binary(op) => {
                let a = match read_complex(&mut editor, "first operand: ") {
                    Some(v) => v,
                    None => return,
                };
                let b = match read_complex(&mut editor, "second operand: ") {
                    Some(v) => v,
                    None => return,
                };
                run_binary(&mut calculator, op, a, b);
            }
            Action::Unary(op) => {
                let a = match read_complex(&mut editor, "operand: ") {
                    Some(v) => v,
                    None => return,
                };
                let result = calculator.run_unary(op, a);
                println!("{} {} = {}", op.label(), a, result);
            }
            Action::ViewHistory => println!("{}", calculator.history.view()),
            Action::ClearHistory => {
                calculator.history.clear();
                println!("history cleared");
            }
            Action::Exit => return,
        }
        println!();
    }
}
