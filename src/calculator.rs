use std::fmt::{Display, Formatter};

use crate::complex::{Complex, DivisionByZero};
use crate::history::{History, OperationRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Compare,
}

impl BinaryOp {
    pub fn label(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Compare => "comparison",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Increment,
    Decrement,
    Negate,
    Modulus,
}

impl UnaryOp {
    pub fn label(&self) -> &'static str {
        match self {
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
            UnaryOp::Negate => "negation",
            UnaryOp::Modulus => "modulus",
        }
    }
}

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Binary(BinaryOp),
    Unary(UnaryOp),
    ViewHistory,
    ClearHistory,
    Exit,
}

impl Action {
    pub fn from_selector(selector: u32) -> Option<Action> {
        match selector {
            1 => Some(Action::Binary(BinaryOp::Add)),
            2 => Some(Action::Binary(BinaryOp::Subtract)),
            3 => Some(Action::Binary(BinaryOp::Multiply)),
            4 => Some(Action::Binary(BinaryOp::Divide)),
            5 => Some(Action::Binary(BinaryOp::Compare)),
            6 => Some(Action::Unary(UnaryOp::Increment)),
            7 => Some(Action::Unary(UnaryOp::Decrement)),
            8 => Some(Action::Unary(UnaryOp::Negate)),
            9 => Some(Action::Unary(UnaryOp::Modulus)),
            10 => Some(Action::ViewHistory),
            11 => Some(Action::ClearHistory),
            12 => Some(Action::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero(DivisionByZero),
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::DivisionByZero(e) => write!(f, "{}", e),
        }
    }
}

pub struct Calculator {
    pub history: History,
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator { history: History::new() }
    }

    /// Computes a binary operation and appends it to the history. Division
    /// by zero propagates before anything is recorded.
    pub fn run_binary(
        &mut self,
        op: BinaryOp,
        a: Complex,
        b: Complex,
    ) -> Result<Complex, CalcError> {
        let result = match op {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => (a / b).map_err(CalcError::DivisionByZero)?,
            // the comparison records the larger modulus as a real value
            BinaryOp::Compare => Complex::from_real(a.modulus().max(b.modulus())),
        };
        self.history.push(OperationRecord::binary(op.label(), a, b, result));
        Ok(result)
    }

    /// Computes a unary operation and appends it to the history. Increment
    /// and decrement use the prefix forms, so the recorded result is the
    /// stepped value.
    pub fn run_unary(&mut self, op: UnaryOp, a: Complex) -> Complex {
        let mut operand = a;
        let result = match op {
            UnaryOp::Increment => operand.increment_real(),
            UnaryOp::Decrement => operand.decrement_real(),
            UnaryOp::Negate => -operand,
            UnaryOp::Modulus => Complex::from_real(operand.modulus()),
        };
        self.history.push(OperationRecord::unary(op.label(), a, result));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_operations_record_history() {
        let mut calc = Calculator::new();
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, -2.0);

        let sum = calc.run_binary(BinaryOp::Add, a, b).unwrap();
        assert_eq!(sum, Complex::new(4.0, 2.0));
        assert_eq!(calc.history.len(), 1);
        assert_eq!(calc.history.view(), "1: 3 + 4i + 1 - 2i = 4 + 2i");
    }

    #[test]
    fn divide_by_zero_leaves_history_unchanged() {
        let mut calc = Calculator::new();
        let a = Complex::new(3.0, 4.0);

        let result = calc.run_binary(BinaryOp::Divide, a, Complex::ZERO);
        assert_eq!(result, Err(CalcError::DivisionByZero(DivisionByZero)));
        assert!(calc.history.is_empty());
    }

    #[test]
    fn divide_records_on_success() {
        let mut calc = Calculator::new();
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, -2.0);

        let quotient = calc.run_binary(BinaryOp::Divide, a, b).unwrap();
        assert_eq!(quotient, Complex::new(-1.0, 2.0));
        assert_eq!(calc.history.len(), 1);
    }

    #[test]
    fn compare_records_larger_modulus_as_real_value() {
        let mut calc = Calculator::new();
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, -2.0);

        let result = calc.run_binary(BinaryOp::Compare, a, b).unwrap();
        assert_eq!(result, Complex::from_real(5.0));
        assert_eq!(calc.history.view(), "1: 3 + 4i comparison 1 - 2i = 5");
    }

    #[test]
    fn increment_records_stepped_value() {
        let mut calc = Calculator::new();
        let result = calc.run_unary(UnaryOp::Increment, Complex::new(4.0, 2.0));
        assert_eq!(result, Complex::new(5.0, 2.0));
        assert_eq!(calc.history.view(), "1: ++ 4 + 2i = 5 + 2i");
    }

    #[test]
    fn modulus_records_real_result() {
        let mut calc = Calculator::new();
        let result = calc.run_unary(UnaryOp::Modulus, Complex::new(3.0, 4.0));
        assert_eq!(result, Complex::from_real(5.0));
        assert_eq!(calc.history.view(), "1: modulus 3 + 4i = 5");
    }

    #[test]
    fn negate_records_unary_form() {
        let mut calc = Calculator::new();
        let result = calc.run_unary(UnaryOp::Negate, Complex::new(1.0, -2.0));
        assert_eq!(result, Complex::new(-1.0, 2.0));
        assert_eq!(calc.history.view(), "1: negation 1 - 2i = -1 + 2i");
    }

    #[test]
    fn selectors_cover_the_menu() {
        assert_eq!(Action::from_selector(1), Some(Action::Binary(BinaryOp::Add)));
        assert_eq!(Action::from_selector(9), Some(Action::Unary(UnaryOp::Modulus)));
        assert_eq!(Action::from_selector(10), Some(Action::ViewHistory));
        assert_eq!(Action::from_selector(12), Some(Action::Exit));
        assert_eq!(Action::from_selector(0), None);
        assert_eq!(Action::from_selector(13), None);
    }
}
