use std::fmt::{Display, Formatter};

use crate::complex::Complex;

/// Immutable snapshot of one calculator action. Unary records store the
/// sentinel `(0,0)` as the second operand; rendering discriminates on that
/// sentinel, so a genuinely binary record with a `(0,0)` second operand also
/// renders in unary form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationRecord {
    pub label: &'static str,
    pub first: Complex,
    pub second: Complex,
    pub result: Complex,
}

impl OperationRecord {
    pub fn binary(
        label: &'static str,
        first: Complex,
        second: Complex,
        result: Complex,
    ) -> OperationRecord {
        OperationRecord { label, first, second, result }
    }

    pub fn unary(label: &'static str, operand: Complex, result: Complex) -> OperationRecord {
        OperationRecord { label, first: operand, second: Complex::ZERO, result }
    }
}

impl Display for OperationRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.second == Complex::ZERO {
            write!(f, "{} {} = {}", self.label, self.first, self.result)
        } else {
            write!(f, "{} {} {} = {}", self.first, self.label, self.second, self.result)
        }
    }
}

/// Append-only ledger of past operations, insertion order = chronological
/// order. Transient; lives and dies with the calculator instance.
pub struct History {
    records: Vec<OperationRecord>,
}

impl History {
    pub fn new() -> History {
        History { records: vec![] }
    }

    pub fn push(&mut self, record: OperationRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn view(&self) -> String {
        if self.records.is_empty() {
            return "history is empty".to_string();
        }

        let mut out = String::new();
        for (i, record) in self.records.iter().enumerate() {
            out.push_str(format!("{}: {}\n", i + 1, record).as_str());
        }
        out.pop();
        out
    }
}
