//! Integer arithmetic expression evaluator: `+ - * /`, parentheses, and
//! diagnostics that point at the offending token.

pub mod calc_engine;

pub use calc_engine::{evaluate, evaluate_traced, CalcError, EvaluationTrace};
