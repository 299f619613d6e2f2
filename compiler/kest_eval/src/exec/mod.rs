//! Evaluation semantics shared by the interpreter and by hosts that drive
//! evaluation themselves.

pub mod control;
