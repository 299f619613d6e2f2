//! Evaluator tests.
//!
//! Operator and runtime library tests call the dispatch functions directly;
//! the interpreter and program tests build expression trees with
//! [`support::Program`].

mod methods_tests;
pub(crate) mod support;
