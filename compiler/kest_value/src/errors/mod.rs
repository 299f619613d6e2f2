//! Error types for evaluation.
//!
//! `EvalErrorKind` is the typed category; factory functions
//! (e.g. `division_by_zero()`) are the public construction API and fill in
//! both `kind` and `message`.
//!
//! Every error here is fatal to the expression being evaluated. Absent
//! lookups (`get`, `getCharCode`) and `error` tags are ordinary values and
//! never travel through this type.

use crate::value::Value;
use kest_ir::{BinaryOp, Span, UnaryOp};
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic (domain errors)
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: String,
    },
    NegativeExponent {
        exponent: i64,
    },

    // Type/Operator
    TypeMismatch {
        expected: String,
        got: String,
    },
    InvalidBinaryOp {
        type_name: String,
        op: BinaryOp,
    },
    BinaryTypeMismatch {
        left: String,
        right: String,
    },
    InvalidUnaryOp {
        type_name: String,
        op: UnaryOp,
    },

    // Access
    UndefinedVariable {
        name: String,
    },
    UndefinedField {
        field: String,
    },
    UndefinedMethod {
        method: String,
        type_name: String,
    },
    UnknownVariant {
        enum_name: String,
        variant: String,
    },

    // Function
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    NotCallable {
        type_name: String,
    },
    StackOverflow {
        depth: usize,
    },
    BudgetExceeded {
        budget: u32,
    },

    // Pattern dispatch
    NonExhaustiveMatch {
        discriminant: String,
    },

    /// Errors with no structured category.
    Custom {
        message: String,
    },
}

impl EvalErrorKind {
    /// Domain errors are arithmetic with no representable result.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero
                | Self::ModuloByZero
                | Self::IntegerOverflow { .. }
                | Self::NegativeExponent { .. }
        )
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::NegativeExponent { exponent } => {
                write!(f, "negative exponent {exponent} has no integer result")
            }

            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::InvalidBinaryOp { type_name, op } => {
                write!(
                    f,
                    "operator `{}` cannot be applied to {type_name}",
                    op.as_symbol()
                )
            }
            Self::BinaryTypeMismatch { left, right } => {
                write!(f, "cannot apply operator to `{left}` and `{right}`")
            }
            Self::InvalidUnaryOp { type_name, op } => {
                write!(
                    f,
                    "operator `{}` cannot be applied to {type_name}",
                    op.as_symbol()
                )
            }

            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UndefinedField { field } => write!(f, "no field {field} on record"),
            Self::UndefinedMethod { method, type_name } => {
                write!(f, "no method '{method}' on {type_name}")
            }
            Self::UnknownVariant { enum_name, variant } => {
                write!(f, "enum {enum_name} has no variant {variant}")
            }

            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                if name.is_empty() {
                    write!(f, "expected {expected} {arg_word}, got {got}")
                } else {
                    write!(f, "{name} expects {expected} {arg_word}, got {got}")
                }
            }
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum recursion depth exceeded (limit: {depth})")
            }
            Self::BudgetExceeded { budget } => {
                write!(f, "evaluation budget of {budget} calls exceeded")
            }

            Self::NonExhaustiveMatch { discriminant } => {
                write!(f, "non-exhaustive match: no arm for `{discriminant}`")
            }

            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Additional context attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
    pub span: Option<Span>,
}

impl EvalNote {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span: Some(span),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory errors.
    pub message: String,
    /// Source location of the failing expression.
    pub span: Option<Span>,
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer the factory functions when a structured
    /// kind exists.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            span: None,
            notes: Vec::new(),
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Attach a source span unless one is already set.
    ///
    /// Errors keep the innermost span they were raised at.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

#[cold]
pub fn negative_exponent(exponent: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeExponent { exponent })
}

// Operator Errors

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Invalid operator for a specific type with operator context.
#[cold]
pub fn invalid_binary_op_for(type_name: &str, op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp {
        type_name: type_name.to_string(),
        op,
    })
}

/// Type mismatch in binary operation.
#[cold]
pub fn binary_type_mismatch(left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn invalid_unary_op(type_name: &str, op: UnaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp {
        type_name: type_name.to_string(),
        op,
    })
}

// Access Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_field(field: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedField {
        field: field.to_string(),
    })
}

#[cold]
pub fn undefined_method(method: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedMethod {
        method: method.to_string(),
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn unknown_variant(enum_name: &str, variant: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownVariant {
        enum_name: enum_name.to_string(),
        variant: variant.to_string(),
    })
}

// Function Errors

/// Wrong argument count for a method, function or pattern.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}

#[cold]
pub fn budget_exceeded(budget: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BudgetExceeded { budget })
}

// Pattern Errors

/// No `when` arm matched and there was no default arm.
#[cold]
pub fn non_exhaustive_match(discriminant: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonExhaustiveMatch {
        discriminant: discriminant.to_string(),
    })
}
