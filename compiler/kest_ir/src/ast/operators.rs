//! Binary and Unary Operators
//!
//! Every operator also names the runtime library method it lowers to, so
//! the operator table and the call-shape table in `builtin_methods` agree.

/// How a chain of equal-precedence operators groups.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Associativity {
    /// `a - b - c == (a - b) - c`
    Left,
    /// `a ** b ** c == a ** (b ** c)`
    Right,
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Text
    Concat,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Concat => "++",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    ///
    /// - 2: `**`
    /// - 3: `*` `/` `%`
    /// - 4: `+` `-` `++`
    /// - 7: `<` `>` `<=` `>=`
    /// - 8: `==` `!=`
    /// - 12: `and`
    /// - 13: `or`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 2,
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Add | Self::Sub | Self::Concat => 4,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 7,
            Self::Eq | Self::NotEq => 8,
            Self::And => 12,
            Self::Or => 13,
        }
    }

    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Whether the right operand is only evaluated when needed.
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Name of the runtime library method this operator lowers to.
    ///
    /// `and`/`or` have no method form: they lower to control flow.
    pub const fn runtime_method(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("add"),
            Self::Sub => Some("subtract"),
            Self::Mul => Some("multiply"),
            Self::Div => Some("divide"),
            Self::Mod => Some("modulo"),
            Self::Pow => Some("power"),
            Self::Concat => Some("concat"),
            Self::Eq => Some("equals"),
            Self::NotEq => Some("notEquals"),
            Self::Lt => Some("lessThan"),
            Self::LtEq => Some("lessThanOrEquals"),
            Self::Gt => Some("greaterThan"),
            Self::GtEq => Some("greaterThanOrEquals"),
            Self::And | Self::Or => None,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "not",
        }
    }

    /// Unary operators bind tighter than every binary operator.
    pub const fn precedence(self) -> u8 {
        1
    }
}
