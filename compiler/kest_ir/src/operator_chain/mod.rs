//! Grouping of flat operator chains by precedence and associativity.
//!
//! `a op1 b op2 c ...` arrives from a front end as alternating operands and
//! operators. `fold_operator_chain` builds the `Binary` tree the operator
//! table implies, so `10 - 5 - 2` groups left and `2 ** 3 ** 2` groups right.

use crate::{Associativity, BinaryOp, ExprArena, ExprId, ExprKind};

/// Malformed operator chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("operator chain has {operands} operands for {operators} operators")]
    Shape { operands: usize, operators: usize },
}

/// Binding strength; the inverse of `BinaryOp::precedence`.
fn strength(op: BinaryOp) -> u8 {
    16u8.saturating_sub(op.precedence())
}

struct Chain<'a> {
    operands: &'a [ExprId],
    ops: &'a [BinaryOp],
    next_op: usize,
}

impl Chain<'_> {
    fn peek(&self) -> Option<BinaryOp> {
        self.ops.get(self.next_op).copied()
    }

    /// Consume the next operator and return it with its right operand.
    fn advance(&mut self) -> Option<(BinaryOp, ExprId)> {
        let op = self.peek()?;
        let rhs = *self.operands.get(self.next_op.checked_add(1)?)?;
        self.next_op = self.next_op.checked_add(1)?;
        Some((op, rhs))
    }

    fn climb(&mut self, arena: &mut ExprArena, mut lhs: ExprId, min_strength: u8) -> ExprId {
        while let Some(op) = self.peek().filter(|op| strength(*op) >= min_strength) {
            let Some((_, mut rhs)) = self.advance() else {
                break;
            };
            while let Some(next) = self.peek() {
                let binds_tighter = strength(next) > strength(op);
                let same_right = strength(next) == strength(op)
                    && next.associativity() == Associativity::Right;
                if !(binds_tighter || same_right) {
                    break;
                }
                let floor = if binds_tighter {
                    strength(op).saturating_add(1)
                } else {
                    strength(op)
                };
                rhs = self.climb(arena, rhs, floor);
            }
            let span = arena.get_expr(lhs).span.merge(arena.get_expr(rhs).span);
            lhs = arena.alloc_expr(ExprKind::Binary { op, left: lhs, right: rhs }, span);
        }
        lhs
    }
}

/// Build the expression tree for `operands[0] ops[0] operands[1] ...`.
pub fn fold_operator_chain(
    arena: &mut ExprArena,
    operands: &[ExprId],
    ops: &[BinaryOp],
) -> Result<ExprId, ChainError> {
    let shape_error = ChainError::Shape {
        operands: operands.len(),
        operators: ops.len(),
    };
    let Some((&first, _)) = operands.split_first() else {
        return Err(shape_error);
    };
    if operands.len() != ops.len().saturating_add(1) {
        return Err(shape_error);
    }

    let mut chain = Chain {
        operands,
        ops,
        next_op: 0,
    };
    Ok(chain.climb(arena, first, 0))
}
