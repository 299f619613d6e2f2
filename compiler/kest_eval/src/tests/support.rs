//! Builds expression trees for evaluator tests.

use kest_ir::{
    BinaryOp, EnumId, ExprArena, ExprId, ExprKind, FieldInit, Name, SharedInterner, Span,
    StringInterner, UnaryOp, WhenArm, WhenPattern,
};
use kest_value::EvalResult;

use crate::{EvalMode, Interpreter, InterpreterBuilder};

pub(crate) struct Program {
    pub interner: SharedInterner,
    pub arena: ExprArena,
}

impl Program {
    pub fn new() -> Self {
        Program {
            interner: StringInterner::shared(),
            arena: ExprArena::new(),
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn names(&self, names: &[&str]) -> Vec<Name> {
        names.iter().map(|n| self.name(n)).collect()
    }

    pub fn int(&mut self, n: i64) -> ExprId {
        self.arena.alloc(ExprKind::Int(n))
    }

    pub fn text(&mut self, s: &str) -> ExprId {
        let content = self.name(s);
        self.arena.alloc(ExprKind::Text(content))
    }

    pub fn var(&mut self, name: &str) -> ExprId {
        let name = self.name(name);
        self.arena.alloc(ExprKind::Ident(name))
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.arena.alloc(ExprKind::Binary { op, left, right })
    }

    pub fn binary_at(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
        start: u32,
        end: u32,
    ) -> ExprId {
        self.arena
            .alloc_expr(ExprKind::Binary { op, left, right }, Span::new(start, end))
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.arena.alloc(ExprKind::Unary { op, operand })
    }

    pub fn tag(&mut self, name: &str, payload: &[ExprId]) -> ExprId {
        let name = self.name(name);
        let payload = self.arena.alloc_expr_list(payload.iter().copied());
        self.arena.alloc(ExprKind::Tag { name, payload })
    }

    pub fn variant(&mut self, enum_id: EnumId, variant: &str, payload: &[ExprId]) -> ExprId {
        let variant = self.name(variant);
        let payload = self.arena.alloc_expr_list(payload.iter().copied());
        self.arena.alloc(ExprKind::EnumVariant {
            enum_id,
            variant,
            payload,
        })
    }

    pub fn if_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: Option<ExprId>) -> ExprId {
        self.arena.alloc(ExprKind::If {
            cond,
            then_branch,
            else_branch: else_branch.unwrap_or(ExprId::INVALID),
        })
    }

    pub fn arm(&mut self, tag: &str, bindings: &[&str], body: ExprId) -> WhenArm {
        let name = self.name(tag);
        let names = self.names(bindings);
        let bindings = self.arena.alloc_names(names);
        WhenArm {
            pattern: WhenPattern::Tag { name, bindings },
            body,
        }
    }

    pub fn default_arm(body: ExprId) -> WhenArm {
        WhenArm {
            pattern: WhenPattern::Default,
            body,
        }
    }

    pub fn when(&mut self, scrutinee: ExprId, arms: Vec<WhenArm>) -> ExprId {
        let arms = self.arena.alloc_arms(arms);
        self.arena.alloc(ExprKind::When { scrutinee, arms })
    }

    pub fn list(&mut self, items: &[ExprId]) -> ExprId {
        let items = self.arena.alloc_expr_list(items.iter().copied());
        self.arena.alloc(ExprKind::List(items))
    }

    fn field_inits(&mut self, fields: &[(&str, ExprId)]) -> kest_ir::ListRange {
        let inits: Vec<FieldInit> = fields
            .iter()
            .map(|(name, value)| FieldInit {
                name: self.name(name),
                value: *value,
            })
            .collect();
        self.arena.alloc_field_inits(inits)
    }

    pub fn record(&mut self, type_name: Option<&str>, fields: &[(&str, ExprId)]) -> ExprId {
        let type_name = type_name.map(|t| self.name(t));
        let fields = self.field_inits(fields);
        self.arena.alloc(ExprKind::Record { type_name, fields })
    }

    pub fn update(&mut self, base: ExprId, fields: &[(&str, ExprId)]) -> ExprId {
        let fields = self.field_inits(fields);
        self.arena.alloc(ExprKind::RecordUpdate { base, fields })
    }

    pub fn field(&mut self, receiver: ExprId, field: &str) -> ExprId {
        let field = self.name(field);
        self.arena.alloc(ExprKind::Field { receiver, field })
    }

    pub fn method(&mut self, receiver: ExprId, method: &str, args: &[ExprId]) -> ExprId {
        let method = self.name(method);
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.arena.alloc(ExprKind::MethodCall {
            receiver,
            method,
            args,
        })
    }

    pub fn call(&mut self, func: ExprId, args: &[ExprId]) -> ExprId {
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.arena.alloc(ExprKind::Call { func, args })
    }

    pub fn lambda(&mut self, name: Option<&str>, params: &[&str], body: ExprId) -> ExprId {
        let name = name.map_or(Name::EMPTY, |n| self.name(n));
        let names = self.names(params);
        let params = self.arena.alloc_names(names);
        self.arena.alloc(ExprKind::Lambda { name, params, body })
    }

    pub fn let_in(&mut self, name: &str, init: ExprId, body: ExprId) -> ExprId {
        let name = self.name(name);
        self.arena.alloc(ExprKind::Let { name, init, body })
    }

    pub fn interpreter(self, mode: EvalMode) -> Interpreter {
        InterpreterBuilder::new(self.interner, self.arena.into_shared())
            .mode(mode)
            .build()
    }

    pub fn run(self, root: ExprId) -> EvalResult {
        self.interpreter(EvalMode::Interpret).eval(root)
    }
}
