//! Tree-walking interpreter over an `ExprArena`.
//!
//! Every expression evaluates to a `Value` or an `EvalError`. Errors carry
//! the span of the innermost expression that raised them. Function calls
//! swap in the callee's captured environment and arena, so a closure keeps
//! working after the scope (or the arena) it came from is gone.

mod builder;
mod scope_guard;

use std::sync::Arc;

use kest_ir::{BinaryOp, ExprArena, ExprId, ExprKind, ListRange, SharedArena, SharedInterner};
use kest_value::{
    arity_mismatch, budget_exceeded, not_callable, recursion_limit_exceeded, type_mismatch,
    undefined_field, undefined_variable, EvalError, EvalResult, FunctionValue, Name, Value,
};

pub use builder::InterpreterBuilder;

use crate::eval_mode::{EvalMode, ModeState};
use crate::exec::control::{eval_if, select_arm, SelectedArm};
use crate::methods::{dispatch_builtin_method, FunctionCaller};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_unary;
use crate::Environment;

/// Tree-walking interpreter.
pub struct Interpreter {
    interner: SharedInterner,
    /// Arena of the code currently executing; swapped on function calls.
    arena: SharedArena,
    pub(crate) env: Environment,
    mode: EvalMode,
    mode_state: ModeState,
    /// Number of active function calls.
    call_depth: usize,
}

impl Interpreter {
    pub fn builder(interner: SharedInterner, arena: SharedArena) -> InterpreterBuilder {
        InterpreterBuilder::new(interner, arena)
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    pub fn mode(&self) -> &EvalMode {
        &self.mode
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Function calls counted against the budget so far.
    pub fn call_count(&self) -> usize {
        self.mode_state.call_count
    }

    /// Bind a host value in the global scope.
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.env.define_global(name, value);
    }

    /// Evaluate an expression of the current arena.
    #[tracing::instrument(level = "debug", skip(self), fields(mode = ?self.mode))]
    pub fn eval(&mut self, expr_id: ExprId) -> EvalResult {
        let result = self.eval_expr(expr_id);
        if let Err(error) = &result {
            tracing::debug!(%error, "evaluation failed");
        }
        result
    }

    /// Render a value with this interpreter's names and enum layouts.
    pub fn display(&self, value: &Value) -> String {
        value
            .display(&self.interner, Some(self.arena.enums()))
            .to_string()
    }

    /// Call a function value with already evaluated arguments.
    pub fn call_function(&mut self, func: &Value, args: Vec<Value>) -> EvalResult {
        let Value::Function(function) = func else {
            return Err(not_callable(func.type_name()));
        };
        let name = self.interner.lookup(function.name);
        if function.arity() != args.len() {
            return Err(arity_mismatch(name, function.arity(), args.len()));
        }
        self.mode_state
            .check_budget()
            .map_err(|exceeded| budget_exceeded(exceeded.budget))?;
        if let Some(limit) = self.mode.max_recursion_depth() {
            if self.call_depth >= limit {
                return Err(recursion_limit_exceeded(limit));
            }
        }
        tracing::trace!(function = name, depth = self.call_depth, "call");

        let mut env = Environment::from_captures(function.captures());
        if function.name != Name::EMPTY {
            env.define(function.name, func.clone());
        }
        env.push_scope();
        for (param, arg) in function.params.iter().copied().zip(args) {
            env.define(param, arg);
        }

        let saved_env = std::mem::replace(&mut self.env, env);
        let saved_arena = std::mem::replace(&mut self.arena, Arc::clone(function.arena()));
        self.call_depth = self.call_depth.saturating_add(1);
        let result = self.eval_expr(function.body);
        self.call_depth = self.call_depth.saturating_sub(1);
        self.arena = saved_arena;
        self.env = saved_env;
        result
    }

    fn eval_expr(&mut self, expr_id: ExprId) -> EvalResult {
        let arena = Arc::clone(&self.arena);
        let expr = arena.get_expr(expr_id);
        let result = ensure_sufficient_stack(|| self.eval_kind(&arena, &expr.kind));
        if expr.span.is_dummy() {
            result
        } else {
            result.map_err(|e| e.with_span(expr.span))
        }
    }

    fn eval_kind(&mut self, arena: &ExprArena, kind: &ExprKind) -> EvalResult {
        match *kind {
            ExprKind::Int(n) => Ok(Value::number(n)),
            ExprKind::Text(content) => Ok(Value::text(self.interner.lookup(content))),
            ExprKind::Ident(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| undefined_variable(self.interner.lookup(name))),
            ExprKind::Tag { name, payload } => Ok(Value::tag(name, self.eval_list(arena, payload)?)),
            ExprKind::EnumVariant {
                enum_id,
                variant,
                payload,
            } => {
                let payload = self.eval_list(arena, payload)?;
                let Some(layout) = arena.enums().get(enum_id) else {
                    return Err(EvalError::new(format!(
                        "enum {} is not registered",
                        enum_id.index()
                    )));
                };
                Value::enum_variant(layout, enum_id, variant, payload, &self.interner)
            }
            ExprKind::Binary { op, left, right } => self.eval_binary(op, left, right),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(value, op)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => eval_if(cond, then_branch, else_branch.present(), |id| {
                self.eval_expr(id)
            }),
            ExprKind::When { scrutinee, arms } => {
                let value = self.eval_expr(scrutinee)?;
                let SelectedArm { body, bindings } =
                    select_arm(&value, arena.get_arms(arms), arena, &self.interner)?;
                self.with_bindings(bindings, |this| this.eval_expr(body))
            }
            ExprKind::List(items) => Ok(Value::list(self.eval_list(arena, items)?)),
            ExprKind::Record { type_name, fields } => {
                let fields = self.eval_fields(arena, fields)?;
                Ok(match type_name {
                    Some(type_name) => Value::named_record(type_name, fields),
                    None => Value::record(fields),
                })
            }
            ExprKind::RecordUpdate { base, fields } => {
                let base = self.eval_expr(base)?;
                let updates = self.eval_fields(arena, fields)?;
                self.call_method(base, "set", vec![Value::record(updates)])
            }
            ExprKind::Field { receiver, field } => {
                let value = self.eval_expr(receiver)?;
                let Value::Record(record) = &value else {
                    return Err(type_mismatch("Record", value.type_name()));
                };
                record
                    .get(field)
                    .cloned()
                    .ok_or_else(|| undefined_field(self.interner.lookup(field)))
            }
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => {
                let receiver = self.eval_expr(receiver)?;
                let args = self.eval_list(arena, args)?;
                let method = self.interner.lookup(method);
                self.call_method(receiver, method, args)
            }
            ExprKind::Call { func, args } => {
                let func = self.eval_expr(func)?;
                let args = self.eval_list(arena, args)?;
                self.call_function(&func, args)
            }
            ExprKind::Lambda { name, params, body } => Ok(Value::Function(FunctionValue::new(
                name,
                arena.get_names(params).to_vec(),
                body,
                self.env.capture(),
                Arc::clone(&self.arena),
            ))),
            ExprKind::Let { name, init, body } => {
                let value = self.eval_expr(init)?;
                self.with_bindings([(name, value)], |this| this.eval_expr(body))
            }
        }
    }

    /// `and`/`or` evaluate their right operand only when it decides the result.
    fn eval_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> EvalResult {
        if !op.is_short_circuit() {
            let left = self.eval_expr(left)?;
            let right = self.eval_expr(right)?;
            return evaluate_binary(left, right, op);
        }

        let lhs = self.eval_bool(left)?;
        match (op, lhs) {
            (BinaryOp::And, false) | (BinaryOp::Or, true) => Ok(Value::Bool(lhs)),
            _ => Ok(Value::Bool(self.eval_bool(right)?)),
        }
    }

    fn eval_bool(&mut self, expr_id: ExprId) -> Result<bool, EvalError> {
        let value = self.eval_expr(expr_id)?;
        value
            .as_bool()
            .ok_or_else(|| type_mismatch("Bool", value.type_name()))
    }

    fn eval_list(&mut self, arena: &ExprArena, range: ListRange) -> Result<Vec<Value>, EvalError> {
        arena
            .get_expr_list(range)
            .iter()
            .map(|id| self.eval_expr(*id))
            .collect()
    }

    fn eval_fields(
        &mut self,
        arena: &ExprArena,
        range: ListRange,
    ) -> Result<Vec<(Name, Value)>, EvalError> {
        arena
            .get_field_inits(range)
            .iter()
            .map(|init| Ok((init.name, self.eval_expr(init.value)?)))
            .collect()
    }

    fn call_method(&mut self, receiver: Value, method: &str, args: Vec<Value>) -> EvalResult {
        let interner = Arc::clone(&self.interner);
        dispatch_builtin_method(receiver, method, args, &interner, self)
    }
}

impl FunctionCaller for Interpreter {
    fn call(&mut self, func: &Value, args: Vec<Value>) -> EvalResult {
        self.call_function(func, args)
    }
}

