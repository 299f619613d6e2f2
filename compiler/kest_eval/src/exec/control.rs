//! Control flow evaluation (`if`, `when`).

use kest_ir::{EnumRegistry, ExprArena, ExprId, Name, StringInterner, WhenArm, WhenPattern};
use kest_value::{
    arity_mismatch, non_exhaustive_match, type_mismatch, Discriminant, EvalError, EvalResult,
    Value,
};

/// Evaluate an `if` expression.
///
/// The condition must be a boolean. With an `else` branch the result is the
/// chosen branch's value; without one it is `some(then)` or `none`.
pub fn eval_if<F>(
    cond: ExprId,
    then_branch: ExprId,
    else_branch: Option<ExprId>,
    mut eval_fn: F,
) -> EvalResult
where
    F: FnMut(ExprId) -> EvalResult,
{
    let cond_val = eval_fn(cond)?;
    let Some(taken) = cond_val.as_bool() else {
        return Err(type_mismatch("Bool", cond_val.type_name()));
    };
    match (taken, else_branch) {
        (true, Some(_)) => eval_fn(then_branch),
        (true, None) => Ok(Value::some(eval_fn(then_branch)?)),
        (false, Some(else_expr)) => eval_fn(else_expr),
        (false, None) => Ok(Value::None),
    }
}

/// The arm a `when` selected, with its payload bindings.
#[derive(Debug, PartialEq)]
pub struct SelectedArm {
    pub body: ExprId,
    pub bindings: Vec<(Name, Value)>,
}

/// Pick the first arm whose pattern matches `value`.
///
/// A tag pattern matches when its name denotes the value's discriminant;
/// for a declared-enum variant the name is resolved through the enum's
/// layout. Payload positions bind left to right; an arm may bind fewer
/// names than the payload holds but not more.
pub fn select_arm(
    value: &Value,
    arms: &[WhenArm],
    arena: &ExprArena,
    interner: &StringInterner,
) -> Result<SelectedArm, EvalError> {
    let Some(discriminant) = value.discriminant() else {
        return Err(type_mismatch("Tag", value.type_name()));
    };

    for (index, arm) in arms.iter().enumerate() {
        match arm.pattern {
            WhenPattern::Default => {
                tracing::debug!(arm = index, "when: default arm");
                return Ok(SelectedArm {
                    body: arm.body,
                    bindings: Vec::new(),
                });
            }
            WhenPattern::Tag { name, bindings } => {
                if !names_discriminant(name, discriminant, arena.enums()) {
                    continue;
                }
                let names = arena.get_names(bindings);
                let payload = value.payload();
                if names.len() > payload.len() {
                    return Err(arity_mismatch(
                        interner.lookup(name),
                        payload.len(),
                        names.len(),
                    ));
                }
                tracing::debug!(arm = index, tag = interner.lookup(name), "when: matched");
                return Ok(SelectedArm {
                    body: arm.body,
                    bindings: names.iter().copied().zip(payload).collect(),
                });
            }
        }
    }

    Err(non_exhaustive_match(&describe(
        discriminant,
        arena.enums(),
        interner,
    )))
}

fn names_discriminant(name: Name, discriminant: Discriminant, enums: &EnumRegistry) -> bool {
    match discriminant {
        Discriminant::Named(tag) => tag == name,
        Discriminant::Dense { enum_id, code } => enums
            .get(enum_id)
            .and_then(|layout| layout.code_of(name))
            == Some(code),
    }
}

fn describe(discriminant: Discriminant, enums: &EnumRegistry, interner: &StringInterner) -> String {
    match discriminant {
        Discriminant::Named(name) => interner.lookup(name).to_string(),
        Discriminant::Dense { enum_id, code } => enums
            .get(enum_id)
            .and_then(|layout| layout.variant(code))
            .map_or_else(
                || format!("<enum {}:{code}>", enum_id.index()),
                |variant| interner.lookup(variant.name).to_string(),
            ),
    }
}
