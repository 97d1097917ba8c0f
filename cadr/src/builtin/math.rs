//! Math builtins
use crate::{eval, Env, Error, Result, Val};

/// Implements `add`
pub fn lang_add(args: &Val, env: &mut Env) -> Result<Val> {
    let (a, b) = operands("add", args, env)?;
    a.checked_add(b)
        .map(Val::Number)
        .ok_or_else(|| Error::Overflow(format!("(add {a} {b})")))
}

/// Implements `sub`
pub fn lang_sub(args: &Val, env: &mut Env) -> Result<Val> {
    let (a, b) = operands("sub", args, env)?;
    a.checked_sub(b)
        .map(Val::Number)
        .ok_or_else(|| Error::Overflow(format!("(sub {a} {b})")))
}

/// Implements `mul`
pub fn lang_mul(args: &Val, env: &mut Env) -> Result<Val> {
    let (a, b) = operands("mul", args, env)?;
    a.checked_mul(b)
        .map(Val::Number)
        .ok_or_else(|| Error::Overflow(format!("(mul {a} {b})")))
}

/// Implements `div`. Division by zero is nil.
pub fn lang_div(args: &Val, env: &mut Env) -> Result<Val> {
    let (a, b) = operands("div", args, env)?;
    if b == 0 {
        return Ok(Val::Nil);
    }
    a.checked_div(b)
        .map(Val::Number)
        .ok_or_else(|| Error::Overflow(format!("(div {a} {b})")))
}

/// Implements `>`
pub fn lang_gt(args: &Val, env: &mut Env) -> Result<Val> {
    let (a, b) = operands(">", args, env)?;
    Ok(Val::from(a > b))
}

/// Implements `<`
pub fn lang_lt(args: &Val, env: &mut Env) -> Result<Val> {
    let (a, b) = operands("<", args, env)?;
    Ok(Val::from(a < b))
}

/// Implements `>=`
pub fn lang_ge(args: &Val, env: &mut Env) -> Result<Val> {
    let (a, b) = operands(">=", args, env)?;
    Ok(Val::from(a >= b))
}

/// Implements `<=`
pub fn lang_le(args: &Val, env: &mut Env) -> Result<Val> {
    let (a, b) = operands("<=", args, env)?;
    Ok(Val::from(a <= b))
}

/// Evaluate the first two arguments of `form` as numbers, left to right
fn operands(form: &str, args: &Val, env: &mut Env) -> Result<(i32, i32)> {
    let (lhs, rhs) = match super::arg_forms(form, args)?.as_slice() {
        [lhs, rhs, ..] => (lhs.clone(), rhs.clone()),
        _ => {
            return Err(Error::MalformedArguments(format!(
                "{form} expects two arguments"
            )))
        }
    };
    let lhs = number(form, eval(&lhs, env))?;
    let rhs = number(form, eval(&rhs, env))?;
    Ok((lhs, rhs))
}

fn number(form: &str, v: Val) -> Result<i32> {
    match v {
        Val::Number(n) => Ok(n),
        Val::Error(e) => Err(e),
        v => Err(Error::UnexpectedType(format!(
            "{form} expects numbers - got {v}"
        ))),
    }
}
