//! Implements evaluation of expressions
use crate::builtin::{cond, list, math, special};
use crate::{Env, Result, SymbolId, Val, TRUTH};
use tracing::{debug, trace};

/// Evaluate an expression within given environment.
///
/// Failures come back as [Val::Error] so callers can keep evaluating or
/// report them. Recursion depth follows the nesting depth of `expr`.
pub fn eval(expr: &Val, env: &mut Env) -> Val {
    match try_eval(expr, env) {
        Ok(v) => v,
        Err(e) => {
            debug!("evaluation failed - {e}");
            Val::Error(e)
        }
    }
}

fn try_eval(expr: &Val, env: &mut Env) -> Result<Val> {
    match expr {
        Val::Nil => Ok(Val::Nil),
        Val::Number(_) => Ok(expr.clone()),
        // symbols are not looked up as whole expressions
        Val::Symbol(s) if s.as_str() == TRUTH => Ok(Val::truth()),
        Val::Symbol(_) => Ok(Val::Nil),
        Val::Pair(p) => match &p.first {
            Val::Symbol(op) => eval_form(op, &p.rest, env),
            _ => Ok(Val::Nil),
        },
        Val::Error(_) | Val::Closure(_) => Ok(Val::Nil),
    }
}

/// Dispatch on the operator of a form
fn eval_form(op: &SymbolId, args: &Val, env: &mut Env) -> Result<Val> {
    trace!("eval ({op} ...)");
    match op.as_str() {
        "quote" => special::lang_quote(args, env),
        "set" => special::lang_set(args, env),
        "get" => special::lang_get(args, env),
        "lambda" => special::lang_lambda(args, env),
        "define" => special::lang_define(args, env),
        "eq" => cond::lang_eq(args, env),
        "and" => cond::lang_and(args, env),
        "or" => cond::lang_or(args, env),
        "if" => cond::lang_if(args, env),
        "cond" => cond::lang_cond(args, env),
        "add" => math::lang_add(args, env),
        "sub" => math::lang_sub(args, env),
        "mul" => math::lang_mul(args, env),
        "div" => math::lang_div(args, env),
        ">" => math::lang_gt(args, env),
        "<" => math::lang_lt(args, env),
        ">=" => math::lang_ge(args, env),
        "<=" => math::lang_le(args, env),
        "cons" => list::lang_cons(args, env),
        "car" => list::lang_car(args, env),
        "cdr" => list::lang_cdr(args, env),
        _ => special::lang_call(op, args, env),
    }
}
