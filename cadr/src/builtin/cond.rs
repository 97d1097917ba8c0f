//! Conditional expressions
use crate::{eval, Env, Error, Result, Val};

/// Defines true values. Only nil and zero are false.
pub fn is_truthy(v: &Val) -> bool {
    !matches!(v, Val::Nil | Val::Number(0))
}

/// Equality on evaluated values: numbers by value, symbols by text.
/// Anything else, including mismatched types, is nil.
pub fn eq(lhs: &Val, rhs: &Val) -> Val {
    match (lhs, rhs) {
        (Val::Number(a), Val::Number(b)) => Val::from(a == b),
        (Val::Symbol(a), Val::Symbol(b)) => Val::from(a == b),
        _ => Val::Nil,
    }
}

/// Implements `eq`
pub fn lang_eq(args: &Val, env: &mut Env) -> Result<Val> {
    let (lhs, rhs) = match super::arg_forms("eq", args)?.as_slice() {
        [lhs, rhs, ..] => (lhs.clone(), rhs.clone()),
        _ => {
            return Err(Error::MalformedArguments(
                "eq expects two arguments".to_string(),
            ))
        }
    };
    let lhs = eval(&lhs, env);
    let rhs = eval(&rhs, env);
    Ok(eq(&lhs, &rhs))
}

/// Implements `and`. The second operand is returned as is when the first is truthy.
pub fn lang_and(args: &Val, env: &mut Env) -> Result<Val> {
    if !is_truthy(&eval(&args.first(), env)) {
        return Ok(Val::Nil);
    }
    Ok(eval(&args.rest().first(), env))
}

/// Implements `or`
pub fn lang_or(args: &Val, env: &mut Env) -> Result<Val> {
    let lhs = eval(&args.first(), env);
    if is_truthy(&lhs) {
        return Ok(lhs);
    }
    Ok(eval(&args.rest().first(), env))
}

/// Implements `if`. Missing branches evaluate as nil.
pub fn lang_if(args: &Val, env: &mut Env) -> Result<Val> {
    let cond = eval(&args.first(), env);
    let branches = args.rest();
    if is_truthy(&cond) {
        Ok(eval(&branches.first(), env))
    } else {
        Ok(eval(&branches.rest().first(), env))
    }
}

/// Implements `cond` as `(cond ((COND . RESULT) ...))`.
///
/// A clause is taken when its condition evaluates to anything other than nil,
/// which is looser than [is_truthy].
pub fn lang_cond(args: &Val, env: &mut Env) -> Result<Val> {
    let mut clauses = match args {
        Val::Nil => return Ok(Val::Nil),
        Val::Pair(p) => &p.first,
        _ => return Err(Error::CondClauseList),
    };

    loop {
        let cell = match clauses {
            Val::Nil => return Ok(Val::Nil),
            Val::Pair(cell) => cell,
            _ => return Err(Error::CondClauseList),
        };
        let clause = match &cell.first {
            Val::Pair(clause) => clause,
            _ => return Err(Error::CondClause),
        };
        if clause.first.is_nil() {
            return Err(Error::CondMissingCondition);
        }
        if clause.rest.is_nil() {
            return Err(Error::CondMissingResult);
        }

        if !eval(&clause.first, env).is_nil() {
            return match eval(&clause.rest, env) {
                Val::Nil => Err(Error::CondResult),
                v => Ok(v),
            };
        }
        clauses = &cell.rest;
    }
}
