//! Special forms for quoting, bindings and procedures
use crate::{eval, Closure, Env, Error, Result, SymbolId, Val};
use std::sync::Arc;
use tracing::debug;

/// Implements the `quote` special form
pub fn lang_quote(args: &Val, _env: &mut Env) -> Result<Val> {
    match args {
        Val::Pair(p) => Ok(p.first.clone()),
        _ => Err(Error::MalformedArguments(
            "quote expects one argument".to_string(),
        )),
    }
}

/// Implements the `set` special form, `(set NAME EXPR)`
pub fn lang_set(args: &Val, env: &mut Env) -> Result<Val> {
    let (name, value_form) = match args {
        Val::Pair(p) => match &p.rest {
            Val::Pair(q) => (&p.first, &q.first),
            _ => return Err(set_arguments()),
        },
        _ => return Err(set_arguments()),
    };
    let symbol = name
        .as_symbol()
        .ok_or_else(|| Error::NotASymbol(name.to_string()))?;

    match eval(value_form, env) {
        Val::Nil => Err(Error::SetValue(symbol.clone())),
        value => {
            env.define(symbol.clone(), value.clone());
            Ok(value)
        }
    }
}

fn set_arguments() -> Error {
    Error::MalformedArguments("set expects a symbol and a value".to_string())
}

/// Implements the `get` special form, `(get NAME)`
pub fn lang_get(args: &Val, env: &mut Env) -> Result<Val> {
    match args {
        Val::Pair(p) => env.get(&p.first),
        _ => Err(Error::MalformedArguments(
            "get expects a symbol".to_string(),
        )),
    }
}

/// Implements the `lambda` special form, `(lambda PARAMS BODY)`.
/// The resulting closure is never applied.
pub fn lang_lambda(args: &Val, _env: &mut Env) -> Result<Val> {
    match args {
        Val::Pair(p) => match &p.rest {
            Val::Pair(q) => Ok(Val::closure(p.first.clone(), q.first.clone())),
            _ => Err(lambda_arguments()),
        },
        _ => Err(lambda_arguments()),
    }
}

fn lambda_arguments() -> Error {
    Error::MalformedArguments(
        "lambda expects a parameter list and body expression".to_string(),
    )
}

/// Implements the `define` special form, `(define NAME (PARAMS*) BODY)`.
/// Binds NAME to a named procedure that can be called as `(NAME ARGS*)`.
pub fn lang_define(args: &Val, env: &mut Env) -> Result<Val> {
    let (name, params, body) = match super::arg_forms("define", args)?.as_slice() {
        [Val::Symbol(name), params, body] => (name.clone(), params.clone(), body.clone()),
        _ => {
            return Err(Error::MalformedArguments(
                "define expects a symbol, parameter list and body".to_string(),
            ))
        }
    };

    let valid_params = params
        .to_vec()
        .is_some_and(|p| p.iter().all(Val::is_symbol));
    if !valid_params {
        return Err(Error::MalformedArguments(format!(
            "invalid parameter list for {name} - {params}"
        )));
    }

    let procedure = Val::Closure(Arc::new(Closure {
        name: Some(name.clone()),
        params,
        body,
    }));
    env.define(name, procedure.clone());
    Ok(procedure)
}

/// Call the procedure bound to `op`, if any.
/// Operators that aren't bound to a named procedure evaluate to nil.
pub fn lang_call(op: &SymbolId, args: &Val, env: &mut Env) -> Result<Val> {
    let procedure = match env.lookup(op) {
        Val::Closure(c) if c.name.is_some() => c,
        _ => {
            debug!("no form or procedure for {op} - evaluating to nil");
            return Ok(Val::Nil);
        }
    };

    let params = procedure.params.to_vec().unwrap_or_default();
    let arg_forms = super::arg_forms(op.as_str(), args)?;
    if params.len() != arg_forms.len() {
        return Err(Error::MalformedArguments(format!(
            "{op} expects {} arguments - got {}",
            params.len(),
            arg_forms.len()
        )));
    }

    let arg_vals = arg_forms.iter().map(|f| eval(f, env)).collect::<Vec<_>>();

    env.push_frame();
    for (param, val) in params.iter().zip(arg_vals) {
        if let Val::Symbol(s) = param {
            env.bind(s.clone(), val);
        }
    }
    let result = eval(&procedure.body, env);
    env.pop_frame();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn quote() {
        let mut env = Env::new();
        let l = Val::list([Val::symbol("x"), Val::Number(42)]);
        assert_eq!(lang_quote(&Val::list([l.clone()]), &mut env), Ok(l));
        assert_matches!(
            lang_quote(&Val::Nil, &mut env),
            Err(Error::MalformedArguments(_))
        );
        assert_matches!(
            lang_quote(&Val::Number(1), &mut env),
            Err(Error::MalformedArguments(_))
        );
    }

    #[test]
    fn set_and_get() {
        let mut env = Env::new();
        let x = Val::symbol("x");
        assert_eq!(
            lang_set(&Val::list([x.clone(), Val::Number(42)]), &mut env),
            Ok(Val::Number(42))
        );
        assert_eq!(lang_get(&Val::list([x]), &mut env), Ok(Val::Number(42)));
    }

    #[test]
    fn set_nil_value() {
        let mut env = Env::new();
        assert_eq!(
            lang_set(&Val::list([Val::symbol("x"), Val::Nil]), &mut env),
            Err(Error::SetValue(SymbolId::from("x")))
        );
        assert!(env.is_empty(), "failed set should not bind");
    }

    #[test]
    fn set_error_value() {
        let mut env = Env::new();
        let x = Val::symbol("x");
        let result = lang_set(
            &Val::list([x.clone(), Val::list([Val::symbol("quote")])]),
            &mut env,
        );
        assert_matches!(&result, Ok(Val::Error(Error::MalformedArguments(_))));
        assert_eq!(env.get(&x).ok(), result.ok(), "error values are stored");
    }

    #[test]
    fn set_ignores_extra_values() {
        let mut env = Env::new();
        let x = Val::symbol("x");
        assert_eq!(
            lang_set(
                &Val::list([x.clone(), Val::number(1), Val::number(2)]),
                &mut env
            ),
            Ok(Val::number(1))
        );
        assert_eq!(env.get(&x), Ok(Val::number(1)));
    }

    #[test]
    fn set_malformed() {
        let mut env = Env::new();
        assert_matches!(
            lang_set(&Val::list([Val::symbol("x")]), &mut env),
            Err(Error::MalformedArguments(_))
        );
        assert_matches!(
            lang_set(&Val::Nil, &mut env),
            Err(Error::MalformedArguments(_))
        );
        assert_eq!(
            lang_set(&Val::list([Val::Number(1), Val::Number(2)]), &mut env),
            Err(Error::NotASymbol("1".to_string()))
        );
    }

    #[test]
    fn lambda_captures_verbatim() {
        let mut env = Env::new();
        let params = Val::list([Val::symbol("x")]);
        let body = Val::list([Val::symbol("add"), Val::symbol("x"), Val::Number(1)]);
        assert_eq!(
            lang_lambda(&Val::list([params.clone(), body.clone()]), &mut env),
            Ok(Val::closure(params, body))
        );
        assert_matches!(
            lang_lambda(&Val::list([Val::Nil]), &mut env),
            Err(Error::MalformedArguments(_))
        );
    }

    #[test]
    fn define_rejects_bad_params() {
        let mut env = Env::new();
        let args = Val::list([
            Val::symbol("f"),
            Val::list([Val::Number(1)]),
            Val::Number(0),
        ]);
        assert_matches!(
            lang_define(&args, &mut env),
            Err(Error::MalformedArguments(_))
        );
        assert!(env.is_empty());
    }

    #[test]
    fn call_unbound() {
        let mut env = Env::new();
        assert_eq!(
            lang_call(&SymbolId::from("nope"), &Val::Nil, &mut env),
            Ok(Val::Nil)
        );
    }
}
