//! List builtins
use crate::{eval, Env, Error, Result, Val};

/// Implements `cons`
pub fn lang_cons(args: &Val, env: &mut Env) -> Result<Val> {
    let (first, rest) = match super::arg_forms("cons", args)?.as_slice() {
        [first, rest] => (first.clone(), rest.clone()),
        _ => {
            return Err(Error::MalformedArguments(
                "cons expects two arguments".to_string(),
            ))
        }
    };
    let first = eval(&first, env);
    let rest = eval(&rest, env);
    Ok(Val::cons(first, rest))
}

/// Implements `car`. Non-pairs have nil as first element.
pub fn lang_car(args: &Val, env: &mut Env) -> Result<Val> {
    let v = single("car", args, env)?;
    Ok(v.first())
}

/// Implements `cdr`. Non-pairs have nil as rest.
pub fn lang_cdr(args: &Val, env: &mut Env) -> Result<Val> {
    let v = single("cdr", args, env)?;
    Ok(v.rest())
}

fn single(form: &str, args: &Val, env: &mut Env) -> Result<Val> {
    match super::arg_forms(form, args)?.as_slice() {
        [arg] => Ok(eval(arg, env)),
        _ => Err(Error::MalformedArguments(format!(
            "{form} expects one argument"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted(v: Val) -> Val {
        Val::list([Val::symbol("quote"), v])
    }

    #[test]
    fn cons_evaluates_args() {
        let mut env = Env::new();
        let args = Val::list([
            Val::list([Val::symbol("add"), Val::Number(1), Val::Number(2)]),
            Val::Number(4),
        ]);
        assert_eq!(
            lang_cons(&args, &mut env),
            Ok(Val::cons(Val::Number(3), Val::Number(4)))
        );
    }

    #[test]
    fn car_cdr() {
        let mut env = Env::new();
        let l = quoted(Val::list([Val::Number(1), Val::Number(2)]));
        assert_eq!(lang_car(&Val::list([l.clone()]), &mut env), Ok(Val::Number(1)));
        assert_eq!(
            lang_cdr(&Val::list([l]), &mut env),
            Ok(Val::list([Val::Number(2)]))
        );
    }

    #[test]
    fn car_of_atom() {
        let mut env = Env::new();
        assert_eq!(lang_car(&Val::list([Val::Number(1)]), &mut env), Ok(Val::Nil));
        assert_eq!(lang_cdr(&Val::list([Val::Nil]), &mut env), Ok(Val::Nil));
    }

    #[test]
    fn arity() {
        let mut env = Env::new();
        assert!(matches!(
            lang_car(&Val::Nil, &mut env),
            Err(Error::MalformedArguments(_))
        ));
        assert!(matches!(
            lang_cons(&Val::list([Val::Number(1)]), &mut env),
            Err(Error::MalformedArguments(_))
        ));
    }
}
