//! Lisp-style textual rendering of values
use crate::{Closure, Val};
use std::fmt;

/// Render a value to text, e.g. `(1 2 3)` or `(a . b)`
pub fn render(v: &Val) -> String {
    v.to_string()
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Val::Nil => write!(f, "nil"),
            Val::Symbol(s) => write!(f, "{}", s),
            Val::Number(n) => write!(f, "{}", n),
            Val::Pair(p) => {
                // walk the rest chain so long lists don't nest
                write!(f, "({}", p.first)?;
                let mut tail = &p.rest;
                while let Val::Pair(next) = tail {
                    write!(f, " {}", next.first)?;
                    tail = &next.rest;
                }
                if !tail.is_nil() {
                    write!(f, " . {}", tail)?;
                }
                write!(f, ")")
            }
            Val::Error(e) => write!(f, "<error {e}>"),
            Val::Closure(c) => write!(f, "{c}"),
        }
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = match &self.params {
            Val::Nil => "()".to_string(),
            p => p.to_string(),
        };
        match &self.name {
            Some(name) => write!(f, "<lambda {name} {params}>"),
            None => write!(f, "<lambda {params}>"),
        }
    }
}
