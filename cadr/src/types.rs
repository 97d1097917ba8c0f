//! Values manipulated by the evaluator
use crate::Error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Text of the canonical truth symbol
pub const TRUTH: &str = "t";

/// All values that can be evaluated, or produced by evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Val {
    /// Empty list, and false
    Nil,
    /// Named identifiers
    Symbol(SymbolId),
    /// Integers
    Number(i32),
    /// Cons cell
    Pair(Arc<Pair>),
    /// Error as a value
    Error(Error),
    /// Function object
    Closure(Arc<Closure>),
}

/// A cons cell. `rest` may be any value, so chains of pairs form proper
/// (nil-terminated) or improper lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub first: Val,
    pub rest: Val,
}

/// Parameter list and body captured verbatim.
/// Closures without a name come from `lambda` and are never applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Closure {
    pub name: Option<SymbolId>,
    pub params: Val,
    pub body: Val,
}

/// Identifier for Symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(String);

impl Val {
    /// Shorthand for constructing [Val::Symbol]
    pub fn symbol(id: &str) -> Self {
        Self::Symbol(SymbolId::from(id))
    }

    /// Shorthand for constructing [Val::Number]
    pub fn number(n: i32) -> Self {
        Self::Number(n)
    }

    /// Construct a new pair
    pub fn cons(first: Val, rest: Val) -> Self {
        Self::Pair(Arc::new(Pair { first, rest }))
    }

    /// Construct an error value carrying given message
    pub fn error(msg: &str) -> Self {
        Self::Error(Error::Message(msg.to_string()))
    }

    /// Construct an anonymous closure
    pub fn closure(params: Val, body: Val) -> Self {
        Self::Closure(Arc::new(Closure {
            name: None,
            params,
            body,
        }))
    }

    /// The truth symbol `t`
    pub fn truth() -> Self {
        Self::symbol(TRUTH)
    }

    /// Build a proper list from given items
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Val>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(Val::Nil, |rest, first| Val::cons(first, rest))
    }

    /// First element of a pair, or nil for anything else
    pub fn first(&self) -> Val {
        match self {
            Val::Pair(p) => p.first.clone(),
            _ => Val::Nil,
        }
    }

    /// Rest of a pair, or nil for anything else
    pub fn rest(&self) -> Val {
        match self {
            Val::Pair(p) => p.rest.clone(),
            _ => Val::Nil,
        }
    }

    /// Elements of a proper list. `None` if the chain ends in a non-nil atom.
    pub fn to_vec(&self) -> Option<Vec<Val>> {
        let mut items = vec![];
        let mut cur = self;
        loop {
            match cur {
                Val::Nil => return Some(items),
                Val::Pair(p) => {
                    items.push(p.first.clone());
                    cur = &p.rest;
                }
                _ => return None,
            }
        }
    }

    pub fn as_symbol(&self) -> Option<&SymbolId> {
        match self {
            Val::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Val::Nil)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Val::Number(_))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Val::Symbol(_))
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Val::Pair(_))
    }
}

impl From<bool> for Val {
    fn from(value: bool) -> Self {
        if value {
            Val::truth()
        } else {
            Val::Nil
        }
    }
}

impl From<i32> for Val {
    fn from(value: i32) -> Self {
        Val::Number(value)
    }
}

impl SymbolId {
    /// Returns inner ID as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SymbolId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SymbolId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn list_builds_nested_pairs() {
        assert_eq!(
            Val::list([Val::Number(1), Val::Number(2)]),
            Val::cons(Val::Number(1), Val::cons(Val::Number(2), Val::Nil))
        );
        assert_eq!(Val::list(Vec::new()), Val::Nil);
    }

    #[test]
    fn first_rest() {
        let l = Val::list([Val::symbol("a"), Val::symbol("b")]);
        assert_eq!(l.first(), Val::symbol("a"));
        assert_eq!(l.rest(), Val::list([Val::symbol("b")]));
        assert_eq!(Val::Number(5).first(), Val::Nil);
        assert_eq!(Val::Nil.rest(), Val::Nil);
    }

    #[test]
    fn to_vec() {
        assert_eq!(Val::Nil.to_vec(), Some(vec![]));
        assert_eq!(
            Val::list([Val::Number(1), Val::Number(2)]).to_vec(),
            Some(vec![Val::Number(1), Val::Number(2)])
        );
        assert_eq!(
            Val::cons(Val::Number(1), Val::Number(2)).to_vec(),
            None,
            "improper lists have no vec form"
        );
    }

    #[test]
    fn bool_into_val() {
        assert_eq!(Val::from(true), Val::symbol("t"));
        assert_eq!(Val::from(false), Val::Nil);
    }

    #[test]
    fn predicates() {
        assert!(Val::Nil.is_nil());
        assert!(!Val::symbol("nil").is_nil(), "the nil symbol is not the nil sentinel");
        assert!(Val::Number(0).is_number());
        assert!(Val::symbol("x").is_symbol());
        assert!(Val::cons(Val::Nil, Val::Nil).is_pair());
        assert!(!Val::closure(Val::Nil, Val::Nil).is_pair());
    }

    #[test]
    fn closure_is_anonymous() {
        let c = Val::closure(Val::list([Val::symbol("x")]), Val::Number(5));
        assert_matches!(
            c,
            Val::Closure(c) if c.name.is_none() && c.body == Val::Number(5)
        );
    }

    #[test]
    fn constructors() {
        let n = Val::number(7);
        assert_eq!(n, Val::Number(7));
        assert!(n.is_number() && !n.is_pair());

        let p = Val::cons(Val::symbol("a"), n.clone());
        assert!(p.is_pair() && !p.is_number());
        assert_eq!(p.rest(), n);

        assert_matches!(Val::error("bad"), Val::Error(Error::Message(m)) if m == "bad");
    }
}
