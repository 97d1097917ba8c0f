use crate::{Error, Result, SymbolId, Val};
use tracing::debug;

/// An environment of bindings.
///
/// Bindings form an association list searched newest first. Frames mark the
/// point where a procedure call's bindings begin, so popping a frame drops
/// everything bound since.
#[derive(Debug, Default, Clone)]
pub struct Env {
    /// Bindings ordered oldest to newest
    bindings: Vec<(SymbolId, Val)>,
    /// Length of `bindings` when each open frame was pushed
    frames: Vec<usize>,
}

impl Env {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment preloaded with given bindings
    pub fn with_bindings(bindings: impl IntoIterator<Item = (SymbolId, Val)>) -> Self {
        let mut env = Self::new();
        for (symbol, value) in bindings {
            env.define(symbol, value);
        }
        env
    }

    /// Set value of `name`, which must be a symbol
    pub fn set(&mut self, name: &Val, value: Val) -> Result<()> {
        let symbol = symbol_name(name)?;
        self.define(symbol.clone(), value);
        Ok(())
    }

    /// Get value of `name`, which must be a symbol. Absent names are nil.
    pub fn get(&self, name: &Val) -> Result<Val> {
        let symbol = symbol_name(name)?;
        Ok(self.lookup(symbol))
    }

    /// Update the newest binding for `symbol`, or add a new binding if there is none
    pub fn define(&mut self, symbol: SymbolId, value: Val) {
        match self.bindings.iter_mut().rev().find(|(s, _)| *s == symbol) {
            Some((_, v)) => *v = value,
            None => self.bindings.push((symbol, value)),
        }
    }

    /// Add a new binding that shadows existing ones
    pub fn bind(&mut self, symbol: SymbolId, value: Val) {
        self.bindings.push((symbol, value));
    }

    /// Value of `symbol`, or nil if unbound
    pub fn lookup(&self, symbol: &SymbolId) -> Val {
        self.iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, v)| v.clone())
            .unwrap_or(Val::Nil)
    }

    /// Open a new frame
    pub fn push_frame(&mut self) {
        self.frames.push(self.bindings.len());
        debug!("push frame - depth {}", self.frames.len());
    }

    /// Close newest frame, dropping bindings added since it was pushed.
    /// Returns false if there was no open frame.
    pub fn pop_frame(&mut self) -> bool {
        match self.frames.pop() {
            Some(len) => {
                self.bindings.truncate(len);
                debug!("pop frame - depth {}", self.frames.len());
                true
            }
            None => false,
        }
    }

    /// Number of open frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Iterate over bindings, newest first
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolId, &Val)> {
        self.bindings.iter().rev().map(|(s, v)| (s, v))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn symbol_name(name: &Val) -> Result<&SymbolId> {
    name.as_symbol()
        .ok_or_else(|| Error::NotASymbol(name.to_string()))
}
