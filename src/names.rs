//! Display-name tables for node type codes
//!
//! The generated lexer and parser identify grammar symbols by integer type
//! codes. A [`NameTable`] maps those codes back to the names the grammar
//! author wrote, so rendered trees read `(Symbol expression (12) ...)` rather
//! than bare numbers. The generated binding populates one table per grammar,
//! in both directions: code to name for rendering, name to code so driver
//! code can refer to symbols without hard-coding the generator's numbering.
//!
//! Tables are plain values rather than process-wide state. Whoever drives a
//! parse owns the table for that grammar and passes it to
//! [`render`](crate::node::TreeNode::render); two parses over different
//! grammars can therefore run side by side with distinct tables. Lookups
//! happen at render time only, so a node built before its table is populated
//! still renders correctly afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved type code for the parser's syntax-error symbol.
pub const SYNTAX_ERROR_TYPE: i32 = -1;

/// Display name of the reserved syntax-error symbol.
pub const SYNTAX_ERROR_NAME: &str = "SYNTAXERROR";

/// The two kinds of tree node, used as the first half of a name-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Non-terminal: a grammar rule reduction.
    Symbol,
    /// Terminal: a scanned token.
    Token,
}

/// A mapping from `(NodeKind, type code)` to display name for one grammar.
///
/// Non-terminal and terminal codes are numbered independently by the
/// generator, so the two kinds get independent sub-tables and a code is only
/// meaningful together with its kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTable {
    symbols: BTreeMap<i32, String>,
    tokens: BTreeMap<i32, String>,
}

impl NameTable {
    /// An empty table. Renders against an empty table fall back to
    /// `unnamed` (symbols) or the quoted lexeme (tokens).
    pub fn new() -> Self {
        Self::default()
    }

    /// A table pre-seeded with the reserved syntax-error symbol for both
    /// kinds, matching what generated parser bindings install.
    pub fn with_error_symbol() -> Self {
        let mut table = Self::new();
        table.define(NodeKind::Symbol, SYNTAX_ERROR_TYPE, SYNTAX_ERROR_NAME);
        table.define(NodeKind::Token, SYNTAX_ERROR_TYPE, SYNTAX_ERROR_NAME);
        table
    }

    /// Register a display name for a type code. A later definition for the
    /// same `(kind, code)` replaces the earlier one.
    pub fn define(&mut self, kind: NodeKind, code: i32, name: impl Into<String>) {
        self.table_mut(kind).insert(code, name.into());
    }

    /// Register a batch of `(code, name)` pairs for one kind.
    pub fn extend<S, I>(&mut self, kind: NodeKind, entries: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = (i32, S)>,
    {
        let table = self.table_mut(kind);
        for (code, name) in entries {
            table.insert(code, name.into());
        }
    }

    /// Look up the display name for a type code.
    pub fn name(&self, kind: NodeKind, code: i32) -> Option<&str> {
        self.table(kind).get(&code).map(String::as_str)
    }

    /// Reverse lookup: find the type code registered under a display name.
    pub fn code(&self, kind: NodeKind, name: &str) -> Option<i32> {
        self.table(kind)
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(code, _)| *code)
    }

    fn table(&self, kind: NodeKind) -> &BTreeMap<i32, String> {
        match kind {
            NodeKind::Symbol => &self.symbols,
            NodeKind::Token => &self.tokens,
        }
    }

    fn table_mut(&mut self, kind: NodeKind) -> &mut BTreeMap<i32, String> {
        match kind {
            NodeKind::Symbol => &mut self.symbols,
            NodeKind::Token => &mut self.tokens,
        }
    }
}
