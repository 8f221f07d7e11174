//! Parse-tree node model
//!
//! Two concrete node types make up a parse tree: [`Symbol`] for non-terminals
//! (one per grammar rule reduction) and [`Token`] for terminals (one per
//! scanned token, carrying the raw lexeme and its [`Location`]). Both
//! implement the [`TreeNode`] contract, and trees are owned edges of the
//! [`Node`] variant type, so a tree is freed as a whole when its root drops.
//!
//! The generated parser builds the tree bottom-up during rule actions:
//! construct a `Symbol` from the children chosen on the right-hand side, or
//! [`append`](TreeNode::append)/[`insert`](TreeNode::insert) children onto an
//! existing node. Type code, lexeme, and location are fixed at construction;
//! the child sequence is the only mutable state, and it only grows.
//!
//! Rendering produces the historical s-expression diagnostic format:
//!
//! ```text
//! (Symbol assignment (4) ((Token IDENT (2) [line 1, col 1 - line 1 col 1] x)))
//! ```
//!
//! Names come from the [`NameTable`] passed to `render`; a missing entry is
//! not an error (symbols fall back to `unnamed`, tokens to their quoted
//! lexeme). The model trusts its caller to build a well-formed tree: it does
//! not detect cycles or validate anything against a grammar.

use crate::location::Location;
use crate::names::{NameTable, NodeKind};

/// The shared contract of every parse-tree node: a kind tag, a type code,
/// an ordered child sequence, and diagnostic rendering.
///
/// Grammar bindings that introduce specialized node types implement this
/// trait; [`kind`](TreeNode::kind) is the tag rendered at the head of the
/// node's s-expression.
pub trait TreeNode {
    /// The rendered node-kind tag, e.g. `Symbol` or `Token`.
    fn kind(&self) -> &'static str;

    /// The grammar type code this node was constructed with.
    fn type_code(&self) -> i32;

    /// The node's children, in attachment order.
    fn children(&self) -> &[Node];

    /// Add a child at the end of the sequence.
    fn append(&mut self, child: Node);

    /// Insert a child at `index`. Follows [`Vec::insert`]: panics when
    /// `index` is greater than the current number of children.
    fn insert(&mut self, index: usize, child: Node);

    /// Render this node and its children as a diagnostic s-expression,
    /// resolving type codes against `names`. Never fails: missing table
    /// entries fall back to a placeholder.
    fn render(&self, names: &NameTable) -> String;
}

/// Render the ` (<child> <child> …)` suffix, or nothing when childless.
fn render_children(children: &[Node], names: &NameTable) -> String {
    if children.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = children.iter().map(|child| child.render(names)).collect();
    format!(" ({})", rendered.join(" "))
}

/// A non-terminal node: the reduction of one grammar rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    type_code: i32,
    children: Vec<Node>,
}

impl Symbol {
    /// Construct a non-terminal, taking ownership of its children.
    pub fn new(type_code: i32, children: Vec<Node>) -> Self {
        Self {
            type_code,
            children,
        }
    }
}

impl TreeNode for Symbol {
    fn kind(&self) -> &'static str {
        "Symbol"
    }

    fn type_code(&self) -> i32 {
        self.type_code
    }

    fn children(&self) -> &[Node] {
        &self.children
    }

    fn append(&mut self, child: Node) {
        self.children.push(child);
    }

    fn insert(&mut self, index: usize, child: Node) {
        self.children.insert(index, child);
    }

    fn render(&self, names: &NameTable) -> String {
        let name = names
            .name(NodeKind::Symbol, self.type_code)
            .unwrap_or("unnamed");
        format!(
            "({} {} ({}){})",
            self.kind(),
            name,
            self.type_code,
            render_children(&self.children, names)
        )
    }
}

/// A terminal node: one scanned token with its raw lexeme and location.
///
/// Children start empty. Typical terminals stay childless, but the model
/// permits attaching children to a token like to any other node.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    type_code: i32,
    text: String,
    location: Location,
    children: Vec<Node>,
}

impl Token {
    /// Construct a terminal from the scanner's type code, lexeme, and
    /// location.
    pub fn new(type_code: i32, text: impl Into<String>, location: Location) -> Self {
        Self {
            type_code,
            text: text.into(),
            location,
            children: Vec::new(),
        }
    }

    /// The raw lexeme as scanned.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The diagnostic string for this token's location.
    pub fn location(&self) -> String {
        self.location.to_string()
    }

    /// The stored location record.
    pub fn source_location(&self) -> &Location {
        &self.location
    }
}

impl TreeNode for Token {
    fn kind(&self) -> &'static str {
        "Token"
    }

    fn type_code(&self) -> i32 {
        self.type_code
    }

    fn children(&self) -> &[Node] {
        &self.children
    }

    fn append(&mut self, child: Node) {
        self.children.push(child);
    }

    fn insert(&mut self, index: usize, child: Node) {
        self.children.insert(index, child);
    }

    fn render(&self, names: &NameTable) -> String {
        // A token with no table entry shows its quoted lexeme where the
        // name would go, rather than a placeholder.
        let name = match names.name(NodeKind::Token, self.type_code) {
            Some(name) => name.to_string(),
            None => format!("'{}'", self.text),
        };
        format!(
            "({} {} ({}) [{}] {}{})",
            self.kind(),
            name,
            self.type_code,
            self.location,
            self.text,
            render_children(&self.children, names)
        )
    }
}

/// An owned tree edge: either a non-terminal or a terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Symbol(Symbol),
    Token(Token),
}

impl Node {
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Node::Symbol(symbol) => Some(symbol),
            Node::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Symbol(_) => None,
            Node::Token(token) => Some(token),
        }
    }
}

impl From<Symbol> for Node {
    fn from(symbol: Symbol) -> Self {
        Node::Symbol(symbol)
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        Node::Token(token)
    }
}

impl TreeNode for Node {
    fn kind(&self) -> &'static str {
        match self {
            Node::Symbol(symbol) => symbol.kind(),
            Node::Token(token) => token.kind(),
        }
    }

    fn type_code(&self) -> i32 {
        match self {
            Node::Symbol(symbol) => symbol.type_code(),
            Node::Token(token) => token.type_code(),
        }
    }

    fn children(&self) -> &[Node] {
        match self {
            Node::Symbol(symbol) => symbol.children(),
            Node::Token(token) => token.children(),
        }
    }

    fn append(&mut self, child: Node) {
        match self {
            Node::Symbol(symbol) => symbol.append(child),
            Node::Token(token) => token.append(child),
        }
    }

    fn insert(&mut self, index: usize, child: Node) {
        match self {
            Node::Symbol(symbol) => symbol.insert(index, child),
            Node::Token(token) => token.insert(index, child),
        }
    }

    fn render(&self, names: &NameTable) -> String {
        match self {
            Node::Symbol(symbol) => symbol.render(names),
            Node::Token(token) => token.render(names),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Position;

    fn token(code: i32, text: &str) -> Token {
        Token::new(
            code,
            text,
            Location::anonymous(Position::new(1, 1), Position::new(1, text.len())),
        )
    }

    #[test]
    fn test_symbol_render_with_name() {
        let mut names = NameTable::new();
        names.define(NodeKind::Symbol, 4, "assignment");

        let symbol = Symbol::new(4, vec![]);
        assert_eq!(symbol.render(&names), "(Symbol assignment (4))");
    }

    #[test]
    fn test_symbol_render_falls_back_to_unnamed() {
        let symbol = Symbol::new(9, vec![]);
        assert_eq!(symbol.render(&NameTable::new()), "(Symbol unnamed (9))");
    }

    #[test]
    fn test_token_render_with_name() {
        let mut names = NameTable::new();
        names.define(NodeKind::Token, 2, "NUMBER");

        let rendered = token(2, "42").render(&names);
        assert_eq!(
            rendered,
            "(Token NUMBER (2) [line 1, col 1 - line 1 col 2] 42)"
        );
    }

    #[test]
    fn test_token_render_falls_back_to_quoted_lexeme() {
        let rendered = token(7, "while").render(&NameTable::new());
        assert_eq!(
            rendered,
            "(Token 'while' (7) [line 1, col 1 - line 1 col 5] while)"
        );
    }

    #[test]
    fn test_token_render_contains_location_string() {
        let tok = token(2, "42");
        let location = tok.location();
        assert!(tok.render(&NameTable::new()).contains(&location));
    }

    #[test]
    fn test_children_render_in_append_order() {
        let mut symbol = Symbol::new(1, vec![token(2, "a").into()]);
        symbol.append(token(2, "b").into());
        symbol.append(token(2, "c").into());

        let names = NameTable::new();
        let parts: Vec<String> = symbol
            .children()
            .iter()
            .map(|child| child.render(&names))
            .collect();
        let expected = format!("(Symbol unnamed (1) ({}))", parts.join(" "));
        assert_eq!(symbol.render(&names), expected);
    }

    #[test]
    fn test_insert_places_child_at_index() {
        let mut symbol = Symbol::new(1, vec![token(2, "a").into(), token(2, "c").into()]);
        symbol.insert(1, token(2, "b").into());

        let texts: Vec<&str> = symbol
            .children()
            .iter()
            .map(|child| child.as_token().unwrap().text())
            .collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    #[should_panic]
    fn test_insert_past_end_panics() {
        let mut symbol = Symbol::new(1, vec![]);
        symbol.insert(1, token(2, "x").into());
    }

    #[test]
    fn test_childless_symbol_omits_child_group() {
        let rendered = Symbol::new(3, vec![]).render(&NameTable::new());
        assert!(!rendered.contains("()"));
        assert_eq!(rendered, "(Symbol unnamed (3))");
    }

    #[test]
    fn test_token_may_gain_children() {
        let mut tok = token(2, "x");
        tok.append(token(3, "y").into());

        assert_eq!(tok.children().len(), 1);
        let rendered = tok.render(&NameTable::new());
        assert!(rendered.ends_with(" ((Token 'y' (3) [line 1, col 1 - line 1 col 1] y)))"));
    }
}
