//! # symtree
//!
//! Runtime support for parse trees built by generated lexer/parser pairs.
//!
//! A generator toolchain emits type codes, name tables, lexemes, and
//! locations; this crate supplies the pieces those generated bindings share
//! at runtime:
//!
//! - [`node`] — the tree itself: [`Symbol`] (non-terminal) and [`Token`]
//!   (terminal) nodes behind the [`TreeNode`] contract, rendered as
//!   s-expression diagnostics.
//! - [`location`] — begin/end positions, the source file, and the inclusion
//!   trail, with the human-readable formatter behind `Display`.
//! - [`names`] — per-grammar [`NameTable`] values mapping type codes to the
//!   names the grammar author wrote.
//! - [`scanner`] — line/column tracking and the inclusion stack a generated
//!   scanner drives while reading nested files.
//!
//! The grammar toolchain, grammar definitions, and build glue live outside
//! this crate; the runtime trusts the generated parser to construct
//! well-formed trees.

pub mod error;
pub mod location;
pub mod names;
pub mod node;
pub mod scanner;

pub use error::ScanError;
pub use location::{Inclusion, Location, Position};
pub use names::{NameTable, NodeKind, SYNTAX_ERROR_NAME, SYNTAX_ERROR_TYPE};
pub use node::{Node, Symbol, Token, TreeNode};
pub use scanner::{PositionStack, ScanPosition};
