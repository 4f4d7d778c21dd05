//! AST nodes that carry table references.
//!
//! Only the shapes needed to extract a table identity are modeled here. A
//! parser produces these; consumers pattern match on [`AstNode`] to find the
//! table a statement refers to.
pub mod ident;
pub use ident::*;
pub mod node;
pub use node::*;
