//! Abstract Syntax Tree (AST) definitions for the Lito language.
//!
//! This module contains all the tree node types consumed by the semantic
//! analyzer. The tree is produced by an external parser; every node carries
//! the source line it originated from.

pub mod literals;
pub mod nodes;
pub mod operators;

// Re-export all public types for convenient access
pub use literals::LiteralNode;
pub use nodes::{
    AstNode, CallNode, ExpressionKind, ExpressionNode, FunctionNode, Param, StatementKind,
    StatementNode, VarDeclNode,
};
pub use operators::{BinaryOp, UnaryOp};
