use super::literals::LiteralNode;
use super::operators::{BinaryOp, UnaryOp};

#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    GlobalVar(VarDeclNode),
    Function(FunctionNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclNode {
    pub name: String,
    pub type_name: String,
    pub is_const: bool,
    pub initializer: Option<ExpressionNode>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    pub name: String,
    // `None` means the declaration used the `void` keyword.
    pub return_type: Option<String>,
    pub params: Vec<Param>,
    pub body: Vec<StatementNode>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub type_name: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallNode {
    pub callee: String,
    pub args: Vec<ExpressionNode>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    VarDecl(VarDeclNode),
    Assign {
        name: String,
        value: ExpressionNode,
    },
    If {
        cond: ExpressionNode,
        then_block: Vec<StatementNode>,
        else_block: Option<Vec<StatementNode>>,
    },
    While {
        cond: ExpressionNode,
        body: Vec<StatementNode>,
    },
    For {
        init: Option<Box<StatementNode>>,
        cond: Option<ExpressionNode>,
        update: Option<Box<StatementNode>>,
        body: Vec<StatementNode>,
    },
    Return(Option<ExpressionNode>),
    Call(CallNode),
    Expression(ExpressionNode),
    Block(Vec<StatementNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatementNode {
    pub kind: StatementKind,
    pub line: usize,
}

impl From<ExpressionNode> for StatementNode {
    fn from(expr: ExpressionNode) -> Self {
        let line = expr.line;
        StatementNode {
            kind: StatementKind::Expression(expr),
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Literal(LiteralNode),
    Identifier(String),
    Call(CallNode),
    Unary {
        op: UnaryOp,
        expr: Box<ExpressionNode>,
    },
    Binary {
        left: Box<ExpressionNode>,
        op: BinaryOp,
        right: Box<ExpressionNode>,
    },
    Grouping(Box<ExpressionNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionNode {
    pub kind: ExpressionKind,
    pub line: usize,
}

impl From<LiteralNode> for ExpressionNode {
    fn from(lit: LiteralNode) -> Self {
        ExpressionNode {
            kind: ExpressionKind::Literal(lit),
            line: 0,
        }
    }
}

impl From<&str> for ExpressionNode {
    fn from(ident: &str) -> Self {
        ExpressionNode {
            kind: ExpressionKind::Identifier(ident.to_string()),
            line: 0,
        }
    }
}
