use crate::ast::{BinaryOp, ExpressionKind, ExpressionNode, LiteralNode, UnaryOp};
use crate::semantics::types::Type;

pub fn format_type(t: &Type) -> &'static str {
    match t {
        Type::Int => "int",
        Type::Float => "float",
        Type::Double => "double",
        Type::String => "string",
        Type::Bool => "bool",
        Type::Void => "void",
        Type::Unknown => "unknown",
        Type::Error => "error",
    }
}

pub fn format_binary_op(op: &BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Subtract => "-",
        BinaryOp::Multiply => "*",
        BinaryOp::Divide => "/",
        BinaryOp::Modulo => "%",
        BinaryOp::Equal => "==",
        BinaryOp::NotEqual => "!=",
        BinaryOp::Less => "<",
        BinaryOp::LessEqual => "<=",
        BinaryOp::Greater => ">",
        BinaryOp::GreaterEqual => ">=",
        BinaryOp::LogicalAnd => "&&",
        BinaryOp::LogicalOr => "||",
    }
}

pub fn format_unary_op(op: &UnaryOp) -> &'static str {
    match op {
        UnaryOp::Not => "!",
    }
}

/// Renders an expression back to compact source-like text, the form the
/// symbol inventory records for initializers. No whitespace is inserted;
/// string literals are re-quoted.
pub fn format_expression(expr: &ExpressionNode) -> String {
    match &expr.kind {
        ExpressionKind::Literal(LiteralNode::Integer(i)) => i.to_string(),
        ExpressionKind::Literal(LiteralNode::Float(f)) => f.to_string(),
        ExpressionKind::Literal(LiteralNode::String(s)) => format!("\"{}\"", s),
        ExpressionKind::Literal(LiteralNode::Boolean(b)) => b.to_string(),
        ExpressionKind::Identifier(name) => name.clone(),
        ExpressionKind::Call(call) => {
            let args = call
                .args
                .iter()
                .map(format_expression)
                .collect::<Vec<_>>()
                .join(",");
            format!("{}({})", call.callee, args)
        }
        ExpressionKind::Unary { op, expr } => {
            format!("{}{}", format_unary_op(op), format_expression(expr))
        }
        ExpressionKind::Binary { left, op, right } => format!(
            "{}{}{}",
            format_expression(left),
            format_binary_op(op),
            format_expression(right)
        ),
        ExpressionKind::Grouping(inner) => format!("({})", format_expression(inner)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CallNode;

    fn lit(value: impl Into<LiteralNode>) -> ExpressionNode {
        ExpressionNode::from(value.into())
    }

    #[test]
    fn test_format_literals() {
        assert_eq!(format_expression(&lit(5)), "5");
        assert_eq!(format_expression(&lit(2.5)), "2.5");
        assert_eq!(format_expression(&lit("hi")), "\"hi\"");
        assert_eq!(format_expression(&lit(true)), "true");
    }

    #[test]
    fn test_format_binary_has_no_spaces() {
        let expr = ExpressionNode {
            kind: ExpressionKind::Binary {
                left: Box::new(ExpressionNode::from("a")),
                op: BinaryOp::Add,
                right: Box::new(lit(1)),
            },
            line: 0,
        };
        assert_eq!(format_expression(&expr), "a+1");
    }

    #[test]
    fn test_format_grouping_and_not() {
        let grouped = ExpressionNode {
            kind: ExpressionKind::Grouping(Box::new(ExpressionNode::from("b"))),
            line: 0,
        };
        let expr = ExpressionNode {
            kind: ExpressionKind::Unary {
                op: UnaryOp::Not,
                expr: Box::new(grouped),
            },
            line: 0,
        };
        assert_eq!(format_expression(&expr), "!(b)");
    }

    #[test]
    fn test_format_call() {
        let expr = ExpressionNode {
            kind: ExpressionKind::Call(CallNode {
                callee: "f".to_string(),
                args: vec![lit(1), ExpressionNode::from("x")],
                line: 0,
            }),
            line: 0,
        };
        assert_eq!(format_expression(&expr), "f(1,x)");
    }
}
