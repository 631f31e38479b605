use ordered_float::OrderedFloat;

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralNode {
    Integer(i64),
    Float(OrderedFloat<f64>),
    String(String),
    Boolean(bool),
}

impl From<i64> for LiteralNode {
    fn from(i: i64) -> Self {
        LiteralNode::Integer(i)
    }
}

impl From<OrderedFloat<f64>> for LiteralNode {
    fn from(f: OrderedFloat<f64>) -> Self {
        LiteralNode::Float(f)
    }
}

impl From<f64> for LiteralNode {
    fn from(f: f64) -> Self {
        LiteralNode::Float(OrderedFloat(f))
    }
}

impl From<String> for LiteralNode {
    fn from(s: String) -> Self {
        LiteralNode::String(s)
    }
}

impl From<&str> for LiteralNode {
    fn from(s: &str) -> Self {
        LiteralNode::String(s.to_string())
    }
}

impl From<bool> for LiteralNode {
    fn from(b: bool) -> Self {
        LiteralNode::Boolean(b)
    }
}
