use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

lazy_static! {
    static ref TYPE_KEYWORDS: HashMap<&'static str, Type> = {
        let mut m = HashMap::new();
        m.insert("int", Type::Int);
        m.insert("float", Type::Float);
        m.insert("double", Type::Double);
        m.insert("string", Type::String);
        m.insert("void", Type::Void);
        m.insert("bool", Type::Bool);
        m
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
    Double,
    String,
    Bool,
    Void,
    // could not be determined; suppresses further diagnostics about the value
    Unknown,
    // a semantic error already occurred constructing the value
    Error,
}

/// Maps a type keyword to its [`Type`]. Unrecognized text yields
/// [`Type::Unknown`]; the caller reports unknown type names elsewhere.
pub fn parse_type(text: &str) -> Type {
    TYPE_KEYWORDS.get(text).copied().unwrap_or(Type::Unknown)
}

/// Whether a value of `source` type may appear where `target` is expected.
///
/// Widening is target-directed: `int` fits `float` and `double`, `float`
/// fits `double`, never the reverse. `Unknown` and `Error` are absorbing on
/// either side so one unresolved name does not cascade.
pub fn are_compatible(target: Type, source: Type) -> bool {
    if matches!(target, Type::Unknown | Type::Error) || matches!(source, Type::Unknown | Type::Error)
    {
        return true;
    }
    if target == source {
        return true;
    }
    matches!(
        (target, source),
        (Type::Double, Type::Float) | (Type::Double, Type::Int) | (Type::Float, Type::Int)
    )
}

/// Result type of a binary arithmetic expression over `t1` and `t2`.
///
/// `Unknown` propagates; otherwise the dominance order is
/// `String > Double > Float > Int`, with `Int` as the default.
pub fn common_type(t1: Type, t2: Type) -> Type {
    if t1 == Type::Unknown || t2 == Type::Unknown {
        return Type::Unknown;
    }
    if t1 == Type::String || t2 == Type::String {
        return Type::String;
    }
    if t1 == Type::Double || t2 == Type::Double {
        return Type::Double;
    }
    if t1 == Type::Float || t2 == Type::Float {
        return Type::Float;
    }
    Type::Int
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableSymbol {
    pub name: String,
    pub type_: Type,
    pub line: usize,
    pub is_const: bool,
    pub init_text: Option<String>,
    pub is_global: bool,
}

impl VariableSymbol {
    pub fn new(name: impl Into<String>, type_: Type, line: usize) -> Self {
        Self {
            name: name.into(),
            type_,
            line,
            is_const: false,
            init_text: None,
            is_global: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSymbol {
    pub name: String,
    pub return_type: Type,
    pub line: usize,
    pub parameters: Vec<VariableSymbol>,
    pub locals: Vec<VariableSymbol>,
    pub control_structures: Vec<ControlStructure>,
    pub has_return: bool,
    pub is_recursive: bool,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>, return_type: Type, line: usize) -> Self {
        Self {
            name: name.into(),
            return_type,
            line,
            parameters: Vec::new(),
            locals: Vec::new(),
            control_structures: Vec::new(),
            has_return: false,
            is_recursive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Variable(VariableSymbol),
    Function(FunctionSymbol),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Variable(var) => &var.name,
            Symbol::Function(func) => &func.name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    If,
    While,
    For,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlStructure {
    pub kind: ControlKind,
    pub line: usize,
}

impl ControlStructure {
    pub fn new(kind: ControlKind, line: usize) -> Self {
        Self { kind, line }
    }
}

impl fmt::Display for ControlStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ControlKind::If => write!(f, "if...else, Line {}", self.line),
            ControlKind::While => write!(f, "while, Line {}", self.line),
            ControlKind::For => write!(f, "for, Line {}", self.line),
        }
    }
}
