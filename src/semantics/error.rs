// represents a semantic diagnostic tagged with its source line
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticError {
    pub message: String,
    pub line: Option<usize>,
}

impl SemanticError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
        }
    }

    // diagnostics that refer to the program as a whole carry no line
    pub fn program_level(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Semantic error at line {}: {}", line, self.message),
            None => write!(f, "Semantic error: {}", self.message),
        }
    }
}

impl std::error::Error for SemanticError {}
