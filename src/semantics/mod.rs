// Module declarations
pub mod error;
mod expressions;
pub mod format;
pub mod symbol_table;
pub mod types;

// Re-exports for public API
pub use error::SemanticError;
pub use format::{format_binary_op, format_expression, format_type, format_unary_op};
pub use symbol_table::SymbolTable;
pub use types::{
    are_compatible, common_type, parse_type, ControlKind, ControlStructure, FunctionSymbol, Symbol,
    Type, VariableSymbol,
};

// Internal imports
use crate::ast::{AstNode, ExpressionNode, FunctionNode, StatementKind, StatementNode, VarDeclNode};

/// Single-pass semantic checker.
///
/// Walks an already-parsed tree once, depth-first and left to right,
/// populating a [`SymbolTable`] and accumulating diagnostics. Forward
/// references are never resolved: a call to a function declared later in
/// the program fails to resolve at the point of the call.
pub struct SemanticAnalyzer {
    symbol_table: SymbolTable,
    errors: Vec<SemanticError>,
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            symbol_table: SymbolTable::new(),
            errors: Vec::new(),
        }
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn into_symbol_table(self) -> SymbolTable {
        self.symbol_table
    }

    /// Traverses the whole program and returns the diagnostics collected
    /// along the way, in encounter order. The populated symbol table stays
    /// on the analyzer.
    pub fn analyze(&mut self, program: &[AstNode]) -> Vec<SemanticError> {
        for node in program {
            match node {
                AstNode::GlobalVar(decl) => self.analyze_var_decl(decl, None),
                AstNode::Function(func) => self.analyze_function(func),
            }
        }
        std::mem::take(&mut self.errors)
    }

    pub(crate) fn error(&mut self, line: usize, message: impl Into<String>) {
        self.errors.push(SemanticError::new(message, line));
    }

    // Variable declarations share one rule for both scopes; `func` is the
    // enclosing function while a body is being analyzed, `None` at global
    // scope.
    fn analyze_var_decl(&mut self, decl: &VarDeclNode, mut func: Option<&mut FunctionSymbol>) {
        let decl_type = parse_type(&decl.type_name);

        if self
            .symbol_table
            .resolve_in_current_scope(&decl.name)
            .is_some()
        {
            match func.as_deref() {
                None => self.error(
                    decl.line,
                    format!("Global variable '{}' is already defined", decl.name),
                ),
                Some(f) => self.error(
                    decl.line,
                    format!(
                        "Local variable '{}' is already defined in function '{}'",
                        decl.name, f.name
                    ),
                ),
            }
        }

        // parameters live in the same scope as locals, so this overlaps the
        // check above; both diagnostics are kept
        if let Some(f) = func.as_deref() {
            for param in &f.parameters {
                if param.name == decl.name {
                    self.error(
                        decl.line,
                        format!(
                            "Local variable '{}' conflicts with a parameter name",
                            decl.name
                        ),
                    );
                }
            }
        }

        let mut init_text = None;
        if let Some(init) = &decl.initializer {
            let init_type = self.analyze_expression(init, func.as_deref_mut());
            init_text = Some(format_expression(init));
            if !are_compatible(decl_type, init_type) {
                self.error(
                    decl.line,
                    format!(
                        "Incompatible type in initializer of '{}': expected {}, got {}",
                        decl.name,
                        format_type(&decl_type),
                        format_type(&init_type)
                    ),
                );
            }
        } else if decl.is_const {
            self.error(
                decl.line,
                format!("Constant '{}' must be initialized", decl.name),
            );
        }

        let mut symbol = VariableSymbol::new(decl.name.clone(), decl_type, decl.line);
        symbol.is_const = decl.is_const;
        symbol.init_text = init_text;

        // a rejected duplicate was already reported above; the locals list
        // still records every declaration occurrence
        self.symbol_table.define(Symbol::Variable(symbol.clone()));
        if let Some(f) = func {
            f.locals.push(symbol);
        }
    }

    fn analyze_function(&mut self, func: &FunctionNode) {
        let return_type = match &func.return_type {
            Some(text) => parse_type(text),
            None => Type::Void,
        };

        if self.symbol_table.function(&func.name).is_some() {
            self.error(
                func.line,
                format!("Function '{}' is already defined", func.name),
            );
            return;
        }

        let mut symbol = FunctionSymbol::new(func.name.clone(), return_type, func.line);
        for param in &func.params {
            symbol.parameters.push(VariableSymbol::new(
                param.name.clone(),
                parse_type(&param.type_name),
                param.line,
            ));
        }

        // the completed signature is registered before the body is analyzed,
        // so calls to the function from inside its own body resolve; it lands
        // in the scope that is current here, the global one
        self.symbol_table.define(Symbol::Function(symbol.clone()));

        self.symbol_table.enter_scope();
        for param in &symbol.parameters {
            if !self.symbol_table.define(Symbol::Variable(param.clone())) {
                self.error(
                    param.line,
                    format!(
                        "Parameter '{}' is duplicated in declaration of function '{}'",
                        param.name, func.name
                    ),
                );
            }
        }

        self.analyze_block(&func.body, Some(&mut symbol));

        if symbol.return_type != Type::Void && !symbol.has_return {
            self.error(
                func.line,
                format!(
                    "Function '{}' of type {} has no 'return' statement on all paths",
                    func.name,
                    format_type(&symbol.return_type)
                ),
            );
        }
        if func.name == "main" && symbol.is_recursive {
            self.error(func.line, "Function 'main' cannot be recursive");
        }

        self.symbol_table.exit_scope();
        self.symbol_table.update_function(symbol);
    }

    fn analyze_block(&mut self, stmts: &[StatementNode], mut func: Option<&mut FunctionSymbol>) {
        for stmt in stmts {
            self.analyze_statement(stmt, func.as_deref_mut());
        }
    }

    fn analyze_statement(&mut self, stmt: &StatementNode, mut func: Option<&mut FunctionSymbol>) {
        match &stmt.kind {
            StatementKind::VarDecl(decl) => self.analyze_var_decl(decl, func),
            StatementKind::Assign { name, value } => {
                self.analyze_assignment(name, value, stmt.line, func)
            }
            StatementKind::If {
                cond,
                then_block,
                else_block,
            } => {
                if let Some(f) = func.as_deref_mut() {
                    f.control_structures
                        .push(ControlStructure::new(ControlKind::If, stmt.line));
                }
                self.analyze_expression(cond, func.as_deref_mut());
                self.analyze_block(then_block, func.as_deref_mut());
                if let Some(else_block) = else_block {
                    self.analyze_block(else_block, func.as_deref_mut());
                }
            }
            StatementKind::While { cond, body } => {
                if let Some(f) = func.as_deref_mut() {
                    f.control_structures
                        .push(ControlStructure::new(ControlKind::While, stmt.line));
                }
                self.analyze_expression(cond, func.as_deref_mut());
                self.analyze_block(body, func.as_deref_mut());
            }
            StatementKind::For {
                init,
                cond,
                update,
                body,
            } => {
                if let Some(f) = func.as_deref_mut() {
                    f.control_structures
                        .push(ControlStructure::new(ControlKind::For, stmt.line));
                }
                if let Some(init) = init {
                    self.analyze_statement(init, func.as_deref_mut());
                }
                if let Some(cond) = cond {
                    self.analyze_expression(cond, func.as_deref_mut());
                }
                if let Some(update) = update {
                    self.analyze_statement(update, func.as_deref_mut());
                }
                self.analyze_block(body, func.as_deref_mut());
            }
            StatementKind::Return(value) => self.analyze_return(value.as_ref(), stmt.line, func),
            StatementKind::Call(call) => {
                self.analyze_call(call, func);
            }
            StatementKind::Expression(expr) => {
                self.analyze_expression(expr, func);
            }
            StatementKind::Block(stmts) => self.analyze_block(stmts, func),
        }
    }

    fn analyze_assignment(
        &mut self,
        name: &str,
        value: &ExpressionNode,
        line: usize,
        func: Option<&mut FunctionSymbol>,
    ) {
        let (target_type, is_const) = match self.symbol_table.resolve(name) {
            None => {
                self.error(
                    line,
                    format!("Variable '{}' was not declared before use", name),
                );
                return;
            }
            Some(Symbol::Function(_)) => {
                self.error(line, format!("'{}' is not a variable", name));
                return;
            }
            Some(Symbol::Variable(var)) => (var.type_, var.is_const),
        };

        // non-fatal: the right-hand side is still type checked
        if is_const {
            self.error(line, format!("Cannot assign to constant '{}'", name));
        }

        let value_type = self.analyze_expression(value, func);
        if !are_compatible(target_type, value_type) {
            self.error(
                line,
                format!(
                    "Incompatible type in assignment to '{}': expected {}, got {}",
                    name,
                    format_type(&target_type),
                    format_type(&value_type)
                ),
            );
        }
    }

    fn analyze_return(
        &mut self,
        value: Option<&ExpressionNode>,
        line: usize,
        mut func: Option<&mut FunctionSymbol>,
    ) {
        let (func_name, declared) = match func.as_deref_mut() {
            Some(f) => {
                f.has_return = true;
                (f.name.clone(), f.return_type)
            }
            None => {
                self.error(line, "'return' outside of a function");
                return;
            }
        };

        let return_type = match value {
            Some(expr) => self.analyze_expression(expr, func.as_deref_mut()),
            None => Type::Void,
        };

        if !are_compatible(declared, return_type) {
            self.error(
                line,
                format!(
                    "Incompatible return type in function '{}': expected {}, got {}",
                    func_name,
                    format_type(&declared),
                    format_type(&return_type)
                ),
            );
        }
    }
}

/// Analyzes a whole program: one traversal plus the post-traversal
/// entry-point check. A program without a function named `main` gets one
/// final program-level diagnostic appended after the traversal diagnostics.
pub fn analyze_program(program: &[AstNode]) -> (SymbolTable, Vec<SemanticError>) {
    let mut analyzer = SemanticAnalyzer::new();
    let mut errors = analyzer.analyze(program);
    if analyzer.symbol_table().function("main").is_none() {
        errors.push(SemanticError::program_level("Missing function 'main'"));
    }
    (analyzer.into_symbol_table(), errors)
}
