use crate::semantics::types::{FunctionSymbol, Symbol, VariableSymbol};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Scoped symbol storage for one analysis run.
///
/// The scope stack always holds the global scope at the bottom; a new scope
/// is pushed around each function body. Besides the stack, the table keeps
/// the global variables in insertion order and every function signature in
/// declaration order.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<HashMap<String, Symbol>>,
    global_variables: Vec<VariableSymbol>,
    functions: IndexMap<String, FunctionSymbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![HashMap::new()],
            global_variables: Vec::new(),
            functions: IndexMap::new(),
        }
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    // the global scope is never popped
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Inserts `symbol` into the current scope. Returns `false` without
    /// mutating anything if the name is already taken in that exact scope;
    /// reporting the conflict is the caller's job.
    ///
    /// A variable defined while only the global scope is on the stack is
    /// marked global and appended to the global-variable list. A function is
    /// additionally registered in the function mapping.
    pub fn define(&mut self, mut symbol: Symbol) -> bool {
        if self
            .scopes
            .last()
            .expect("at least the global scope exists")
            .contains_key(symbol.name())
        {
            return false;
        }

        if let Symbol::Variable(var) = &mut symbol {
            if self.scopes.len() == 1 {
                var.is_global = true;
                self.global_variables.push(var.clone());
            }
        }

        if let Symbol::Function(func) = &symbol {
            self.functions.insert(func.name.clone(), func.clone());
        }

        let name = symbol.name().to_string();
        self.scopes
            .last_mut()
            .expect("at least the global scope exists")
            .insert(name, symbol);
        true
    }

    /// Looks `name` up from the innermost scope outward.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Looks `name` up in the current scope only. Used to detect
    /// redeclaration before defining a new symbol.
    pub fn resolve_in_current_scope(&self, name: &str) -> Option<&Symbol> {
        self.scopes
            .last()
            .expect("at least the global scope exists")
            .get(name)
    }

    pub fn global_variables(&self) -> &[VariableSymbol] {
        &self.global_variables
    }

    pub fn functions(&self) -> &IndexMap<String, FunctionSymbol> {
        &self.functions
    }

    pub fn function(&self, name: &str) -> Option<&FunctionSymbol> {
        self.functions.get(name)
    }

    // replaces the registered entry for `symbol.name` with the completed
    // body-analysis results; a no-op if the function never got registered
    pub(crate) fn update_function(&mut self, symbol: FunctionSymbol) {
        if let Some(entry) = self.functions.get_mut(&symbol.name) {
            *entry = symbol;
        }
    }
}
