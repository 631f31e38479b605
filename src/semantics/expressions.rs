//! Expression analysis for the semantic analyzer.
//!
//! This module handles:
//! - Typing of literals, identifiers and groupings
//! - Binary operators (arithmetic widening, comparison, logical)
//! - Unary operators
//! - Function calls, including the `main` call rules and recursion marking

use crate::ast::{CallNode, ExpressionKind, ExpressionNode, LiteralNode};
use crate::semantics::format::format_type;
use crate::semantics::types::{are_compatible, common_type, FunctionSymbol, Symbol, Type};

use super::SemanticAnalyzer;

impl SemanticAnalyzer {
    /// Computes the type of an expression, appending diagnostics for any
    /// problems found along the way. Unresolvable subexpressions come back
    /// as [`Type::Unknown`], which absorbs every later check.
    pub(crate) fn analyze_expression(
        &mut self,
        expr: &ExpressionNode,
        mut func: Option<&mut FunctionSymbol>,
    ) -> Type {
        match &expr.kind {
            ExpressionKind::Literal(lit) => match lit {
                LiteralNode::Integer(_) => Type::Int,
                LiteralNode::Float(_) => Type::Float,
                LiteralNode::String(_) => Type::String,
                LiteralNode::Boolean(_) => Type::Bool,
            },
            ExpressionKind::Identifier(name) => match self.symbol_table.resolve(name) {
                None => {
                    self.error(expr.line, format!("Variable '{}' is not declared", name));
                    Type::Unknown
                }
                Some(Symbol::Variable(var)) => var.type_,
                // a function name used as a value; the call rules report it
                Some(Symbol::Function(_)) => Type::Unknown,
            },
            ExpressionKind::Call(call) => self.analyze_call(call, func),
            ExpressionKind::Unary { expr: inner, .. } => {
                self.analyze_expression(inner, func);
                Type::Bool
            }
            ExpressionKind::Binary { left, op, right } => {
                let left_type = self.analyze_expression(left, func.as_deref_mut());
                let right_type = self.analyze_expression(right, func.as_deref_mut());
                if op.is_arithmetic() {
                    common_type(left_type, right_type)
                } else {
                    // comparison and logical operators accept any operand
                    // types and always produce bool
                    Type::Bool
                }
            }
            ExpressionKind::Grouping(inner) => self.analyze_expression(inner, func),
        }
    }

    /// Checks a call against the function registry. An unresolved callee is
    /// reported once and the arguments are left unvisited; a resolved callee
    /// always gets its arguments analyzed, even when the count is wrong.
    pub(crate) fn analyze_call(
        &mut self,
        call: &CallNode,
        mut func: Option<&mut FunctionSymbol>,
    ) -> Type {
        let callee = match self.symbol_table.function(&call.callee) {
            Some(f) => f.clone(),
            None => {
                self.error(
                    call.line,
                    format!("Function '{}' is not defined", call.callee),
                );
                return Type::Unknown;
            }
        };

        if call.callee == "main" {
            match func.as_deref_mut() {
                Some(f) if f.name == "main" => f.is_recursive = true,
                _ => self.error(call.line, "Function 'main' cannot be called explicitly"),
            }
        }

        if let Some(f) = func.as_deref_mut() {
            if f.name == call.callee {
                f.is_recursive = true;
            }
        }

        let mut arg_types = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            arg_types.push(self.analyze_expression(arg, func.as_deref_mut()));
        }

        if arg_types.len() != callee.parameters.len() {
            self.error(
                call.line,
                format!(
                    "Wrong number of arguments for '{}': expected {}, got {}",
                    call.callee,
                    callee.parameters.len(),
                    arg_types.len()
                ),
            );
        } else {
            for (i, (param, arg_type)) in callee.parameters.iter().zip(&arg_types).enumerate() {
                if !are_compatible(param.type_, *arg_type) {
                    self.error(
                        call.line,
                        format!(
                            "Argument {} for '{}' is incompatible: expected {}, got {}",
                            i + 1,
                            call.callee,
                            format_type(&param.type_),
                            format_type(arg_type)
                        ),
                    );
                }
            }
        }

        callee.return_type
    }
}
