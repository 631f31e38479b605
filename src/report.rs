//! Plain-text reports over the results of semantic analysis.
//!
//! Three builders render what the compiler driver prints after a run: a
//! section for global variables, a per-function section and the diagnostic
//! list. The reports read straight from the populated [`SymbolTable`], so
//! everything appears in declaration order.

use crate::semantics::{format_type, SemanticError, SymbolTable};

pub fn global_variables_report(table: &SymbolTable) -> String {
    let mut lines = vec!["--- Global Variables ---".to_string()];
    if table.global_variables().is_empty() {
        lines.push("(none)".to_string());
    }
    for var in table.global_variables() {
        lines.push(format!(
            "Name: {}, Type: {}, Init: {}, Const: {}",
            var.name,
            format_type(&var.type_),
            var.init_text.as_deref().unwrap_or("none"),
            var.is_const
        ));
    }
    lines.join("\n")
}

pub fn functions_report(table: &SymbolTable) -> String {
    let mut lines = vec!["--- Functions ---".to_string()];
    if table.functions().is_empty() {
        lines.push("(none)".to_string());
    }
    for func in table.functions().values() {
        lines.push(format!("Name: {}", func.name));
        lines.push(format!("  Return Type: {}", format_type(&func.return_type)));
        lines.push(format!(
            "  Main: {}, Recursive: {}",
            yes_no(func.name == "main"),
            yes_no(func.is_recursive)
        ));
        lines.push("  Parameters:".to_string());
        if func.parameters.is_empty() {
            lines.push("    (none)".to_string());
        }
        for param in &func.parameters {
            lines.push(format!("    {} {}", format_type(&param.type_), param.name));
        }
        lines.push("  Local Variables:".to_string());
        if func.locals.is_empty() {
            lines.push("    (none)".to_string());
        }
        for local in &func.locals {
            lines.push(format!(
                "    {} {} (init: {})",
                format_type(&local.type_),
                local.name,
                local.init_text.as_deref().unwrap_or("none")
            ));
        }
        lines.push("  Control Structures:".to_string());
        if func.control_structures.is_empty() {
            lines.push("    (none)".to_string());
        }
        for cs in &func.control_structures {
            lines.push(format!("    <{}>", cs));
        }
        lines.push("-----------------------------".to_string());
    }
    lines.join("\n")
}

pub fn diagnostics_report(errors: &[SemanticError]) -> String {
    if errors.is_empty() {
        return "No semantic errors found.".to_string();
    }
    let mut lines = vec![format!("Found {} semantic error(s):", errors.len())];
    for error in errors {
        lines.push(error.to_string());
    }
    lines.join("\n")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
