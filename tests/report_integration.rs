use insta::assert_snapshot;
use lito_sema::ast::{
    AstNode, BinaryOp, CallNode, ExpressionKind, ExpressionNode, FunctionNode, LiteralNode, Param,
    StatementKind, StatementNode, VarDeclNode,
};
use lito_sema::report::{diagnostics_report, functions_report, global_variables_report};
use lito_sema::semantics::analyze_program;

fn lit(value: impl Into<LiteralNode>, line: usize) -> ExpressionNode {
    ExpressionNode {
        kind: ExpressionKind::Literal(value.into()),
        line,
    }
}

fn ident(name: &str, line: usize) -> ExpressionNode {
    ExpressionNode {
        kind: ExpressionKind::Identifier(name.to_string()),
        line,
    }
}

fn call_expr(callee: &str, args: Vec<ExpressionNode>, line: usize) -> ExpressionNode {
    ExpressionNode {
        kind: ExpressionKind::Call(CallNode {
            callee: callee.to_string(),
            args,
            line,
        }),
        line,
    }
}

fn binary(left: ExpressionNode, op: BinaryOp, right: ExpressionNode, line: usize) -> ExpressionNode {
    ExpressionNode {
        kind: ExpressionKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        line,
    }
}

fn stmt(kind: StatementKind, line: usize) -> StatementNode {
    StatementNode { kind, line }
}

fn decl(type_name: &str, name: &str, init: Option<ExpressionNode>, line: usize) -> VarDeclNode {
    VarDeclNode {
        name: name.to_string(),
        type_name: type_name.to_string(),
        is_const: false,
        initializer: init,
        line,
    }
}

fn local(type_name: &str, name: &str, init: Option<ExpressionNode>, line: usize) -> StatementNode {
    stmt(StatementKind::VarDecl(decl(type_name, name, init, line)), line)
}

fn assign(name: &str, value: ExpressionNode, line: usize) -> StatementNode {
    stmt(
        StatementKind::Assign {
            name: name.to_string(),
            value,
        },
        line,
    )
}

fn ret(value: Option<ExpressionNode>, line: usize) -> StatementNode {
    stmt(StatementKind::Return(value), line)
}

fn call_stmt(callee: &str, args: Vec<ExpressionNode>, line: usize) -> StatementNode {
    stmt(
        StatementKind::Call(CallNode {
            callee: callee.to_string(),
            args,
            line,
        }),
        line,
    )
}

fn function(
    return_type: Option<&str>,
    name: &str,
    params: &[(&str, &str)],
    body: Vec<StatementNode>,
    line: usize,
) -> AstNode {
    AstNode::Function(FunctionNode {
        name: name.to_string(),
        return_type: return_type.map(str::to_string),
        params: params
            .iter()
            .map(|(type_name, param_name)| Param {
                name: param_name.to_string(),
                type_name: type_name.to_string(),
                line,
            })
            .collect(),
        body,
        line,
    })
}

// A small well-formed program touching every report column: globals with and
// without initializers, a constant, parameters, locals, recursion and all
// three control structures.
fn sample_program() -> Vec<AstNode> {
    let mut rate = decl("double", "rate", Some(lit(2.5, 2)), 2);
    rate.is_const = true;

    vec![
        AstNode::GlobalVar(decl("int", "counter", Some(lit(0, 1)), 1)),
        AstNode::GlobalVar(rate),
        AstNode::GlobalVar(decl("string", "label", None, 3)),
        function(
            Some("int"),
            "add",
            &[("int", "a"), ("int", "b")],
            vec![
                local(
                    "int",
                    "sum",
                    Some(binary(ident("a", 5), BinaryOp::Add, ident("b", 5), 5)),
                    5,
                ),
                ret(Some(ident("sum", 6)), 6),
            ],
            4,
        ),
        function(
            None,
            "spin",
            &[],
            vec![stmt(
                StatementKind::While {
                    cond: lit(true, 8),
                    body: vec![call_stmt("spin", vec![], 8)],
                },
                8,
            )],
            7,
        ),
        function(
            Some("int"),
            "main",
            &[],
            vec![
                stmt(
                    StatementKind::For {
                        init: Some(Box::new(local("int", "k", Some(lit(0, 10)), 10))),
                        cond: Some(binary(ident("k", 10), BinaryOp::Less, lit(3, 10), 10)),
                        update: Some(Box::new(assign(
                            "k",
                            binary(ident("k", 10), BinaryOp::Add, lit(1, 10), 10),
                            10,
                        ))),
                        body: vec![call_expr(
                            "add",
                            vec![ident("k", 11), ident("counter", 11)],
                            11,
                        )
                        .into()],
                    },
                    10,
                ),
                stmt(
                    StatementKind::If {
                        cond: binary(ident("counter", 12), BinaryOp::Less, lit(3, 12), 12),
                        then_block: vec![assign("label", lit("low", 13), 13)],
                        else_block: Some(vec![assign("label", lit("high", 15), 15)]),
                    },
                    12,
                ),
                ret(Some(lit(0, 16)), 16),
            ],
            9,
        ),
    ]
}

#[test]
fn test_reports_for_sample_program() {
    let program = sample_program();
    let (table, errors) = analyze_program(&program);

    assert_snapshot!("sample_globals", global_variables_report(&table));
    assert_snapshot!("sample_functions", functions_report(&table));
    assert_snapshot!("sample_diagnostics", diagnostics_report(&errors));
}

#[test]
fn test_report_lists_collected_diagnostics() {
    let program = vec![function(
        Some("int"),
        "main",
        &[],
        vec![call_stmt("oops", vec![], 2)],
        1,
    )];
    let (_, errors) = analyze_program(&program);

    assert_snapshot!("failing_diagnostics", diagnostics_report(&errors));
}

#[test]
fn test_missing_main_report() {
    let (_, errors) = analyze_program(&[]);

    assert_snapshot!("missing_main_diagnostics", diagnostics_report(&errors));
}
