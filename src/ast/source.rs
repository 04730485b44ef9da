//! Serialises a tree back to uC source text.
//!
//! Every operator expression is written fully parenthesised, so parsing the
//! output again yields a tree of the same shape (coordinates aside).

use super::{ast::Node, declarations::Program, expressions::ConstantType};

pub fn to_source(program: &Program) -> String {
    let mut writer = SourceWriter::default();

    for gdecl in &program.gdecls {
        writer.write_global(gdecl);
    }

    writer.out
}

/// Writes a single expression.
pub fn expr_to_source(node: &Node) -> String {
    match node {
        Node::ID(id) => id.name.clone(),
        Node::Constant(constant) => match constant.type_ {
            ConstantType::Int => constant.value.clone(),
            ConstantType::Char => format!("'{}'", constant.value),
            ConstantType::String => format!("\"{}\"", constant.value),
        },
        Node::BinaryOp(binary) => format!(
            "({} {} {})",
            expr_to_source(&binary.left),
            binary.op,
            expr_to_source(&binary.right)
        ),
        Node::UnaryOp(unary) => format!("({}{})", unary.op, expr_to_source(&unary.expr)),
        Node::Assignment(assignment) => format!(
            "({} {} {})",
            expr_to_source(&assignment.lvalue),
            assignment.op,
            expr_to_source(&assignment.rvalue)
        ),
        Node::Cast(cast) => format!(
            "(({}) {})",
            type_name(&cast.to_type),
            expr_to_source(&cast.expr)
        ),
        Node::ArrayRef(array_ref) => format!(
            "{}[{}]",
            expr_to_source(&array_ref.name),
            expression_to_source(&array_ref.subscript)
        ),
        Node::FuncCall(call) => format!(
            "{}({})",
            expr_to_source(&call.name),
            call.args
                .as_ref()
                .map(|args| expression_to_source(args))
                .unwrap_or_default()
        ),
        Node::ExprList(list) => format!("({})", join_exprs(&list.exprs)),
        Node::InitList(list) => format!("{{{}}}", join_exprs(&list.exprs)),
        _ => String::new(),
    }
}

fn join_exprs(exprs: &[Node]) -> String {
    exprs
        .iter()
        .map(expr_to_source)
        .collect::<Vec<String>>()
        .join(", ")
}

// Where the grammar accepts a full expression (and in argument lists) a comma
// list needs no parentheses of its own.
fn expression_to_source(expr: &Node) -> String {
    match expr {
        Node::ExprList(list) => join_exprs(&list.exprs),
        other => expr_to_source(other),
    }
}

fn type_name(node: &Node) -> &str {
    match node {
        Node::Type(type_) => &type_.name,
        _ => "",
    }
}

/// The type specifier at the bottom of a declarator chain.
fn base_type(declarator: &Node) -> &str {
    match declarator {
        Node::VarDecl(var) => type_name(&var.type_),
        Node::ArrayDecl(array) => base_type(&array.type_),
        Node::FuncDecl(func) => base_type(&func.type_),
        _ => "",
    }
}

fn declarator_to_source(declarator: &Node) -> String {
    match declarator {
        Node::VarDecl(var) => var.declname.clone(),
        Node::ArrayDecl(array) => format!(
            "{}[{}]",
            declarator_to_source(&array.type_),
            array
                .dim
                .as_ref()
                .map(|dim| expr_to_source(dim))
                .unwrap_or_default()
        ),
        Node::FuncDecl(func) => format!(
            "{}({})",
            declarator_to_source(&func.type_),
            func.args
                .as_ref()
                .map(|args| params_to_source(args))
                .unwrap_or_default()
        ),
        _ => String::new(),
    }
}

fn params_to_source(params: &Node) -> String {
    match params {
        Node::ParamList(list) => list
            .params
            .iter()
            .map(|param| match param {
                Node::Decl(decl) => format!(
                    "{} {}",
                    base_type(&decl.type_),
                    declarator_to_source(&decl.type_)
                ),
                _ => String::new(),
            })
            .collect::<Vec<String>>()
            .join(", "),
        _ => String::new(),
    }
}

/// Writes `decls` as one declaration sharing the first decl's type specifier.
/// `spec` names the type when there is no decl to take it from.
fn declaration_to_source(spec: Option<&Node>, decls: &[Node]) -> String {
    let base = decls
        .iter()
        .find_map(|decl| match decl {
            Node::Decl(decl) => Some(base_type(&decl.type_)),
            _ => None,
        })
        .or_else(|| spec.map(type_name))
        .unwrap_or("int");

    let declarators = decls
        .iter()
        .filter_map(|decl| match decl {
            Node::Decl(decl) => Some(match &decl.init {
                Some(init) => format!(
                    "{} = {}",
                    declarator_to_source(&decl.type_),
                    expr_to_source(init)
                ),
                None => declarator_to_source(&decl.type_),
            }),
            _ => None,
        })
        .collect::<Vec<String>>();

    if declarators.is_empty() {
        format!("{};", base)
    } else {
        format!("{} {};", base, declarators.join(", "))
    }
}

#[derive(Default)]
struct SourceWriter {
    out: String,
    indent: usize,
}

impl SourceWriter {
    fn line(&mut self, text: &str) {
        self.out.push_str(&"    ".repeat(self.indent));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn write_global(&mut self, node: &Node) {
        match node {
            Node::GlobalDecl(global) => self.line(&declaration_to_source(global.spec.as_deref(), &global.decls)),
            Node::FuncDef(def) => {
                let declarator = match def.decl.as_ref() {
                    Node::Decl(decl) => declarator_to_source(&decl.type_),
                    _ => String::new(),
                };
                self.line(&format!("{} {}", type_name(&def.spec), declarator));
                self.write_stmt(&def.body);
            }
            _ => {}
        }
    }

    fn write_body(&mut self, body: &Node) {
        if let Node::Compound(_) = body {
            self.write_stmt(body);
        } else {
            self.indent += 1;
            self.write_stmt(body);
            self.indent -= 1;
        }
    }

    fn write_stmt(&mut self, node: &Node) {
        match node {
            Node::Compound(compound) => {
                self.line("{");
                self.indent += 1;
                for decl in &compound.decls {
                    self.line(&declaration_to_source(None, std::slice::from_ref(decl)));
                }
                for stmt in &compound.stmts {
                    self.write_stmt(stmt);
                }
                self.indent -= 1;
                self.line("}");
            }
            Node::If(if_stmt) => {
                self.line(&format!("if ({})", expression_to_source(&if_stmt.cond)));
                self.write_body(&if_stmt.iftrue);
                if let Some(iffalse) = &if_stmt.iffalse {
                    self.line("else");
                    self.write_body(iffalse);
                }
            }
            Node::While(while_stmt) => {
                self.line(&format!("while ({})", expression_to_source(&while_stmt.cond)));
                self.write_body(&while_stmt.body);
            }
            Node::For(for_stmt) => {
                let optional = |clause: &Option<Box<Node>>| {
                    clause
                        .as_ref()
                        .map(|clause| expression_to_source(clause))
                        .unwrap_or_default()
                };
                let header = match for_stmt.init.as_deref() {
                    Some(Node::DeclList(list)) => format!(
                        "for ({} {}; {})",
                        declaration_to_source(None, &list.decls),
                        optional(&for_stmt.cond),
                        optional(&for_stmt.next)
                    ),
                    _ => format!(
                        "for ({}; {}; {})",
                        optional(&for_stmt.init),
                        optional(&for_stmt.cond),
                        optional(&for_stmt.next)
                    ),
                };
                self.line(&header);
                self.write_body(&for_stmt.body);
            }
            Node::Break(_) => self.line("break;"),
            Node::Return(ret) => match &ret.expr {
                Some(expr) => self.line(&format!("return {};", expression_to_source(expr))),
                None => self.line("return;"),
            },
            Node::Assert(assert) => self.line(&format!("assert {};", expression_to_source(&assert.expr))),
            Node::Print(print) => match &print.expr {
                Some(expr) => self.line(&format!("print({});", expression_to_source(expr))),
                None => self.line("print();"),
            },
            Node::Read(read) => self.line(&format!("read({});", expression_to_source(&read.names))),
            Node::EmptyStatement(_) => self.line(";"),
            expr => self.line(&format!("{};", expression_to_source(expr))),
        }
    }
}
