//! Human-readable dumps of classified programs. Every expression node is annotated with its
//! value category and type.

use crate::program::*;

use std::fmt;
use std::fmt::{Display, Formatter};

const MAX_LINE_LENGTH: usize = 100;

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "dialect {}", self.dialect)?;

        let mut functions: Vec<_> = self.functions.values().collect();
        functions.sort_by_key(|function| function.decl.id);
        for function in functions {
            writeln!(f, "{}", function)?;
        }

        for item in &self.items {
            writeln!(f, "{}", item)?;
        }

        Ok(())
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parameters: Vec<_> = self
            .parameters
            .iter()
            .map(|parameter| format!("{}: {}", parameter, parameter.type_))
            .collect();
        write!(
            f,
            "fun {}({}) -> {}:\n{}",
            self.decl.name,
            parameters.join(", "),
            self.decl.type_.returns,
            indent(&self.body.to_string())
        )
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Item::Variable {
                variable,
                initializer: Some(initializer),
            } => write!(
                f,
                "var {}: {} =\n{}",
                variable,
                variable.type_,
                indent(&initializer.to_string())
            ),
            Item::Variable {
                variable,
                initializer: None,
            } => write!(f, "var {}: {}", variable, variable.type_),
            Item::Eval(expression) => write!(f, "eval:\n{}", indent(&expression.to_string())),
            Item::Assert { condition, .. } => {
                write!(f, "assert:\n{}", indent(&condition.to_string()))
            }
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.name, self.id.0)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use ExpressionKind as K;
        let node = match self.kind() {
            K::Variable(expr) => expr.variable.to_string(),
            K::Function(expr) => format!("<fun {}>", expr.function.name),
            K::Literal(expr) => match expr.value {
                Literal::Int(value) => value.to_string(),
                Literal::Bool(value) => value.to_string(),
            },
            K::Load(expr) => call_like("load", &[&*expr.target]),
            K::Deref(expr) => call_like("deref", &[&*expr.pointer]),
            K::FieldAccess(expr) => {
                let field = match expr.receiver.type_().type_.as_struct() {
                    Some(struct_) => struct_.fields[expr.field_index].name.clone(),
                    None => expr.field_index.to_string(),
                };
                call_like(&format!("field .{}", field), &[&*expr.receiver])
            }
            K::Index(expr) => call_like("index", &[&*expr.collection, &*expr.index]),
            K::Address(expr) => call_like("address_of", &[&*expr.target]),
            K::Call(expr) => {
                let arguments: Vec<_> = expr.arguments.iter().collect();
                call_like(&format!("call {}", expr.function.name), &arguments)
            }
            K::Assign(expr) => call_like("assign", &[&*expr.target, &*expr.value]),
            K::UnaryOp(expr) => call_like(&expr.operator.to_string(), &[&*expr.operand]),
            K::BinaryOp(expr) => call_like(&expr.operator.to_string(), &[&*expr.lhs, &*expr.rhs]),
            K::CompoundLiteral(expr) => {
                let fields: Vec<_> = expr.fields.iter().map(|(_, value)| value).collect();
                call_like(&format!("literal {}", expr.type_.name), &fields)
            }
            K::ArrayLiteral(expr) => {
                let elements: Vec<_> = expr.elements.iter().collect();
                call_like("literal array", &elements)
            }
        };

        write!(f, "{} [{} {}]", node, self.value_category(), self.type_())
    }
}

fn call_like(name: &str, arguments: &[&Expression]) -> String {
    let arguments: Vec<_> = arguments.iter().map(|argument| argument.to_string()).collect();
    let inline = format!("{}({})", name, arguments.join(", "));
    if !should_wrap(&inline) {
        return inline;
    }

    let arguments: Vec<_> = arguments.iter().map(|argument| indent(argument)).collect();
    format!("{}:\n{}", name, arguments.join("\n"))
}

fn should_wrap(line: &str) -> bool {
    line.contains('\n') || line.len() > MAX_LINE_LENGTH
}

fn indent(code: &str) -> String {
    let lines: Vec<_> = code
        .lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("  {}", line)
            }
        })
        .collect();

    lines.join("\n")
}
