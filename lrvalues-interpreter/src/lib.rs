//! Interpreter backend: runs classified programs right after they are compiled.
//!
//! Evaluation mirrors classification: every lvalue expression evaluates to a `Place`, every
//! rvalue expression evaluates to an `Rvalue`, and storage is only ever read through the
//! explicit loads inserted by the classifier.

mod errors;
mod store;
mod values;

pub use crate::errors::RuntimeError;
pub use crate::values::{CellId, Place, Rvalue, Value};

use crate::store::Store;
use crate::values::panic_wrong_type;
use lrvalues::ast::{BinaryOperator, UnaryOperator};
use lrvalues::backends::Backend;
use lrvalues::options::Dialect;
use lrvalues::program::*;
use std::collections::HashMap;
use tracing::{debug, trace};

pub struct InterpreterBackend;

impl Backend for InterpreterBackend {
    fn run(&self, file_name: &str, source: &str, program: Program) -> Result<(), ()> {
        match run(&program) {
            Ok(_) => Ok(()),
            Err(error) => {
                error.print_backtrace(file_name, source);
                Err(())
            }
        }
    }
}

/// Runs all items of `program` in order, returning the final state of storage.
pub fn run(program: &Program) -> Result<State, RuntimeError> {
    let mut state = State::new(program);
    for item in program.items() {
        run_item(item, &mut state)?;
    }
    Ok(state)
}

/// Storage of a running program, with bindings of variables to storage cells.
pub struct State<'a> {
    program: &'a Program,
    store: Store,

    /// Every variable maps to a stack of cells: parameters get a fresh cell on every call.
    bindings: HashMap<VariableId, Vec<CellId>>,

    /// Global variables by name, for inspection after the program has run.
    globals: Vec<(String, VariableId)>,
}

impl<'a> State<'a> {
    fn new(program: &'a Program) -> State<'a> {
        State {
            program,
            store: Store::new(),
            bindings: HashMap::new(),
            globals: Vec::new(),
        }
    }

    /// Reads the current value of the global variable `name`.
    pub fn global(&self, name: &str) -> Option<Rvalue> {
        let (_, variable_id) = self.globals.iter().rev().find(|(global, _)| global == name)?;
        Some(self.store.read(&self.place_of(*variable_id)))
    }

    /// Reads the current values of all global variables, in declaration order.
    pub fn globals(&self) -> Vec<(String, Rvalue)> {
        self.globals
            .iter()
            .map(|(name, variable_id)| {
                let value = self.store.read(&self.place_of(*variable_id));
                (name.clone(), value)
            })
            .collect()
    }

    fn push(&mut self, variable_id: VariableId, value: Rvalue) {
        let cell = self.store.allocate(value);
        self.bindings.entry(variable_id).or_default().push(cell);
    }

    fn pop(&mut self, variable_id: VariableId) {
        let cells = match self.bindings.get_mut(&variable_id) {
            Some(cells) => cells,
            None => panic!("variable deallocated before allocation"),
        };
        if cells.pop().is_none() {
            panic!("variable deallocated twice");
        }
    }

    fn place_of(&self, variable_id: VariableId) -> Place {
        match self.bindings.get(&variable_id).and_then(|cells| cells.last()) {
            Some(cell) => Place::root(*cell),
            None => panic!("variable accessed before allocation"),
        }
    }
}

type RunResult<T> = Result<T, RuntimeError>;

fn run_item(item: &Item, state: &mut State) -> RunResult<()> {
    match item {
        Item::Variable {
            variable,
            initializer,
        } => {
            let value = match initializer {
                Some(initializer) => run_expression(initializer, state)?.into_rvalue(),
                None => Rvalue::zero(&variable.type_.type_),
            };
            state.push(variable.id, value);
            state.globals.push((variable.name.clone(), variable.id));
            Ok(())
        }
        Item::Eval(expression) => {
            let _ = run_expression(expression, state)?;
            Ok(())
        }
        Item::Assert {
            condition,
            location,
        } => {
            let holds = run_expression(condition, state)?.into_rvalue().as_bool();
            if holds {
                Ok(())
            } else {
                Err(RuntimeError::new("assertion failed", *location))
            }
        }
    }
}

fn run_expression(expression: &Expression, state: &mut State) -> RunResult<Value> {
    match expression.kind() {
        ExpressionKind::Variable(e) => Ok(Value::Lvalue(state.place_of(e.variable.id))),
        ExpressionKind::Function(_) => panic!("Function designator evaluated as a value."),
        ExpressionKind::Literal(e) => Ok(Value::Rvalue(run_literal_expr(e))),
        ExpressionKind::Load(e) => run_load_expr(e, state),
        ExpressionKind::Deref(e) => run_deref_expr(e, state),
        ExpressionKind::FieldAccess(e) => run_field_access_expr(e, state),
        ExpressionKind::Index(e) => run_index_expr(e, state),
        ExpressionKind::Address(e) => run_address_expr(e, state),
        ExpressionKind::Call(e) => run_call_expr(e, state),
        ExpressionKind::Assign(e) => run_assign_expr(e, state),
        ExpressionKind::UnaryOp(e) => run_unary_op_expr(e, state),
        ExpressionKind::BinaryOp(e) => run_binary_op_expr(e, state),
        ExpressionKind::CompoundLiteral(e) => run_compound_literal_expr(e, state),
        ExpressionKind::ArrayLiteral(e) => run_array_literal_expr(e, state),
    }
}

fn run_literal_expr(expression: &LiteralExpr) -> Rvalue {
    match expression.value {
        Literal::Int(value) => Rvalue::Int(value),
        Literal::Bool(value) => Rvalue::Bool(value),
    }
}

fn run_load_expr(expression: &LoadExpr, state: &mut State) -> RunResult<Value> {
    let place = run_expression(&expression.target, state)?.into_lvalue();
    Ok(Value::Rvalue(state.store.read(&place)))
}

fn run_deref_expr(expression: &DerefExpr, state: &mut State) -> RunResult<Value> {
    let pointer = run_expression(&expression.pointer, state)?.into_rvalue();
    match pointer.into_pointer() {
        Some(place) => Ok(Value::Lvalue(place)),
        None => Err(RuntimeError::new(
            "null pointer dereference",
            expression.location,
        )),
    }
}

fn run_field_access_expr(expression: &FieldAccessExpr, state: &mut State) -> RunResult<Value> {
    let receiver = run_expression(&expression.receiver, state)?;
    let result = match receiver {
        Value::Lvalue(place) => Value::Lvalue(place.child(expression.field_index)),
        Value::Rvalue(value) => Value::Rvalue(value.into_child(expression.field_index)),
    };
    Ok(result)
}

fn run_index_expr(expression: &IndexExpr, state: &mut State) -> RunResult<Value> {
    let collection = run_expression(&expression.collection, state)?;
    let index = run_expression(&expression.index, state)?
        .into_rvalue()
        .as_int();

    let length = match expression.collection.type_().type_ {
        Type::Array(_, length) => length,
        ref other => panic_wrong_type("array", &other.to_string()),
    };
    if index < 0 || index as usize >= length {
        let message = format!(
            "index out of bounds: array has {} elements, index is {}",
            length, index
        );
        return Err(RuntimeError::new(message, expression.location));
    }

    let index = index as usize;
    let result = match collection {
        Value::Lvalue(place) => Value::Lvalue(place.child(index)),
        Value::Rvalue(value) => Value::Rvalue(value.into_child(index)),
    };
    Ok(result)
}

fn run_address_expr(expression: &AddressExpr, state: &mut State) -> RunResult<Value> {
    let place = run_expression(&expression.target, state)?.into_lvalue();
    Ok(Value::Rvalue(Rvalue::Pointer(Some(place))))
}

fn run_call_expr(expression: &CallExpr, state: &mut State) -> RunResult<Value> {
    let mut arguments = Vec::with_capacity(expression.arguments.len());
    for argument in &expression.arguments {
        arguments.push(run_expression(argument, state)?.into_rvalue());
    }

    let program = state.program;
    let function = match program.function(expression.function.id) {
        Some(function) => function,
        None => panic!("Function `{}` has no body.", expression.function.name),
    };
    debug!(function = %function.decl.name, "call");

    for (parameter, value) in function.parameters.iter().zip(arguments.iter()) {
        state.push(parameter.id, value.clone());
    }

    let result = run_expression(&function.body, state);

    for parameter in &function.parameters {
        state.pop(parameter.id);
    }

    result.map_err(|error| error.annotate_stack_frame(expression, &arguments))
}

/// The target is evaluated before the value. In the reference-assignment dialect the result
/// denotes the target itself.
fn run_assign_expr(expression: &AssignExpr, state: &mut State) -> RunResult<Value> {
    let target = match run_expression(&expression.target, state)? {
        Value::Lvalue(place) => place,
        // Struct temporaries are assignable in the reference dialect; they get a fresh cell.
        Value::Rvalue(value) => {
            let cell = state.store.allocate(value);
            trace!(cell = ?cell, "materialized assignment target");
            Place::root(cell)
        }
    };
    let value = run_expression(&expression.value, state)?.into_rvalue();
    state.store.write(&target, value.clone());

    let result = match expression.dialect {
        Dialect::C => Value::Rvalue(value),
        Dialect::Cpp => Value::Lvalue(target),
    };
    Ok(result)
}

fn run_unary_op_expr(expression: &UnaryOpExpr, state: &mut State) -> RunResult<Value> {
    let operand = run_expression(&expression.operand, state)?.into_rvalue();
    let result = match expression.operator {
        UnaryOperator::Negate => match operand.as_int().checked_neg() {
            Some(result) => Rvalue::Int(result),
            None => return Err(overflow(expression.location)),
        },
        UnaryOperator::LogicalNot => Rvalue::Bool(!operand.as_bool()),
    };
    Ok(Value::Rvalue(result))
}

fn run_binary_op_expr(expression: &BinaryOpExpr, state: &mut State) -> RunResult<Value> {
    use BinaryOperator::*;

    let lhs = run_expression(&expression.lhs, state)?.into_rvalue();

    // Logical operators only evaluate their right operand when it decides the result.
    match (expression.operator, &lhs) {
        (LogicalAnd, Rvalue::Bool(false)) => return Ok(Value::Rvalue(Rvalue::Bool(false))),
        (LogicalOr, Rvalue::Bool(true)) => return Ok(Value::Rvalue(Rvalue::Bool(true))),
        _ => (),
    }

    let rhs = run_expression(&expression.rhs, state)?.into_rvalue();
    let arithmetic = |result: Option<i64>| match result {
        Some(result) => Ok(Rvalue::Int(result)),
        None => Err(overflow(expression.location)),
    };

    let result = match expression.operator {
        Add => arithmetic(lhs.as_int().checked_add(rhs.as_int()))?,
        Sub => arithmetic(lhs.as_int().checked_sub(rhs.as_int()))?,
        Mul => arithmetic(lhs.as_int().checked_mul(rhs.as_int()))?,
        Less => Rvalue::Bool(lhs.as_int() < rhs.as_int()),
        Greater => Rvalue::Bool(lhs.as_int() > rhs.as_int()),
        LessEq => Rvalue::Bool(lhs.as_int() <= rhs.as_int()),
        GreaterEq => Rvalue::Bool(lhs.as_int() >= rhs.as_int()),
        Eq => Rvalue::Bool(lhs == rhs),
        NotEq => Rvalue::Bool(lhs != rhs),
        LogicalAnd | LogicalOr => Rvalue::Bool(rhs.as_bool()),
    };
    Ok(Value::Rvalue(result))
}

fn run_compound_literal_expr(
    expression: &CompoundLiteralExpr,
    state: &mut State,
) -> RunResult<Value> {
    let mut fields: Vec<_> = expression
        .type_
        .fields
        .iter()
        .map(|field| Rvalue::zero(&field.type_))
        .collect();

    for (index, value) in &expression.fields {
        fields[*index] = run_expression(value, state)?.into_rvalue();
    }

    Ok(materialize(
        Rvalue::Struct(fields),
        expression.dialect,
        state,
    ))
}

fn run_array_literal_expr(expression: &ArrayLiteralExpr, state: &mut State) -> RunResult<Value> {
    let mut elements = Vec::with_capacity(expression.elements.len());
    for element in &expression.elements {
        elements.push(run_expression(element, state)?.into_rvalue());
    }

    Ok(materialize(
        Rvalue::Array(elements),
        expression.dialect,
        state,
    ))
}

/// Literals with storage get a fresh unnamed cell. Nothing else refers to that cell, so writes
/// to it are not observable through any variable.
fn materialize(value: Rvalue, dialect: Dialect, state: &mut State) -> Value {
    match dialect {
        Dialect::C => {
            let cell = state.store.allocate(value);
            trace!(cell = ?cell, "materialized literal");
            Value::Lvalue(Place::root(cell))
        }
        Dialect::Cpp => Value::Rvalue(value),
    }
}

fn overflow(location: lrvalues::source::SourceOrigin) -> RuntimeError {
    RuntimeError::new("integer overflow", location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrvalues::options::ClassifierOptions;

    fn compile(source: &str, dialect: Dialect) -> Program {
        match lrvalues::compile(source, ClassifierOptions::with_dialect(dialect)) {
            Ok(program) => program,
            Err(errors) => panic!("compilation failed: {:?}", errors),
        }
    }

    fn run_ok(source: &str, dialect: Dialect) -> Vec<(String, Rvalue)> {
        let program = compile(source, dialect);
        match run(&program) {
            Ok(state) => state.globals(),
            Err(error) => panic!("runtime error: {}", error),
        }
    }

    fn global(globals: &[(String, Rvalue)], name: &str) -> Rvalue {
        match globals.iter().find(|(global, _)| global == name) {
            Some((_, value)) => value.clone(),
            None => panic!("no global `{}`", name),
        }
    }

    #[test]
    fn assignment_reads_before_writing() {
        let globals = run_ok("var x: int = 1; var y: int = 2; x = x + y;", Dialect::C);
        assert_eq!(global(&globals, "x"), Rvalue::Int(3));
        assert_eq!(global(&globals, "y"), Rvalue::Int(2));
    }

    #[test]
    fn element_assignment_is_isolated() {
        let globals = run_ok(
            "var arr: [int; 2] = [1, 1]; arr[0] = arr[0] + 2;",
            Dialect::C,
        );
        assert_eq!(
            global(&globals, "arr"),
            Rvalue::Array(vec![Rvalue::Int(3), Rvalue::Int(1)])
        );
    }

    #[test]
    fn field_assignment_is_isolated() {
        let source = "
            struct S { i: int, b: bool }
            var s: S = S { i: 1, b: true };
            s.i = s.i + 2;
        ";
        for dialect in &Dialect::all() {
            let globals = run_ok(source, *dialect);
            assert_eq!(
                global(&globals, "s"),
                Rvalue::Struct(vec![Rvalue::Int(3), Rvalue::Bool(true)])
            );
        }
    }

    #[test]
    fn functions_assign_through_pointers() {
        let source = "
            struct S { i: int, b: bool }
            var x: int = 1;
            var arr: [int; 2] = [1, 1];
            var s: S = S { i: 1, b: true };
            fun do_assign(p: *int, v: int) -> int = *p = v;
            do_assign(&x, x + 2);
            do_assign(&arr[0], arr[0] + 2);
            do_assign(&s.i, s.i + 2);
        ";
        let globals = run_ok(source, Dialect::C);
        assert_eq!(global(&globals, "x"), Rvalue::Int(3));
        assert_eq!(
            global(&globals, "arr"),
            Rvalue::Array(vec![Rvalue::Int(3), Rvalue::Int(1)])
        );
        assert_eq!(
            global(&globals, "s"),
            Rvalue::Struct(vec![Rvalue::Int(3), Rvalue::Bool(true)])
        );
    }

    #[test]
    fn assignment_to_assignment_writes_last_value() {
        let globals = run_ok("var x: int; (x = 2) = 1;", Dialect::Cpp);
        assert_eq!(global(&globals, "x"), Rvalue::Int(1));
    }

    #[test]
    fn reference_calls_alias_storage() {
        let source = "
            struct S { i: int, b: bool }
            var s: S;
            fun pick(p: *S) -> &int = p.i;
            pick(&s) = 5;
        ";
        let globals = run_ok(source, Dialect::C);
        assert_eq!(
            global(&globals, "s"),
            Rvalue::Struct(vec![Rvalue::Int(5), Rvalue::Bool(false)])
        );
    }

    #[test]
    fn compound_literal_writes_have_no_effect() {
        let source = "
            struct S { i: int, b: bool }
            var x: int = 1;
            var s: S = S { i: 2, b: true };
        ";
        let before = run_ok(source, Dialect::C);

        let source = format!("{} S {{ i: x, b: false }}.i = 7; [x, x][0] = 9;", source);
        let after = run_ok(&source, Dialect::C);

        assert_eq!(before, after);
    }

    #[test]
    fn whole_literal_assignment_has_no_effect() {
        let source = "
            struct P { i: int }
            var p: P = P { i: 1 };
        ";
        for dialect in &Dialect::all() {
            let before = run_ok(source, *dialect);
            let after = run_ok(&format!("{} P {{ i: 3 }} = P {{ i: 2 }};", source), *dialect);
            assert_eq!(before, after);
        }
    }

    #[test]
    fn returned_struct_assignment_has_no_effect() {
        let source = "
            struct P { i: int }
            var p: P = P { i: 1 };
            fun f() -> P = p;
            f() = P { i: 2 };
            assert (f() = P { i: 4 }).i == 4;
        ";
        let globals = run_ok(source, Dialect::Cpp);
        assert_eq!(global(&globals, "p"), Rvalue::Struct(vec![Rvalue::Int(1)]));
    }

    #[test]
    fn uninitialized_variables_are_zero() {
        let globals = run_ok("var p: *int; var b: bool; assert p == p;", Dialect::C);
        assert_eq!(global(&globals, "p"), Rvalue::Pointer(None));
        assert_eq!(global(&globals, "b"), Rvalue::Bool(false));
    }

    #[test]
    fn pointers_compare_by_place() {
        let source = "
            var arr: [int; 2];
            var p: *int = &arr[1];
            assert p == &arr[1];
            assert p != &arr[0];
        ";
        run_ok(source, Dialect::C);
    }

    #[test]
    fn logical_operators_short_circuit() {
        let source = "
            var p: *int;
            assert !(p != p && *p == 0);
            assert p == p || *p == 0;
        ";
        run_ok(source, Dialect::C);
    }

    fn runtime_error(source: &str) -> String {
        let program = compile(source, Dialect::C);
        match run(&program) {
            Ok(_) => panic!("program ran successfully"),
            Err(error) => error.message().to_string(),
        }
    }

    #[test]
    fn reports_runtime_errors() {
        assert_eq!(runtime_error("var p: *int; *p = 1;"), "null pointer dereference");
        assert_eq!(runtime_error("assert 1 == 2;"), "assertion failed");
        assert_eq!(
            runtime_error("var x: int = 9223372036854775807; x = x + 1;"),
            "integer overflow"
        );
        assert_eq!(
            runtime_error("var arr: [int; 2]; arr[2] = 1;"),
            "index out of bounds: array has 2 elements, index is 2"
        );
        assert_eq!(
            runtime_error("var arr: [int; 2]; arr[0 - 1] = 1;"),
            "index out of bounds: array has 2 elements, index is -1"
        );
    }

    #[test]
    fn errors_inside_calls_keep_stack() {
        let program = compile("fun f(p: *int) -> int = *p; var p: *int; f(p);", Dialect::C);
        let error = match run(&program) {
            Ok(_) => panic!("program ran successfully"),
            Err(error) => error,
        };
        assert_eq!(error.message(), "null pointer dereference");
        assert!(format!("{:?}", error).contains("call_stack"));
    }
}
