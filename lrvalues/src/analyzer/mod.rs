//! The classifier derives the value category of every node of an expression tree and checks
//! the rules that depend on value categories: what can be assigned to, and what can be
//! addressed.
//!
//! Classification is bottom-up and structural. Wherever an lvalue is used in a context that
//! requires an rvalue, the classifier inserts an explicit `LoadExpr`, so that the classified
//! tree spells out every read of storage.

mod expressions;
mod program;
mod type_exprs;

pub use self::program::compile_program;

use crate::ast;
use crate::environment::Environment;
use crate::errors::{self, ClassificationError};
use crate::options::{ClassifierOptions, Dialect};
use crate::program::{Expression, ValueCategory};

/// Classifies expressions against a fixed environment.
pub struct Classifier<'a> {
    env: &'a Environment,
    options: ClassifierOptions,
}

impl<'a> Classifier<'a> {
    pub fn new(env: &'a Environment, options: ClassifierOptions) -> Classifier<'a> {
        Classifier { env, options }
    }

    pub fn env(&self) -> &'a Environment {
        self.env
    }

    pub fn dialect(&self) -> Dialect {
        self.options.dialect
    }

    /// Builds the classified tree for `expression`, where every node carries its type and
    /// value category.
    pub fn analyze(&self, expression: &ast::Expression) -> Result<Expression, ClassificationError> {
        expressions::compile_expression(expression, self)
    }

    /// Returns the value category of the root of `expression`.
    pub fn classify(
        &self,
        expression: &ast::Expression,
    ) -> Result<ValueCategory, ClassificationError> {
        let expression = self.analyze(expression)?;
        Ok(expression.value_category())
    }

    /// Checks that `expression` could appear on the left side of an assignment.
    pub fn check_assignable(
        &self,
        expression: &ast::Expression,
    ) -> Result<(), ClassificationError> {
        let expression = self.analyze(expression)?;
        check_assignable(&expression, self.dialect())
    }
}

/// Assignment targets must be lvalues, must not be const-qualified and must have an object
/// type. The checks run in this order, so the first violated rule is the one reported.
///
/// Storage is const-qualified as a whole if any of its fields is const. In the reference
/// dialect, struct temporaries are also assignable: the write goes to the temporary.
pub fn check_assignable(
    target: &Expression,
    dialect: Dialect,
) -> Result<(), ClassificationError> {
    if !target.is_lvalue() && !is_assignable_temporary(target, dialect) {
        return Err(errors::assignment_target_not_lvalue(
            target.location(),
        ));
    }

    let target_type = target.type_();
    if target_type.is_const || target_type.type_.contains_const() {
        return Err(errors::assignment_target_const(
            target_type,
            target.location(),
        ));
    }

    if !target_type.type_.is_object() {
        return Err(errors::assignment_target_function(
            &target_type.type_,
            target.location(),
        ));
    }

    Ok(())
}

fn is_assignable_temporary(target: &Expression, dialect: Dialect) -> bool {
    dialect == Dialect::Cpp && target.type_().type_.as_struct().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, Expression as E};
    use crate::errors::ErrorKind;
    use crate::program::{ExpressionKind, Field, QualifiedType, ReturnContract, Type};

    /// Declarations shared by most tests:
    ///
    /// ```text
    /// struct S { i: int, b: bool, const k: int }
    /// var x: int; var y: int; const c: int;
    /// var arr: [int; 2]; var s: S; const cs: S;
    /// var p: *int; var ps: *S; var pc: *const int;
    /// fun value() -> S; fun reference() -> &int; fun const_reference() -> &const int;
    /// fun assign(r: *int, v: int) -> int;
    /// ```
    fn environment() -> Environment {
        let mut env = Environment::new();
        let s = env
            .declare_struct(
                "S",
                vec![
                    Field::new("i", Type::Int, false),
                    Field::new("b", Type::Bool, false),
                    Field::new("k", Type::Int, true),
                ],
            )
            .unwrap();
        let s = Type::Struct(s);

        env.declare_variable("x", Type::Int, false).unwrap();
        env.declare_variable("y", Type::Int, false).unwrap();
        env.declare_variable("c", Type::Int, true).unwrap();
        env.declare_variable("arr", Type::array_of(Type::Int, 2), false)
            .unwrap();
        env.declare_variable("s", s.clone(), false).unwrap();
        env.declare_variable("cs", s.clone(), true).unwrap();
        env.declare_variable("p", Type::pointer_to(QualifiedType::mutable(Type::Int)), false)
            .unwrap();
        env.declare_variable("ps", Type::pointer_to(QualifiedType::mutable(s.clone())), false)
            .unwrap();
        env.declare_variable("pc", Type::pointer_to(QualifiedType::constant(Type::Int)), false)
            .unwrap();

        env.declare_function("value", vec![], ReturnContract::Value(s))
            .unwrap();
        env.declare_function(
            "reference",
            vec![],
            ReturnContract::Reference(QualifiedType::mutable(Type::Int)),
        )
        .unwrap();
        env.declare_function(
            "const_reference",
            vec![],
            ReturnContract::Reference(QualifiedType::constant(Type::Int)),
        )
        .unwrap();
        env.declare_function(
            "assign",
            vec![Type::pointer_to(QualifiedType::mutable(Type::Int)), Type::Int],
            ReturnContract::Value(Type::Int),
        )
        .unwrap();
        env
    }

    fn classify_in(dialect: Dialect, expression: E) -> Result<ValueCategory, ClassificationError> {
        let env = environment();
        Classifier::new(&env, ClassifierOptions::with_dialect(dialect)).classify(&expression)
    }

    fn classify(expression: E) -> Result<ValueCategory, ClassificationError> {
        classify_in(Dialect::C, expression)
    }

    fn assignable_in(dialect: Dialect, expression: E) -> Result<(), ClassificationError> {
        let env = environment();
        let classifier = Classifier::new(&env, ClassifierOptions::with_dialect(dialect));
        classifier.check_assignable(&expression)
    }

    fn assignable(expression: E) -> Result<(), ClassificationError> {
        assignable_in(Dialect::C, expression)
    }

    fn error_kind<T: std::fmt::Debug>(result: Result<T, ClassificationError>) -> ErrorKind {
        result.unwrap_err().kind
    }

    #[test]
    fn variables_are_lvalues() {
        for name in &["x", "c", "arr", "s", "cs", "p"] {
            assert_eq!(classify(E::variable(*name)).unwrap(), ValueCategory::Lvalue);
        }
    }

    #[test]
    fn literals_are_rvalues() {
        for value in &[0, 1, -7, i64::max_value()] {
            assert_eq!(classify(E::int_literal(*value)).unwrap(), ValueCategory::Rvalue);
        }
        assert_eq!(classify(E::bool_literal(true)).unwrap(), ValueCategory::Rvalue);
    }

    #[test]
    fn dereference_is_lvalue_regardless_of_operand() {
        let lvalue_pointer = E::variable("p");
        let rvalue_pointer = E::address_of(E::variable("x"));
        let deref_pointer = E::deref(E::address_of(E::variable("p")));

        for pointer in vec![lvalue_pointer, rvalue_pointer, deref_pointer] {
            assert_eq!(classify(E::deref(pointer)).unwrap(), ValueCategory::Lvalue);
        }
    }

    #[test]
    fn dereference_requires_pointer() {
        let result = classify(E::deref(E::variable("x")));
        assert_eq!(error_kind(result), ErrorKind::NotAPointer);
    }

    #[test]
    fn address_of_is_rvalue() {
        let result = classify(E::address_of(E::variable("x")));
        assert_eq!(result.unwrap(), ValueCategory::Rvalue);
    }

    #[test]
    fn address_of_rvalue_is_rejected() {
        let result = classify(E::address_of(E::int_literal(1)));
        assert_eq!(error_kind(result), ErrorKind::InvalidOperand);

        let result = classify(E::address_of(E::call(E::variable("value"), vec![])));
        assert_eq!(error_kind(result), ErrorKind::InvalidOperand);
    }

    #[test]
    fn address_of_function_is_rejected() {
        let result = classify(E::address_of(E::variable("value")));
        assert_eq!(error_kind(result), ErrorKind::FunctionType);
    }

    #[test]
    fn fields_take_category_of_receiver() {
        let result = classify(E::field(E::variable("s"), "i"));
        assert_eq!(result.unwrap(), ValueCategory::Lvalue);

        let result = classify(E::field(E::call(E::variable("value"), vec![]), "i"));
        assert_eq!(result.unwrap(), ValueCategory::Rvalue);
    }

    #[test]
    fn pointer_receivers_are_dereferenced() {
        let env = environment();
        let classifier = Classifier::new(&env, ClassifierOptions::default());
        let expression = classifier.analyze(&E::field(E::variable("ps"), "b")).unwrap();

        assert!(expression.is_lvalue());
        match expression.kind() {
            ExpressionKind::FieldAccess(access) => match access.receiver.kind() {
                ExpressionKind::Deref(_) => (),
                _ => panic!("receiver was not dereferenced"),
            },
            _ => panic!("expected a field access"),
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = classify(E::field(E::variable("s"), "z"));
        assert_eq!(error_kind(result), ErrorKind::UnknownField);

        let result = classify(E::field(E::variable("x"), "i"));
        assert_eq!(error_kind(result), ErrorKind::NotAStruct);
    }

    #[test]
    fn elements_take_category_of_array() {
        let result = classify(E::index(E::variable("arr"), E::int_literal(0)));
        assert_eq!(result.unwrap(), ValueCategory::Lvalue);

        let result = classify(E::index(E::variable("x"), E::int_literal(0)));
        assert_eq!(error_kind(result), ErrorKind::NotAnArray);
    }

    #[test]
    fn calls_follow_return_contract() {
        let result = classify(E::call(E::variable("value"), vec![]));
        assert_eq!(result.unwrap(), ValueCategory::Rvalue);

        let result = classify(E::call(E::variable("reference"), vec![]));
        assert_eq!(result.unwrap(), ValueCategory::Lvalue);
    }

    #[test]
    fn calls_check_arguments() {
        let call = E::call(E::variable("assign"), vec![E::variable("p")]);
        assert_eq!(error_kind(classify(call)), ErrorKind::WrongArgumentCount);

        let call = E::call(E::variable("assign"), vec![E::variable("x"), E::int_literal(1)]);
        assert_eq!(error_kind(classify(call)), ErrorKind::TypeMismatch);

        let call = E::call(E::variable("x"), vec![]);
        assert_eq!(error_kind(classify(call)), ErrorKind::NotCallable);
    }

    #[test]
    fn assignment_category_depends_on_dialect() {
        let assignment = || E::assign(E::variable("x"), E::int_literal(2));

        let result = classify_in(Dialect::C, assignment());
        assert_eq!(result.unwrap(), ValueCategory::Rvalue);

        let result = classify_in(Dialect::Cpp, assignment());
        assert_eq!(result.unwrap(), ValueCategory::Lvalue);
    }

    #[test]
    fn assignment_to_assignment_depends_on_dialect() {
        let nested = || {
            E::assign(
                E::assign(E::variable("x"), E::int_literal(2)),
                E::int_literal(1),
            )
        };

        assert_eq!(error_kind(classify_in(Dialect::C, nested())), ErrorKind::NotAnLValue);
        assert!(classify_in(Dialect::Cpp, nested()).is_ok());
    }

    #[test]
    fn variables_are_assignable_unless_const() {
        assert!(assignable(E::variable("x")).is_ok());
        assert_eq!(error_kind(assignable(E::variable("c"))), ErrorKind::ConstTarget);
    }

    #[test]
    fn rvalues_are_not_assignable() {
        let sum = E::binary(BinaryOperator::Add, E::variable("x"), E::variable("y"));
        assert_eq!(error_kind(assignable(sum)), ErrorKind::NotAnLValue);
        assert_eq!(error_kind(assignable(E::int_literal(5))), ErrorKind::NotAnLValue);
    }

    #[test]
    fn functions_are_not_assignable() {
        let result = assignable(E::variable("value"));
        assert_eq!(error_kind(result), ErrorKind::FunctionType);
    }

    #[test]
    fn const_propagates_to_fields_and_pointees() {
        let const_targets = vec![
            E::field(E::variable("cs"), "i"),
            E::field(E::variable("s"), "k"),
            E::deref(E::variable("pc")),
        ];
        for target in const_targets {
            assert_eq!(error_kind(assignable(target)), ErrorKind::ConstTarget);
        }
        assert!(assignable(E::field(E::variable("s"), "i")).is_ok());
    }

    #[test]
    fn whole_structs_with_const_fields_are_not_assignable() {
        assert_eq!(error_kind(assignable(E::variable("s"))), ErrorKind::ConstTarget);

        let literal = E::compound_literal("S", vec![("i", E::int_literal(1))]);
        assert_eq!(error_kind(assignable(literal)), ErrorKind::ConstTarget);
    }

    #[test]
    fn struct_temporaries_pass_lvalue_check_in_cpp() {
        let call = || E::call(E::variable("value"), vec![]);

        let result = assignable_in(Dialect::C, call());
        assert_eq!(error_kind(result), ErrorKind::NotAnLValue);

        // `S` has a const field, so the check gets as far as constness.
        let result = assignable_in(Dialect::Cpp, call());
        assert_eq!(error_kind(result), ErrorKind::ConstTarget);

        let result = assignable_in(Dialect::Cpp, E::field(call(), "i"));
        assert_eq!(error_kind(result), ErrorKind::NotAnLValue);
    }

    #[test]
    fn lvalue_checks_come_before_const_checks() {
        let call = E::call(E::variable("value"), vec![]);
        let result = assignable(E::field(call, "k"));
        assert_eq!(error_kind(result), ErrorKind::NotAnLValue);
    }

    #[test]
    fn reference_calls_are_assignable() {
        assert!(assignable(E::call(E::variable("reference"), vec![])).is_ok());

        let result = assignable(E::call(E::variable("const_reference"), vec![]));
        assert_eq!(error_kind(result), ErrorKind::ConstTarget);
    }

    #[test]
    fn compound_literal_category_depends_on_dialect() {
        let literal = || E::compound_literal("S", vec![("i", E::int_literal(1))]);

        assert!(assignable_in(Dialect::C, E::field(literal(), "i")).is_ok());
        let result = assignable_in(Dialect::Cpp, E::field(literal(), "i"));
        assert_eq!(error_kind(result), ErrorKind::NotAnLValue);

        let array = || E::array_literal(vec![E::int_literal(1), E::int_literal(2)]);
        assert_eq!(classify_in(Dialect::C, array()).unwrap(), ValueCategory::Lvalue);
        assert_eq!(classify_in(Dialect::Cpp, array()).unwrap(), ValueCategory::Rvalue);
    }

    #[test]
    fn compound_literals_check_fields() {
        let fields = vec![("i", E::int_literal(1)), ("i", E::int_literal(2))];
        let literal = E::compound_literal("S", fields);
        assert_eq!(error_kind(classify(literal)), ErrorKind::AlreadyDefined);

        let literal = E::compound_literal("S", vec![("b", E::int_literal(1))]);
        assert_eq!(error_kind(classify(literal)), ErrorKind::TypeMismatch);

        let literal = E::compound_literal("x", Vec::<(&str, E)>::new());
        assert_eq!(error_kind(classify(literal)), ErrorKind::KindMismatch);
    }

    #[test]
    fn empty_array_literals_are_rejected() {
        let result = classify(E::array_literal(vec![]));
        assert_eq!(error_kind(result), ErrorKind::CannotInferType);
    }

    #[test]
    fn assigned_values_are_loaded() {
        let env = environment();
        let classifier = Classifier::new(&env, ClassifierOptions::default());
        let expression = classifier
            .analyze(&E::assign(E::variable("x"), E::variable("y")))
            .unwrap();

        match expression.kind() {
            ExpressionKind::Assign(assign) => {
                assert!(assign.target.is_lvalue());
                assert!(!assign.value.is_lvalue());
                match assign.value.kind() {
                    ExpressionKind::Load(load) => assert!(load.target.is_lvalue()),
                    _ => panic!("assigned value was not loaded"),
                }
            }
            _ => panic!("expected an assignment"),
        }
    }

    #[test]
    fn assignment_checks_types() {
        let result = classify(E::assign(E::variable("x"), E::bool_literal(true)));
        assert_eq!(error_kind(result), ErrorKind::TypeMismatch);

        let result = classify(E::assign(E::variable("p"), E::address_of(E::variable("c"))));
        assert_eq!(error_kind(result), ErrorKind::TypeMismatch);

        let result = classify(E::assign(E::variable("pc"), E::address_of(E::variable("x"))));
        assert!(result.is_ok());
    }

    #[test]
    fn functions_cannot_be_read() {
        let result = classify(E::assign(E::variable("x"), E::variable("value")));
        assert_eq!(error_kind(result), ErrorKind::FunctionType);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(error_kind(classify(E::variable("nope"))), ErrorKind::UnknownName);
        assert_eq!(error_kind(classify(E::variable("S"))), ErrorKind::KindMismatch);
    }
}
