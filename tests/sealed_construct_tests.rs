//! Integration tests for sealed construction.

use kindred::sealed::{construct, Family, Value, Variant};
use kindred::typeclass::Show;
use kindred::{AdtError, Arity, SealReason};
use rstest::rstest;

#[rstest]
#[case("List")]
#[case("Option")]
#[case("Validation")]
fn abstract_families_cannot_be_constructed(#[case] tag: &str) {
    for arguments in [vec![], vec![Value::Int(1)], vec![Value::Int(1), Value::nil()]] {
        assert_eq!(
            construct(tag, arguments),
            Err(AdtError::SealViolation {
                requested: tag.to_string(),
                reason: SealReason::AbstractFamily,
            })
        );
    }
}

#[rstest]
#[case("Tree")]
#[case("Left")]
#[case("nil")]
fn undeclared_variants_cannot_be_constructed(#[case] tag: &str) {
    assert!(matches!(
        construct(tag, vec![]),
        Err(AdtError::SealViolation {
            reason: SealReason::UndeclaredVariant,
            ..
        })
    ));
}

#[rstest]
#[case(Value::Int(2))]
#[case(Value::from("not a list"))]
#[case(Value::some(Value::nil()))]
#[case(Value::pair(1, 2))]
fn cons_tail_must_be_a_list(#[case] tail: Value) {
    let found = tail.type_name();
    let error = construct("Cons", vec![Value::Int(1), tail]).unwrap_err();
    assert_eq!(
        error.to_string(),
        format!("type mismatch in 2nd argument of Cons: expected List, found {found}")
    );
}

#[rstest]
fn nested_construction_builds_a_list() {
    let nil = construct("Nil", vec![]).unwrap();
    let three = construct("Cons", vec![Value::Int(3), nil]).unwrap();
    let two = construct("Cons", vec![Value::Int(2), three]).unwrap();
    let list = construct("Cons", vec![Value::Int(1), two]).unwrap();
    assert_eq!(list.show(), "List(1, 2, 3)");
    assert_eq!(list.variant(), Some(Variant::Cons));
}

#[rstest]
fn arity_errors_state_expected_and_found() {
    let error = construct("Pair", vec![Value::Int(1)]).unwrap_err();
    assert_eq!(
        error,
        AdtError::Arity {
            variant: "Pair".to_string(),
            expected: Arity::Exactly(2),
            found: 1,
        }
    );
    assert_eq!(
        error.to_string(),
        "wrong number of arguments for constructor Pair: expected 2, found 1"
    );
}

#[rstest]
fn non_empty_list_needs_at_least_one_argument() {
    let error = construct("NonEmptyList", vec![]).unwrap_err();
    assert_eq!(
        error.to_string(),
        "wrong number of arguments for constructor NonEmptyList: expected at least 1, found 0"
    );
}

#[rstest]
fn every_declared_variant_can_be_built_at_its_minimum_arity() {
    for variant in Variant::ALL {
        let count = match variant.arity() {
            Arity::Exactly(count) | Arity::AtLeast(count) => count,
        };
        let arguments = vec![Value::nil(); count];
        let value = construct(variant.name(), arguments).unwrap();
        let family = match value.type_name() {
            "List" => Family::List,
            "Option" => Family::Option,
            "Validation" => Family::Validation,
            "Pair" => Family::Pair,
            other => panic!("unexpected type {other}"),
        };
        assert_eq!(family, variant.family());
    }
}
