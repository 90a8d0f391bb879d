//! Integration tests for the structural matching engine.

use kindred::pattern::{match_on, Bindings, Pattern};
use kindred::sealed::{construct, Value, Variant};
use kindred::{AdtError, Result};
use rstest::rstest;

fn sum(list: &Value) -> Result<i64> {
    match_on([list.clone()])
        .case([Pattern::nil()], |_| Ok(0))
        .case(
            [Pattern::cons(Pattern::capture("head"), Pattern::capture("tail"))],
            |bindings: Bindings| {
                let head = bindings["head"].as_int().unwrap_or(0);
                Ok(head + sum(&bindings["tail"])?)
            },
        )
        .evaluate()?
}

#[rstest]
fn recursive_sum_through_cons_patterns() {
    assert_eq!(sum(&Value::list([1, 2, 3, 4])), Ok(10));
    assert_eq!(sum(&Value::nil()), Ok(0));
}

#[rstest]
fn joint_match_over_two_scrutinees() {
    let describe = |left: Value, right: Value| {
        match_on([left, right])
            .case([Pattern::some(Pattern::capture("a")), Pattern::none()], |b| {
                format!("left {}", b["a"])
            })
            .case([Pattern::none(), Pattern::some(Pattern::capture("b"))], |b| {
                format!("right {}", b["b"])
            })
            .case(
                [
                    Pattern::some(Pattern::capture("a")),
                    Pattern::some(Pattern::capture("b")),
                ],
                |b| format!("both {} {}", b["a"], b["b"]),
            )
            .evaluate()
    };

    assert_eq!(describe(Value::some(1), Value::none()), Ok("left 1".to_string()));
    assert_eq!(describe(Value::none(), Value::some(2)), Ok("right 2".to_string()));
    assert_eq!(
        describe(Value::some(1), Value::some(2)),
        Ok("both 1 2".to_string())
    );
    assert_eq!(
        describe(Value::none(), Value::none()),
        Err(AdtError::NonExhaustiveMatch {
            scrutinees: "(None, None)".to_string(),
        })
    );
}

#[rstest]
fn first_match_wins_over_more_specific_later_clauses() {
    let result = match_on([Value::list([1, 2])])
        .case([Pattern::Wildcard], |_| "wildcard")
        .case(
            [Pattern::cons(Pattern::literal(1), Pattern::Wildcard)],
            |_| "specific",
        )
        .evaluate();
    assert_eq!(result, Ok("wildcard"));
}

#[rstest]
fn nested_constructor_patterns_bind_deep_values() {
    let scrutinee = Value::success(Value::pair(Value::some("x"), Value::list([1, 2])));
    let pattern = Pattern::success(Pattern::pair(
        Pattern::some(Pattern::capture("name")),
        Pattern::cons(Pattern::Wildcard, Pattern::capture("rest")),
    ));
    let result = match_on([scrutinee])
        .case([pattern], |mut bindings| {
            (bindings.take("name"), bindings.take("rest"))
        })
        .evaluate();
    assert_eq!(
        result,
        Ok((Some(Value::from("x")), Some(Value::list([2]))))
    );
}

#[rstest]
fn patterns_from_tags_are_arity_checked() {
    assert!(matches!(
        Pattern::tagged("Pair", vec![Pattern::Wildcard]),
        Err(AdtError::Arity { .. })
    ));
    assert!(matches!(
        Pattern::tagged("Validation", vec![Pattern::Wildcard]),
        Err(AdtError::SealViolation { .. })
    ));
}

#[rstest]
fn constructed_values_match_their_own_variant() {
    for variant in [Variant::Some, Variant::Success, Variant::Failure] {
        let value = construct(variant.name(), vec![Value::Int(9)]).unwrap();
        let pattern = Pattern::constructor(variant, vec![Pattern::capture("inner")]).unwrap();
        let inner = match_on([value])
            .case([pattern], |bindings| bindings["inner"].clone())
            .evaluate();
        assert_eq!(inner, Ok(Value::Int(9)));
    }
}

#[rstest]
#[case(Value::Unit)]
#[case(Value::Float(0.5))]
#[case(Value::failure("e"))]
#[case(Value::list([1, 2, 3]))]
fn trailing_otherwise_never_fails(#[case] value: Value) {
    let result = match_on([value])
        .case([Pattern::none()], |_| 0)
        .case([Pattern::nil()], |_| 1)
        .otherwise(|| 2)
        .evaluate();
    assert_eq!(result, Ok(2));
}

#[rstest]
fn uncovered_shape_without_a_catch_all_fails() {
    let result = match_on([Value::pair(1, 2)])
        .case([Pattern::nil()], |_| ())
        .case([Pattern::some(Pattern::Wildcard)], |_| ())
        .evaluate();
    assert_eq!(
        result,
        Err(AdtError::NonExhaustiveMatch {
            scrutinees: "(Pair(1, 2))".to_string(),
        })
    );
}

#[rstest]
fn guards_see_the_bindings() {
    let classify = |value: Value| {
        match_on([value])
            .case_if(
                [Pattern::capture("n")],
                |b| b["n"].as_int().is_some_and(i64::is_negative),
                |_| "negative",
            )
            .case_if(
                [Pattern::capture("n")],
                |b| b["n"].as_int() == Some(0),
                |_| "zero",
            )
            .otherwise(|| "positive")
            .evaluate()
    };
    assert_eq!(classify(Value::Int(-4)), Ok("negative"));
    assert_eq!(classify(Value::Int(0)), Ok("zero"));
    assert_eq!(classify(Value::Int(8)), Ok("positive"));
}

#[rstest]
fn handlers_can_propagate_missing_captures() {
    let swap = |value: Value| -> Result<Value> {
        match_on::<Result<Value>, _>([value])
            .case(
                [Pattern::pair(Pattern::capture("a"), Pattern::capture("b"))],
                |bindings: Bindings| {
                    Ok(Value::pair(
                        bindings.require("b")?.clone(),
                        bindings.require("a")?.clone(),
                    ))
                },
            )
            .case([Pattern::some(Pattern::capture("a"))], |bindings: Bindings| {
                Ok(bindings.require("b")?.clone())
            })
            .evaluate()?
    };

    assert_eq!(swap(Value::pair(1, "x")), Ok(Value::pair("x", 1)));
    assert_eq!(
        swap(Value::some(1)),
        Err(AdtError::UnboundCapture {
            name: "b".to_string(),
        })
    );
}

#[rstest]
fn combining_validated_integers_reports_overflow() {
    let this = Value::success(i64::MAX);
    let that = Value::success(1);
    assert!(matches!(
        Value::combine_validations(&this, &that),
        Err(AdtError::Overflow { .. })
    ));
}
