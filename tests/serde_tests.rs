#![cfg(feature = "serde")]

//! Integration tests for serde support.

use kindred::control::Validation;
use kindred::imm_list;
use kindred::persistent::{ImmList, ImmSet};
use kindred::sealed::Value;
use rstest::rstest;
use serde_json::json;

// =============================================================================
// Collections
// =============================================================================

#[rstest]
fn imm_list_is_a_json_array() {
    let list: ImmList<i32> = (1..=4).collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3,4]");
    let restored: ImmList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
}

#[rstest]
fn nested_imm_lists_round_trip() {
    let nested: ImmList<ImmList<i32>> = imm_list![imm_list![1, 2], ImmList::new(), imm_list![3]];
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, "[[1,2],[],[3]]");
    let restored: ImmList<ImmList<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, nested);
}

#[rstest]
fn imm_set_drops_duplicates_on_the_way_in() {
    let restored: ImmSet<i32> = serde_json::from_str("[3, 1, 3, 2]").unwrap();
    assert_eq!(restored.to_vec(), vec![3, 1, 2]);
    assert_eq!(serde_json::to_string(&restored).unwrap(), "[3,1,2]");
}

// =============================================================================
// Validation
// =============================================================================

#[rstest]
#[case(Validation::Success(4), json!({"Success": 4}))]
#[case(Validation::Failure("bad".to_string()), json!({"Failure": "bad"}))]
fn validation_is_externally_tagged(
    #[case] validation: Validation<String, i32>,
    #[case] expected: serde_json::Value,
) {
    assert_eq!(serde_json::to_value(&validation).unwrap(), expected);
    let restored: Validation<String, i32> = serde_json::from_value(expected).unwrap();
    assert_eq!(restored, validation);
}

// =============================================================================
// Value
// =============================================================================

#[rstest]
fn scalars_are_written_directly() {
    assert_eq!(serde_json::to_value(Value::Int(-3)).unwrap(), json!(-3));
    assert_eq!(serde_json::to_value(Value::from("a")).unwrap(), json!("a"));
    assert_eq!(serde_json::to_value(Value::Bool(true)).unwrap(), json!(true));
    assert_eq!(serde_json::to_value(Value::Unit).unwrap(), json!(null));
}

#[rstest]
fn compound_values_are_tagged_objects() {
    let value = Value::pair(Value::some(1), Value::nil());
    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!({
            "tag": "Pair",
            "args": [
                {"tag": "Some", "args": [1]},
                {"tag": "Nil", "args": []}
            ]
        })
    );
}

#[rstest]
fn non_empty_lists_are_written_with_their_elements() {
    assert_eq!(
        serde_json::to_value(Value::list([1, 2])).unwrap(),
        json!({"tag": "NonEmptyList", "args": [1, 2]})
    );
}

#[rstest]
#[case(Value::nil())]
#[case(Value::list([Value::from("x"), Value::Float(0.5)]))]
#[case(Value::none())]
#[case(Value::success(Value::list([1])))]
#[case(Value::failure(Value::pair("code", 7)))]
#[case(Value::some(Value::some(Value::Unit)))]
fn values_round_trip(#[case] value: Value) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn cons_objects_are_accepted_on_input() {
    let restored: Value = serde_json::from_value(json!({
        "tag": "Cons",
        "args": [1, {"tag": "Cons", "args": [2, {"tag": "Nil", "args": []}]}]
    }))
    .unwrap();
    assert_eq!(restored, Value::list([1, 2]));
}

#[rstest]
fn missing_args_mean_no_arguments() {
    let restored: Value = serde_json::from_value(json!({"tag": "None"})).unwrap();
    assert_eq!(restored, Value::none());
}

#[rstest]
#[case(json!({"tag": "Option", "args": [1]}), "Option cannot be constructed")]
#[case(json!({"tag": "Tree", "args": []}), "Tree cannot be constructed")]
#[case(json!({"tag": "Pair", "args": [1]}), "expected 2, found 1")]
#[case(json!({"tag": "Cons", "args": [1, 2]}), "expected List, found Int")]
#[case(json!({"args": []}), "missing field `tag`")]
fn construction_errors_surface_as_deserialize_errors(
    #[case] input: serde_json::Value,
    #[case] fragment: &str,
) {
    let error = serde_json::from_value::<Value>(input).unwrap_err();
    assert!(
        error.to_string().contains(fragment),
        "`{error}` does not mention `{fragment}`"
    );
}
