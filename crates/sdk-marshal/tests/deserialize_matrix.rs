//! JSON -> value decoding against type hints.

mod common;

use common::{marshaller, ApiBillingEntity, Pet, StorePet};
use proptest::prelude::*;
use sdk_marshal::{serialize, MarshalValue, ModelValue};
use serde_json::json;

// ---------------------------------------------------------------------------
// primitives and null
// ---------------------------------------------------------------------------

#[test]
fn null_wins_over_any_hint() {
    let m = marshaller();
    for hint in ["str", "Pet", "list[Pet]", "Union[Unset, Pet]", "Response[Pet]", "dict[str, Any]"] {
        let value = m.deserialize(&json!(null), hint, "petstore");
        assert!(value.is_null() && !value.is_unset(), "{hint}");
    }
}

#[test]
fn primitive_hints_return_data_unchanged() {
    let m = marshaller();
    assert_eq!(m.deserialize(&json!("x"), "str", "petstore"), MarshalValue::from("x"));
    assert_eq!(m.deserialize(&json!(5), "int", "petstore"), MarshalValue::from(5));
    assert_eq!(
        m.deserialize(&json!({"a": 1}), "Any", "petstore"),
        MarshalValue::Raw(json!({"a": 1}))
    );
}

#[test]
fn malformed_hint_is_primitive() {
    let m = marshaller();
    assert_eq!(
        m.deserialize(&json!({"name": "rex"}), "list[Pet", "petstore"),
        MarshalValue::Raw(json!({"name": "rex"}))
    );
}

#[test]
fn deeply_nested_hint_passes_data_through() {
    let m = marshaller();
    let hint = format!("{}Pet{}", "list[".repeat(3_000), "]".repeat(3_000));
    assert_eq!(
        m.deserialize(&json!([{"name": "rex"}]), &hint, "petstore"),
        MarshalValue::Raw(json!([{"name": "rex"}]))
    );
}

// ---------------------------------------------------------------------------
// unset
// ---------------------------------------------------------------------------

#[test]
fn unset_literal_decodes_to_unset() {
    let m = marshaller();
    for hint in ["Union[Unset, int]", "Union[Unset, Pet]", "Union[Unset, list['Pet']]", "str | Unset"] {
        let value = m.deserialize(&json!("UNSET"), hint, "petstore");
        assert!(value.is_unset() && !value.is_null(), "{hint}");
    }
}

#[test]
fn unset_literal_is_plain_string_without_unset_hint() {
    let m = marshaller();
    assert_eq!(m.deserialize(&json!("UNSET"), "str", "petstore"), MarshalValue::from("UNSET"));
}

#[test]
fn unset_capable_recurses_into_inner_hint() {
    let m = marshaller();
    let value = m.deserialize(&json!({"name": "rex"}), "Union[Unset, 'Pet']", "petstore");
    assert_eq!(value, ModelValue::new(Pet::new("rex", None)).into());

    let value = m.deserialize(&json!(7), "Union[Unset, None, int]", "petstore");
    assert_eq!(value, MarshalValue::from(7));
}

#[test]
fn unset_round_trips() {
    let m = marshaller();
    let wire = serialize(&MarshalValue::Unset).unwrap();
    assert_eq!(m.deserialize(&wire, "Union[Unset, str]", "petstore"), MarshalValue::Unset);
}

// ---------------------------------------------------------------------------
// lists and dicts
// ---------------------------------------------------------------------------

#[test]
fn list_elements_decode_independently() {
    let m = marshaller();
    let value = m.deserialize(
        &json!([{"name": "a"}, {"name": "b", "age": 2}]),
        "list['Pet']",
        "petstore",
    );
    assert_eq!(
        value,
        MarshalValue::List(vec![
            ModelValue::new(Pet::new("a", None)).into(),
            ModelValue::new(Pet::new("b", Some(2))).into(),
        ])
    );
}

#[test]
fn nested_lists() {
    let m = marshaller();
    let value = m.deserialize(&json!([[{"name": "a"}], []]), "list[list['Pet']]", "petstore");
    assert_eq!(
        value,
        MarshalValue::List(vec![
            MarshalValue::List(vec![ModelValue::new(Pet::new("a", None)).into()]),
            MarshalValue::List(vec![]),
        ])
    );
}

#[test]
fn list_hint_with_non_array_data_is_a_no_op() {
    let m = marshaller();
    assert_eq!(m.deserialize(&json!("x"), "list[Pet]", "petstore"), MarshalValue::from("x"));
    assert_eq!(
        m.deserialize(&json!({"name": "a"}), "list[Pet]", "petstore"),
        MarshalValue::Raw(json!({"name": "a"}))
    );
}

#[test]
fn dict_values_stay_untyped() {
    let m = marshaller();
    let data = json!({"first": {"name": "a"}});
    assert_eq!(
        m.deserialize(&data, "dict[str, 'Pet']", "petstore"),
        MarshalValue::Raw(data.clone())
    );
}

#[test]
fn mixed_list_round_trips_in_order() {
    let m = marshaller();
    let original = MarshalValue::List(vec![
        ModelValue::new(Pet::new("a", Some(1))).into(),
        MarshalValue::Null,
        ModelValue::new(Pet::new("b", None)).into(),
    ]);
    let wire = serialize(&original).unwrap();
    let back = m.deserialize(&wire, "list['Pet']", "petstore");
    assert_eq!(back, original);
}

// ---------------------------------------------------------------------------
// models
// ---------------------------------------------------------------------------

#[test]
fn model_round_trip_is_field_wise_equal() {
    let m = marshaller();
    let entity = ApiBillingEntity {
        account_id: "acct_1".into(),
        amount_cents: 1250,
    };
    let wire = serialize(&ModelValue::new(entity.clone()).into()).unwrap();
    let back = m.deserialize(&wire, "ApiBillingEntity", "petstore");
    let model = back.as_model().expect("typed model");
    assert_eq!(model.downcast_ref::<ApiBillingEntity>(), Some(&entity));
}

#[test]
fn model_resolution_is_namespace_scoped() {
    let m = marshaller();
    let pet = m.deserialize(&json!({"name": "rex"}), "Pet", "petstore");
    assert!(pet.as_model().unwrap().downcast_ref::<Pet>().is_some());

    let pet = m.deserialize(&json!({"sku": "p-1"}), "Pet", "store");
    assert_eq!(
        pet.as_model().unwrap().downcast_ref::<StorePet>(),
        Some(&StorePet { sku: "p-1".into() })
    );
}

#[test]
fn unresolvable_model_falls_back_to_raw() {
    let m = marshaller();
    let data = json!({"code": 1});
    assert_eq!(m.deserialize(&data, "Invoice", "petstore"), MarshalValue::Raw(data.clone()));
    assert_eq!(m.deserialize(&data, "Pet", "inventory"), MarshalValue::Raw(data.clone()));
}

#[test]
fn rejected_dict_falls_back_to_raw() {
    let m = marshaller();
    let data = json!({"name": 12});
    let value = m.deserialize(&data, "Pet", "petstore");
    assert_eq!(value, MarshalValue::Raw(data));
    assert!(value.contains_raw());
}

#[test]
fn model_hint_with_scalar_data_is_unchanged() {
    let m = marshaller();
    assert_eq!(m.deserialize(&json!("rex"), "Pet", "petstore"), MarshalValue::from("rex"));
}

#[test]
fn resolution_is_cached_across_calls() {
    let m = marshaller();
    m.deserialize(&json!({"name": "a"}), "Pet", "petstore");
    m.deserialize(&json!([{"name": "b"}, {"name": "c"}]), "list[Pet]", "petstore");
    assert_eq!(m.registry().module_loads(), 1);
}

#[test]
fn from_json_str_decodes_text() {
    let m = marshaller();
    let value = m
        .from_json_str(r#"{"name":"rex","age":4}"#, "Pet", "petstore")
        .unwrap();
    assert_eq!(value, ModelValue::new(Pet::new("rex", Some(4))).into());
    assert!(m.from_json_str("{", "Pet", "petstore").is_err());
}

// ---------------------------------------------------------------------------
// properties
// ---------------------------------------------------------------------------

fn primitive() -> impl Strategy<Value = MarshalValue> {
    prop_oneof![
        Just(MarshalValue::Null),
        any::<bool>().prop_map(MarshalValue::from),
        any::<i64>().prop_map(MarshalValue::from),
        any::<u64>().prop_map(MarshalValue::from),
        (-1.0e12..1.0e12f64).prop_map(MarshalValue::from),
        "[a-zA-Z0-9 ]{0,16}"
            .prop_filter("sentinel literal", |s| s != "UNSET")
            .prop_map(MarshalValue::from),
    ]
}

fn hints() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("str"),
        Just("int"),
        Just("Pet"),
        Just("list['Pet']"),
        Just("dict[str, Any]"),
        Just("Union[Unset, Pet]"),
        Just("Response[Pet]"),
        Just("not a [hint"),
    ]
}

proptest! {
    #[test]
    fn primitives_round_trip_under_any_hint(value in primitive(), hint in hints()) {
        let m = marshaller();
        let wire = serialize(&value).unwrap();
        prop_assert_eq!(m.deserialize(&wire, hint, "petstore"), value);
    }
}
