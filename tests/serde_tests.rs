#![cfg(all(feature = "serde", feature = "dynamic"))]

//! Integration tests for serde support.
//!
//! These tests verify that dynamic values survive a JSON round trip and that
//! errors serialize into a stable shape.

use lambars_sets::dynamic::{self, Value};
use lambars_sets::{ConfigurationError, PreconditionKind, SetAlgebraError};
use rstest::rstest;

// =============================================================================
// Value Round Trips
// =============================================================================

#[rstest]
#[case(Value::Null)]
#[case(Value::Scalar(3))]
#[case(Value::sequence([1, 1, 2]))]
#[case(Value::set([1, 2, 3]))]
fn test_value_json_roundtrip(#[case] value: Value<i32>) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Value<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
}

#[rstest]
fn test_value_json_shape() {
    let null = serde_json::to_string(&Value::<i32>::Null).unwrap();
    let scalar = serde_json::to_string(&Value::Scalar(3)).unwrap();
    let sequence = serde_json::to_string(&Value::sequence([1, 1])).unwrap();

    assert_eq!(null, "\"null\"");
    assert_eq!(scalar, "{\"scalar\":3}");
    assert_eq!(sequence, "{\"sequence\":[1,1]}");
}

#[rstest]
fn test_deserialized_payload_goes_through_probing() {
    let receiver: Value<i32> = serde_json::from_str("{\"sequence\":[1,2]}").unwrap();
    let operand: Value<i32> = serde_json::from_str("{\"set\":[2,3]}").unwrap();

    let rejected = dynamic::union(&receiver, std::slice::from_ref(&operand));
    let combined = dynamic::union(&operand, &[receiver]);

    assert!(rejected.is_err());
    assert_eq!(combined, Ok(Value::set([1, 2, 3])));
}

#[rstest]
fn test_duplicate_set_entries_collapse_on_deserialize() {
    let value: Value<i32> = serde_json::from_str("{\"set\":[1,1,2]}").unwrap();
    assert_eq!(value, Value::set([1, 2]));
}

// =============================================================================
// Error Serialization
// =============================================================================

#[rstest]
fn test_configuration_error_json_roundtrip() {
    let error = ConfigurationError::new("BoundedSet", "capacity must be positive");
    let json = serde_json::to_string(&error).unwrap();
    let restored: ConfigurationError = serde_json::from_str(&json).unwrap();
    assert_eq!(error, restored);
}

#[rstest]
#[case(PreconditionKind::InvalidReceiver)]
#[case(PreconditionKind::InvalidArgument { position: 2 })]
#[case(PreconditionKind::MissingOperand { required: 1 })]
#[case(PreconditionKind::NotCallable { position: 0 })]
fn test_precondition_kind_json_roundtrip(#[case] kind: PreconditionKind) {
    let json = serde_json::to_string(&kind).unwrap();
    let restored: PreconditionKind = serde_json::from_str(&json).unwrap();
    assert_eq!(kind, restored);
}

#[rstest]
fn test_precondition_error_serializes_operation_and_kind() {
    let error = dynamic::intersect(&Value::set([1]), &[]).unwrap_err();
    let json = serde_json::to_value(&error).unwrap();

    assert!(matches!(error, SetAlgebraError::Precondition(_)));
    assert_eq!(json["Precondition"]["operation"], "intersect");
    let kind = &json["Precondition"]["kind"];
    assert_eq!(kind["MissingOperand"]["required"], 1);
}
