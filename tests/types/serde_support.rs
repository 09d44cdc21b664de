use field_rail::{ErrorSet, Messages};
use serde_json::json;

#[test]
fn error_set_serializes_as_plain_map() {
    let errors: ErrorSet = [
        ("email", "Email address is invalid"),
        ("name", "Must be exactly 3 characters long"),
        ("email", "Must be between 3 and 254 characters long"),
    ]
    .into_iter()
    .collect();

    let value = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        value,
        json!({
            "email": [
                "Email address is invalid",
                "Must be between 3 and 254 characters long"
            ],
            "name": ["Must be exactly 3 characters long"]
        })
    );
}

#[test]
fn error_set_round_trips_through_json() {
    let errors: ErrorSet = [("f", "bad"), ("f", "worse")].into_iter().collect();
    let text = serde_json::to_string(&errors).unwrap();
    let back: ErrorSet = serde_json::from_str(&text).unwrap();
    assert_eq!(back, errors);
}

#[test]
fn deserializing_drops_fields_without_messages() {
    let errors: ErrorSet = serde_json::from_str(r#"{"clean": [], "dirty": ["bad"]}"#).unwrap();
    assert!(!errors.contains("clean"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn messages_serialize_as_array() {
    let messages: Messages = ["a", "b"].into_iter().collect();
    assert_eq!(serde_json::to_value(&messages).unwrap(), json!(["a", "b"]));
}
