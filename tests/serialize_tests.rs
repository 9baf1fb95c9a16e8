//! Encoding policy tests: identity stripping, null omission, primitives.

use docbase::serialize::{decode, encode, Action};
use docbase::Error;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize, Deserialize)]
struct PascalCased {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "Name")]
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct SigilPrefixed {
    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

fn has_identity_key(value: &serde_json::Value) -> bool {
    value.as_object().unwrap().keys().any(|k| {
        k.strip_prefix('$')
            .unwrap_or(k)
            .eq_ignore_ascii_case("id")
    })
}

#[test]
fn test_create_strips_pascal_case_id() {
    let value = PascalCased {
        id: Some("abc".to_string()),
        name: "Acme".to_string(),
    };
    let encoded = encode(&value, Action::Create).unwrap();
    assert!(!has_identity_key(&encoded));
    assert_eq!(encoded["Name"], json!("Acme"));
}

#[test]
fn test_create_strips_sigil_id() {
    let value = SigilPrefixed {
        id: Some("abc".to_string()),
        name: "Acme".to_string(),
        phone: None,
    };
    let encoded = encode(&value, Action::Create).unwrap();
    assert!(!has_identity_key(&encoded));
}

#[test]
fn test_update_keeps_id() {
    let value = PascalCased {
        id: Some("abc".to_string()),
        name: "Acme".to_string(),
    };
    let encoded = encode(&value, Action::Update).unwrap();
    assert_eq!(encoded["Id"], json!("abc"));
}

#[test]
fn test_delete_and_get_keep_id() {
    let value = SigilPrefixed {
        id: Some("abc".to_string()),
        name: "Acme".to_string(),
        phone: None,
    };
    assert_eq!(encode(&value, Action::Delete).unwrap()["$id"], json!("abc"));
    assert_eq!(encode(&value, Action::Get).unwrap()["$id"], json!("abc"));
}

#[test]
fn test_exclusion_is_per_field_not_per_type() {
    // A type mixing an identity field with ordinary fields keeps the rest.
    let value = SigilPrefixed {
        id: Some("abc".to_string()),
        name: "Acme".to_string(),
        phone: Some("555".to_string()),
    };
    let encoded = encode(&value, Action::Create).unwrap();
    let obj = encoded.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj["name"], json!("Acme"));
    assert_eq!(obj["phone"], json!("555"));
}

#[test]
fn test_unset_fields_are_omitted_not_null() {
    let value = SigilPrefixed {
        id: None,
        name: "Acme".to_string(),
        phone: None,
    };
    let encoded = encode(&value, Action::Update).unwrap();
    let obj = encoded.as_object().unwrap();
    assert!(!obj.contains_key("phone"));
    assert!(!obj.values().any(|v| v.is_null()));
}

#[test]
fn test_primitives_are_not_decomposed() {
    assert_eq!(encode(&"hello", Action::Create).unwrap(), json!("hello"));
    assert_eq!(encode(&7u32, Action::Create).unwrap(), json!(7));
    assert_eq!(encode(&-3i64, Action::Update).unwrap(), json!(-3));
    assert_eq!(encode(&1.25f64, Action::Create).unwrap(), json!(1.25));
}

#[test]
fn test_containers_pass_through() {
    let value = vec![1, 2, 3];
    assert_eq!(encode(&value, Action::Create).unwrap(), json!([1, 2, 3]));
}

#[test]
fn test_decode_roundtrip() {
    let decoded: SigilPrefixed = decode(r#"{"$id":"d1","name":"Acme"}"#).unwrap();
    assert_eq!(decoded.id.as_deref(), Some("d1"));
    assert_eq!(decoded.name, "Acme");
}

#[test]
fn test_decode_failure_carries_payload() {
    let err = decode::<SigilPrefixed>(r#"{"name":42}"#).unwrap_err();
    match err {
        Error::Decode { payload, .. } => assert_eq!(payload, r#"{"name":42}"#),
        e => panic!("Expected Decode error, got: {:?}", e),
    }
}
