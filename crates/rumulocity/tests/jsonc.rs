use rumulocity::{
    Error, JsonObject,
    error::ErrorClass,
    jsonc::{self, SchemaError},
};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

#[derive(JsonObject)]
#[jsonc(rename_all = "camelCase")]
struct NewOperation {
    device_id: String,

    #[jsonc(omit_empty)]
    description: String,

    #[jsonc(skip)]
    local_only: u64,

    #[jsonc(flat)]
    additional_fields: Map<String, Value>,
}

#[derive(JsonObject)]
struct Fragment {
    #[jsonc(rename = "serialNumber")]
    serial: String,
    model: String,
}

#[derive(JsonObject)]
struct ManagedObject {
    name: String,

    #[jsonc(rename = "type", omit_empty)]
    kind: Option<String>,

    #[jsonc(flat)]
    fragments: BTreeMap<String, Fragment>,
}

#[test]
fn new_operation_merges_additional_fields() {
    let mut additional_fields = Map::new();
    additional_fields.insert("c8y_Restart".into(), json!({}));
    additional_fields.insert("deviceName".into(), json!("sensor-01"));

    let op = NewOperation {
        device_id: "4711".into(),
        description: String::new(),
        local_only: 9,
        additional_fields,
    };

    let text = jsonc::to_string(&op).unwrap();

    assert_eq!(
        text,
        r#"{"c8y_Restart":{},"deviceName":"sensor-01","deviceId":"4711"}"#
    );
}

#[test]
fn managed_object_flattens_named_fragments() {
    let mo = ManagedObject {
        name: "gateway".into(),
        kind: None,
        fragments: BTreeMap::from([(
            "c8y_Hardware".to_string(),
            Fragment {
                serial: "SN-1".into(),
                model: "rev-2".into(),
            },
        )]),
    };

    let value = jsonc::to_value(&mo).unwrap();

    assert_eq!(
        value,
        json!({
            "c8y_Hardware": {"serialNumber": "SN-1", "model": "rev-2"},
            "name": "gateway",
        })
    );
}

#[test]
fn schema_errors_classify_through_crate_error() {
    #[derive(JsonObject)]
    struct Broken {
        #[jsonc(flat)]
        name: String,
    }

    let err: Error = jsonc::to_string(&Broken { name: "x".into() })
        .unwrap_err()
        .into();

    assert_eq!(err.class(), ErrorClass::Schema);
    assert!(err.display_with_class().starts_with("schema: field 'Broken.name'"));
    assert!(matches!(
        err,
        Error::Schema(SchemaError::FlattenKind { field: "name", .. })
    ));
}
