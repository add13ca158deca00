//! Avro schema for the binary encoding.
//!
//! Consumers need this schema to read [`OutputFormat::Avro`](crate::OutputFormat)
//! payloads; the datum itself carries no field names or type information.

/// Avro record schema of an encoded event, fields in wire order.
pub const EVENT_SCHEMA: &str = r#"{
  "type": "record",
  "name": "Event",
  "namespace": "datagen",
  "fields": [
    { "name": "timestamp", "type": { "type": "long", "logicalType": "timestamp-micros" } },
    { "name": "goodness", "type": "double" },
    { "name": "type", "type": "int" }
  ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avro;
    use chrono::{TimeZone, Utc};
    use datagen_event::Event;
    use protobuf::CodedInputStream;

    #[test]
    fn test_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(EVENT_SCHEMA).unwrap();
        assert_eq!(schema["type"], "record");
        assert_eq!(schema["namespace"], "datagen");
    }

    #[test]
    fn test_schema_field_order() {
        let schema: serde_json::Value = serde_json::from_str(EVENT_SCHEMA).unwrap();
        let names: Vec<&str> = schema["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();

        assert_eq!(names, vec!["timestamp", "goodness", "type"]);
        assert_eq!(schema["fields"][0]["type"]["logicalType"], "timestamp-micros");
    }

    #[test]
    fn test_schema_types_match_encoded_layout() {
        let timestamp = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 45).unwrap();
        let event = Event::new(timestamp, 0.75, 2).unwrap();
        let mut buffer = Vec::new();
        avro::encode_event(&event, &mut buffer).unwrap();

        let schema: serde_json::Value = serde_json::from_str(EVENT_SCHEMA).unwrap();
        let mut stream = CodedInputStream::from_bytes(&buffer);

        for field in schema["fields"].as_array().unwrap() {
            let field_type = field["type"]["type"]
                .as_str()
                .or_else(|| field["type"].as_str())
                .unwrap();
            let name = field["name"].as_str().unwrap();

            match (name, field_type) {
                ("timestamp", "long") => assert_eq!(
                    stream.read_sint64().unwrap(),
                    timestamp.timestamp_micros()
                ),
                ("goodness", "double") => assert_eq!(stream.read_double().unwrap(), 0.75),
                ("type", "int") => assert_eq!(stream.read_sint32().unwrap(), 2),
                other => panic!("unexpected schema field {other:?}"),
            }
        }

        assert_eq!(stream.pos() as usize, buffer.len());
    }
}
