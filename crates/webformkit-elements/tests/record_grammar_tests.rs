//! The serialized record block must stay valid YAML whatever values a
//! submission produces.

use proptest::prelude::*;
use webformkit_elements::{RecordValue, SubmissionRecord};

fn scalar_strategy() -> impl Strategy<Value = serde_json::Value> {
	prop_oneof![
		"[a-zA-Z0-9 :{}_.'-]{0,24}".prop_map(serde_json::Value::String),
		any::<bool>().prop_map(serde_json::Value::Bool),
		any::<i32>().prop_map(|n| serde_json::json!(n)),
	]
}

fn record_value_strategy() -> impl Strategy<Value = RecordValue> {
	let leaf = scalar_strategy().prop_map(RecordValue::Scalar);
	leaf.prop_recursive(3, 24, 6, |inner| {
		prop_oneof![
			prop::collection::vec(inner.clone(), 1..4).prop_map(RecordValue::List),
			// btree_map keeps keys unique; YAML rejects duplicate keys.
			prop::collection::btree_map("[a-z_]{1,12}", inner, 1..4)
				.prop_map(|entries| RecordValue::Map(entries.into_iter().collect())),
		]
	})
}

fn to_yaml_value(value: &RecordValue) -> serde_yaml::Value {
	match value {
		RecordValue::Scalar(scalar) => match scalar {
			serde_json::Value::String(s) => serde_yaml::Value::String(s.clone()),
			serde_json::Value::Bool(b) => serde_yaml::Value::Bool(*b),
			serde_json::Value::Number(n) => {
				serde_yaml::Value::Number(n.as_i64().map(serde_yaml::Number::from).unwrap_or_else(
					|| serde_yaml::Number::from(n.as_f64().unwrap_or_default()),
				))
			}
			_ => serde_yaml::Value::Null,
		},
		RecordValue::List(items) => {
			serde_yaml::Value::Sequence(items.iter().map(to_yaml_value).collect())
		}
		RecordValue::Map(entries) => serde_yaml::Value::Mapping(
			entries
				.iter()
				.map(|(k, v)| (serde_yaml::Value::String(k.clone()), to_yaml_value(v)))
				.collect(),
		),
	}
}

proptest! {
	/// Whatever the record holds, the emitted block parses as YAML and the
	/// parsed tree matches the record.
	#[test]
	fn emitted_block_round_trips_through_yaml(
		entries in prop::collection::btree_map("[a-z_]{1,12}", record_value_strategy(), 1..5)
	) {
		let mut record = SubmissionRecord::new();
		let mut expected = serde_yaml::Mapping::new();
		for (key, value) in &entries {
			record.insert(key.clone(), value.clone());
			expected.insert(
				serde_yaml::Value::String(key.clone()),
				to_yaml_value(value),
			);
		}

		let block = record.to_yaml_block();
		let parsed: serde_yaml::Value = serde_yaml::from_str(&block)
			.unwrap_or_else(|e| panic!("unparseable block: {e}\n{block}"));
		prop_assert_eq!(parsed, serde_yaml::Value::Mapping(expected));
	}
}
