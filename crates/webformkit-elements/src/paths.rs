//! Dot/bracket field-path addressing for submitted values.
//!
//! Submitted fields address into element value trees with either bracket
//! (`checkbox_value_empty[checkbox]`) or dot (`checkbox_value_empty.checkbox`)
//! notation; both parse to the same segment list.

/// Split a field path into its segments.
///
/// # Examples
///
/// ```
/// use webformkit_elements::paths::parse_path;
///
/// assert_eq!(parse_path("name"), vec!["name"]);
/// assert_eq!(parse_path("a[b][c]"), vec!["a", "b", "c"]);
/// assert_eq!(parse_path("a.b"), vec!["a", "b"]);
/// ```
pub fn parse_path(path: &str) -> Vec<String> {
	let mut segments = Vec::new();
	let mut current = String::new();
	for ch in path.chars() {
		match ch {
			'[' | '.' => {
				if !current.is_empty() {
					segments.push(std::mem::take(&mut current));
				}
			}
			']' => {
				if !current.is_empty() {
					segments.push(std::mem::take(&mut current));
				}
			}
			_ => current.push(ch),
		}
	}
	if !current.is_empty() {
		segments.push(current);
	}
	segments
}

/// Insert `value` into a JSON object tree at the given path, creating
/// intermediate objects as needed. A later insert at the same path replaces
/// the earlier value.
pub fn insert_at_path(tree: &mut serde_json::Map<String, serde_json::Value>, path: &str, value: serde_json::Value) {
	let segments = parse_path(path);
	if segments.is_empty() {
		return;
	}
	let mut map = tree;
	for segment in &segments[..segments.len() - 1] {
		let entry = map
			.entry(segment.clone())
			.or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
		if !entry.is_object() {
			*entry = serde_json::Value::Object(serde_json::Map::new());
		}
		map = entry
			.as_object_mut()
			.unwrap_or_else(|| unreachable!("entry was just made an object"));
	}
	map.insert(segments[segments.len() - 1].clone(), value);
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_bracket_and_dot_paths_agree() {
		assert_eq!(parse_path("a[b][c]"), parse_path("a.b.c"));
	}

	#[test]
	fn test_insert_builds_nested_tree() {
		let mut tree = serde_json::Map::new();
		insert_at_path(&mut tree, "checkbox_value_empty[checkbox]", json!(true));
		insert_at_path(&mut tree, "checkbox_value_empty[value]", json!(""));
		insert_at_path(&mut tree, "other", json!("x"));
		assert_eq!(
			serde_json::Value::Object(tree),
			json!({
				"checkbox_value_empty": {"checkbox": true, "value": ""},
				"other": "x",
			})
		);
	}

	#[test]
	fn test_scalar_overwritten_by_deeper_path() {
		let mut tree = serde_json::Map::new();
		insert_at_path(&mut tree, "a", json!("scalar"));
		insert_at_path(&mut tree, "a[b]", json!(1));
		assert_eq!(serde_json::Value::Object(tree), json!({"a": {"b": 1}}));
	}
}
