//! Layered merging of JSON configuration objects.

use serde_json::Value;

/// Merge `source` into `target` and return the result.
///
/// - objects on both sides are merged key by key, recursively;
/// - arrays on both sides are concatenated, `target` first;
/// - any other value in `source` replaces the one in `target`.
///
/// Keys only present in `source` are appended after the existing keys.
///
/// ```
/// use ecat_codegen::merge::deep_merge;
/// use serde_json::json;
///
/// let merged = deep_merge(
///     json!({ "name": "a", "tests": [1, 2], "nested": { "num": 10 } }),
///     json!({ "name": "b", "tests": [3], "nested": { "num": 20, "extra": true } }),
/// );
///
/// assert_eq!(
///     merged,
///     json!({ "name": "b", "tests": [1, 2, 3], "nested": { "num": 20, "extra": true } })
/// );
/// ```
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => {
                        let current = existing.take();
                        *existing = deep_merge(current, value);
                    }
                    None => {
                        target.insert(key, value);
                    }
                }
            }
            Value::Object(target)
        }
        (Value::Array(mut target), Value::Array(source)) => {
            target.extend(source);
            Value::Array(target)
        }
        (_, source) => source,
    }
}

/// Merge a sequence of layers, later layers taking precedence.
pub fn merge_layers(layers: impl IntoIterator<Item = Value>) -> Value {
    layers
        .into_iter()
        .fold(Value::Object(Default::default()), deep_merge)
}
