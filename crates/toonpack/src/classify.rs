use serde_json::Value;

/// Shape category driving the choice of encoding strategy.
///
/// Every [`Value`] falls into exactly one kind. Arrays are probed for the
/// uniform-object shape before the all-primitive shape, so the two can never
/// both claim the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    /// `[]` — emitted as a bare count header
    EmptyArray,
    /// Non-empty, every element an object, all key sets equal to the first
    /// element's (order-independent). Encoded as a table.
    UniformObjectArray,
    /// Non-empty, every element null/bool/number/string. Encoded inline.
    PrimitiveArray,
    /// Any other non-empty array. Encoded as a bullet list.
    MixedArray,
    /// `{}` — contributes no output at all
    EmptyObject,
    Object,
}

/// Classifies a value by shape alone. Pure and idempotent: the result depends
/// only on the input, never on surrounding context or options.
pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(items) => {
            if items.is_empty() {
                ValueKind::EmptyArray
            } else if uniform_object_keys(items).is_some() {
                ValueKind::UniformObjectArray
            } else if items.iter().all(is_primitive) {
                ValueKind::PrimitiveArray
            } else {
                ValueKind::MixedArray
            }
        }
        Value::Object(map) => {
            if map.is_empty() {
                ValueKind::EmptyObject
            } else {
                ValueKind::Object
            }
        }
    }
}

/// Returns the table header keys when `items` is a uniform object array:
/// non-empty, all objects, every key set equal to the first element's.
///
/// Keys come back in the first element's insertion order, which is also the
/// column order of the emitted rows. Key-set comparison ignores order but not
/// count, so subsets and supersets both disqualify.
pub fn uniform_object_keys(items: &[Value]) -> Option<Vec<&str>> {
    let first = items.first()?.as_object()?;
    let keys: Vec<&str> = first.keys().map(String::as_str).collect();
    for item in &items[1..] {
        let obj = item.as_object()?;
        if obj.len() != keys.len() || !keys.iter().all(|k| obj.contains_key(*k)) {
            return None;
        }
    }
    Some(keys)
}

pub(crate) fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}
