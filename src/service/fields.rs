use serde_json::{Map, Value};

pub const MAX_DESTINATIONS: usize = 100;
pub const MIN_WEIGHT: i64 = 1;
pub const MAX_WEIGHT: i64 = 100;

/// Keys present on `object` that are not in `allowed`, sorted so error
/// messages come out in a deterministic order.
pub fn unknown_keys(object: &Map<String, Value>, allowed: &[&str]) -> Vec<String> {
    let mut unknown: Vec<String> = object
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect();
    unknown.sort();
    unknown
}

pub fn non_empty_string(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.is_empty())
}

pub fn integer_in_range(value: &Value, min: i64, max: i64) -> Option<i64> {
    value.as_i64().filter(|number| (min..=max).contains(number))
}
