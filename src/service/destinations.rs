use serde_json::Value;
use tracing::debug;

use super::destination::validate_destination;
use super::fields::{unknown_keys, MAX_DESTINATIONS};
use super::ValidationError;
use crate::model::{RouteDestination, UpdateMode};

const TOP_LEVEL_KEYS: [&str; 1] = ["destinations"];

/// Validates a destination update payload and, when valid, returns the
/// normalized destination list in payload order. All violations are
/// collected; only a structurally unusable destinations array stops the
/// per-element and weight checks.
pub fn validate_update(
    payload: &Value,
    mode: UpdateMode,
) -> Result<Vec<RouteDestination>, ValidationError> {
    let mut details = Vec::new();

    let destinations = match payload.as_object() {
        Some(fields) => {
            for key in unknown_keys(fields, &TOP_LEVEL_KEYS) {
                details.push(format!("Unknown field(s): '{key}'"));
            }
            fields.get("destinations")
        }
        None => None,
    };

    let Some(entries) = destination_entries(destinations, mode) else {
        details.push(
            "Destinations must be an array containing between 1 and 100 destination objects."
                .to_string(),
        );
        return Err(ValidationError::with_details(details));
    };

    debug!(
        mode = %mode.as_str(),
        count = entries.len(),
        "validating destinations update"
    );

    let mut validated = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        match validate_destination(index, entry) {
            Ok(destination) => validated.push((index, destination)),
            Err(errors) => details.extend(errors),
        }
    }

    validate_weights(&validated, mode, &mut details);

    if details.is_empty() {
        Ok(validated
            .into_iter()
            .map(|(_, destination)| destination)
            .collect())
    } else {
        Err(ValidationError::with_details(details))
    }
}

/// An empty array is structurally acceptable only when replacing; otherwise
/// the array must hold between 1 and 100 entries.
fn destination_entries(value: Option<&Value>, mode: UpdateMode) -> Option<&Vec<Value>> {
    let items = value?.as_array()?;
    if items.is_empty() {
        return mode.is_replace().then_some(items);
    }
    (items.len() <= MAX_DESTINATIONS).then_some(items)
}

/// Cross-element weight rules, applied over the destinations that validated
/// clean. Mixing weighted and unweighted entries is never legal; weights at
/// all are only legal when replacing, and then must sum to exactly 100.
fn validate_weights(
    validated: &[(usize, RouteDestination)],
    mode: UpdateMode,
    details: &mut Vec<String>,
) {
    let weighted: Vec<(usize, i64)> = validated
        .iter()
        .filter_map(|(index, destination)| destination.weight.map(|weight| (*index, weight)))
        .collect();

    if weighted.is_empty() {
        return;
    }

    if weighted.len() < validated.len() {
        details.push(
            "Destinations cannot contain both weighted and unweighted destinations.".to_string(),
        );
        return;
    }

    if !mode.is_replace() {
        for (index, _) in &weighted {
            details.push(format!(
                "Destinations[{index}]: weighted destinations can only be used when replacing all destinations."
            ));
        }
        return;
    }

    let sum: i64 = weighted.iter().map(|(_, weight)| weight).sum();
    if sum != 100 {
        details.push("Destinations must have weights that sum to 100.".to_string());
    }
}
