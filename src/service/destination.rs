use serde_json::Value;

use super::fields::{integer_in_range, non_empty_string, unknown_keys, MAX_WEIGHT, MIN_WEIGHT};
use crate::model::RouteDestination;

const APP_KEYS: [&str; 2] = ["guid", "process"];
const PROCESS_KEYS: [&str; 1] = ["type"];

/// Validates one element of the destinations array. Returns the normalized
/// destination on a clean pass, otherwise every error the element produced,
/// each prefixed with its index in the original array.
pub fn validate_destination(index: usize, value: &Value) -> Result<RouteDestination, Vec<String>> {
    let context = format!("Destinations[{index}]");

    let Some(entry) = value.as_object() else {
        return Err(vec![format!("{context}: must be a hash.")]);
    };

    let mut details = Vec::new();
    let mut app_guid = String::new();
    let mut process_type = None;

    match entry.get("app") {
        None => details.push(format!("{context}: must have an \"app\".")),
        Some(app) => match app.as_object() {
            None => details.push(app_structure_error(&context)),
            Some(fields) => {
                match fields.get("guid").and_then(non_empty_string) {
                    Some(guid) if unknown_keys(fields, &APP_KEYS).is_empty() => {
                        app_guid = guid.to_string();
                    }
                    _ => details.push(app_structure_error(&context)),
                }

                if let Some(process) = fields.get("process") {
                    match process_type_of(process) {
                        Some(kind) => process_type = Some(kind.to_string()),
                        None => details.push(format!(
                            "{context}: process must have the structure {{\"type\": \"process_type\"}}"
                        )),
                    }
                }
            }
        },
    }

    // Checked independently of the app shape; both errors can co-occur.
    let mut weight = None;
    if let Some(raw) = entry.get("weight") {
        match integer_in_range(raw, MIN_WEIGHT, MAX_WEIGHT) {
            Some(parsed) => weight = Some(parsed),
            None => details.push(format!(
                "{context}: weight must be a positive integer between 1 and 100."
            )),
        }
    }

    if details.is_empty() {
        Ok(RouteDestination {
            app_guid,
            process_type,
            weight,
        })
    } else {
        Err(details)
    }
}

fn app_structure_error(context: &str) -> String {
    format!("{context}: app must have the structure {{\"guid\": \"app_guid\"}}")
}

fn process_type_of(process: &Value) -> Option<&str> {
    let fields = process.as_object()?;
    if !unknown_keys(fields, &PROCESS_KEYS).is_empty() {
        return None;
    }
    fields.get("type").and_then(non_empty_string)
}
