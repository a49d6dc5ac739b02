use serde::{Deserialize, Serialize};

/// Operation semantics for a destination update. Insert adds to the route's
/// existing destinations; Replace swaps the whole destination list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UpdateMode {
    Insert,
    Replace,
}

impl UpdateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Replace => "replace",
        }
    }

    pub fn is_replace(&self) -> bool {
        matches!(self, Self::Replace)
    }
}

impl std::str::FromStr for UpdateMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "insert" => Ok(Self::Insert),
            "replace" => Ok(Self::Replace),
            _ => Err(format!("unsupported update mode {value}")),
        }
    }
}

/// One validated traffic target of a route, normalized from the raw payload.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RouteDestination {
    pub app_guid: String,
    #[serde(default)]
    pub process_type: Option<String>,
    #[serde(default)]
    pub weight: Option<i64>,
}
