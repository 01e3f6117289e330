use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `GET /dev/recent`.
///
/// `recent` is optional at the decoding layer so that a body without it can be
/// reported as its own failure rather than a generic decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentResponse {
    #[serde(default)]
    pub recent: Option<Vec<RawCaller>>,
}

/// One element of the `recent` array, exactly as the service sends it.
///
/// Every known field is optional here; `normalize` decides which ones are
/// required. Unknown fields are collected into `extra` and carried through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCaller {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_id: Option<String>,
    #[serde(
        default,
        rename = "contactId",
        alias = "contact_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
