use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A caller record as held in the store and rendered by the views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentCaller {
    pub caller_id: String,
    pub contact_id: String,
    /// Calendar date at day precision, e.g. `Mon May 01 2023`.
    pub date: String,
    pub input: String,
    /// Vanity results, most recent first, joined with `", "`.
    pub results: String,
    /// Fields the service sent that this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
