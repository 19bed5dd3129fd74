use serde::Deserialize;
use serde_json::Value;

/// The `{ success, data }` wrapper as it arrives, before validation.
#[derive(Debug, Deserialize)]
pub struct RawEnvelope {
    #[serde(default)]
    pub success: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// A validated envelope whose payload decoded into `T`.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub data: T,
    pub message: Option<String>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub count: Option<usize>,
    pub filtered_by_user_id: Option<i64>,
}

/// Body of a non-2xx response. Only `message` reaches the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub status: Option<u16>,
    pub error: Option<String>,
    pub message: Option<String>,
    pub path: Option<String>,
    pub timestamp: Option<Value>,
}
