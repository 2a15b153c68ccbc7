use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category used when the caller gives none.
pub const DEFAULT_CATEGORY: &str = "Finance";

/// Number of items returned when the caller gives no limit.
pub const DEFAULT_LIMIT: i64 = 10;

/// Outcome of a tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

/// Uniform wrapper returned by every tool invocation.
///
/// `data` holds the provider's records verbatim; it is empty whenever
/// `status` is [`ToolStatus::Error`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub status: ToolStatus,
    pub message: String,
    pub data: Vec<Value>,
}

impl ResultEnvelope {
    /// Successful call carrying the provider's items.
    pub fn success(message: impl Into<String>, data: Vec<Value>) -> Self {
        Self {
            status: ToolStatus::Success,
            message: message.into(),
            data,
        }
    }

    /// Failed call. `message` is the only diagnostic the caller gets.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Error,
            message: message.into(),
            data: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }
}

/// Query parameters for one news fetch, after defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    /// Required by the provider; forwarded as JSON `null` when missing so
    /// the provider rejects it itself.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: String,
    pub limit: i64,
}

impl NewsQuery {
    /// Build a query from raw tool parameters: `end_date` falls back to
    /// `start_date`, `category` to [`DEFAULT_CATEGORY`], `limit` to
    /// [`DEFAULT_LIMIT`] (also when it is not a number).
    pub fn from_params(params: &Value) -> Self {
        let start_date = params["start_date"].as_str().map(str::to_owned);
        let end_date = params["end_date"]
            .as_str()
            .map(str::to_owned)
            .or_else(|| start_date.clone());
        let category = params["category"]
            .as_str()
            .unwrap_or(DEFAULT_CATEGORY)
            .to_owned();
        let limit = params["limit"].as_i64().unwrap_or(DEFAULT_LIMIT);
        Self {
            start_date,
            end_date,
            category,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn end_date_falls_back_to_start_date() {
        let query = NewsQuery::from_params(&json!({"start_date": "20240101"}));
        assert_eq!(query.start_date.as_deref(), Some("20240101"));
        assert_eq!(query.end_date.as_deref(), Some("20240101"));
    }

    #[test]
    fn explicit_end_date_wins() {
        let query = NewsQuery::from_params(&json!({
            "start_date": "20240101",
            "end_date": "20240105",
        }));
        assert_eq!(query.end_date.as_deref(), Some("20240105"));
    }

    #[test]
    fn category_and_limit_defaults() {
        let query = NewsQuery::from_params(&json!({"start_date": "20240101"}));
        assert_eq!(query.category, DEFAULT_CATEGORY);
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn non_numeric_limit_falls_back_to_default() {
        let query = NewsQuery::from_params(&json!({
            "start_date": "20240101",
            "limit": "many",
        }));
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn missing_start_date_stays_absent() {
        let query = NewsQuery::from_params(&json!({"category": "Tech"}));
        assert_eq!(query.start_date, None);
        assert_eq!(query.end_date, None);
        assert_eq!(query.category, "Tech");
    }

    #[test]
    fn params_need_not_be_an_object() {
        let query = NewsQuery::from_params(&Value::Null);
        assert_eq!(query.start_date, None);
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn error_envelope_has_empty_data() {
        let envelope = ResultEnvelope::error("boom");
        assert_eq!(envelope.status, ToolStatus::Error);
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn status_serializes_lowercase() {
        let envelope = ResultEnvelope::success("ok", vec![]);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "success");
    }
}
