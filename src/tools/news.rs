use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::warn;

use super::handler::ToolHandler;
use crate::provider::{TushareClient, MAX_LIMIT};
use crate::types::{NewsQuery, ResultEnvelope, DEFAULT_CATEGORY, DEFAULT_LIMIT};

/// Message set on every successful fetch.
const SUCCESS_MESSAGE: &str = "Successfully retrieved news data";

/// The `get_sina_news` tool: Sina financial news for a date range.
pub struct NewsTool {
    client: TushareClient,
}

impl NewsTool {
    pub fn new(client: TushareClient) -> Self {
        Self { client }
    }

    /// Tool declaration for the manifest.
    pub fn schema() -> Value {
        json!({
            "name": "get_sina_news",
            "description": "Fetch Sina financial news for a date range",
            "parameters": {
                "type": "object",
                "properties": {
                    "start_date": {
                        "type": "string",
                        "description": "First day of the range (YYYYMMDD)"
                    },
                    "end_date": {
                        "type": "string",
                        "description": "Last day of the range (YYYYMMDD), defaults to start_date"
                    },
                    "category": {
                        "type": "string",
                        "description": "News category",
                        "default": DEFAULT_CATEGORY
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of items returned",
                        "default": DEFAULT_LIMIT
                    }
                },
                "required": ["start_date"]
            }
        })
    }
}

#[async_trait]
impl ToolHandler for NewsTool {
    async fn call(&self, params: &Value) -> ResultEnvelope {
        let mut query = NewsQuery::from_params(params);

        if self.client.strict() {
            if let Err(reason) = validate(&mut query) {
                return ResultEnvelope::error(reason);
            }
        }

        match self.client.news(&query).await {
            Ok(mut items) => {
                // Prefix truncation; a non-positive limit disables it.
                if query.limit > 0 && items.len() > query.limit as usize {
                    items.truncate(query.limit as usize);
                }
                ResultEnvelope::success(SUCCESS_MESSAGE, items)
            }
            Err(e) => {
                warn!(error = %e, "news fetch failed");
                ResultEnvelope::error(e.to_string())
            }
        }
    }
}

/// Strict-mode pre-checks: `start_date` must be present and well-formed,
/// `limit` is clamped into `1..=MAX_LIMIT`.
fn validate(query: &mut NewsQuery) -> Result<(), String> {
    match query.start_date.as_deref() {
        None => return Err("missing required parameter: start_date".into()),
        Some(s) => {
            if chrono::NaiveDate::parse_from_str(s, "%Y%m%d").is_err() {
                return Err(format!("invalid start_date (want YYYYMMDD): {s}"));
            }
        }
    }
    query.limit = query.limit.clamp(1, MAX_LIMIT);
    Ok(())
}
