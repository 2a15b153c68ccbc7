use std::time::Duration;

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ProviderError;
use crate::types::NewsQuery;

/// Fixed Tushare endpoint. Every dataset shares one URL; the `api_name`
/// field in the request body selects which one is queried.
pub const TUSHARE_API_URL: &str = "https://api.tushare.pro";

/// Environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "TUSHARE_TOKEN";

/// Stand-in token used when the environment variable is unset. The provider
/// rejects it, which surfaces as an application-level error envelope.
pub const PLACEHOLDER_TOKEN: &str = "YOUR_TUSHARE_TOKEN";

/// Dataset identifier for Sina financial news.
const API_NAME: &str = "news_sina";

/// Field selection forwarded verbatim to the provider.
const FIELDS: &str = "title,content,pub_time,author,url";

/// Request timeout applied by [`ClientConfig::strict`].
const STRICT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on `limit` in strict mode.
pub(crate) const MAX_LIMIT: i64 = 1000;

/// Client configuration. Captured once at construction; the client holds no
/// mutable state afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub token: String,
    pub base_url: String,
    /// Bound on the whole request. `None` means the call can hang for as
    /// long as the provider keeps the socket open.
    pub timeout: Option<Duration>,
    /// Validate required fields and clamp `limit` before going to the wire.
    pub strict: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: PLACEHOLDER_TOKEN.into(),
            base_url: TUSHARE_API_URL.into(),
            timeout: None,
            strict: false,
        }
    }
}

impl ClientConfig {
    /// Default config with the token taken from [`TOKEN_ENV_VAR`], falling
    /// back to the placeholder.
    pub fn from_env() -> Self {
        let token = std::env::var(TOKEN_ENV_VAR).unwrap_or_else(|_| PLACEHOLDER_TOKEN.into());
        Self {
            token,
            ..Self::default()
        }
    }

    /// Hardened profile: bounded timeout plus input validation.
    pub fn strict() -> Self {
        Self {
            timeout: Some(STRICT_TIMEOUT),
            strict: true,
            ..Self::default()
        }
    }
}

/// HTTP client for the Tushare news API. One POST per call, no retries,
/// no state beyond the immutable config.
pub struct TushareClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl TushareClient {
    pub fn new(config: ClientConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            client: builder.build().expect("reqwest client"),
            config,
        }
    }

    /// Client with the token read once from the environment.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Point the client at a different endpoint. Tests use this to talk to
    /// a local stub server.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn strict(&self) -> bool {
        self.config.strict
    }

    /// Fetch Sina news for `query`.
    ///
    /// Interprets the response in order: non-200 status, unreadable or
    /// unparsable body, non-zero (or missing) application `code`, then the
    /// item list at `data.items`. Absent nesting levels yield an empty
    /// list; no truncation happens here.
    pub async fn news(&self, query: &NewsQuery) -> Result<Vec<Value>, ProviderError> {
        let body = json!({
            "api_name": API_NAME,
            "token": self.config.token,
            "params": {
                "start_date": query.start_date,
                "end_date": query.end_date,
                "src": query.category,
            },
            "fields": FIELDS,
        });

        debug!(
            api_name = API_NAME,
            start_date = query.start_date.as_deref().unwrap_or(""),
            end_date = query.end_date.as_deref().unwrap_or(""),
            src = %query.category,
            "sending provider request"
        );

        let resp = self
            .client
            .post(&self.config.base_url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = resp.status().as_u16();
        if status != 200 {
            warn!(status, "provider rejected request");
            return Err(ProviderError::Status(status));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;
        let parsed: Value =
            serde_json::from_str(&text).map_err(|e| ProviderError::Parse(e.to_string()))?;

        // Tushare signals application failure with a non-zero `code`; a
        // missing `code` is treated the same way.
        if parsed["code"].as_i64() != Some(0) {
            let msg = parsed["msg"]
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| parsed["msg"].to_string());
            warn!(msg = %msg, "provider returned application error");
            return Err(ProviderError::Api(msg));
        }

        Ok(parsed["data"]["items"]
            .as_array()
            .cloned()
            .unwrap_or_default())
    }
}
