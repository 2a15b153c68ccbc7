/// Failures from the Tushare client, in the order they are detected.
///
/// The Display strings double as the diagnostic text placed in the error
/// envelope, so each variant carries exactly what the caller will see.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport-level failure before a response body could be read.
    #[error("Error processing request: {0}")]
    Request(String),
    /// Provider answered with a non-200 HTTP status.
    #[error("API request failed: {0}")]
    Status(u16),
    /// HTTP 200 but the application-level `code` signalled failure.
    #[error("API returned error: {0}")]
    Api(String),
    /// Response body was not the JSON shape we expect.
    #[error("Error processing request: {0}")]
    Parse(String),
}
