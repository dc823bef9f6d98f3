//! Shared GET helper for the upstream sources.

use log::debug;
use reqwest::RequestBuilder;

use crate::errors::MarketDataError;
use crate::parsers::Charset;

/// Sends a request and decodes the body in the source's charset.
///
/// Non-success statuses are reported as [`MarketDataError::Http`].
pub(crate) async fn fetch_text(
    provider: &str,
    request: RequestBuilder,
    charset: Charset,
) -> Result<String, MarketDataError> {
    let response = request
        .send()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(MarketDataError::Http {
            provider: provider.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))?;
    debug!("{}: received {} bytes", provider, bytes.len());

    charset.decode(provider, &bytes)
}
