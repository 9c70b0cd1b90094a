//! Client for the third-party form relay.
//!
//! One POST per submission, no retries. Any transport failure or non-2xx
//! status maps to a single error the contact section turns into its error
//! banner.

use portfolio_core::contact::ContactForm;
use reqwest::Client;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay returned status {0}")]
    Status(reqwest::StatusCode),
}

/// POST the form payload as JSON to the relay endpoint.
pub async fn submit(endpoint: &str, form: &ContactForm) -> Result<(), RelayError> {
    let response = Client::new().post(endpoint).json(form).send().await?;
    let status = response.status();
    if status.is_success() {
        tracing::info!("contact form relayed successfully");
        Ok(())
    } else {
        Err(RelayError::Status(status))
    }
}
