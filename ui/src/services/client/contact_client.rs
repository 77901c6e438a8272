use reqwest::Client;
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use super::types::ContactRequest;

/// Endpoint for contact form submissions.
pub const CONTACT_US_URL: &str = "https://car-rental-okvm.onrender.com/contact-us";

/// Client for contact form submission
#[derive(Clone)]
pub struct ContactClient {
    http_client: Client,
}

impl Default for ContactClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactClient {
    /// Create a new contact client
    pub fn new() -> Self {
        Self {
            http_client: Client::builder()
                .user_agent("car-rental-contact-form/1.0")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Send one contact message: a single best-effort POST. Any 2xx counts
    /// as success; the response body is ignored. No retry, no cancellation.
    #[instrument(skip(self, request), err)]
    pub async fn send_message(&self, request: &ContactRequest) -> ClientResult<()> {
        info!("Submitting contact message to {}", CONTACT_US_URL);

        let response = self
            .http_client
            .post(CONTACT_US_URL)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("Failed to call contact-us: {}", e),
            })?;

        let status = response.status();
        if status.is_success() {
            info!("Contact message accepted with status {}", status);
            Ok(())
        } else {
            error!("Contact message rejected with status {}", status);
            Err(ClientError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
