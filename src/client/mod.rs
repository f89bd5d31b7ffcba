//! Blocking SOAP client for the FNS NDS check service (FNSNDSCAWS_2).
//!
//! Submits an `NdsRequest2` batch and maps the `NdsResponse2` answer back
//! into [`StatusResult`] values. The session loop only sees the
//! [`RegistryClient`] trait; the SOAP wire format stays in this module.

mod soap;

use std::time::Duration;

use crate::core::{QueryBatch, RegistryClient, RegistryError, StatusResult};

/// Production service endpoint.
pub const SERVICE_URL: &str = "https://npchk.nalog.ru/FNSNDSCAWS_2";

/// Client for the FNS taxpayer check service.
pub struct FnsClient {
    http: reqwest::blocking::Client,
    url: String,
}

impl FnsClient {
    /// Client against the production endpoint.
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_url(SERVICE_URL)
    }

    /// Client against a custom endpoint.
    pub fn with_url(url: impl Into<String>) -> Result<Self, RegistryError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RegistryError::Network(e.to_string()))?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

impl RegistryClient for FnsClient {
    fn check(&self, batch: &QueryBatch) -> Result<Vec<StatusResult>, RegistryError> {
        let envelope = soap::build_request(batch)?;
        let resp = self
            .http
            .post(&self.url)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", "")
            .body(envelope)
            .send()
            .map_err(|e| RegistryError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| RegistryError::Network(e.to_string()))?;

        if !status.is_success() {
            // A SOAP fault arrives as HTTP 500 with a fault body
            return match soap::parse_response(&body) {
                Err(fault @ RegistryError::Service(_)) => Err(fault),
                _ => Err(RegistryError::Service(format!("HTTP {status}"))),
            };
        }

        soap::parse_response(&body)
    }
}
