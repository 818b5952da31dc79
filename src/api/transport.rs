//! The seam between request building and the network.

use reqwest::blocking::{Client, Request};

use super::error::TransportError;

/// Executes a built request and hands back the raw response body.
///
/// The status code is deliberately not part of the contract: JIRA's error
/// envelope is recognized from the body. Implementations must be `Sync` for
/// a [`JiraClient`](super::JiraClient) to be shared between threads.
pub trait Transport {
    /// Send `request` and read the whole response body.
    fn execute(&self, request: Request) -> Result<Vec<u8>, TransportError>;
}

impl Transport for Client {
    fn execute(&self, request: Request) -> Result<Vec<u8>, TransportError> {
        let response = Client::execute(self, request)?;
        Ok(response.bytes()?.to_vec())
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: Request) -> Result<Vec<u8>, TransportError> {
        (**self).execute(request)
    }
}
