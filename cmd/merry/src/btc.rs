use std::collections::HashMap;

use reqwest::StatusCode;
use serde::Serialize;

/// Faucet endpoint of a running merry stack.
pub const FAUCET_URL: &str = "http://127.0.0.1:3000";

/// Block explorer bundled with the stack.
pub const EXPLORER_URL: &str = "http://localhost:5050";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to get funds from faucet: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-200 response; the body is the operator-facing message.
    #[error("{0}")]
    Rejected(String),
    /// 200 response that is not a JSON object of strings. The parse error is
    /// deliberately not surfaced.
    #[error("internal error, please try again")]
    UnexpectedResponse,
    /// Well-formed response without a transaction id.
    #[error("not successful")]
    NotSuccessful,
}

#[derive(Serialize)]
struct FundRequest<'a> {
    address: &'a str,
}

pub fn explorer_tx_url(tx_id: &str) -> String {
    format!("{EXPLORER_URL}/tx/{tx_id}")
}

/// Client for the regtest faucet service.
pub struct FaucetClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for FaucetClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FaucetClient {
    pub fn new() -> Self {
        Self::with_base_url(FAUCET_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Request regtest funds for `address`, returning the faucet's
    /// transaction id.
    pub async fn fund(&self, address: &str) -> Result<String, Error> {
        let url = format!("{}/faucet", self.base_url);
        tracing::debug!(%url, address, "requesting funds from faucet");

        let response = self
            .client
            .post(&url)
            .json(&FundRequest { address })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(Error::Rejected(body));
        }

        let fields: HashMap<String, String> =
            serde_json::from_str(&body).map_err(|_| Error::UnexpectedResponse)?;
        match fields.get("txId") {
            Some(tx_id) if !tx_id.is_empty() => Ok(tx_id.clone()),
            _ => Err(Error::NotSuccessful),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fund_posts_address_and_returns_tx_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/faucet")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"address": "bcrt1qxyz"}),
            ))
            .with_status(200)
            .with_body(r#"{"txId":"abc123"}"#)
            .create_async()
            .await;

        let client = FaucetClient::with_base_url(server.url());
        let tx_id = client.fund("bcrt1qxyz").await.unwrap();
        assert_eq!(tx_id, "abc123");
        assert_eq!(explorer_tx_url(&tx_id), "http://localhost:5050/tx/abc123");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_200_surfaces_body_verbatim() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/faucet")
            .with_status(500)
            .with_body("faucet empty")
            .create_async()
            .await;

        let client = FaucetClient::with_base_url(server.url());
        let err = client.fund("bcrt1qxyz").await.unwrap_err();
        assert_eq!(err.to_string(), "faucet empty");
    }

    #[tokio::test]
    async fn missing_tx_id_is_not_successful() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/faucet")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = FaucetClient::with_base_url(server.url());
        let err = client.fund("bcrt1qxyz").await.unwrap_err();
        assert_eq!(err.to_string(), "not successful");
    }

    #[tokio::test]
    async fn empty_tx_id_is_not_successful() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/faucet")
            .with_status(200)
            .with_body(r#"{"txId":""}"#)
            .create_async()
            .await;

        let client = FaucetClient::with_base_url(server.url());
        let err = client.fund("bcrt1qxyz").await.unwrap_err();
        assert_eq!(err.to_string(), "not successful");
    }

    #[tokio::test]
    async fn unparseable_body_is_a_vague_internal_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/faucet")
            .with_status(200)
            .with_body("not-json")
            .create_async()
            .await;

        let client = FaucetClient::with_base_url(server.url());
        let err = client.fund("bcrt1qxyz").await.unwrap_err();
        assert_eq!(err.to_string(), "internal error, please try again");
    }
}
