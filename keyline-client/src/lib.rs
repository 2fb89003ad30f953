//! REST client for a remote LND node.
//!
//! Wraps the two keysend operations, sending one and listing the
//! received ones, plus `getinfo` for the presentation layer. Every
//! call is a single stateless request/response cycle, there is no
//! caching and no retry policy, dropping the future aborts the call.
pub mod inbox;
pub mod keysend;

use reqwest::header::{HeaderMap, HeaderValue};

use keyline_common::conf::KeylineConf;
use keyline_common::error;
use keyline_common::json;
use keyline_common::model::response::{GetInfo, ReceivedKeysend};
use keyline_common::model::ListInvoicesResponse;

/// Cap on the invoice fetch, the node returns at most this many
/// of its most recent invoices.
pub const INVOICE_FETCH_LIMIT: u32 = 1000;

/// Header carrying the macaroon credential on every call.
const MACAROON_HEADER: &str = "Grpc-Metadata-Macaroon";

pub struct LndRest {
    inner: reqwest::Client,
    base_url: String,
}

impl LndRest {
    pub fn new(conf: &KeylineConf) -> error::Result<Self> {
        let mut macaroon = HeaderValue::from_str(&conf.macaroon)
            .map_err(|err| error::anyhow!("macaroon is not a valid header value: {err}"))?;
        macaroon.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(MACAROON_HEADER, macaroon);

        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(conf.tls_skip_verify)
            .build()?;
        Ok(Self {
            inner,
            base_url: conf.api_base(),
        })
    }

    /// Node identity, shown by the presentation layer.
    pub async fn get_info(&self) -> error::Result<GetInfo> {
        self.get("/v1/getinfo", &[]).await
    }

    /// Build and submit a keysend payment carrying `message`.
    ///
    /// Returns the raw payment result of the node, the caller decides
    /// what to surface out of it.
    pub async fn send_keysend(
        &self,
        destination: &str,
        amount: u64,
        message: &str,
    ) -> error::Result<json::Value> {
        let request = keysend::build_send_payment(destination, amount, message)?;
        log::debug!(target: "lndrest", "submitting keysend of {amount} sat to `{destination}`");
        self.post("/v1/channels/transactions", &request).await
    }

    /// Rebuild the stream of received keysend messages from the
    /// settled invoice history, oldest first.
    pub async fn list_received_keysends(&self) -> error::Result<Vec<ReceivedKeysend>> {
        let limit = INVOICE_FETCH_LIMIT.to_string();
        let history: ListInvoicesResponse = self
            .get(
                "/v1/invoices",
                &[
                    ("pending_only", "false"),
                    ("num_max_invoices", limit.as_str()),
                    ("reversed", "true"),
                ],
            )
            .await?;
        Ok(inbox::received_keysends(history))
    }

    async fn get<T: json::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> error::Result<T> {
        let response = self
            .inner
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .send()
            .await?;
        Self::decode_response(path, response).await
    }

    async fn post<B: json::Serialize, T: json::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> error::Result<T> {
        let response = self
            .inner
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        Self::decode_response(path, response).await
    }

    async fn decode_response<T: json::DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> error::Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!(target: "lndrest", "`{path}` failed with status {status}: {body}");
            error::bail!("node returned {status} for `{path}`: {body}");
        }
        Ok(response.json().await?)
    }
}
