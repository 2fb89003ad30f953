//! Wire model of the node invoice surface.
//!
//! Every field carries `#[serde(default)]`: the node speaks proto3
//! JSON and omits default-valued fields instead of sending them.
use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::records::CustomRecords;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ListInvoicesResponse {
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Invoice {
    #[serde(default)]
    pub is_keysend: bool,
    #[serde(default)]
    pub state: InvoiceState,
    /// Amount in satoshis.
    #[serde(default)]
    pub value: i64,
    /// Epoch seconds, meaningful only once the invoice settled.
    #[serde(default)]
    pub settle_date: String,
    /// Legs the payment settled over, each with its own records.
    #[serde(default)]
    pub htlcs: Vec<InvoiceHtlc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceState {
    #[default]
    Open,
    Settled,
    Canceled,
    Accepted,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct InvoiceHtlc {
    #[serde(default)]
    pub custom_records: CustomRecords,
}

impl Invoice {
    /// Settle time rendered for display. Falls back to the raw field
    /// when it does not parse as epoch seconds.
    pub fn settled_at(&self) -> String {
        self.settle_date
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|date| date.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| self.settle_date.clone())
    }
}
