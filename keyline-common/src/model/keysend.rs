//! keysend model
pub mod request {
    use serde::{Deserialize, Serialize};

    use crate::records::CustomRecords;

    /// Body of `POST /v1/channels/transactions`.
    ///
    /// Built once per send and submitted exactly once, `dest` and
    /// `payment_hash` are base64 over the wire.
    #[derive(Serialize, Deserialize, Debug)]
    pub struct SendPayment {
        pub dest: String,
        pub amt: u64,
        pub payment_hash: String,
        pub final_cltv_delta: u32,
        pub allow_self_payment: bool,
        pub dest_custom_records: CustomRecords,
        pub fee_limit: FeeLimit,
        pub dest_features: Vec<u32>,
    }

    /// Flat fee ceiling, not proportional to the amount.
    #[derive(Serialize, Deserialize, Debug)]
    pub struct FeeLimit {
        pub fixed: u64,
    }
}

pub mod response {
    use serde::{Deserialize, Serialize};

    /// One keysend message decoded out of the invoice history.
    ///
    /// A transient projection for display, recomputed on every fetch
    /// and never persisted.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ReceivedKeysend {
        pub amount: i64,
        pub date: String,
        pub message: String,
    }
}
