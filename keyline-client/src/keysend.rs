//! Keysend payment constructor.
//!
//! A keysend is a spontaneous payment: the sender picks the preimage,
//! discloses it to the destination inside a custom record, and the
//! payment hash is simply its SHA-256. The destination can settle
//! without ever having issued an invoice.
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::RngCore;

use keyline_common::bitcoin::hashes::{sha256, Hash};
use keyline_common::error;
use keyline_common::model::request::{FeeLimit, SendPayment};
use keyline_common::records::{self, CustomRecords, TLV_KEYSEND_MESSAGE, TLV_KEYSEND_PREIMAGE};
use keyline_common::secp256k1::PublicKey;

/// Final hop CLTV delta attached to every keysend.
pub const FINAL_CLTV_DELTA: u32 = 40;
/// Flat fee ceiling in satoshis.
pub const FEE_LIMIT_SAT: u64 = 1000;
/// BOLT 9 feature bit for TLV onion payloads, the destination must
/// support it to read the custom records.
pub const TLV_ONION_FEATURE_BIT: u32 = 9;

/// Build the wire request for a keysend of `amount` satoshis.
///
/// The preimage is 32 fresh bytes from the OS random source on every
/// call, it lives only inside the request and is never persisted, the
/// node is the source of truth for settlement.
pub fn build_send_payment(
    destination: &str,
    amount: u64,
    message: &str,
) -> error::Result<SendPayment> {
    let destination = PublicKey::from_str(destination)
        .map_err(|err| error::anyhow!("invalid destination public key `{destination}`: {err}"))?;
    if amount == 0 {
        error::bail!("keysend amount must be greater than zero");
    }

    let preimage = fresh_preimage();
    let payment_hash = sha256::Hash::hash(&preimage);

    let mut dest_custom_records = CustomRecords::new();
    dest_custom_records.insert(TLV_KEYSEND_MESSAGE, records::encode(message.as_bytes()));
    dest_custom_records.insert(TLV_KEYSEND_PREIMAGE, records::encode(&preimage));

    Ok(SendPayment {
        dest: records::encode(&destination.serialize()),
        amt: amount,
        payment_hash: records::encode(payment_hash.as_byte_array()),
        final_cltv_delta: FINAL_CLTV_DELTA,
        allow_self_payment: true,
        dest_custom_records,
        fee_limit: FeeLimit {
            fixed: FEE_LIMIT_SAT,
        },
        dest_features: vec![TLV_ONION_FEATURE_BIT],
    })
}

fn fresh_preimage() -> [u8; 32] {
    let mut preimage = [0u8; 32];
    OsRng.fill_bytes(&mut preimage);
    preimage
}
