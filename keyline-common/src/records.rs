//! Custom TLV records attached to keysend payments.
//!
//! The REST API moves every binary field as base64, including the
//! values of the custom record map, whose keys are 64 bit TLV types
//! rendered as decimal strings in the JSON.
use std::collections::BTreeMap;

use base64::prelude::*;

use crate::error;

/// TLV type of the freeform keysend message, UTF-8 bytes.
pub const TLV_KEYSEND_MESSAGE: u64 = 34349334;
/// TLV type of the payment preimage, raw 32 bytes.
pub const TLV_KEYSEND_PREIMAGE: u64 = 5482373484;

/// Custom records as they travel over the wire: TLV type to
/// base64 encoded value.
pub type CustomRecords = BTreeMap<u64, String>;

/// Transport encoding of a binary field.
pub fn encode(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}

pub fn decode(value: &str) -> error::Result<Vec<u8>> {
    Ok(BASE64_STANDARD.decode(value)?)
}

/// Decode the message record out of a record map, if one is there.
///
/// Invalid UTF-8 decodes lossily. A value that is not valid base64 is
/// treated as an absent record, the listing should not fail because one
/// sender shipped a broken payload.
pub fn message(records: &CustomRecords) -> Option<String> {
    let raw = records.get(&TLV_KEYSEND_MESSAGE)?;
    match decode(raw) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            log::warn!(target: "records", "undecodable message record `{raw}`: {err}");
            None
        }
    }
}
