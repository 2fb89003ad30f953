//! Invoice decoder.
//!
//! Rebuilds the stream of received keysend messages out of the raw
//! invoice history: only settled keysend invoices with a non-empty
//! decoded message survive, everything else is silently dropped.
use keyline_common::model::response::ReceivedKeysend;
use keyline_common::model::{Invoice, InvoiceState, ListInvoicesResponse};
use keyline_common::records;

/// Project the invoice history onto the received keysends, oldest
/// settled first. The node hands the batch back newest first, so the
/// walk is reversed.
pub fn received_keysends(history: ListInvoicesResponse) -> Vec<ReceivedKeysend> {
    history
        .invoices
        .iter()
        .rev()
        .filter(|invoice| invoice.is_keysend && invoice.state == InvoiceState::Settled)
        .filter_map(|invoice| {
            let message = keysend_message(invoice)?;
            Some(ReceivedKeysend {
                amount: invoice.value,
                date: invoice.settled_at(),
                message,
            })
        })
        .collect()
}

/// An invoice settled over multiple HTLCs may carry the message on any
/// leg, the first leg with a message record wins. Empty messages count
/// as no message at all.
fn keysend_message(invoice: &Invoice) -> Option<String> {
    let message = invoice
        .htlcs
        .iter()
        .find_map(|htlc| records::message(&htlc.custom_records))?;
    if message.is_empty() {
        return None;
    }
    Some(message)
}

#[cfg(test)]
mod tests {
    use keyline_common::json;
    use keyline_common::model::ListInvoicesResponse;
    use keyline_common::records;

    use super::received_keysends;

    fn history(raw: json::Value) -> ListInvoicesResponse {
        json::from_value(raw).unwrap()
    }

    fn settled_keysend(value: i64, settle_date: &str, message: &str) -> json::Value {
        json::json!({
            "is_keysend": true,
            "state": "SETTLED",
            "value": value,
            "settle_date": settle_date,
            "htlcs": [{"custom_records": {"34349334": records::encode(message.as_bytes())}}]
        })
    }

    #[test]
    fn settled_keysend_with_message_is_decoded() {
        let keysends = received_keysends(history(json::json!({
            "invoices": [settled_keysend(1000, "1700000000", "hello")]
        })));
        assert_eq!(keysends.len(), 1);
        assert_eq!(keysends[0].amount, 1000);
        assert_eq!(keysends[0].date, "2023-11-14 22:13:20 UTC");
        assert_eq!(keysends[0].message, "hello");
    }

    #[test]
    fn invoice_without_records_is_suppressed() {
        let keysends = received_keysends(history(json::json!({
            "invoices": [{
                "is_keysend": true,
                "state": "SETTLED",
                "value": 1000,
                "settle_date": "1700000000",
                "htlcs": [{"custom_records": {}}]
            }]
        })));
        assert!(keysends.is_empty());
    }

    #[test]
    fn empty_message_is_suppressed() {
        let keysends = received_keysends(history(json::json!({
            "invoices": [settled_keysend(1000, "1700000000", "")]
        })));
        assert!(keysends.is_empty());
    }

    #[test]
    fn no_invoices_yields_no_keysends() {
        assert!(received_keysends(history(json::json!({ "invoices": [] }))).is_empty());
        // a response with the field missing entirely is tolerated too
        assert!(received_keysends(history(json::json!({}))).is_empty());
    }

    #[test]
    fn non_keysend_and_unsettled_invoices_never_surface() {
        let keysends = received_keysends(history(json::json!({
            "invoices": [
                {
                    "is_keysend": false,
                    "state": "SETTLED",
                    "value": 5,
                    "settle_date": "1700000000",
                    "htlcs": [{"custom_records": {"34349334": records::encode(b"regular")}}]
                },
                {
                    "is_keysend": true,
                    "state": "ACCEPTED",
                    "value": 5,
                    "settle_date": "0",
                    "htlcs": [{"custom_records": {"34349334": records::encode(b"pending")}}]
                },
                {
                    "is_keysend": true,
                    "state": "CANCELED",
                    "value": 5,
                    "settle_date": "0",
                    "htlcs": [{"custom_records": {"34349334": records::encode(b"gone")}}]
                }
            ]
        })));
        assert!(keysends.is_empty());
    }

    #[test]
    fn newest_first_batch_comes_out_oldest_first() {
        // the node returns the batch in reverse chronological order
        let keysends = received_keysends(history(json::json!({
            "invoices": [
                settled_keysend(2, "1700000100", "second"),
                settled_keysend(1, "1700000000", "first"),
            ]
        })));
        let messages: Vec<&str> = keysends.iter().map(|k| k.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn repeated_decoding_of_the_same_history_is_stable() {
        let raw = json::json!({
            "invoices": [
                settled_keysend(2, "1700000100", "b"),
                settled_keysend(1, "1700000000", "a"),
            ]
        });
        let first = received_keysends(history(raw.clone()));
        let second = received_keysends(history(raw));
        assert_eq!(first, second);
    }

    #[test]
    fn message_on_a_later_htlc_is_found() {
        let keysends = received_keysends(history(json::json!({
            "invoices": [{
                "is_keysend": true,
                "state": "SETTLED",
                "value": 42,
                "settle_date": "1700000000",
                "htlcs": [
                    {"custom_records": {}},
                    {"custom_records": {"34349334": records::encode(b"multi-path")}}
                ]
            }]
        })));
        assert_eq!(keysends.len(), 1);
        assert_eq!(keysends[0].message, "multi-path");
    }

    #[test]
    fn invoice_with_no_htlcs_is_suppressed() {
        let keysends = received_keysends(history(json::json!({
            "invoices": [{
                "is_keysend": true,
                "state": "SETTLED",
                "value": 7,
                "settle_date": "1700000000"
            }]
        })));
        assert!(keysends.is_empty());
    }
}
