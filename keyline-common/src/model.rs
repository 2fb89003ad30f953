mod getinfo;
mod invoice;
mod keysend;

pub use getinfo::GetInfo;
pub use invoice::{Invoice, InvoiceHtlc, InvoiceState, ListInvoicesResponse};

pub mod request {
    pub use crate::model::keysend::request::*;
}

pub mod response {
    pub use crate::model::getinfo::GetInfo;
    pub use crate::model::invoice::ListInvoicesResponse;
    pub use crate::model::keysend::response::*;
}
