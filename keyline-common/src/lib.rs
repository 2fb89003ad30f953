pub mod conf;
pub mod logger;
pub mod model;
pub mod records;

pub mod error {
    pub use anyhow::*;
}

pub mod json {
    pub use serde::de::DeserializeOwned;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::*;

    pub mod prelude {
        pub use serde::*;
    }
}

pub use bitcoin;
pub use bitcoin::secp256k1;
