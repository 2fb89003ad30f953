use std::env;
use std::str::FromStr;

use crate::error;

/// Default port of the LND REST proxy.
pub const DEFAULT_REST_PORT: u64 = 8080;

/// Configuration for talking to the remote node.
///
/// Built once at process start and passed by reference to the
/// client, there is no ambient global instance.
#[derive(Clone, Debug)]
pub struct KeylineConf {
    /// Host of the LND REST endpoint, without scheme or port
    pub host: String,
    pub port: u64,
    /// Hex encoded admin macaroon, sent as bearer credential
    /// on every call. Treated as an opaque string.
    pub macaroon: String,
    pub log_level: String,
    pub log_file: Option<String>,
    /// LND usually serves a self-signed certificate, so
    /// verification is off unless the caller asks for it.
    pub tls_skip_verify: bool,
}

impl KeylineConf {
    pub fn new(host: String, macaroon: String) -> Self {
        Self {
            host,
            port: DEFAULT_REST_PORT,
            macaroon,
            log_level: "info".to_owned(),
            log_file: None,
            tls_skip_verify: true,
        }
    }

    /// Load the configuration from the process environment.
    ///
    /// `LND_HOST` and `LND_MACAROON` are required, `LND_PORT` is optional.
    pub fn from_env() -> error::Result<Self> {
        let host = env::var("LND_HOST")
            .map_err(|_| error::anyhow!("`LND_HOST` is not set in the environment"))?;
        let macaroon = env::var("LND_MACAROON")
            .map_err(|_| error::anyhow!("`LND_MACAROON` is not set in the environment"))?;
        let mut conf = Self::new(host, macaroon);
        if let Ok(port) = env::var("LND_PORT") {
            conf.port = u64::from_str(&port)
                .map_err(|err| error::anyhow!("invalid `LND_PORT` value `{port}`: {err}"))?;
        }
        Ok(conf)
    }

    /// Base URL of the REST API.
    pub fn api_base(&self) -> String {
        format!("https://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::KeylineConf;

    #[test]
    fn api_base_from_host_and_port() {
        let mut conf = KeylineConf::new("node.example.org".to_owned(), "0201deadbeef".to_owned());
        assert_eq!(conf.api_base(), "https://node.example.org:8080");
        conf.port = 8081;
        assert_eq!(conf.api_base(), "https://node.example.org:8081");
    }
}
