use clap::{Parser, Subcommand};

use keyline_common::conf::KeylineConf;
use keyline_common::error;

#[derive(Subcommand, Debug, Clone)]
pub enum KeylineCliSubcommand {
    /// Show the identity of the node we are connected to
    Getinfo,
    /// Send a keysend payment with an attached message
    Send {
        /// Destination node public key, hex encoded
        destination: String,
        /// Amount in satoshis
        amount: u64,
        /// Freeform message to attach
        #[arg(default_value = "")]
        message: String,
    },
    /// List the keysend messages received by the node, oldest first
    Inbox,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "keyline-cli",
    about = "Keysend messaging over a remote LND node",
    version = env!("CARGO_PKG_VERSION"),
    long_about = None
)]
pub struct KeylineCliArgs {
    /// Override the node REST host, by default from `LND_HOST`
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Override the node REST port
    #[arg(long = "port")]
    pub port: Option<u64>,

    /// Override the admin macaroon, by default from `LND_MACAROON`
    #[arg(long = "macaroon")]
    pub macaroon: Option<String>,

    /// Set the log level, by default is `info`
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Redirect the logs on the file
    #[arg(long = "log-file")]
    pub log_file: Option<String>,

    /// Verify the node TLS certificate, off by default because LND
    /// usually serves a self-signed one
    #[arg(long = "tls-verify")]
    pub tls_verify: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub subcommand: KeylineCliSubcommand,
}

impl TryInto<KeylineConf> for KeylineCliArgs {
    type Error = error::Error;

    fn try_into(self) -> Result<KeylineConf, Self::Error> {
        let mut conf = match (self.host, self.macaroon) {
            // the environment is not needed when both are on the command line
            (Some(host), Some(macaroon)) => KeylineConf::new(host, macaroon),
            (host, macaroon) => {
                let mut conf = KeylineConf::from_env()?;
                if let Some(host) = host {
                    conf.host = host;
                }
                if let Some(macaroon) = macaroon {
                    conf.macaroon = macaroon;
                }
                conf
            }
        };

        // Override the conf with the args from the cli
        if let Some(port) = self.port {
            conf.port = port;
        }
        if self.log_level.is_some() {
            conf.log_level = self.log_level.unwrap();
        }
        if self.log_file.is_some() {
            conf.log_file = self.log_file;
        }
        if self.tls_verify {
            conf.tls_skip_verify = false;
        }
        Ok(conf)
    }
}

pub fn parse_args() -> Result<KeylineCliArgs, error::Error> {
    Ok(KeylineCliArgs::parse())
}
