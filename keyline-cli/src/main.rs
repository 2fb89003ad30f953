mod args;

use std::path::PathBuf;
use std::process::exit;

use radicle_term as term;

use keyline_client::LndRest;
use keyline_common::conf::KeylineConf;
use keyline_common::error;
use keyline_common::json;
use keyline_common::logger;

use crate::args::{KeylineCliArgs, KeylineCliSubcommand};

#[tokio::main]
async fn main() -> error::Result<()> {
    let args: KeylineCliArgs = match args::parse_args() {
        Ok(args) => args,
        Err(err) => {
            term::error(format!("{err}"));
            exit(1);
        }
    };
    let conf: KeylineConf = match args.clone().try_into() {
        Ok(conf) => conf,
        Err(err) => {
            term::error(format!("{err}"));
            exit(1);
        }
    };
    logger::init(&conf.log_level, conf.log_file.clone().map(PathBuf::from))?;

    let resp = run(&args.subcommand, &conf).await;
    log::debug!(target: "keyline-cli", "{:?}", resp);

    match resp {
        Ok(resp) => {
            term::print(json::to_string_pretty(&resp)?);
        }
        Err(err) => {
            term::error(format!("{err}"));
            exit(1);
        }
    }
    Ok(())
}

async fn run(subcommand: &KeylineCliSubcommand, conf: &KeylineConf) -> error::Result<json::Value> {
    let client = LndRest::new(conf)?;
    let resp = match subcommand {
        KeylineCliSubcommand::Getinfo => json::to_value(client.get_info().await?)?,
        KeylineCliSubcommand::Send {
            destination,
            amount,
            message,
        } => client.send_keysend(destination, *amount, message).await?,
        KeylineCliSubcommand::Inbox => json::to_value(client.list_received_keysends().await?)?,
    };
    Ok(resp)
}
