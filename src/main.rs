use zeroex_portal_utils::*;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use config::{Args, Command, Config};
use ethers::types::U256;
use log::info;
use serde::Deserialize;
use std::path::Path;
use tokio::time::Duration;

use domain::order::{generate_order, generate_pseudo_random_salt, OrderParams};
use domain::time::{convert_to_readable_date_time_from_unix_timestamp, initial_order_expiry_unix_timestamp_sec};
use domain::{u256_decimal, SideToAssetToken, SignatureData, Token, TokenByAddress};
use environment::{get_current_environment, get_screen_width, StaticEnvironment};
use u2f::{is_u2f_supported_async, StaticU2fProbe};

// ===============================
// ORDER REQUEST FILE
// ===============================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderRequest {
    network_id: Option<u64>,
    exchange_contract: String,
    side_to_asset_token: SideToAssetToken,
    #[serde(default, with = "opt_u256")]
    expiration: Option<U256>,
    taker: String,
    maker: String,
    #[serde(with = "u256_decimal")]
    maker_fee: U256,
    #[serde(with = "u256_decimal")]
    taker_fee: U256,
    fee_recipient: String,
    signature: SignatureData,
    tokens: Vec<Token>,
    #[serde(default, with = "opt_u256")]
    salt: Option<U256>,
}

mod opt_u256 {
    use ethers::types::U256;
    use serde::{de::Error as _, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => U256::from_dec_str(raw.trim())
                .map(Some)
                .map_err(|e| D::Error::custom(format!("{:?}", e))),
            None => Ok(None),
        }
    }
}

fn build_order(path: &Path, config: &Config) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading order request {}", path.display()))?;
    let request: OrderRequest = serde_json::from_str(&content)?;

    let token_by_address: TokenByAddress = request
        .tokens
        .iter()
        .map(|t| (t.address.clone(), t.clone()))
        .collect();

    let params = OrderParams {
        network_id: request.network_id.unwrap_or(config.network_id),
        exchange_contract: &request.exchange_contract,
        side_to_asset_token: &request.side_to_asset_token,
        order_expiry_timestamp: request
            .expiration
            .unwrap_or_else(initial_order_expiry_unix_timestamp_sec),
        order_taker_address: &request.taker,
        order_maker_address: &request.maker,
        maker_fee: request.maker_fee,
        taker_fee: request.taker_fee,
        fee_recipient: &request.fee_recipient,
        signature_data: &request.signature,
        token_by_address: &token_by_address,
        order_salt: request.salt.unwrap_or_else(generate_pseudo_random_salt),
    };

    match generate_order(&params) {
        Ok(order) => {
            println!("{}", serde_json::to_string_pretty(&order)?);
            Ok(())
        }
        Err(e) => {
            logging::log_rejection(&e.to_string());
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    match args.command {
        Command::Order { file } => build_order(&file, &config)?,

        Command::Explain { code, taker } => match translation::translate_error_code(&code, &taker) {
            Some(msg) => println!("{}", msg),
            None => println!("{}", format!("No translation for {}", code).yellow()),
        },

        Command::Expiry => println!("{}", initial_order_expiry_unix_timestamp_sec()),

        Command::Readable { timestamp } => {
            println!("{}", convert_to_readable_date_time_from_unix_timestamp(timestamp)?);
        }

        Command::ScreenWidth {
            width_px,
            font_size_px,
        } => {
            let env = StaticEnvironment {
                inner_width: Some(width_px),
                root_font_size_px: font_size_px,
                ..StaticEnvironment::default()
            };
            println!("{}", get_screen_width(&env, &config.layout));
        }

        Command::Environment { host } => {
            let env = StaticEnvironment {
                host: host.unwrap_or_else(|| config.portal_host()),
                ..StaticEnvironment::default()
            };
            println!("{}", get_current_environment(&env, &config.domains).as_str());
        }

        Command::Etherscan {
            value,
            network_id,
            suffix,
        } => {
            let network_id = network_id.unwrap_or(config.network_id);
            match format::get_etherscan_link_if_exists(&value, network_id, suffix) {
                Some(link) => println!("{}", link),
                None => println!("{}", format!("No etherscan for network {}", network_id).yellow()),
            }
        }

        Command::Node { version } => {
            println!("parity:  {}", wallet::is_parity_node(&version));
            println!("testrpc: {}", wallet::is_test_rpc(&version));
        }

        Command::Denied { message } => {
            if wallet::did_user_deny_web3_request(&message) {
                println!("{}", "user denied the request".red());
            } else {
                println!("{}", "not a user denial".green());
            }
        }

        Command::ColSize { items } => {
            let size = format::get_col_size_for_grid(config.layout.grid_size, items)?;
            println!("{}", size);
        }

        Command::Address { address } => println!("{}", format::get_address_begin_and_end(&address)),

        Command::U2f {
            legacy_hook,
            timeout_ms,
        } => {
            let probe = StaticU2fProbe {
                legacy_hook,
                api_version: None,
            };
            let timeout = Duration::from_millis(timeout_ms.unwrap_or_else(|| config.u2f_timeout_ms()));
            info!("🔐 Probing U2F (timeout {:?})", timeout);
            let supported = is_u2f_supported_async(&probe, timeout).await;
            println!("{}", supported);
        }
    }

    Ok(())
}
