use crate::config::GRID_SIZE;
use crate::domain::{EtherscanLinkSuffix, Network, Token};
use crate::errors::UtilError;

/// `0x3d5a...b287`
pub fn get_address_begin_and_end(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let begin: String = chars.iter().take(6).collect();
    let end: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", begin, end)
}

pub fn get_id_from_name(name: &str) -> String {
    name.replace(' ', "-")
}

pub fn get_col_size(items: u32) -> Result<u32, UtilError> {
    get_col_size_for_grid(GRID_SIZE, items)
}

pub fn get_col_size_for_grid(grid: u32, items: u32) -> Result<u32, UtilError> {
    if items == 0 || grid % items != 0 {
        return Err(UtilError::ColSize { grid, items });
    }
    Ok(grid / items)
}

/// Registered tokens are canonical. Anything else must not reuse the name of
/// a registered token, neither as its name nor as its symbol.
pub fn has_unique_name_and_symbol(tokens: &[Token], token: &Token) -> bool {
    if token.is_registered {
        return true;
    }
    !tokens
        .iter()
        .filter(|t| t.is_registered)
        .any(|t| t.name == token.name || t.name == token.symbol)
}

// More than this many hex digits no longer fits a finite f64.
const MAX_FINITE_HEX_DIGITS: usize = 256;

/// Finite decimal number, or a `0x` hex literal the way wallets report
/// quantities.
pub fn is_numeric(n: &str) -> bool {
    let n = n.trim();
    if let Some(hex) = n.strip_prefix("0x").or_else(|| n.strip_prefix("0X")) {
        return !hex.is_empty()
            && hex.len() <= MAX_FINITE_HEX_DIGITS
            && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    n.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

pub fn get_etherscan_link_if_exists(
    address_or_tx_hash: &str,
    network_id: u64,
    suffix: EtherscanLinkSuffix,
) -> Option<String> {
    let network = Network::from_id(network_id)?;
    let prefix = match network {
        Network::Mainnet => String::new(),
        other => format!("{}.", other.name().to_lowercase()),
    };
    Some(format!(
        "https://{}etherscan.io/{}/{}",
        prefix,
        suffix.as_str(),
        address_or_tx_hash
    ))
}
