use ethers::types::U256;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub mod order;
pub mod time;

// ==================================================
// TOKENS
// ==================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub address: String,
    #[serde(default)]
    pub is_registered: bool,
    #[serde(default)]
    pub is_tracked: bool,
    #[serde(default)]
    pub icon_url: Option<String>,
}

pub type TokenByAddress = HashMap<String, Token>;

// ==================================================
// ORDER INPUTS
// ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Deposit,
    Receive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetToken {
    pub address: String,
    #[serde(with = "u256_decimal")]
    pub amount: U256,
}

/// Which token the user deposits and which one they receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideToAssetToken {
    pub deposit: AssetToken,
    pub receive: AssetToken,
}

impl SideToAssetToken {
    pub fn get(&self, side: Side) -> &AssetToken {
        match side {
            Side::Deposit => &self.deposit,
            Side::Receive => &self.receive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureData {
    pub hash: String,
    pub r: String,
    pub s: String,
    pub v: u8,
}

// ==================================================
// ORDER
// ==================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderToken {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub address: String,
}

impl From<&Token> for OrderToken {
    fn from(token: &Token) -> Self {
        Self {
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            decimals: token.decimals,
            address: token.address.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParty {
    pub address: String,
    pub token: OrderToken,
    pub amount: String,     // decimal string
    pub fee_amount: String, // decimal string
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub maker: OrderParty,
    pub taker: OrderParty,
    pub expiration: String, // unix seconds
    pub fee_recipient: String,
    pub salt: String,
    pub signature: SignatureData,
    pub exchange_contract: String,
    pub network_id: u64,
}

// ==================================================
// LAYOUT
// ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenWidth {
    Sm,
    Md,
    Lg,
}

impl fmt::Display for ScreenWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScreenWidth::Sm => "SM",
            ScreenWidth::Md => "MD",
            ScreenWidth::Lg => "LG",
        };
        write!(f, "{}", s)
    }
}

// ==================================================
// DEPLOYMENT / NETWORKS
// ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Ropsten,
    Rinkeby,
    Kovan,
}

impl Network {
    pub fn from_id(network_id: u64) -> Option<Self> {
        match network_id {
            1 => Some(Network::Mainnet),
            3 => Some(Network::Ropsten),
            4 => Some(Network::Rinkeby),
            42 => Some(Network::Kovan),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Ropsten => "Ropsten",
            Network::Rinkeby => "Rinkeby",
            Network::Kovan => "Kovan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EtherscanLinkSuffix {
    Address,
    #[serde(rename = "tx")]
    #[value(name = "tx")]
    Transaction,
}

impl EtherscanLinkSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EtherscanLinkSuffix::Address => "address",
            EtherscanLinkSuffix::Transaction => "tx",
        }
    }
}

/// Serde adapter that reads and writes `U256` as a base-10 string.
pub mod u256_decimal {
    use ethers::types::U256;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        U256::from_dec_str(raw.trim()).map_err(|e| D::Error::custom(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_ids_resolve_to_names() {
        assert_eq!(Network::from_id(1).map(|n| n.name()), Some("Mainnet"));
        assert_eq!(Network::from_id(42).map(|n| n.name()), Some("Kovan"));
        assert_eq!(Network::from_id(50), None);
    }

    #[test]
    fn token_json_defaults_optional_flags() {
        let token: Token = serde_json::from_str(
            r#"{"name":"Wrapped Ether","symbol":"WETH","decimals":18,"address":"0xc02a"}"#,
        )
        .unwrap();
        assert!(!token.is_registered);
        assert!(!token.is_tracked);
        assert_eq!(token.icon_url, None);
    }

    #[test]
    fn asset_amounts_are_read_as_decimal_strings() {
        let asset: AssetToken = serde_json::from_str(
            r#"{"address":"0xe41d","amount":"123456789012345678901234567890"}"#,
        )
        .unwrap();
        assert_eq!(
            asset.amount,
            U256::from_dec_str("123456789012345678901234567890").unwrap()
        );
        let back = serde_json::to_value(&asset).unwrap();
        assert_eq!(back["amount"], "123456789012345678901234567890");
    }

    #[test]
    fn sides_pick_their_asset_token() {
        let assets: SideToAssetToken = serde_json::from_str(
            r#"{"deposit":{"address":"0xc02a","amount":"1"},"receive":{"address":"0xe41d","amount":"2"}}"#,
        )
        .unwrap();
        let side: Side = serde_json::from_str(r#""receive""#).unwrap();
        assert_eq!(assets.get(side).address, "0xe41d");
        assert_eq!(assets.get(Side::Deposit).amount, U256::from(1));
    }
}
