use super::{Order, OrderParty, OrderToken, Side, SideToAssetToken, SignatureData, Token, TokenByAddress};
use crate::errors::UtilError;
use crate::logging::log_order_generated;
use ethers::types::U256;
use rand::RngCore;

/// Everything needed to assemble an order for the 0x exchange contract.
#[derive(Debug, Clone)]
pub struct OrderParams<'a> {
    pub network_id: u64,
    pub exchange_contract: &'a str,
    pub side_to_asset_token: &'a SideToAssetToken,
    pub order_expiry_timestamp: U256,
    pub order_taker_address: &'a str,
    pub order_maker_address: &'a str,
    pub maker_fee: U256,
    pub taker_fee: U256,
    pub fee_recipient: &'a str,
    pub signature_data: &'a SignatureData,
    pub token_by_address: &'a TokenByAddress,
    pub order_salt: U256,
}

fn lookup_token<'a>(
    token_by_address: &'a TokenByAddress,
    side_to_asset_token: &SideToAssetToken,
    side: Side,
) -> Result<&'a Token, UtilError> {
    let address = &side_to_asset_token.get(side).address;
    token_by_address
        .get(address)
        .ok_or_else(|| UtilError::TokenNotFound(address.clone()))
}

/// Builds the order record. The maker deposits, the taker receives;
/// every numeric field is stored as a base-10 string.
pub fn generate_order(params: &OrderParams<'_>) -> Result<Order, UtilError> {
    let sides = params.side_to_asset_token;
    let maker_token = lookup_token(params.token_by_address, sides, Side::Deposit)?;
    let taker_token = lookup_token(params.token_by_address, sides, Side::Receive)?;

    let order = Order {
        maker: OrderParty {
            address: params.order_maker_address.to_string(),
            token: OrderToken::from(maker_token),
            amount: sides.get(Side::Deposit).amount.to_string(),
            fee_amount: params.maker_fee.to_string(),
        },
        taker: OrderParty {
            address: params.order_taker_address.to_string(),
            token: OrderToken::from(taker_token),
            amount: sides.get(Side::Receive).amount.to_string(),
            fee_amount: params.taker_fee.to_string(),
        },
        expiration: params.order_expiry_timestamp.to_string(),
        fee_recipient: params.fee_recipient.to_string(),
        salt: params.order_salt.to_string(),
        signature: params.signature_data.clone(),
        exchange_contract: params.exchange_contract.to_string(),
        network_id: params.network_id,
    };

    log_order_generated(&order);
    Ok(order)
}

/// Random salt in `[0, 2^256 - 1)`.
pub fn generate_pseudo_random_salt() -> U256 {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    let salt = U256::from_big_endian(&bytes);
    if salt == U256::MAX {
        salt - 1
    } else {
        salt
    }
}
