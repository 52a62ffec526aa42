//! Human readable messages for the error codes reported by the 0x contracts
//! wrapper. Both code spaces are closed enums so a new code fails to compile
//! until it gets a message.

use crate::logging::log_untranslated_error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZeroExError {
    ExchangeContractDoesNotExist,
    EtherTokenContractDoesNotExist,
    TokenTransferProxyContractDoesNotExist,
    TokenRegistryContractDoesNotExist,
    TokenContractDoesNotExist,
    ZrxContractDoesNotExist,
    UnhandledError,
    UserHasNoAssociatedAddress,
    InvalidSignature,
    ContractNotDeployedOnNetwork,
    InvalidJump,
    OutOfGas,
    NoNetworkId,
}

impl ZeroExError {
    pub const ALL: [ZeroExError; 13] = [
        ZeroExError::ExchangeContractDoesNotExist,
        ZeroExError::EtherTokenContractDoesNotExist,
        ZeroExError::TokenTransferProxyContractDoesNotExist,
        ZeroExError::TokenRegistryContractDoesNotExist,
        ZeroExError::TokenContractDoesNotExist,
        ZeroExError::ZrxContractDoesNotExist,
        ZeroExError::UnhandledError,
        ZeroExError::UserHasNoAssociatedAddress,
        ZeroExError::InvalidSignature,
        ZeroExError::ContractNotDeployedOnNetwork,
        ZeroExError::InvalidJump,
        ZeroExError::OutOfGas,
        ZeroExError::NoNetworkId,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ZeroExError::ExchangeContractDoesNotExist => "EXCHANGE_CONTRACT_DOES_NOT_EXIST",
            ZeroExError::EtherTokenContractDoesNotExist => "ETHER_TOKEN_CONTRACT_DOES_NOT_EXIST",
            ZeroExError::TokenTransferProxyContractDoesNotExist => {
                "TOKEN_TRANSFER_PROXY_CONTRACT_DOES_NOT_EXIST"
            }
            ZeroExError::TokenRegistryContractDoesNotExist => "TOKEN_REGISTRY_CONTRACT_DOES_NOT_EXIST",
            ZeroExError::TokenContractDoesNotExist => "TOKEN_CONTRACT_DOES_NOT_EXIST",
            ZeroExError::ZrxContractDoesNotExist => "ZRX_CONTRACT_DOES_NOT_EXIST",
            ZeroExError::UnhandledError => "UNHANDLED_ERROR",
            ZeroExError::UserHasNoAssociatedAddress => "USER_HAS_NO_ASSOCIATED_ADDRESSES",
            ZeroExError::InvalidSignature => "INVALID_SIGNATURE",
            ZeroExError::ContractNotDeployedOnNetwork => "CONTRACT_NOT_DEPLOYED_ON_NETWORK",
            ZeroExError::InvalidJump => "INVALID_JUMP",
            ZeroExError::OutOfGas => "OUT_OF_GAS",
            ZeroExError::NoNetworkId => "NO_NETWORK_ID",
        }
    }

    pub fn human_readable(&self) -> &'static str {
        match self {
            ZeroExError::ExchangeContractDoesNotExist => "Exchange contract does not exist",
            ZeroExError::EtherTokenContractDoesNotExist => "EtherToken contract does not exist",
            ZeroExError::TokenTransferProxyContractDoesNotExist => {
                "TokenTransferProxy contract does not exist"
            }
            ZeroExError::TokenRegistryContractDoesNotExist => "TokenRegistry contract does not exist",
            ZeroExError::TokenContractDoesNotExist => "Token contract does not exist",
            ZeroExError::ZrxContractDoesNotExist => "ZRX contract does not exist",
            ZeroExError::UnhandledError => "Unhandled error occured",
            ZeroExError::UserHasNoAssociatedAddress => "User has no addresses available",
            ZeroExError::InvalidSignature => "Order signature is not valid",
            ZeroExError::ContractNotDeployedOnNetwork => "Contract is not deployed on the detected network",
            ZeroExError::InvalidJump => "Invalid jump occured while executing the transaction",
            ZeroExError::OutOfGas => "Transaction ran out of gas",
            ZeroExError::NoNetworkId => "No network id detected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeContractErr {
    OrderFillExpired,
    OrderCancelExpired,
    OrderCancelAmountZero,
    OrderAlreadyCancelledOrFilled,
    OrderFillAmountZero,
    OrderRemainingFillAmountZero,
    OrderFillRoundingError,
    InsufficientTakerBalance,
    InsufficientTakerAllowance,
    InsufficientMakerBalance,
    InsufficientMakerAllowance,
    InsufficientTakerFeeBalance,
    InsufficientTakerFeeAllowance,
    InsufficientMakerFeeBalance,
    InsufficientMakerFeeAllowance,
    TransactionSenderIsNotFillOrderTaker,
    InsufficientRemainingFillAmount,
}

impl ExchangeContractErr {
    pub const ALL: [ExchangeContractErr; 17] = [
        ExchangeContractErr::OrderFillExpired,
        ExchangeContractErr::OrderCancelExpired,
        ExchangeContractErr::OrderCancelAmountZero,
        ExchangeContractErr::OrderAlreadyCancelledOrFilled,
        ExchangeContractErr::OrderFillAmountZero,
        ExchangeContractErr::OrderRemainingFillAmountZero,
        ExchangeContractErr::OrderFillRoundingError,
        ExchangeContractErr::InsufficientTakerBalance,
        ExchangeContractErr::InsufficientTakerAllowance,
        ExchangeContractErr::InsufficientMakerBalance,
        ExchangeContractErr::InsufficientMakerAllowance,
        ExchangeContractErr::InsufficientTakerFeeBalance,
        ExchangeContractErr::InsufficientTakerFeeAllowance,
        ExchangeContractErr::InsufficientMakerFeeBalance,
        ExchangeContractErr::InsufficientMakerFeeAllowance,
        ExchangeContractErr::TransactionSenderIsNotFillOrderTaker,
        ExchangeContractErr::InsufficientRemainingFillAmount,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExchangeContractErr::OrderFillExpired => "ORDER_FILL_EXPIRED",
            ExchangeContractErr::OrderCancelExpired => "ORDER_CANCEL_EXPIRED",
            ExchangeContractErr::OrderCancelAmountZero => "ORDER_CANCEL_AMOUNT_ZERO",
            ExchangeContractErr::OrderAlreadyCancelledOrFilled => "ORDER_ALREADY_CANCELLED_OR_FILLED",
            ExchangeContractErr::OrderFillAmountZero => "ORDER_FILL_AMOUNT_ZERO",
            ExchangeContractErr::OrderRemainingFillAmountZero => "ORDER_REMAINING_FILL_AMOUNT_ZERO",
            ExchangeContractErr::OrderFillRoundingError => "ORDER_FILL_ROUNDING_ERROR",
            ExchangeContractErr::InsufficientTakerBalance => "INSUFFICIENT_TAKER_BALANCE",
            ExchangeContractErr::InsufficientTakerAllowance => "INSUFFICIENT_TAKER_ALLOWANCE",
            ExchangeContractErr::InsufficientMakerBalance => "INSUFFICIENT_MAKER_BALANCE",
            ExchangeContractErr::InsufficientMakerAllowance => "INSUFFICIENT_MAKER_ALLOWANCE",
            ExchangeContractErr::InsufficientTakerFeeBalance => "INSUFFICIENT_TAKER_FEE_BALANCE",
            ExchangeContractErr::InsufficientTakerFeeAllowance => "INSUFFICIENT_TAKER_FEE_ALLOWANCE",
            ExchangeContractErr::InsufficientMakerFeeBalance => "INSUFFICIENT_MAKER_FEE_BALANCE",
            ExchangeContractErr::InsufficientMakerFeeAllowance => "INSUFFICIENT_MAKER_FEE_ALLOWANCE",
            ExchangeContractErr::TransactionSenderIsNotFillOrderTaker => {
                "TRANSACTION_SENDER_IS_NOT_FILL_ORDER_TAKER"
            }
            ExchangeContractErr::InsufficientRemainingFillAmount => "INSUFFICIENT_REMAINING_FILL_AMOUNT",
        }
    }

    pub fn human_readable(&self, taker_address: &str) -> String {
        let msg = match self {
            ExchangeContractErr::OrderFillExpired | ExchangeContractErr::OrderCancelExpired => {
                "This order has expired"
            }
            ExchangeContractErr::OrderCancelAmountZero => "Order cancel amount can't be 0",
            ExchangeContractErr::OrderAlreadyCancelledOrFilled
            | ExchangeContractErr::OrderRemainingFillAmountZero => {
                "This order has already been completely filled or cancelled"
            }
            ExchangeContractErr::OrderFillAmountZero => "Order fill amount can't be 0",
            ExchangeContractErr::OrderFillRoundingError => "Rounding error will occur when filling this order",
            ExchangeContractErr::InsufficientTakerBalance => {
                "Taker no longer has a sufficient balance to complete this order"
            }
            ExchangeContractErr::InsufficientTakerAllowance => {
                "Taker no longer has a sufficient allowance to complete this order"
            }
            ExchangeContractErr::InsufficientMakerBalance => {
                "Maker no longer has a sufficient balance to complete this order"
            }
            ExchangeContractErr::InsufficientMakerAllowance => {
                "Maker no longer has a sufficient allowance to complete this order"
            }
            ExchangeContractErr::InsufficientTakerFeeBalance => "Taker no longer has a sufficient balance to pay fees",
            ExchangeContractErr::InsufficientTakerFeeAllowance => {
                "Taker no longer has a sufficient allowance to pay fees"
            }
            ExchangeContractErr::InsufficientMakerFeeBalance => "Maker no longer has a sufficient balance to pay fees",
            ExchangeContractErr::InsufficientMakerFeeAllowance => {
                "Maker no longer has a sufficient allowance to pay fees"
            }
            ExchangeContractErr::TransactionSenderIsNotFillOrderTaker => {
                return format!("This order can only be filled by {}", taker_address);
            }
            ExchangeContractErr::InsufficientRemainingFillAmount => "Insufficient remaining fill amount",
        };
        msg.to_string()
    }
}

/// Any error the contracts wrapper can surface to the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractError {
    ZeroEx(ZeroExError),
    Exchange(ExchangeContractErr),
}

impl ContractError {
    pub fn code(&self) -> &'static str {
        match self {
            ContractError::ZeroEx(e) => e.code(),
            ContractError::Exchange(e) => e.code(),
        }
    }

    pub fn all() -> impl Iterator<Item = ContractError> {
        ExchangeContractErr::ALL
            .into_iter()
            .map(ContractError::Exchange)
            .chain(ZeroExError::ALL.into_iter().map(ContractError::ZeroEx))
    }
}

impl From<ZeroExError> for ContractError {
    fn from(e: ZeroExError) -> Self {
        ContractError::ZeroEx(e)
    }
}

impl From<ExchangeContractErr> for ContractError {
    fn from(e: ExchangeContractErr) -> Self {
        ContractError::Exchange(e)
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown 0x error code: {}", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl FromStr for ContractError {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        ContractError::all()
            .find(|e| e.code() == code)
            .ok_or_else(|| UnknownErrorCode(code.to_string()))
    }
}

pub fn zero_ex_err_to_human_readable_err_msg(error: ContractError, taker_address: &str) -> String {
    match error {
        ContractError::Exchange(e) => e.human_readable(taker_address),
        ContractError::ZeroEx(e) => e.human_readable().to_string(),
    }
}

/// Same as [`zero_ex_err_to_human_readable_err_msg`] for codes that arrive as
/// raw strings. `None` when the code belongs to neither table.
pub fn translate_error_code(code: &str, taker_address: &str) -> Option<String> {
    match code.parse::<ContractError>() {
        Ok(error) => Some(zero_ex_err_to_human_readable_err_msg(error, taker_address)),
        Err(e) => {
            log_untranslated_error(&e.0);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const TAKER: &str = "0x5409ed021d9299bf6814279a6a1411a7e866a631";

    #[test]
    fn every_known_code_has_a_message() {
        for error in ContractError::all() {
            let msg = translate_error_code(error.code(), TAKER);
            assert!(msg.is_some(), "no message for {}", error);
            assert!(!msg.unwrap().is_empty());
        }
        assert_eq!(ContractError::all().count(), 30);
    }

    #[test]
    fn wire_codes_are_disjoint() {
        let codes: HashSet<_> = ContractError::all().map(|e| e.code()).collect();
        assert_eq!(codes.len(), 30);
    }

    #[test]
    fn unknown_codes_are_not_translated() {
        assert_eq!(translate_error_code("ORDER_FILL_EXPLODED", TAKER), None);
        assert_eq!(translate_error_code("", TAKER), None);
        assert_eq!(translate_error_code("order_fill_expired", TAKER), None);
    }

    #[test]
    fn fill_order_taker_message_names_the_taker() {
        let msg = zero_ex_err_to_human_readable_err_msg(
            ExchangeContractErr::TransactionSenderIsNotFillOrderTaker.into(),
            TAKER,
        );
        assert_eq!(msg, format!("This order can only be filled by {}", TAKER));
    }

    #[test]
    fn static_messages() {
        assert_eq!(
            zero_ex_err_to_human_readable_err_msg(ZeroExError::OutOfGas.into(), TAKER),
            "Transaction ran out of gas"
        );
        assert_eq!(
            translate_error_code("ORDER_CANCEL_EXPIRED", TAKER).as_deref(),
            Some("This order has expired")
        );
        assert_eq!(
            translate_error_code("ORDER_REMAINING_FILL_AMOUNT_ZERO", TAKER).as_deref(),
            Some("This order has already been completely filled or cancelled")
        );
    }
}
