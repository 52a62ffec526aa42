use ethers::types::U256;
use zeroex_portal_utils::domain::order::{generate_order, OrderParams};
use zeroex_portal_utils::domain::time::{
    convert_to_date_time_from_unix_timestamp, initial_order_expiry_unix_timestamp_sec,
};
use zeroex_portal_utils::domain::{SideToAssetToken, SignatureData, Token, TokenByAddress};
use zeroex_portal_utils::format::{get_address_begin_and_end, has_unique_name_and_symbol};
use zeroex_portal_utils::translation::{translate_error_code, ContractError};
use zeroex_portal_utils::wallet::did_user_deny_web3_request;

const TOKENS: &str = r#"[
    {"name":"0x Protocol Token","symbol":"ZRX","decimals":18,
     "address":"0xe41d2489571d322189246dafa5ebde1f4699f498","isRegistered":true},
    {"name":"Wrapped Ether","symbol":"WETH","decimals":18,
     "address":"0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2","isRegistered":true}
]"#;

const SIDES: &str = r#"{
    "deposit": {"address":"0xe41d2489571d322189246dafa5ebde1f4699f498","amount":"1000000000000000000000"},
    "receive": {"address":"0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2","amount":"250000000000000001"}
}"#;

#[test]
fn order_from_json_inputs() {
    let tokens: Vec<Token> = serde_json::from_str(TOKENS).unwrap();
    let token_by_address: TokenByAddress = tokens
        .iter()
        .map(|t| (t.address.clone(), t.clone()))
        .collect();
    let sides: SideToAssetToken = serde_json::from_str(SIDES).unwrap();
    let signature = SignatureData {
        hash: "0x1f".to_string(),
        r: "0xaa".to_string(),
        s: "0xbb".to_string(),
        v: 28,
    };
    let maker = "0x5409ed021d9299bf6814279a6a1411a7e866a631";

    let order = generate_order(&OrderParams {
        network_id: 42,
        exchange_contract: "0x90fe2af704b34e0224bf2299c838e04d4dcf1364",
        side_to_asset_token: &sides,
        order_expiry_timestamp: initial_order_expiry_unix_timestamp_sec(),
        order_taker_address: "0x0000000000000000000000000000000000000000",
        order_maker_address: maker,
        maker_fee: U256::zero(),
        taker_fee: U256::zero(),
        fee_recipient: "0x0000000000000000000000000000000000000000",
        signature_data: &signature,
        token_by_address: &token_by_address,
        order_salt: U256::from_dec_str("35465347265789543275").unwrap(),
    })
    .unwrap();

    assert_eq!(order.maker.amount, "1000000000000000000000");
    assert_eq!(order.taker.amount, "250000000000000001");
    assert_eq!(order.salt, "35465347265789543275");
    assert_eq!(order.expiration, "2524608000");
    assert_eq!(get_address_begin_and_end(&order.maker.address), "0x5409...a631");

    let expiry: i64 = order.expiration.parse().unwrap();
    let expiry = convert_to_date_time_from_unix_timestamp(expiry).unwrap();
    assert_eq!(expiry.to_rfc3339(), "2050-01-01T00:00:00+00:00");

    for token in &tokens {
        assert!(has_unique_name_and_symbol(&tokens, token));
    }
}

#[test]
fn failed_fill_is_explained_to_the_user() {
    let taker = "0x6ecbe1db9ef729cbe972c83fb886247691fb6beb";
    let code = ContractError::all()
        .find(|e| e.code() == "TRANSACTION_SENDER_IS_NOT_FILL_ORDER_TAKER")
        .unwrap();
    assert_eq!(
        translate_error_code(code.code(), taker).unwrap(),
        format!("This order can only be filled by {}", taker)
    );
    assert_eq!(translate_error_code("NOT_A_0X_CODE", taker), None);
    assert!(did_user_deny_web3_request("User denied message signature"));
}
