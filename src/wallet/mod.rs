// Predicates over strings reported by the injected web3 provider.

const PARITY_MARKER: &str = "Parity";
const TEST_RPC_MARKER: &str = "TestRPC";

const METAMASK_DENIAL_ERR_MSG: &str = "User denied";
const PARITY_SIGNER_DENIAL_ERR_MSG: &str = "Request has been rejected";
const LEDGER_DENIAL_ERR_MSG: &str = "Invalid status 6985";

pub fn is_parity_node(node_version: &str) -> bool {
    node_version.contains(PARITY_MARKER)
}

pub fn is_test_rpc(node_version: &str) -> bool {
    node_version.contains(TEST_RPC_MARKER)
}

/// True when a sign / send error from the wallet means the user rejected
/// the prompt (MetaMask, Parity Signer or Ledger).
pub fn did_user_deny_web3_request(err_msg: &str) -> bool {
    [
        METAMASK_DENIAL_ERR_MSG,
        PARITY_SIGNER_DENIAL_ERR_MSG,
        LEDGER_DENIAL_ERR_MSG,
    ]
    .iter()
    .any(|phrase| err_msg.contains(phrase))
}
