//! Token ledger integration.
//! Centralizes token configuration, allowance preflight, and transfers.
//!
//! Transfers are synchronous and all-or-nothing: a failure inside the token
//! contract traps the whole invocation, so no vault state written earlier in
//! the operation survives. The allowance preflight exists to fail with a
//! specific message before any state is touched.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

use crate::errors::{ERR_INSUFFICIENT_ALLOWANCE, ERR_INVALID_AMOUNT, ERR_TOKEN_NOT_SET};
use crate::types::DataKey;

/// Returns the configured deposit asset. Panics if not configured.
pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic!("{}", ERR_TOKEN_NOT_SET))
}

fn token_client(e: &Env) -> TokenClient<'_> {
    let token = get_token(e);
    TokenClient::new(e, &token)
}

/// Checks the owner has approved the vault to spend `amount`.
pub fn require_allowance(e: &Env, owner: &Address, amount: i128) {
    if amount <= 0 {
        panic!("{}", ERR_INVALID_AMOUNT);
    }
    let contract = e.current_contract_address();
    let allowance = token_client(e).allowance(owner, &contract);
    if allowance < amount {
        panic!("{}", ERR_INSUFFICIENT_ALLOWANCE);
    }
}

/// Pulls `amount` from `owner` into the vault. Requires prior approval.
pub fn pull_from(e: &Env, owner: &Address, amount: i128) {
    require_allowance(e, owner, amount);
    let contract = e.current_contract_address();
    token_client(e).transfer_from(&contract, owner, &contract, &amount);
}

/// Pays `amount` from the vault to `recipient`. No-op for zero.
pub fn pay_out(e: &Env, recipient: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let contract = e.current_contract_address();
    token_client(e).transfer(&contract, recipient, &amount);
}
