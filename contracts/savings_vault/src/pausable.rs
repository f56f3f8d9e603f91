//! Emergency stop for deposit creation.
//!
//! Pausing blocks `create_deposit` only: withdrawals and emergency exits
//! must stay available so a pause can never trap user funds.

use soroban_sdk::{Env, Symbol};

use crate::errors::ERR_PAUSED;
use crate::types::DataKey;

pub fn is_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn require_not_paused(e: &Env) {
    if is_paused(e) {
        panic!("{}", ERR_PAUSED);
    }
}

/// Flip the pause flag. Admin auth is checked by the caller.
pub fn set_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&DataKey::Paused, &paused);
    let topic = if paused { "paused" } else { "unpaused" };
    e.events().publish((Symbol::new(e, topic),), paused);
}
