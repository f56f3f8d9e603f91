//! Per-user aggregate bookkeeping.
//!
//! Counters are updated inside the same invocation as the deposit or
//! position mutation they describe, and are never independently
//! authoritative: everything here can be rebuilt from the deposit log.

use soroban_sdk::{Address, Env};

use crate::errors::ERR_STATS_OVERFLOW;
use crate::storage;

fn checked_add(a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic!("{}", ERR_STATS_OVERFLOW))
}

/// Record a new deposit: grows totals, bumps counters, tracks the plan.
pub fn record_deposit(e: &Env, owner: &Address, amount: i128, plan_id: u32, now: u64) {
    let mut stats = storage::load_user_stats(e, owner);
    stats.total_deposited = checked_add(stats.total_deposited, amount);
    stats.transaction_count = stats
        .transaction_count
        .checked_add(1)
        .unwrap_or_else(|| panic!("{}", ERR_STATS_OVERFLOW));
    stats.active_deposits = stats
        .active_deposits
        .checked_add(1)
        .unwrap_or_else(|| panic!("{}", ERR_STATS_OVERFLOW));
    stats.last_activity = now;
    stats.preferred_plan = plan_id;
    storage::save_user_stats(e, owner, &stats);
}

/// Record a matured withdrawal: interest and bonus count as earnings.
pub fn record_withdrawal(
    e: &Env,
    owner: &Address,
    payout: i128,
    interest: i128,
    bonus: i128,
    now: u64,
) {
    let mut stats = storage::load_user_stats(e, owner);
    stats.total_earned = checked_add(stats.total_earned, checked_add(interest, bonus));
    stats.total_withdrawn = checked_add(stats.total_withdrawn, payout);
    stats.transaction_count = stats.transaction_count.saturating_add(1);
    stats.active_deposits = stats.active_deposits.saturating_sub(1);
    stats.last_activity = now;
    storage::save_user_stats(e, owner, &stats);
}

/// Record an emergency exit: nothing earned, the net payout leaves.
pub fn record_emergency(e: &Env, owner: &Address, payout: i128, now: u64) {
    let mut stats = storage::load_user_stats(e, owner);
    stats.total_withdrawn = checked_add(stats.total_withdrawn, payout);
    stats.transaction_count = stats.transaction_count.saturating_add(1);
    stats.active_deposits = stats.active_deposits.saturating_sub(1);
    stats.last_activity = now;
    storage::save_user_stats(e, owner, &stats);
}
