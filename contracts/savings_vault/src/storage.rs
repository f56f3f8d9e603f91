//! Typed helpers over Soroban's storage tiers.
//!
//! Instance storage (contract-lifetime TTL) holds singleton configuration:
//! admin, token, badge contract, pause flag, global multiplier, compounding
//! method, reward pool, deposit counter, plan-id index. Persistent storage
//! (per-entry TTL) holds plans, deposits, positions, owner indexes, and user
//! aggregates.
//!
//! Instance TTL is bumped by 7 days whenever it falls below 1 day remaining;
//! persistent TTL by 30 days whenever it falls below 7 days remaining.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::{ERR_DEPOSIT_NOT_FOUND, ERR_POSITION_NOT_FOUND, ERR_UNKNOWN_PLAN};
use crate::types::{
    CompoundMethod, DataKey, Deposit, RewardPool, SavingsPlan, UserStats, YieldPosition,
};

// ── TTL constants ────────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Deposit counter ──────────────────────────────────────────────────────

/// Atomically reads, increments, and stores the deposit id counter.
/// Ids start at 1; 0 is never a valid deposit.
pub fn next_deposit_id(e: &Env) -> u64 {
    bump_instance(e);
    let next: u64 = e
        .storage()
        .instance()
        .get(&DataKey::DepositCounter)
        .unwrap_or(0_u64)
        + 1;
    e.storage().instance().set(&DataKey::DepositCounter, &next);
    next
}

// ── Plans ────────────────────────────────────────────────────────────────

pub fn save_plan(e: &Env, plan: &SavingsPlan) {
    let key = DataKey::Plan(plan.id);
    let known = e.storage().persistent().has(&key);
    e.storage().persistent().set(&key, plan);
    bump_persistent(e, &key);

    if !known {
        let mut ids = plan_ids(e);
        ids.push_back(plan.id);
        e.storage().instance().set(&DataKey::PlanIds, &ids);
    }
}

pub fn load_plan(e: &Env, plan_id: u32) -> SavingsPlan {
    let key = DataKey::Plan(plan_id);
    let plan: SavingsPlan = e
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic!("{}", ERR_UNKNOWN_PLAN));
    bump_persistent(e, &key);
    plan
}

pub fn has_plan(e: &Env, plan_id: u32) -> bool {
    e.storage().persistent().has(&DataKey::Plan(plan_id))
}

pub fn plan_ids(e: &Env) -> Vec<u32> {
    e.storage()
        .instance()
        .get(&DataKey::PlanIds)
        .unwrap_or_else(|| Vec::new(e))
}

// ── Deposits ─────────────────────────────────────────────────────────────

pub fn save_deposit(e: &Env, deposit: &Deposit) {
    let key = DataKey::Deposit(deposit.id);
    e.storage().persistent().set(&key, deposit);
    bump_persistent(e, &key);
}

pub fn load_deposit(e: &Env, id: u64) -> Deposit {
    let key = DataKey::Deposit(id);
    let deposit: Deposit = e
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic!("{}", ERR_DEPOSIT_NOT_FOUND));
    bump_persistent(e, &key);
    deposit
}

/// Append a deposit id to the owner's index.
pub fn push_owner_deposit(e: &Env, owner: &Address, id: u64) {
    let key = DataKey::OwnerDeposits(owner.clone());
    let mut ids = owner_deposits(e, owner);
    ids.push_back(id);
    e.storage().persistent().set(&key, &ids);
    bump_persistent(e, &key);
}

pub fn owner_deposits(e: &Env, owner: &Address) -> Vec<u64> {
    e.storage()
        .persistent()
        .get(&DataKey::OwnerDeposits(owner.clone()))
        .unwrap_or_else(|| Vec::new(e))
}

// ── Positions ────────────────────────────────────────────────────────────

pub fn save_position(e: &Env, id: u64, position: &YieldPosition) {
    let key = DataKey::Position(id);
    e.storage().persistent().set(&key, position);
    bump_persistent(e, &key);
}

pub fn load_position(e: &Env, id: u64) -> YieldPosition {
    let key = DataKey::Position(id);
    let position: YieldPosition = e
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic!("{}", ERR_POSITION_NOT_FOUND));
    bump_persistent(e, &key);
    position
}

// ── User aggregates ──────────────────────────────────────────────────────

pub fn load_user_stats(e: &Env, owner: &Address) -> UserStats {
    e.storage()
        .persistent()
        .get(&DataKey::UserStats(owner.clone()))
        .unwrap_or(UserStats {
            total_deposited: 0,
            total_earned: 0,
            total_withdrawn: 0,
            transaction_count: 0,
            active_deposits: 0,
            last_activity: 0,
            preferred_plan: 0,
        })
}

pub fn save_user_stats(e: &Env, owner: &Address, stats: &UserStats) {
    let key = DataKey::UserStats(owner.clone());
    e.storage().persistent().set(&key, stats);
    bump_persistent(e, &key);
}

// ── Reward pool / config singletons ──────────────────────────────────────

pub fn load_reward_pool(e: &Env) -> RewardPool {
    e.storage()
        .instance()
        .get(&DataKey::RewardPool)
        .unwrap_or(RewardPool {
            total_pool: 0,
            distributed: 0,
        })
}

pub fn save_reward_pool(e: &Env, pool: &RewardPool) {
    e.storage().instance().set(&DataKey::RewardPool, pool);
}

pub fn compound_method(e: &Env) -> CompoundMethod {
    e.storage()
        .instance()
        .get(&DataKey::Compounding)
        .unwrap_or(CompoundMethod::DailyLoop)
}

pub fn global_multiplier_bps(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::GlobalMultiplierBps)
        .unwrap_or(10_000_u32)
}
