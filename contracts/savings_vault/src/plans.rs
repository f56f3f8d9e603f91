//! Plan catalog: admin-managed savings plans with enforced bounds.
//!
//! Every parameter write validates against min/max bounds and emits a change
//! event. Plans are identified by their duration in days for the seeded
//! catalog (30/90/180/365) and are deactivated rather than deleted.

use soroban_sdk::{Env, Vec};

use crate::errors::{
    ERR_APY_TOO_HIGH, ERR_HOLD_EXCEEDS_DURATION, ERR_INVALID_DURATION, ERR_MULTIPLIER_RANGE,
    ERR_PENALTY_TOO_HIGH, ERR_PLAN_BOUNDS,
};
use crate::events;
use crate::interest::{MAX_MULTIPLIER_BPS, MIN_MULTIPLIER_BPS, SECONDS_PER_DAY};
use crate::storage;
use crate::types::SavingsPlan;

// ── Bounds ───────────────────────────────────────────────────────────────

/// Base APY may not exceed 100%.
pub const MAX_BASE_APY_BPS: u32 = 10_000;
/// Early-exit penalty may not exceed 100%.
pub const MAX_PENALTY_BPS: u32 = 10_000;

// ── Seeded catalog ───────────────────────────────────────────────────────

/// Default plans: (id/days, base APY bps).
/// Default amount bounds assume a 6-decimal asset: 10 to 1,000,000 tokens.
const DEFAULT_PLANS: [(u32, u32); 4] = [(30, 800), (90, 1_000), (180, 1_200), (365, 1_500)];
const DEFAULT_MIN_AMOUNT: i128 = 10_000_000;
const DEFAULT_MAX_AMOUNT: i128 = 1_000_000_000_000;

/// Penalty tier for a plan duration: 2% up to 30 days, then 3% / 4% / 5%.
pub fn default_penalty_bps(duration_secs: u64) -> u32 {
    let days = duration_secs / SECONDS_PER_DAY;
    if days <= 30 {
        200
    } else if days <= 90 {
        300
    } else if days <= 180 {
        400
    } else {
        500
    }
}

/// Seed the default catalog. Called once from `initialize`.
pub fn seed_defaults(e: &Env) {
    for (days, apy_bps) in DEFAULT_PLANS.iter() {
        let duration_secs = (*days as u64) * SECONDS_PER_DAY;
        let plan = SavingsPlan {
            id: *days,
            duration_secs,
            base_apy_bps: *apy_bps,
            min_amount: DEFAULT_MIN_AMOUNT,
            max_amount: DEFAULT_MAX_AMOUNT,
            multiplier_bps: 10_000,
            penalty_bps: default_penalty_bps(duration_secs),
            minimum_hold_secs: duration_secs / 2,
            active: true,
        };
        storage::save_plan(e, &plan);
    }
}

// ── Admin mutations ──────────────────────────────────────────────────────

/// Create or update a plan's core terms. New plans get the penalty tier for
/// their duration, a minimum hold of half the duration, and a 1x multiplier;
/// existing plans keep their penalty and multiplier settings.
pub fn set_plan(
    e: &Env,
    plan_id: u32,
    duration_secs: u64,
    base_apy_bps: u32,
    min_amount: i128,
    max_amount: i128,
    active: bool,
) -> SavingsPlan {
    if duration_secs == 0 {
        panic!("{}", ERR_INVALID_DURATION);
    }
    if base_apy_bps > MAX_BASE_APY_BPS {
        panic!("{}", ERR_APY_TOO_HIGH);
    }
    if min_amount <= 0 || min_amount > max_amount {
        panic!("{}", ERR_PLAN_BOUNDS);
    }

    let plan = if storage::has_plan(e, plan_id) {
        let existing = storage::load_plan(e, plan_id);
        SavingsPlan {
            duration_secs,
            base_apy_bps,
            min_amount,
            max_amount,
            active,
            ..existing
        }
    } else {
        SavingsPlan {
            id: plan_id,
            duration_secs,
            base_apy_bps,
            min_amount,
            max_amount,
            multiplier_bps: 10_000,
            penalty_bps: default_penalty_bps(duration_secs),
            minimum_hold_secs: duration_secs / 2,
            active,
        }
    };
    storage::save_plan(e, &plan);
    events::emit_plan_set(e, plan_id, base_apy_bps, active);
    plan
}

/// Retune a plan's early-exit terms.
pub fn set_plan_penalty(e: &Env, plan_id: u32, penalty_bps: u32, minimum_hold_secs: u64) {
    if penalty_bps > MAX_PENALTY_BPS {
        panic!("{}", ERR_PENALTY_TOO_HIGH);
    }
    let mut plan = storage::load_plan(e, plan_id);
    if minimum_hold_secs > plan.duration_secs {
        panic!("{}", ERR_HOLD_EXCEEDS_DURATION);
    }
    plan.penalty_bps = penalty_bps;
    plan.minimum_hold_secs = minimum_hold_secs;
    storage::save_plan(e, &plan);
    events::emit_plan_penalty_set(e, plan_id, penalty_bps, minimum_hold_secs);
}

/// Set a plan's APY multiplier, bounded to [5000, 20000].
pub fn set_plan_multiplier(e: &Env, plan_id: u32, multiplier_bps: u32) {
    require_multiplier_in_range(multiplier_bps);
    let mut plan = storage::load_plan(e, plan_id);
    plan.multiplier_bps = multiplier_bps;
    storage::save_plan(e, &plan);
    events::emit_plan_multiplier_set(e, plan_id, multiplier_bps);
}

/// Shared bound check for plan and global multipliers.
pub fn require_multiplier_in_range(multiplier_bps: u32) {
    if !(MIN_MULTIPLIER_BPS..=MAX_MULTIPLIER_BPS).contains(&multiplier_bps) {
        panic!("{}", ERR_MULTIPLIER_RANGE);
    }
}

// ── Queries ──────────────────────────────────────────────────────────────

pub fn get_plan(e: &Env, plan_id: u32) -> SavingsPlan {
    storage::load_plan(e, plan_id)
}

pub fn list_plan_ids(e: &Env) -> Vec<u32> {
    storage::plan_ids(e)
}
