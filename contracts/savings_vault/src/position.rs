//! Yield position ledger: per-deposit accrual state.
//!
//! A position moves through exactly one transition, Active -> Finalized.
//! While active, `accrue` folds calculator output into `accrued_interest`;
//! the operation is idempotent for a fixed timestamp and monotonic across
//! non-decreasing timestamps. Finalization freezes the accrued value for
//! audit; it is never reset. The maturity bonus lands in `bonus_awarded`,
//! a separate field, so the accrual trail stays unambiguous.

use soroban_sdk::Env;

use crate::errors::{ERR_INVALID_AMOUNT, ERR_MATURITY_OVERFLOW, ERR_PAYOUT_OVERFLOW, ERR_POSITION_FINALIZED};
use crate::interest;
use crate::storage;
use crate::types::{CompoundMethod, YieldPosition};

/// Open a position for deposit `id`. `last_update_time` starts at `now`.
pub fn open(e: &Env, id: u64, principal: i128, duration_secs: u64, apy_bps: u32, now: u64) {
    if principal <= 0 {
        panic!("{}", ERR_INVALID_AMOUNT);
    }
    let end_time = now
        .checked_add(duration_secs)
        .unwrap_or_else(|| panic!("{}", ERR_MATURITY_OVERFLOW));
    let position = YieldPosition {
        principal,
        accrued_interest: 0,
        bonus_awarded: 0,
        start_time: now,
        end_time,
        apy_bps,
        last_update_time: now,
        active: true,
    };
    storage::save_position(e, id, &position);
}

/// Interest the position would earn if accrued at `now`, without mutating.
///
/// `accrue` and the read-only projection both go through here, so a display
/// query always matches what a real accrual would store.
pub fn pending_interest(position: &YieldPosition, now: u64, method: CompoundMethod) -> i128 {
    if !position.active {
        return 0;
    }
    let capped_now = now.min(position.end_time);
    if capped_now <= position.last_update_time {
        return 0;
    }
    let balance = position
        .principal
        .checked_add(position.accrued_interest)
        .unwrap_or_else(|| panic!("{}", ERR_PAYOUT_OVERFLOW));
    let elapsed = capped_now - position.last_update_time;
    interest::compound_interest(balance, position.apy_bps, elapsed, method)
}

/// Accrue interest up to `min(now, end_time)`. No-op on inactive positions
/// and when no time has passed since the last update. Returns the stored
/// accrued interest after the call.
pub fn accrue(e: &Env, id: u64, now: u64, method: CompoundMethod) -> i128 {
    let mut position = storage::load_position(e, id);
    if !position.active {
        return position.accrued_interest;
    }
    let capped_now = now.min(position.end_time);
    if capped_now <= position.last_update_time {
        return position.accrued_interest;
    }
    let delta = pending_interest(&position, now, method);
    position.accrued_interest = position
        .accrued_interest
        .checked_add(delta)
        .unwrap_or_else(|| panic!("{}", ERR_PAYOUT_OVERFLOW));
    position.last_update_time = capped_now;
    storage::save_position(e, id, &position);
    position.accrued_interest
}

/// Run one final accrual and deactivate. Returns `(principal, interest)`,
/// both frozen. A second call panics: finalization happens exactly once.
pub fn finalize(e: &Env, id: u64, now: u64, method: CompoundMethod) -> (i128, i128) {
    let position = storage::load_position(e, id);
    if !position.active {
        panic!("{}", ERR_POSITION_FINALIZED);
    }
    accrue(e, id, now, method);
    let mut position = storage::load_position(e, id);
    position.active = false;
    storage::save_position(e, id, &position);
    (position.principal, position.accrued_interest)
}

/// Record a reward-pool bonus against a finalized position.
/// Deliberately bypasses the active check: the bonus is paid at close and is
/// drawn from the pool, not from accrual math.
pub fn apply_bonus(e: &Env, id: u64, bonus: i128) {
    if bonus <= 0 {
        return;
    }
    let mut position = storage::load_position(e, id);
    position.bonus_awarded = position
        .bonus_awarded
        .checked_add(bonus)
        .unwrap_or_else(|| panic!("{}", ERR_PAYOUT_OVERFLOW));
    storage::save_position(e, id, &position);
}
