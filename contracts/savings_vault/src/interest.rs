//! Pure interest calculator: compounding, penalties, APY composition, bonus.
//!
//! Everything here is stateless and total. Amounts are `i128` token base
//! units, rates are basis points (10000 = 100%). No floating point: daily
//! factors use a 1e12 fixed-point scale, and every ratio multiplies before it
//! divides. Division by zero is ruled out by input guards; subtractions that
//! could go negative saturate to zero; multiplications are checked and panic
//! with a stable message on overflow.

use crate::errors::ERR_INTEREST_OVERFLOW;
use crate::types::CompoundMethod;

// ─── Units and bounds ──────────────────────────────────────────────────────

/// Basis-point scale: 10000 bps = 100%.
pub const BPS_SCALE: i128 = 10_000;
pub const SECONDS_PER_DAY: u64 = 86_400;
/// 365 days.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;
pub const DAYS_PER_YEAR: u64 = 365;
/// Compounding iteration bound: elapsed time past this many whole days earns
/// nothing further within a single accrual window.
pub const MAX_COMPOUND_DAYS: u64 = 365;
/// Fixed-point scale for daily compounding factors.
pub const RATE_PRECISION: i128 = 1_000_000_000_000;

/// Lower bound for plan and global APY multipliers (50%).
pub const MIN_MULTIPLIER_BPS: u32 = 5_000;
/// Upper bound for plan and global APY multipliers (200%).
pub const MAX_MULTIPLIER_BPS: u32 = 20_000;

/// Maturity bonus rate: 5% of principal + interest.
pub const MATURITY_BONUS_BPS: u32 = 500;

// ─── Checked helpers ───────────────────────────────────────────────────────

#[inline]
fn mul(a: i128, b: i128) -> i128 {
    a.checked_mul(b)
        .unwrap_or_else(|| panic!("{}", ERR_INTEREST_OVERFLOW))
}

#[inline]
fn add(a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic!("{}", ERR_INTEREST_OVERFLOW))
}

/// Daily rate at `RATE_PRECISION` scale: `apy / 365`, truncating.
#[inline]
fn daily_rate_scaled(apy_bps: u32) -> i128 {
    (apy_bps as i128) * RATE_PRECISION / (BPS_SCALE * DAYS_PER_YEAR as i128)
}

/// Simple pro-rata interest: `balance * apy * elapsed / year`.
fn simple_interest(balance: i128, apy_bps: u32, elapsed_secs: u64) -> i128 {
    let numerator = mul(mul(balance, apy_bps as i128), elapsed_secs as i128);
    numerator / (BPS_SCALE * SECONDS_PER_YEAR as i128)
}

/// `(RATE_PRECISION + rate)^exp` by square-and-multiply, at scale.
fn pow_factor_scaled(base_scaled: i128, mut exp: u64) -> i128 {
    let mut result = RATE_PRECISION;
    let mut base = base_scaled;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul(result, base) / RATE_PRECISION;
        }
        exp >>= 1;
        if exp > 0 {
            base = mul(base, base) / RATE_PRECISION;
        }
    }
    result
}

// ─── Calculator surface ────────────────────────────────────────────────────

/// Interest earned on `principal` at `apy_bps` over `elapsed_secs`.
///
/// Spans shorter than one day earn simple pro-rata interest. Longer spans
/// compound once per whole day, bounded at [`MAX_COMPOUND_DAYS`] iterations;
/// a partial-day remainder under the bound earns pro-rata interest on the
/// compounded balance, while time beyond the bound earns nothing further
/// within this window. Returns 0 when any input is zero.
pub fn compound_interest(
    principal: i128,
    apy_bps: u32,
    elapsed_secs: u64,
    method: CompoundMethod,
) -> i128 {
    if principal <= 0 || apy_bps == 0 || elapsed_secs == 0 {
        return 0;
    }
    if elapsed_secs < SECONDS_PER_DAY {
        return simple_interest(principal, apy_bps, elapsed_secs);
    }

    let days = elapsed_secs / SECONDS_PER_DAY;
    let compound_days = days.min(MAX_COMPOUND_DAYS);
    let rate = daily_rate_scaled(apy_bps);

    let balance = match method {
        CompoundMethod::DailyLoop => {
            let mut balance = principal;
            for _ in 0..compound_days {
                balance = add(balance, mul(balance, rate) / RATE_PRECISION);
            }
            balance
        }
        CompoundMethod::BinaryPow => {
            let factor = pow_factor_scaled(add(RATE_PRECISION, rate), compound_days);
            mul(principal, factor) / RATE_PRECISION
        }
    };

    let mut interest = balance - principal;
    if days < MAX_COMPOUND_DAYS {
        let remainder_secs = elapsed_secs - days * SECONDS_PER_DAY;
        if remainder_secs > 0 {
            interest = add(interest, simple_interest(balance, apy_bps, remainder_secs));
        }
    }
    interest
}

/// Penalty for exiting `elapsed_secs` into a lock with `minimum_hold_secs`.
///
/// The full `penalty_bps` rate applies while `elapsed < minimum_hold`; past
/// the hold the rate decays linearly, reaching zero at `2 * minimum_hold`
/// and staying there (never negative).
pub fn early_withdrawal_penalty(
    principal: i128,
    penalty_bps: u32,
    elapsed_secs: u64,
    minimum_hold_secs: u64,
) -> i128 {
    if principal <= 0 || penalty_bps == 0 || minimum_hold_secs == 0 {
        return 0;
    }
    if elapsed_secs < minimum_hold_secs {
        return mul(principal, penalty_bps as i128) / BPS_SCALE;
    }
    let decay_window = minimum_hold_secs.saturating_mul(2);
    if elapsed_secs >= decay_window {
        return 0;
    }
    let remaining = (decay_window - elapsed_secs) as i128;
    mul(mul(principal, penalty_bps as i128), remaining) / (BPS_SCALE * decay_window as i128)
}

/// Composed annual yield: `base * plan_mult / 10000 * global_mult / 10000`.
///
/// Multipliers are bounds-checked to [5000, 20000] at the admin surface, so
/// the result stays within 0.25x-4x of the base rate.
pub fn effective_apy(base_apy_bps: u32, plan_multiplier_bps: u32, global_multiplier_bps: u32) -> u32 {
    let stepped = (base_apy_bps as i128) * (plan_multiplier_bps as i128) / BPS_SCALE;
    (stepped * (global_multiplier_bps as i128) / BPS_SCALE) as u32
}

/// Maturity bonus: `(principal + interest) * bonus_bps / 10000`.
pub fn maturity_bonus(principal: i128, interest_earned: i128, bonus_bps: u32) -> i128 {
    if bonus_bps == 0 {
        return 0;
    }
    let base = add(principal.max(0), interest_earned.max(0));
    mul(base, bonus_bps as i128) / BPS_SCALE
}
