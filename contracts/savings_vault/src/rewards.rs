//! Reward pool accounting and milestone badge notification.
//!
//! The pool is the one genuinely shared resource across all users. Debits are
//! checked and applied in the same invocation that computes the bonus, and a
//! request the pool cannot cover is clamped — never an error, because the
//! principal + interest payout must still succeed.
//!
//! Badge awards are a best-effort side channel: the vault calls the badge
//! contract through `try_award` and publishes a `badge_skipped` event instead
//! of failing when the collaborator errors.

use soroban_sdk::{contractclient, Address, Env, Symbol, Vec};

use crate::errors::{ERR_INVALID_AMOUNT, ERR_POOL_OVERFLOW};
use crate::events;
use crate::interest::SECONDS_PER_DAY;
use crate::storage;

/// Base units per whole token (6-decimal asset).
pub const TOKEN_UNIT: i128 = 1_000_000;

/// Deposit sizes, in whole tokens, that trigger milestone badges.
pub const MILESTONE_TIER_1: i128 = 100 * TOKEN_UNIT;
pub const MILESTONE_TIER_2: i128 = 1_000 * TOKEN_UNIT;
pub const MILESTONE_TIER_3: i128 = 10_000 * TOKEN_UNIT;

// ── Badge collaborator ───────────────────────────────────────────────────

/// Client interface for the achievement_badge contract.
#[contractclient(name = "BadgeClient")]
pub trait BadgeNotifier {
    /// Awards `category` to `owner` once; repeat awards return `false`.
    fn award(env: Env, owner: Address, category: Symbol) -> bool;
}

// ── Pool accounting ──────────────────────────────────────────────────────

/// Grow the pool by `amount`. The caller moves the backing tokens.
pub fn fund(e: &Env, amount: i128) -> i128 {
    if amount <= 0 {
        panic!("{}", ERR_INVALID_AMOUNT);
    }
    let mut pool = storage::load_reward_pool(e);
    pool.total_pool = pool
        .total_pool
        .checked_add(amount)
        .unwrap_or_else(|| panic!("{}", ERR_POOL_OVERFLOW));
    storage::save_reward_pool(e, &pool);
    pool.total_pool
}

/// Debit up to `requested` from the unspent pool, returning what was granted.
/// Clamps to availability so `distributed <= total_pool` holds afterwards.
pub fn claim_bonus(e: &Env, requested: i128) -> i128 {
    if requested <= 0 {
        return 0;
    }
    let mut pool = storage::load_reward_pool(e);
    let available = pool.total_pool - pool.distributed;
    let granted = requested.min(available).max(0);
    if granted > 0 {
        pool.distributed += granted;
        storage::save_reward_pool(e, &pool);
    }
    granted
}

/// Fold a forfeited early-exit penalty back into the pool.
pub fn absorb_penalty(e: &Env, amount: i128) {
    if amount <= 0 {
        return;
    }
    let mut pool = storage::load_reward_pool(e);
    pool.total_pool = pool
        .total_pool
        .checked_add(amount)
        .unwrap_or_else(|| panic!("{}", ERR_POOL_OVERFLOW));
    storage::save_reward_pool(e, &pool);
}

// ── Milestone resolution ─────────────────────────────────────────────────

/// Category key for a plan duration: starter <= 30d, saver <= 90d,
/// investor <= 180d, champion beyond.
pub fn duration_category(e: &Env, duration_secs: u64) -> Symbol {
    let days = duration_secs / SECONDS_PER_DAY;
    if days <= 30 {
        Symbol::new(e, "starter")
    } else if days <= 90 {
        Symbol::new(e, "saver")
    } else if days <= 180 {
        Symbol::new(e, "investor")
    } else {
        Symbol::new(e, "champion")
    }
}

/// Badge categories a deposit qualifies for, resolved purely from the
/// amount, the plan duration, and whether this is the user's first deposit.
pub fn milestone_categories(
    e: &Env,
    amount: i128,
    duration_secs: u64,
    first_deposit: bool,
) -> Vec<Symbol> {
    let mut categories = Vec::new(e);
    if first_deposit {
        categories.push_back(Symbol::new(e, "first_deposit"));
    }
    if amount >= MILESTONE_TIER_1 {
        categories.push_back(duration_category(e, duration_secs));
    }
    if amount >= MILESTONE_TIER_2 {
        categories.push_back(Symbol::new(e, "big_saver"));
    }
    if amount >= MILESTONE_TIER_3 {
        categories.push_back(Symbol::new(e, "whale"));
    }
    categories
}

/// Fire-and-forget badge awards. The badge contract deduplicates per
/// (owner, category); a failing collaborator only produces an event.
pub fn notify_badges(e: &Env, badge: &Address, owner: &Address, categories: &Vec<Symbol>) {
    let client = BadgeClient::new(e, badge);
    for category in categories.iter() {
        if client.try_award(owner, &category).is_err() {
            events::emit_badge_skipped(e, owner, &category);
        }
    }
}
