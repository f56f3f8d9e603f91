//! Savings Vault Contract
//!
//! Tracks time-locked token deposits, accrues daily-compounded yield against
//! elapsed ledger time, and governs the deposit lifecycle:
//! create -> accrue -> mature/withdraw, or emergency-exit at any point.
//!
//! ## Key design decisions
//!
//! - **Fixed-point only**: all yield math is integer basis-point arithmetic;
//!   ratios multiply before dividing. See `interest`.
//! - **Checks-Effects-Interactions**: funds are pulled *before* any state is
//!   written on create; deposits are marked terminal *before* payout
//!   transfers on both withdrawal paths.
//! - **Frozen terms**: the effective APY is stamped onto the position at
//!   open, so plan and multiplier edits only affect new deposits.
//! - **Best-effort badges**: milestone awards go through `try_award`; a
//!   failing badge contract never blocks a deposit.
//! - **Auth-gated mutations**: `owner.require_auth()` on the lifecycle,
//!   stored-admin comparison on the admin surface.

#![no_std]

mod aggregates;
mod errors;
mod events;
mod interest;
mod pausable;
mod plans;
mod position;
mod rewards;
mod storage;
mod token_transfer;
mod types;

use errors::*;
use types::{CompoundMethod, DataKey, Deposit, DepositStatus, RewardPool, SavingsPlan, UserStats, YieldPosition};

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[cfg(test)]
mod test_helpers;


#[cfg(test)]
mod test_position;





#[cfg(test)]
mod test_rewards;




// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env, caller: &Address) {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED));
    if stored != *caller {
        panic!("{}", ERR_UNAUTHORIZED);
    }
}

fn badge_contract(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::BadgeContract)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

/// Loads a deposit and enforces ownership and the open state.
/// Every withdrawal path funnels through here.
fn load_open_deposit(e: &Env, caller: &Address, deposit_id: u64) -> Deposit {
    let deposit = storage::load_deposit(e, deposit_id);
    if deposit.owner != *caller {
        panic!("{}", ERR_NOT_DEPOSIT_OWNER);
    }
    if deposit.status != DepositStatus::Open {
        panic!("{}", ERR_ALREADY_WITHDRAWN);
    }
    deposit
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct SavingsVault;

#[contractimpl]
impl SavingsVault {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. Stores `admin`, the deposit asset `token`,
    /// and the achievement `badge` contract, then seeds the default plan
    /// catalog (30/90/180/365 days).
    pub fn initialize(e: Env, admin: Address, token: Address, badge: Address) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::BadgeContract, &badge);
        e.storage()
            .instance()
            .set(&DataKey::GlobalMultiplierBps, &10_000_u32);
        e.storage()
            .instance()
            .set(&DataKey::Compounding, &CompoundMethod::DailyLoop);
        plans::seed_defaults(&e);
        storage::bump_instance(&e);
    }

    /// Create or update a plan's core terms. Open deposits keep the terms
    /// they locked in.
    pub fn set_plan(
        e: Env,
        admin: Address,
        plan_id: u32,
        duration_secs: u64,
        base_apy_bps: u32,
        min_amount: i128,
        max_amount: i128,
        active: bool,
    ) -> SavingsPlan {
        require_admin(&e, &admin);
        plans::set_plan(
            &e,
            plan_id,
            duration_secs,
            base_apy_bps,
            min_amount,
            max_amount,
            active,
        )
    }

    /// Retune a plan's early-exit penalty rate and minimum hold.
    pub fn set_plan_penalty(
        e: Env,
        admin: Address,
        plan_id: u32,
        penalty_bps: u32,
        minimum_hold_secs: u64,
    ) {
        require_admin(&e, &admin);
        plans::set_plan_penalty(&e, plan_id, penalty_bps, minimum_hold_secs);
    }

    /// Set a plan's APY multiplier. Bounded to [5000, 20000] basis points.
    pub fn set_plan_multiplier(e: Env, admin: Address, plan_id: u32, multiplier_bps: u32) {
        require_admin(&e, &admin);
        plans::set_plan_multiplier(&e, plan_id, multiplier_bps);
    }

    /// Set the vault-wide APY multiplier. Bounded to [5000, 20000].
    pub fn set_global_multiplier(e: Env, admin: Address, multiplier_bps: u32) {
        require_admin(&e, &admin);
        plans::require_multiplier_in_range(multiplier_bps);
        e.storage()
            .instance()
            .set(&DataKey::GlobalMultiplierBps, &multiplier_bps);
        events::emit_global_multiplier_set(&e, multiplier_bps);
    }

    /// Select how multi-day compounding is evaluated.
    pub fn set_compound_method(e: Env, admin: Address, method: CompoundMethod) {
        require_admin(&e, &admin);
        e.storage().instance().set(&DataKey::Compounding, &method);
    }

    /// Move `amount` of the deposit asset from the admin into the vault and
    /// earmark it for maturity bonuses.
    pub fn fund_reward_pool(e: Env, admin: Address, amount: i128) -> i128 {
        require_admin(&e, &admin);
        token_transfer::pull_from(&e, &admin, amount);
        let total = rewards::fund(&e, amount);
        events::emit_pool_funded(&e, &admin, amount, total);
        total
    }

    /// Stop new deposits. Withdrawals stay available.
    pub fn pause(e: Env, admin: Address) {
        require_admin(&e, &admin);
        pausable::set_paused(&e, true);
    }

    /// Resume new deposits.
    pub fn unpause(e: Env, admin: Address) {
        require_admin(&e, &admin);
        pausable::set_paused(&e, false);
    }

    // ── Deposit lifecycle ──────────────────────────────────────────────────

    /// Lock `amount` into `plan_id` until the plan duration elapses.
    ///
    /// Requirements:
    /// - The plan exists and is active.
    /// - `amount` within the plan's [min, max] bounds.
    /// - Caller has approved the vault to spend `amount`.
    ///
    /// Funds are pulled before any vault state is written, so a failed
    /// transfer leaves nothing behind. Milestone badges are awarded
    /// best-effort after the deposit is recorded.
    pub fn create_deposit(e: Env, owner: Address, amount: i128, plan_id: u32) -> Deposit {
        owner.require_auth();
        pausable::require_not_paused(&e);

        let plan = storage::load_plan(&e, plan_id);
        if !plan.active {
            panic!("{}", ERR_PLAN_INACTIVE);
        }
        if amount < plan.min_amount {
            panic!("{}", ERR_AMOUNT_BELOW_MIN);
        }
        if amount > plan.max_amount {
            panic!("{}", ERR_AMOUNT_ABOVE_MAX);
        }

        // Pull funds in first (caller must have approved).
        token_transfer::pull_from(&e, &owner, amount);

        let now = e.ledger().timestamp();
        let maturity_at = now
            .checked_add(plan.duration_secs)
            .unwrap_or_else(|| panic!("{}", ERR_MATURITY_OVERFLOW));

        let apy_bps = interest::effective_apy(
            plan.base_apy_bps,
            plan.multiplier_bps,
            storage::global_multiplier_bps(&e),
        );

        let id = storage::next_deposit_id(&e);
        position::open(&e, id, amount, plan.duration_secs, apy_bps, now);

        let first_deposit = storage::load_user_stats(&e, &owner).transaction_count == 0;

        let deposit = Deposit {
            id,
            owner: owner.clone(),
            amount,
            plan_id,
            created_at: now,
            maturity_at,
            status: DepositStatus::Open,
            interest_paid: 0,
        };
        storage::save_deposit(&e, &deposit);
        storage::push_owner_deposit(&e, &owner, id);
        aggregates::record_deposit(&e, &owner, amount, plan_id, now);

        events::emit_deposit_created(&e, &owner, id, amount, plan_id, maturity_at);

        let categories =
            rewards::milestone_categories(&e, amount, plan.duration_secs, first_deposit);
        rewards::notify_badges(&e, &badge_contract(&e), &owner, &categories);

        deposit
    }

    /// Withdraw a matured deposit: pays principal + accrued interest + a 5%
    /// maturity bonus clamped to the unspent reward pool.
    ///
    /// The deposit is marked withdrawn before the payout transfer is issued.
    pub fn withdraw(e: Env, owner: Address, deposit_id: u64) -> i128 {
        owner.require_auth();

        let mut deposit = load_open_deposit(&e, &owner, deposit_id);
        let now = e.ledger().timestamp();
        if now < deposit.maturity_at {
            panic!("{}", ERR_NOT_MATURED);
        }

        let method = storage::compound_method(&e);
        let (principal, total_interest) = position::finalize(&e, deposit_id, now, method);

        let requested =
            interest::maturity_bonus(principal, total_interest, interest::MATURITY_BONUS_BPS);
        let bonus = rewards::claim_bonus(&e, requested);
        position::apply_bonus(&e, deposit_id, bonus);

        let payout = principal
            .checked_add(total_interest)
            .and_then(|v| v.checked_add(bonus))
            .unwrap_or_else(|| panic!("{}", ERR_PAYOUT_OVERFLOW));

        // CEI: terminal state before transfer.
        deposit.status = DepositStatus::Withdrawn;
        deposit.interest_paid = total_interest;
        storage::save_deposit(&e, &deposit);
        aggregates::record_withdrawal(&e, &owner, payout, total_interest, bonus, now);

        token_transfer::pay_out(&e, &owner, payout);

        events::emit_deposit_withdrawn(&e, &owner, deposit_id, principal, total_interest, bonus);
        if bonus > 0 {
            events::emit_bonus_paid(&e, &owner, deposit_id, bonus);
        }
        payout
    }

    /// Exit a deposit at any time, paying an early-withdrawal penalty and
    /// forfeiting accrued interest. The penalty stays in the vault and tops
    /// up the reward pool; the forfeited accrual stays frozen on the
    /// position for audit.
    pub fn emergency_withdraw(e: Env, owner: Address, deposit_id: u64) -> i128 {
        owner.require_auth();

        let mut deposit = load_open_deposit(&e, &owner, deposit_id);
        let now = e.ledger().timestamp();

        let method = storage::compound_method(&e);
        let (principal, _forfeited) = position::finalize(&e, deposit_id, now, method);

        let plan = storage::load_plan(&e, deposit.plan_id);
        let elapsed = now.saturating_sub(deposit.created_at);
        let penalty = interest::early_withdrawal_penalty(
            principal,
            plan.penalty_bps,
            elapsed,
            plan.minimum_hold_secs,
        );
        let payout = principal - penalty;

        // CEI: terminal state before transfer.
        deposit.status = DepositStatus::EmergencyWithdrawn;
        storage::save_deposit(&e, &deposit);
        rewards::absorb_penalty(&e, penalty);
        aggregates::record_emergency(&e, &owner, payout, now);

        token_transfer::pay_out(&e, &owner, payout);

        events::emit_emergency_withdrawn(&e, &owner, deposit_id, payout, penalty);
        payout
    }

    /// Accrue a position up to the current ledger time. Anyone may poke;
    /// the operation is idempotent within a single timestamp and a no-op on
    /// finalized positions. Returns the stored accrued interest.
    pub fn accrue_interest(e: Env, deposit_id: u64) -> i128 {
        let now = e.ledger().timestamp();
        let method = storage::compound_method(&e);
        position::accrue(&e, deposit_id, now, method)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Read-only interest projection at the current ledger time. Matches
    /// exactly what `accrue_interest` would store right now; never used for
    /// payout decisions.
    pub fn calculate_current_interest(e: Env, deposit_id: u64) -> i128 {
        let pos = storage::load_position(&e, deposit_id);
        let now = e.ledger().timestamp();
        let method = storage::compound_method(&e);
        pos.accrued_interest + position::pending_interest(&pos, now, method)
    }

    pub fn get_deposit(e: Env, deposit_id: u64) -> Deposit {
        storage::load_deposit(&e, deposit_id)
    }

    pub fn get_position(e: Env, deposit_id: u64) -> YieldPosition {
        storage::load_position(&e, deposit_id)
    }

    pub fn list_deposit_ids(e: Env, owner: Address) -> Vec<u64> {
        storage::owner_deposits(&e, &owner)
    }

    pub fn get_user_stats(e: Env, owner: Address) -> UserStats {
        storage::load_user_stats(&e, &owner)
    }

    /// Compact per-user summary: (total saved, open deposits, total earned).
    pub fn get_user_summary(e: Env, owner: Address) -> (i128, u32, i128) {
        let stats = storage::load_user_stats(&e, &owner);
        (stats.total_deposited, stats.active_deposits, stats.total_earned)
    }

    pub fn get_plan(e: Env, plan_id: u32) -> SavingsPlan {
        plans::get_plan(&e, plan_id)
    }

    pub fn list_plan_ids(e: Env) -> Vec<u32> {
        plans::list_plan_ids(&e)
    }

    pub fn get_reward_pool(e: Env) -> RewardPool {
        storage::load_reward_pool(&e)
    }

    pub fn get_global_multiplier(e: Env) -> u32 {
        storage::global_multiplier_bps(&e)
    }

    pub fn get_compound_method(e: Env) -> CompoundMethod {
        storage::compound_method(&e)
    }

    pub fn is_paused(e: Env) -> bool {
        pausable::is_paused(&e)
    }
}
