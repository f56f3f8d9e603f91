use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a new deposit is created.
///
/// # Topics
/// * `Symbol` - "deposit_created"
/// * `Address` - The deposit owner
///
/// # Data
/// * `u64` - Deposit id
/// * `i128` - Principal amount
/// * `u32` - Plan id
/// * `u64` - Maturity timestamp
pub fn emit_deposit_created(
    e: &Env,
    owner: &Address,
    id: u64,
    amount: i128,
    plan_id: u32,
    maturity_at: u64,
) {
    let topics = (Symbol::new(e, "deposit_created"), owner.clone());
    e.events().publish(topics, (id, amount, plan_id, maturity_at));
}

/// Emitted when a matured deposit is withdrawn.
///
/// # Topics
/// * `Symbol` - "deposit_withdrawn"
/// * `Address` - The deposit owner
///
/// # Data
/// * `u64` - Deposit id
/// * `i128` - Principal
/// * `i128` - Interest paid
/// * `i128` - Bonus paid
pub fn emit_deposit_withdrawn(
    e: &Env,
    owner: &Address,
    id: u64,
    principal: i128,
    interest: i128,
    bonus: i128,
) {
    let topics = (Symbol::new(e, "deposit_withdrawn"), owner.clone());
    e.events().publish(topics, (id, principal, interest, bonus));
}

/// Emitted when a deposit exits early.
///
/// # Topics
/// * `Symbol` - "emergency_exit"
/// * `Address` - The deposit owner
///
/// # Data
/// * `u64` - Deposit id
/// * `i128` - Net payout (principal minus penalty)
/// * `i128` - Penalty retained by the vault
pub fn emit_emergency_withdrawn(e: &Env, owner: &Address, id: u64, payout: i128, penalty: i128) {
    let topics = (Symbol::new(e, "emergency_exit"), owner.clone());
    e.events().publish(topics, (id, payout, penalty));
}

/// Emitted when a plan is created or its core terms change.
pub fn emit_plan_set(e: &Env, plan_id: u32, base_apy_bps: u32, active: bool) {
    let topics = (Symbol::new(e, "plan_set"), plan_id);
    e.events().publish(topics, (base_apy_bps, active));
}

/// Emitted when a plan's early-exit terms change.
pub fn emit_plan_penalty_set(e: &Env, plan_id: u32, penalty_bps: u32, minimum_hold_secs: u64) {
    let topics = (Symbol::new(e, "plan_penalty_set"), plan_id);
    e.events().publish(topics, (penalty_bps, minimum_hold_secs));
}

/// Emitted when a plan's APY multiplier changes.
pub fn emit_plan_multiplier_set(e: &Env, plan_id: u32, multiplier_bps: u32) {
    let topics = (Symbol::new(e, "plan_mult_set"), plan_id);
    e.events().publish(topics, multiplier_bps);
}

/// Emitted when the vault-wide APY multiplier changes.
pub fn emit_global_multiplier_set(e: &Env, multiplier_bps: u32) {
    e.events()
        .publish((Symbol::new(e, "global_mult_set"),), multiplier_bps);
}

/// Emitted when the reward pool is funded.
///
/// # Data
/// * `i128` - Amount added
/// * `i128` - New pool total
pub fn emit_pool_funded(e: &Env, from: &Address, amount: i128, total_pool: i128) {
    let topics = (Symbol::new(e, "pool_funded"), from.clone());
    e.events().publish(topics, (amount, total_pool));
}

/// Emitted when a maturity bonus is granted from the pool.
pub fn emit_bonus_paid(e: &Env, owner: &Address, id: u64, bonus: i128) {
    let topics = (Symbol::new(e, "bonus_paid"), owner.clone());
    e.events().publish(topics, (id, bonus));
}

/// Emitted when a badge award fails; the enclosing operation continues.
pub fn emit_badge_skipped(e: &Env, owner: &Address, category: &Symbol) {
    let topics = (Symbol::new(e, "badge_skipped"), owner.clone());
    e.events().publish(topics, category.clone());
}
