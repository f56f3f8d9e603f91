use soroban_sdk::{contracttype, Address};

// ─── Plan catalog ──────────────────────────────────────────────────────────

/// A savings plan: the terms a deposit locks into.
///
/// Plans are admin-managed and never deleted, only deactivated. The effective
/// APY is frozen onto the position when a deposit opens, so later plan edits
/// affect new deposits only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavingsPlan {
    /// Plan identifier. Seeded plans use the duration in days (30/90/180/365).
    pub id: u32,
    /// Lock period in seconds.
    pub duration_secs: u64,
    /// Base annual yield in basis points (10000 = 100%).
    pub base_apy_bps: u32,
    /// Smallest accepted principal, in token base units.
    pub min_amount: i128,
    /// Largest accepted principal, in token base units.
    pub max_amount: i128,
    /// Plan-level APY multiplier in basis points, bounded to [5000, 20000].
    pub multiplier_bps: u32,
    /// Early-exit penalty rate in basis points.
    pub penalty_bps: u32,
    /// Seconds a deposit must be held before the penalty starts decaying.
    pub minimum_hold_secs: u64,
    /// Inactive plans reject new deposits; open deposits are unaffected.
    pub active: bool,
}

// ─── Deposit lifecycle ─────────────────────────────────────────────────────

/// Terminal-state machine for a deposit: `Open` transitions exactly once to
/// either `Withdrawn` or `EmergencyWithdrawn`, never back.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DepositStatus {
    Open,
    Withdrawn,
    EmergencyWithdrawn,
}

/// A single time-locked deposit. Append-only: records are never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    /// Monotonically increasing identifier, shared with the paired position.
    pub id: u64,
    pub owner: Address,
    /// Principal in token base units.
    pub amount: i128,
    pub plan_id: u32,
    /// Ledger timestamp at creation.
    pub created_at: u64,
    /// `created_at + plan.duration_secs`, checked at creation.
    pub maturity_at: u64,
    pub status: DepositStatus,
    /// Interest actually paid out at close. Zero while open and after an
    /// emergency exit (forfeited interest stays frozen on the position).
    pub interest_paid: i128,
}

// ─── Yield position ────────────────────────────────────────────────────────

/// Accrual bookkeeping paired 1:1 with a deposit (same id).
///
/// `accrued_interest` only ever grows while active; finalization freezes it
/// for audit rather than resetting it. The maturity bonus is tracked in its
/// own field so the accrual trail stays unambiguous.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YieldPosition {
    pub principal: i128,
    pub accrued_interest: i128,
    /// Bonus drawn from the reward pool at withdrawal; never part of accrual.
    pub bonus_awarded: i128,
    pub start_time: u64,
    /// Accrual stops here: `accrue` caps `now` at `end_time`.
    pub end_time: u64,
    /// Effective APY in basis points, frozen at open.
    pub apy_bps: u32,
    /// Invariant: `start_time <= last_update_time <= end_time`.
    pub last_update_time: u64,
    pub active: bool,
}

// ─── Reward pool ───────────────────────────────────────────────────────────

/// Process-wide pool that funds maturity bonuses.
/// Invariant: `distributed <= total_pool` after every distribution; a bonus
/// that would breach it is clamped, not rejected.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPool {
    pub total_pool: i128,
    pub distributed: i128,
}

// ─── User aggregates ───────────────────────────────────────────────────────

/// Per-user derived counters, updated inside every lifecycle mutation.
/// Purely additive bookkeeping; always reconstructible from the deposit log.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserStats {
    pub total_deposited: i128,
    /// Interest plus bonuses actually paid out.
    pub total_earned: i128,
    /// Everything transferred back to the user, both withdrawal paths.
    pub total_withdrawn: i128,
    pub transaction_count: u32,
    pub active_deposits: u32,
    pub last_activity: u64,
    /// Plan of the most recent deposit.
    pub preferred_plan: u32,
}

// ─── Interest configuration ────────────────────────────────────────────────

/// How multi-day compounding is evaluated. Both respect the 365-day
/// iteration bound; they differ only in intermediate rounding.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompoundMethod {
    /// One multiplication per elapsed day, faithful to the source system.
    DailyLoop,
    /// Square-and-multiply closed form.
    BinaryPow,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Contract admin address (Instance).
    Admin,
    /// Deposit asset token address (Instance).
    Token,
    /// Achievement badge contract address (Instance).
    BadgeContract,
    /// Emergency stop flag (Instance).
    Paused,
    /// Vault-wide APY multiplier in basis points (Instance).
    GlobalMultiplierBps,
    /// Active `CompoundMethod` (Instance).
    Compounding,
    /// Singleton `RewardPool` (Instance).
    RewardPool,
    /// Auto-increment deposit id counter (Instance).
    DepositCounter,
    /// All known plan ids (Instance).
    PlanIds,
    /// Plan record keyed by id (Persistent).
    Plan(u32),
    /// Deposit record keyed by id (Persistent).
    Deposit(u64),
    /// Yield position keyed by deposit id (Persistent).
    Position(u64),
    /// Deposit ids owned by an address (Persistent).
    OwnerDeposits(Address),
    /// Per-user aggregates (Persistent).
    UserStats(Address),
}
