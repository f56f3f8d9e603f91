/// All panic messages used by the savings_vault contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
///
/// Grouped by how callers should treat them: validation errors are rejected
/// before any state mutation; state-conflict errors are rejected with no
/// partial effects; arithmetic messages indicate an overflow that traps the
/// whole invocation. An exhausted reward pool is never an error (the bonus is
/// clamped), and a failed token transfer traps inside the token contract,
/// rolling back the entire operation.

// ── Validation ─────────────────────────────────────────────────────────────
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";
pub const ERR_UNAUTHORIZED: &str = "unauthorized";
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_AMOUNT_BELOW_MIN: &str = "amount below plan minimum";
pub const ERR_AMOUNT_ABOVE_MAX: &str = "amount above plan maximum";
pub const ERR_UNKNOWN_PLAN: &str = "unknown plan";
pub const ERR_PLAN_INACTIVE: &str = "plan is not active";
pub const ERR_INVALID_DURATION: &str = "duration must be positive";
pub const ERR_APY_TOO_HIGH: &str = "base apy exceeds 10000 basis points";
pub const ERR_PENALTY_TOO_HIGH: &str = "penalty exceeds 10000 basis points";
pub const ERR_HOLD_EXCEEDS_DURATION: &str = "minimum hold exceeds plan duration";
pub const ERR_MULTIPLIER_RANGE: &str = "multiplier outside 5000-20000 basis points";
pub const ERR_PLAN_BOUNDS: &str = "plan minimum exceeds maximum";
pub const ERR_NOT_DEPOSIT_OWNER: &str = "not deposit owner";

// ── State conflicts ────────────────────────────────────────────────────────
pub const ERR_DEPOSIT_NOT_FOUND: &str = "no deposit found";
pub const ERR_ALREADY_WITHDRAWN: &str = "deposit already withdrawn";
pub const ERR_NOT_MATURED: &str = "deposit has not matured yet";
pub const ERR_POSITION_NOT_FOUND: &str = "no position found";
pub const ERR_POSITION_FINALIZED: &str = "position already finalized";
pub const ERR_PAUSED: &str = "contract is paused";
pub const ERR_MATURITY_OVERFLOW: &str = "maturity timestamp would overflow";

// ── Collaborators ──────────────────────────────────────────────────────────
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "insufficient token allowance";
pub const ERR_TOKEN_NOT_SET: &str = "token not set";

// ── Arithmetic ─────────────────────────────────────────────────────────────
pub const ERR_INTEREST_OVERFLOW: &str = "interest calculation overflow";
pub const ERR_PAYOUT_OVERFLOW: &str = "payout calculation overflow";
pub const ERR_POOL_OVERFLOW: &str = "reward pool overflow";
pub const ERR_STATS_OVERFLOW: &str = "user stats overflow";
