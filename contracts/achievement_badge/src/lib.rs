//! Achievement Badge Registry
//!
//! Records milestone badges awarded by the savings vault. One badge exists
//! per (owner, category); repeat awards are no-ops returning `false`, which
//! makes milestone notification idempotent without any coordination on the
//! caller's side.
//!
//! Awarding is gated on the configured minter (the vault contract), whose
//! authorization is satisfied automatically when it is the invoking
//! contract.

#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol};


/// All panic messages used by the achievement_badge contract.
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";
pub const ERR_UNAUTHORIZED: &str = "unauthorized";
pub const ERR_MINTER_NOT_SET: &str = "minter not set";
pub const ERR_NO_BADGE: &str = "no badge found";

// ─── Types ─────────────────────────────────────────────────────────────────

/// A single awarded badge.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Badge {
    pub owner: Address,
    /// Milestone category key, e.g. "starter" or "first_deposit".
    pub category: Symbol,
    /// Ledger timestamp of the award.
    pub awarded_at: u64,
}

#[contracttype]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// Address allowed to award badges (the vault).
    Minter,
    /// Awarded badge per (owner, category).
    Badge(Address, Symbol),
    /// Number of distinct badges held by an owner.
    BadgeCount(Address),
}

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

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct AchievementBadge;

#[contractimpl]
impl AchievementBadge {
    /// One-time initialization. Stores `admin`.
    pub fn initialize(e: Env, admin: Address) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
    }

    /// Point the registry at the contract allowed to award badges.
    pub fn set_minter(e: Env, admin: Address, minter: Address) {
        require_admin(&e, &admin);
        e.storage().instance().set(&DataKey::Minter, &minter);
    }

    /// Award `category` to `owner`. Returns `true` on a fresh award and
    /// `false` when the badge already exists (idempotent per category).
    pub fn award(e: Env, owner: Address, category: Symbol) -> bool {
        let minter: Address = e
            .storage()
            .instance()
            .get(&DataKey::Minter)
            .unwrap_or_else(|| panic!("{}", ERR_MINTER_NOT_SET));
        minter.require_auth();

        let key = DataKey::Badge(owner.clone(), category.clone());
        if e.storage().persistent().has(&key) {
            return false;
        }

        let badge = Badge {
            owner: owner.clone(),
            category: category.clone(),
            awarded_at: e.ledger().timestamp(),
        };
        e.storage().persistent().set(&key, &badge);

        let count_key = DataKey::BadgeCount(owner.clone());
        let count: u32 = e.storage().persistent().get(&count_key).unwrap_or(0);
        e.storage().persistent().set(&count_key, &(count + 1));

        e.events()
            .publish((Symbol::new(&e, "badge_awarded"), owner), category);
        true
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn has_badge(e: Env, owner: Address, category: Symbol) -> bool {
        e.storage().persistent().has(&DataKey::Badge(owner, category))
    }

    /// Returns the badge record. Panics if it was never awarded.
    pub fn get_badge(e: Env, owner: Address, category: Symbol) -> Badge {
        e.storage()
            .persistent()
            .get(&DataKey::Badge(owner, category))
            .unwrap_or_else(|| panic!("{}", ERR_NO_BADGE))
    }

    /// Number of distinct badge categories held by `owner`.
    pub fn badge_count(e: Env, owner: Address) -> u32 {
        e.storage()
            .persistent()
            .get(&DataKey::BadgeCount(owner))
            .unwrap_or(0)
    }
}
