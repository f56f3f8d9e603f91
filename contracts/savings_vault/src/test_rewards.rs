//! Reward pool funding and milestone badge notification.

#![cfg(test)]

use crate::test_helpers::*;
use crate::{SavingsVault, SavingsVaultClient};
use achievement_badge::{AchievementBadge, AchievementBadgeClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, Symbol};

// ═══════════════════════════════════════════════════════════════════
// 1. Pool funding
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_fund_reward_pool_moves_tokens() {
    let e = Env::default();
    let s = setup(&e);

    let vault_before = s.token.balance(&s.contract_id);
    let total = s.client.fund_reward_pool(&s.admin, &(500 * ONE_TOKEN));
    assert_eq!(total, 500 * ONE_TOKEN);
    assert_eq!(
        s.token.balance(&s.contract_id),
        vault_before + 500 * ONE_TOKEN
    );
    assert_eq!(s.token.balance(&s.admin), DEFAULT_MINT - 500 * ONE_TOKEN);

    let pool = s.client.get_reward_pool();
    assert_eq!(pool.total_pool, 500 * ONE_TOKEN);
    assert_eq!(pool.distributed, 0);
}

#[test]
fn test_fund_reward_pool_accumulates() {
    let e = Env::default();
    let s = setup(&e);
    s.client.fund_reward_pool(&s.admin, &(100 * ONE_TOKEN));
    let total = s.client.fund_reward_pool(&s.admin, &(50 * ONE_TOKEN));
    assert_eq!(total, 150 * ONE_TOKEN);
}

#[test]
#[should_panic(expected = "unauthorized")]
fn test_fund_reward_pool_unauthorized_panics() {
    let e = Env::default();
    let s = setup(&e);
    s.client.fund_reward_pool(&s.owner, &(100 * ONE_TOKEN));
}

#[test]
#[should_panic(expected = "amount must be positive")]
fn test_fund_reward_pool_zero_amount_panics() {
    let e = Env::default();
    let s = setup(&e);
    s.client.fund_reward_pool(&s.admin, &0_i128);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Milestone badges
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_first_deposit_badge_awarded() {
    let e = Env::default();
    let s = setup(&e);

    // Below the 100-token tier: only the first-deposit badge.
    s.client.create_deposit(&s.owner, &(50 * ONE_TOKEN), &30_u32);

    assert!(s.badge.has_badge(&s.owner, &Symbol::new(&e, "first_deposit")));
    assert_eq!(s.badge.badge_count(&s.owner), 1);
}

#[test]
fn test_starter_badge_notified_once_for_repeat_deposits() {
    let e = Env::default();
    let s = setup(&e);

    // Two 150-token deposits into the 30-day plan: the "starter" category
    // is awarded on the first and deduplicated on the second.
    s.client.create_deposit(&s.owner, &(150 * ONE_TOKEN), &30_u32);
    s.client.create_deposit(&s.owner, &(150 * ONE_TOKEN), &30_u32);

    assert!(s.badge.has_badge(&s.owner, &Symbol::new(&e, "starter")));
    // first_deposit + starter, nothing doubled.
    assert_eq!(s.badge.badge_count(&s.owner), 2);
}

#[test]
fn test_duration_tiers_map_to_categories() {
    let e = Env::default();
    let s = setup(&e);
    let amount = 150 * ONE_TOKEN;

    s.client.create_deposit(&s.owner, &amount, &30_u32);
    s.client.create_deposit(&s.owner, &amount, &90_u32);
    s.client.create_deposit(&s.owner, &amount, &180_u32);
    s.client.create_deposit(&s.owner, &amount, &365_u32);

    assert!(s.badge.has_badge(&s.owner, &Symbol::new(&e, "starter")));
    assert!(s.badge.has_badge(&s.owner, &Symbol::new(&e, "saver")));
    assert!(s.badge.has_badge(&s.owner, &Symbol::new(&e, "investor")));
    assert!(s.badge.has_badge(&s.owner, &Symbol::new(&e, "champion")));
}

#[test]
fn test_amount_tiers_stack() {
    let e = Env::default();
    let s = setup(&e);

    // 10k tokens in one go: every amount tier plus the duration category.
    s.client
        .create_deposit(&s.owner, &(10_000 * ONE_TOKEN), &90_u32);

    assert!(s.badge.has_badge(&s.owner, &Symbol::new(&e, "first_deposit")));
    assert!(s.badge.has_badge(&s.owner, &Symbol::new(&e, "saver")));
    assert!(s.badge.has_badge(&s.owner, &Symbol::new(&e, "big_saver")));
    assert!(s.badge.has_badge(&s.owner, &Symbol::new(&e, "whale")));
    assert_eq!(s.badge.badge_count(&s.owner), 4);
}

#[test]
fn test_small_deposit_earns_no_tier_badge() {
    let e = Env::default();
    let s = setup(&e);

    s.client.create_deposit(&s.owner, &(99 * ONE_TOKEN), &30_u32);
    assert!(!s.badge.has_badge(&s.owner, &Symbol::new(&e, "starter")));
}

// ═══════════════════════════════════════════════════════════════════
// 3. Notifier failures are best-effort
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_badge_failure_does_not_abort_deposit() {
    let e = Env::default();
    e.mock_all_auths();

    // Badge registry deployed but never wired up: every award call fails.
    let contract_id = e.register(SavingsVault, ());
    let client = SavingsVaultClient::new(&e, &contract_id);
    let badge_id = e.register(AchievementBadge, ());
    let badge = AchievementBadgeClient::new(&e, &badge_id);

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let token_id = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    StellarAssetClient::new(&e, &token_id).mint(&owner, &DEFAULT_MINT);
    let token = TokenClient::new(&e, &token_id);
    let expiry = e.ledger().sequence().saturating_add(100_000);
    token.approve(&owner, &contract_id, &DEFAULT_MINT, &expiry);

    client.initialize(&admin, &token_id, &badge_id);

    let deposit = client.create_deposit(&owner, &(150 * ONE_TOKEN), &30_u32);

    // The deposit landed; no badge did.
    assert_eq!(client.list_deposit_ids(&owner).len(), 1);
    assert_eq!(deposit.amount, 150 * ONE_TOKEN);
    assert_eq!(badge.badge_count(&owner), 0);
}
