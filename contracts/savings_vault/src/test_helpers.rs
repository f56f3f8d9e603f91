//! Shared test helpers for savings_vault tests.

#![cfg(test)]

use crate::{SavingsVault, SavingsVaultClient};
use achievement_badge::{AchievementBadge, AchievementBadgeClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// Default mint: large enough for all test scenarios (100M tokens at 6dp).
pub const DEFAULT_MINT: i128 = 100_000_000_000_000;

/// Interest reserve minted straight to the vault, standing in for the yield
/// revenue a deployed vault is provisioned with. Payouts exceed pulled
/// principal by the accrued interest, which has to come from somewhere.
pub const VAULT_RESERVE: i128 = 1_000_000_000_000;

/// Base units per whole token (6-decimal asset).
pub const ONE_TOKEN: i128 = 1_000_000;

/// One day in seconds.
pub const ONE_DAY: u64 = 86_400;
/// The seeded 30-day plan's lock period.
pub const THIRTY_DAYS: u64 = 30 * 86_400;

/// Everything a test needs: clients for the vault, badge registry, and
/// token, plus the generated addresses.
pub struct Setup<'a> {
    pub client: SavingsVaultClient<'a>,
    pub badge: AchievementBadgeClient<'a>,
    pub token: TokenClient<'a>,
    pub admin: Address,
    pub owner: Address,
    pub contract_id: Address,
    pub badge_id: Address,
    pub token_id: Address,
}

/// Full environment: vault + badge registry + asset contract, with the
/// badge minter pointed at the vault, tokens minted to `owner` and `admin`,
/// and the vault approved as spender for both.
pub fn setup(e: &Env) -> Setup<'_> {
    e.mock_all_auths();

    let contract_id = e.register(SavingsVault, ());
    let client = SavingsVaultClient::new(e, &contract_id);
    let badge_id = e.register(AchievementBadge, ());
    let badge = AchievementBadgeClient::new(e, &badge_id);

    let admin = Address::generate(e);
    let owner = Address::generate(e);

    let token_id = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let token_admin = StellarAssetClient::new(e, &token_id);
    token_admin.mint(&owner, &DEFAULT_MINT);
    token_admin.mint(&admin, &DEFAULT_MINT);
    token_admin.mint(&contract_id, &VAULT_RESERVE);

    let token = TokenClient::new(e, &token_id);
    let expiry_ledger = e.ledger().sequence().saturating_add(100_000);
    token.approve(&owner, &contract_id, &DEFAULT_MINT, &expiry_ledger);
    token.approve(&admin, &contract_id, &DEFAULT_MINT, &expiry_ledger);

    badge.initialize(&admin);
    badge.set_minter(&admin, &contract_id);

    client.initialize(&admin, &token_id, &badge_id);

    Setup {
        client,
        badge,
        token,
        admin,
        owner,
        contract_id,
        badge_id,
        token_id,
    }
}

/// Mints and approves for an additional user.
pub fn fund_user(e: &Env, s: &Setup, user: &Address) {
    let token_admin = StellarAssetClient::new(e, &s.token_id);
    token_admin.mint(user, &DEFAULT_MINT);
    let expiry_ledger = e.ledger().sequence().saturating_add(100_000);
    s.token
        .approve(user, &s.contract_id, &DEFAULT_MINT, &expiry_ledger);
}

/// Retunes the seeded 30-day plan to the given APY, keeping its other terms.
pub fn set_30d_apy(s: &Setup, apy_bps: u32) {
    s.client.set_plan(
        &s.admin,
        &30_u32,
        &THIRTY_DAYS,
        &apy_bps,
        &(10 * ONE_TOKEN),
        &(1_000_000 * ONE_TOKEN),
        &true,
    );
}
