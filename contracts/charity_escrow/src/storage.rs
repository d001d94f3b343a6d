//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the escrow.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                          |
//! |-----------------|-----------|--------------------------------------|
//! | `Token`         | `Address` | Escrow currency for every campaign   |
//! | `CampaignCount` | `u64`     | Next campaign id / total ever created |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                         | Type            | Description                      |
//! |-----------------------------|-----------------|----------------------------------|
//! | `Meta(id)`                  | `CampaignMeta`  | Immutable campaign metadata      |
//! | `State(id)`                 | `CampaignState` | Mutable totals and flags         |
//! | `Donation(id, index)`       | `Donation`      | Append-only donation record      |
//! | `DonorTotal(id, donor)`     | `i128`          | Sum of a donor's contributions   |
//! | `DonorRefunded(id, donor)`  | `i128`          | Amount already refunded to donor |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Donations are keyed by `(campaign, index)` rather than kept in one growing
//! vector, so an append writes one small entry and earlier records are never
//! rewritten.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::Error;
use crate::types::{CampaignMeta, CampaignState, Donation};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Escrow token address (Instance).
    Token,
    /// Auto-increment campaign counter (Instance).
    CampaignCount,
    /// Immutable campaign metadata keyed by id (Persistent).
    Meta(u64),
    /// Mutable campaign state keyed by id (Persistent).
    State(u64),
    /// Donation record keyed by campaign id and record index (Persistent).
    Donation(u64, u32),
    /// Cumulative contribution of one donor to one campaign (Persistent).
    DonorTotal(u64, Address),
    /// Cumulative refund paid to one donor by one campaign (Persistent).
    DonorRefunded(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// The escrow token. Set once by the constructor.
pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("token not set")
}

/// Reads, increments, and stores the campaign counter.
/// Returns the id for the *current* campaign (pre-increment value).
pub fn get_and_increment_campaign_id(env: &Env) -> u64 {
    let current = campaign_count(env);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(current + 1));
    current
}

/// Total campaigns ever created.
pub fn campaign_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

/// Save the metadata and a fresh state entry for a new campaign.
pub fn save_campaign(env: &Env, meta: &CampaignMeta, state: &CampaignState) {
    set_persistent(env, &DataKey::Meta(meta.id), meta);
    set_persistent(env, &DataKey::State(meta.id), state);
}

pub fn has_campaign(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Meta(id))
}

pub fn load_campaign_meta(env: &Env, id: u64) -> Result<CampaignMeta, Error> {
    let key = DataKey::Meta(id);
    let meta: CampaignMeta = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(meta)
}

pub fn load_campaign_state(env: &Env, id: u64) -> Result<CampaignState, Error> {
    let key = DataKey::State(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    set_persistent(env, &DataKey::State(id), state);
}

pub fn save_donation(env: &Env, id: u64, index: u32, donation: &Donation) {
    set_persistent(env, &DataKey::Donation(id, index), donation);
}

pub fn load_donation(env: &Env, id: u64, index: u32) -> Option<Donation> {
    env.storage().persistent().get(&DataKey::Donation(id, index))
}

fn get_amount(env: &Env, key: &DataKey) -> i128 {
    env.storage().persistent().get(key).unwrap_or(0)
}

pub fn donor_total(env: &Env, id: u64, donor: &Address) -> i128 {
    get_amount(env, &DataKey::DonorTotal(id, donor.clone()))
}

pub fn set_donor_total(env: &Env, id: u64, donor: &Address, amount: i128) {
    set_persistent(env, &DataKey::DonorTotal(id, donor.clone()), &amount);
}

pub fn donor_refunded(env: &Env, id: u64, donor: &Address) -> i128 {
    get_amount(env, &DataKey::DonorRefunded(id, donor.clone()))
}

pub fn set_donor_refunded(env: &Env, id: u64, donor: &Address, amount: i128) {
    set_persistent(env, &DataKey::DonorRefunded(id, donor.clone()), &amount);
}
