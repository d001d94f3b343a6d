//! # Charity Escrow Contract
//!
//! Campaign escrow ledger: anyone registers a fundraising campaign with a
//! goal and a deadline, anyone donates toward it, and the collected funds are
//! later released either to the campaign's beneficiary or back to donors.
//!
//! | Phase        | Entry Point(s)                                           |
//! |--------------|----------------------------------------------------------|
//! | Deployment   | `__constructor(token)`                                   |
//! | Registration | [`CharityEscrow::create_campaign`]                       |
//! | Funding      | [`CharityEscrow::donate`]                                |
//! | Settlement   | [`CharityEscrow::withdraw_funds`], [`CharityEscrow::request_refund`] |
//! | Queries      | `get_campaign`, `get_campaign_donations`, `get_campaign_donations_page`, `check_campaign_exists`, `get_total_campaigns`, `campaign_count`, `get_donor_amount`, `get_campaign_status`, `get_refunded_amount`, `token` |
//!
//! ## Architecture
//!
//! This file holds only the entry points and event emission for registration
//! and funding. Identity and metadata live in [`registry`], donation records
//! in [`ledger`], lifecycle rules in [`lifecycle`], caller checks in
//! [`access`], and every token movement in [`transfer`].
//!
//! Each invocation is one ledger transaction: a returned [`Error`] discards
//! every write it made. Invocations are totally ordered by the host, which
//! serializes concurrent commands against the same campaign.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod access;
mod errors;
mod events;
mod ledger;
mod lifecycle;
mod registry;
mod storage;
mod transfer;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use errors::{Error, ErrorKind};
pub use events::{CampaignCreated, DonationReceived, FundsWithdrawn, GoalReached, RefundIssued};
pub use types::{Campaign, CampaignStatus, Donation, TransferReceipt};

use events::{emit_campaign_created, emit_donation_received, emit_goal_reached};
use registry::NewCampaign;

#[contract]
pub struct CharityEscrow;

#[contractimpl]
impl CharityEscrow {
    /// Bind the escrow to the token every campaign is denominated in.
    pub fn __constructor(env: Env, token: Address) {
        storage::set_token(&env, &token);
    }

    /// The escrow token address.
    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────

    /// Register a new campaign. `creator` must authorize the call.
    ///
    /// - `title` and `description` must be non-empty.
    /// - `goal` must be positive.
    /// - `duration_in_days` must be at least 1; the deadline is the current
    ///   ledger time plus that many days.
    ///
    /// Returns the stored campaign, including its newly assigned `id`.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        image_url: String,
        beneficiary: Address,
        goal: i128,
        duration_in_days: u64,
    ) -> Result<Campaign, Error> {
        creator.require_auth();

        let meta = registry::create(
            &env,
            NewCampaign {
                creator,
                title,
                description,
                image_url,
                beneficiary,
                goal,
                duration_in_days,
            },
        )?;

        emit_campaign_created(
            &env,
            CampaignCreated {
                campaign_id: meta.id,
                creator: meta.creator.clone(),
                beneficiary: meta.beneficiary.clone(),
                goal: meta.goal,
                deadline: meta.deadline,
            },
        );

        Ok(registry::view(&env, meta, &types::CampaignState::default()))
    }

    /// Donate `amount` of the escrow token to an active campaign.
    ///
    /// The tokens move from `donor` into the contract in the same invocation
    /// that records the donation. The donation that brings `raised` to the
    /// goal closes the campaign to further donations.
    pub fn donate(env: Env, campaign_id: u64, donor: Address, amount: i128) -> Result<Campaign, Error> {
        donor.require_auth();
        ledger::validate_amount(amount)?;

        let (meta, mut state) = registry::load(&env, campaign_id)?;
        lifecycle::require_can_donate(&env, &meta, &state)?;

        transfer::collect(&env, &donor, amount)?;
        ledger::record(&env, campaign_id, &mut state, &donor, amount)?;
        storage::save_campaign_state(&env, campaign_id, &state);

        emit_donation_received(
            &env,
            DonationReceived {
                campaign_id,
                donor,
                amount,
                raised: state.raised,
            },
        );
        if state.raised >= meta.goal {
            emit_goal_reached(
                &env,
                GoalReached {
                    campaign_id,
                    raised: state.raised,
                },
            );
        }

        Ok(registry::view(&env, meta, &state))
    }

    /// Transfer the campaign's entire escrow balance to its beneficiary.
    ///
    /// `caller` must be the creator or the beneficiary. Allowed once the goal
    /// is met, or once the deadline has passed with funds in escrow; at most
    /// once per campaign.
    pub fn withdraw_funds(env: Env, campaign_id: u64, caller: Address) -> Result<TransferReceipt, Error> {
        caller.require_auth();
        transfer::withdraw(&env, campaign_id, &caller)
    }

    /// Refund the caller's unrefunded contribution to a campaign that ended
    /// below its goal.
    pub fn request_refund(env: Env, campaign_id: u64, caller: Address) -> Result<TransferReceipt, Error> {
        caller.require_auth();
        transfer::refund(&env, campaign_id, &caller)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, Error> {
        registry::get(&env, campaign_id)
    }

    /// Donations in the order they were accepted.
    ///
    /// Reads every record in one invocation, so it only fits campaigns
    /// within the network's read limit. Use
    /// [`Self::get_campaign_donations_page`] for larger ones.
    pub fn get_campaign_donations(env: Env, campaign_id: u64) -> Result<Vec<Donation>, Error> {
        let state = storage::load_campaign_state(&env, campaign_id)?;
        Ok(ledger::donations_of(&env, campaign_id, &state))
    }

    /// At most `limit` donations (capped at 50) from record index `start`.
    /// Resume from `start + page.len()` until a page comes back short.
    pub fn get_campaign_donations_page(
        env: Env,
        campaign_id: u64,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Donation>, Error> {
        let state = storage::load_campaign_state(&env, campaign_id)?;
        Ok(ledger::donations_page(&env, campaign_id, &state, start, limit))
    }

    pub fn check_campaign_exists(env: Env, campaign_id: u64) -> bool {
        registry::exists(&env, campaign_id)
    }

    /// Total campaigns ever created, closed ones included.
    pub fn get_total_campaigns(env: Env) -> u64 {
        registry::count(&env)
    }

    /// Alias of [`Self::get_total_campaigns`].
    pub fn campaign_count(env: Env) -> u64 {
        registry::count(&env)
    }

    /// Cumulative amount `donor` has given to the campaign.
    pub fn get_donor_amount(env: Env, campaign_id: u64, donor: Address) -> Result<i128, Error> {
        if !registry::exists(&env, campaign_id) {
            return Err(Error::CampaignNotFound);
        }
        Ok(ledger::total_by_donor(&env, campaign_id, &donor))
    }

    /// Amount already refunded to `donor` by the campaign.
    pub fn get_refunded_amount(env: Env, campaign_id: u64, donor: Address) -> Result<i128, Error> {
        if !registry::exists(&env, campaign_id) {
            return Err(Error::CampaignNotFound);
        }
        Ok(storage::donor_refunded(&env, campaign_id, &donor))
    }

    pub fn get_campaign_status(env: Env, campaign_id: u64) -> Result<CampaignStatus, Error> {
        let (meta, state) = registry::load(&env, campaign_id)?;
        Ok(lifecycle::status(&env, &meta, &state))
    }
}
