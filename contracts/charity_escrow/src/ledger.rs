//! # Donation ledger
//!
//! Append-only donation records and the totals derived from them. `record`
//! is the only code path that increases a campaign's `raised`.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::storage;
use crate::types::{CampaignState, Donation};

/// Largest page `donations_page` returns. Each record is its own ledger
/// entry, and one invocation may only read a bounded number of entries.
pub const MAX_PAGE_SIZE: u32 = 50;

pub fn validate_amount(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// Append a donation and fold it into `state` and the donor's running total.
///
/// All sums are computed before anything is written, so an overflow leaves
/// storage untouched. The caller persists `state`.
pub fn record(
    env: &Env,
    campaign_id: u64,
    state: &mut CampaignState,
    donor: &Address,
    amount: i128,
) -> Result<Donation, Error> {
    validate_amount(amount)?;

    let previous = storage::donor_total(env, campaign_id, donor);
    let donor_total = previous.checked_add(amount).ok_or(Error::AmountOverflow)?;
    let raised = state.raised.checked_add(amount).ok_or(Error::AmountOverflow)?;
    let balance = state.balance.checked_add(amount).ok_or(Error::AmountOverflow)?;
    let index = state.donation_count;
    let donation_count = index.checked_add(1).ok_or(Error::AmountOverflow)?;
    let donor_count = if previous == 0 {
        state.donor_count.checked_add(1).ok_or(Error::AmountOverflow)?
    } else {
        state.donor_count
    };

    let donation = Donation {
        campaign_id,
        donor: donor.clone(),
        amount,
        timestamp: env.ledger().timestamp(),
    };
    storage::save_donation(env, campaign_id, index, &donation);
    storage::set_donor_total(env, campaign_id, donor, donor_total);

    state.donor_count = donor_count;
    state.raised = raised;
    state.balance = balance;
    state.donation_count = donation_count;

    Ok(donation)
}

/// All donations to a campaign in insertion order.
///
/// Reads one entry per donation. Campaigns with more than [`MAX_PAGE_SIZE`]
/// records should be walked with [`donations_page`] instead.
pub fn donations_of(env: &Env, campaign_id: u64, state: &CampaignState) -> Vec<Donation> {
    load_range(env, campaign_id, 0, state.donation_count)
}

/// Up to `limit` donations starting at record index `start`, in insertion
/// order. `limit` is clamped to [`MAX_PAGE_SIZE`]; a `start` past the end
/// yields an empty page.
pub fn donations_page(
    env: &Env,
    campaign_id: u64,
    state: &CampaignState,
    start: u32,
    limit: u32,
) -> Vec<Donation> {
    let end = start
        .saturating_add(limit.min(MAX_PAGE_SIZE))
        .min(state.donation_count);
    load_range(env, campaign_id, start, end)
}

fn load_range(env: &Env, campaign_id: u64, start: u32, end: u32) -> Vec<Donation> {
    let mut donations = Vec::new(env);
    for index in start..end {
        if let Some(donation) = storage::load_donation(env, campaign_id, index) {
            donations.push_back(donation);
        }
    }
    donations
}

pub fn total_by_donor(env: &Env, campaign_id: u64, donor: &Address) -> i128 {
    storage::donor_total(env, campaign_id, donor)
}

#[cfg(test)]
mod tests {
    use soroban_sdk::{testutils::Address as _, Address, Env};

    use super::*;
    use crate::CharityEscrow;

    #[test]
    fn donor_count_overflow_is_a_typed_error() {
        let env = Env::default();
        let token = Address::generate(&env);
        let contract_id = env.register(CharityEscrow, (token,));
        let donor = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut state = CampaignState {
                donor_count: u32::MAX,
                ..CampaignState::default()
            };
            let before = state.clone();

            assert_eq!(
                record(&env, 0, &mut state, &donor, 5),
                Err(Error::AmountOverflow)
            );
            assert_eq!(state, before);
            assert_eq!(storage::load_donation(&env, 0, 0), None);
            assert_eq!(storage::donor_total(&env, 0, &donor), 0);
        });
    }

    #[test]
    fn returning_donor_is_counted_once() {
        let env = Env::default();
        let token = Address::generate(&env);
        let contract_id = env.register(CharityEscrow, (token,));
        let donor = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut state = CampaignState::default();
            record(&env, 0, &mut state, &donor, 5).unwrap();
            record(&env, 0, &mut state, &donor, 7).unwrap();

            assert_eq!(state.donor_count, 1);
            assert_eq!(state.donation_count, 2);
            assert_eq!(state.raised, 12);
            assert_eq!(total_by_donor(&env, 0, &donor), 12);
        });
    }
}
