#![allow(dead_code)]

extern crate std;

use soroban_sdk::{token, Address};

use crate::types::Campaign;
use crate::CharityEscrowClient;

/// INV-1: `raised` equals the sum of the campaign's donation records.
pub fn assert_raised_matches_donations(client: &CharityEscrowClient, campaign_id: u64) {
    let campaign = client.get_campaign(&campaign_id);
    let donations = client.get_campaign_donations(&campaign_id);
    let sum: i128 = donations.iter().map(|d| d.amount).sum();
    assert_eq!(
        campaign.raised, sum,
        "INV-1 violated: campaign {} raised {} but donations sum to {}",
        campaign_id, campaign.raised, sum
    );
    assert_eq!(campaign.donation_count, donations.len());
}

/// INV-2: goal positive and deadline after creation.
pub fn assert_creation_bounds(campaign: &Campaign) {
    assert!(
        campaign.goal > 0,
        "INV-2 violated: campaign {} has non-positive goal ({})",
        campaign.id,
        campaign.goal
    );
    assert!(
        campaign.deadline > campaign.created_at,
        "INV-2 violated: campaign {} deadline {} not after creation {}",
        campaign.id,
        campaign.deadline,
        campaign.created_at
    );
}

/// INV-3: escrow accounting. Before withdrawal `balance == raised - refunded`;
/// after it the balance is zero.
pub fn assert_balance_accounting(campaign: &Campaign) {
    if campaign.withdrawn {
        assert_eq!(campaign.balance, 0, "INV-3 violated: withdrawn campaign {} holds funds", campaign.id);
    } else {
        assert_eq!(
            campaign.balance,
            campaign.raised - campaign.refunded,
            "INV-3 violated: campaign {} balance {} != raised {} - refunded {}",
            campaign.id,
            campaign.balance,
            campaign.raised,
            campaign.refunded
        );
    }
    assert!(campaign.balance >= 0);
}

/// INV-4: a donor is never refunded more than they contributed.
pub fn assert_refund_bounded(client: &CharityEscrowClient, campaign_id: u64, donor: &Address) {
    let given = client.get_donor_amount(&campaign_id, donor);
    let refunded = client.get_refunded_amount(&campaign_id, donor);
    assert!(
        refunded <= given,
        "INV-4 violated: donor refunded {} of {} contributed",
        refunded,
        given
    );
}

/// INV-5: the contract's token balance covers the sum of every campaign's
/// escrow exactly.
pub fn assert_escrow_backed(client: &CharityEscrowClient, token: &token::Client) {
    let mut escrowed = 0i128;
    for id in 0..client.campaign_count() {
        escrowed += client.get_campaign(&id).balance;
    }
    assert_eq!(
        token.balance(&client.address),
        escrowed,
        "INV-5 violated: contract holds {} but campaigns escrow {}",
        token.balance(&client.address),
        escrowed
    );
}

/// INV-6: campaign ids are dense and sequential from 0.
pub fn assert_sequential_ids(client: &CharityEscrowClient) {
    for id in 0..client.campaign_count() {
        assert!(client.check_campaign_exists(&id), "INV-6 violated: missing id {}", id);
        assert_eq!(client.get_campaign(&id).id, id);
    }
    assert!(!client.check_campaign_exists(&client.campaign_count()));
}

/// INV-7: metadata never changes after creation.
pub fn assert_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "INV-7 violated: id changed");
    assert_eq!(original.title, current.title, "INV-7 violated: title changed");
    assert_eq!(original.description, current.description, "INV-7 violated: description changed");
    assert_eq!(original.image_url, current.image_url, "INV-7 violated: image_url changed");
    assert_eq!(original.creator, current.creator, "INV-7 violated: creator changed");
    assert_eq!(original.beneficiary, current.beneficiary, "INV-7 violated: beneficiary changed");
    assert_eq!(original.goal, current.goal, "INV-7 violated: goal changed");
    assert_eq!(original.deadline, current.deadline, "INV-7 violated: deadline changed");
}

/// INV-8: `raised` never decreases between two observations.
pub fn assert_raised_monotonic(before: &Campaign, after: &Campaign) {
    assert!(
        after.raised >= before.raised,
        "INV-8 violated: raised decreased from {} to {}",
        before.raised,
        after.raised
    );
}

/// Run all per-campaign invariants.
pub fn assert_all_campaign_invariants(client: &CharityEscrowClient, campaign_id: u64) {
    let campaign = client.get_campaign(&campaign_id);
    assert_raised_matches_donations(client, campaign_id);
    assert_creation_bounds(&campaign);
    assert_balance_accounting(&campaign);
}
