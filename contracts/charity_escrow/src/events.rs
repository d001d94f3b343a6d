//! # Events
//!
//! Every command publishes one event with topics `(symbol, campaign_id)` and
//! a typed payload. Off-chain indexers key on the leading symbol.
//!
//! | Topic       | Payload             |
//! |-------------|---------------------|
//! | `created`   | [`CampaignCreated`] |
//! | `donated`   | [`DonationReceived`]|
//! | `goal_met`  | [`GoalReached`]     |
//! | `withdrawn` | [`FundsWithdrawn`]  |
//! | `refunded`  | [`RefundIssued`]    |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub creator: Address,
    pub beneficiary: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceived {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
    pub raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalReached {
    pub campaign_id: u64,
    pub raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub campaign_id: u64,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundIssued {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreated) {
    env.events()
        .publish((symbol_short!("created"), event.campaign_id), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceived) {
    env.events()
        .publish((symbol_short!("donated"), event.campaign_id), event);
}

pub fn emit_goal_reached(env: &Env, event: GoalReached) {
    env.events()
        .publish((symbol_short!("goal_met"), event.campaign_id), event);
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawn) {
    env.events()
        .publish((symbol_short!("withdrawn"), event.campaign_id), event);
}

pub fn emit_refund_issued(env: &Env, event: RefundIssued) {
    env.events()
        .publish((symbol_short!("refunded"), event.campaign_id), event);
}
