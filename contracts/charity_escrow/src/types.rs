//! # Types
//!
//! Shared data structures used across all modules of the escrow ledger.
//!
//! ## Meta / State split
//!
//! A campaign is stored as two ledger entries:
//!
//! - [`CampaignMeta`]: written once by `create_campaign`; never mutated.
//! - [`CampaignState`]: rewritten by donations, withdrawals and refunds.
//!
//! The public API returns the reconstructed [`Campaign`] view, whose `active`
//! flag is computed on read from the lifecycle module and never stored.
//!
//! ## Lifecycle
//!
//! ```text
//! Active ──► GoalMet ────► Closed   (withdrawal)
//!    └─────► GoalMissed ─► Closed   (withdrawal, or refunds drain the escrow)
//! ```

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle status of a campaign, derived from time and totals.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Before the deadline and below the goal; accepting donations.
    Active,
    /// Goal reached; awaiting withdrawal.
    GoalMet,
    /// Deadline passed below the goal; refunds (or a partial withdrawal) open.
    GoalMissed,
    /// Funds withdrawn or fully refunded. Terminal.
    Closed,
}

/// Immutable campaign metadata, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignMeta {
    pub id: u64,
    pub creator: Address,
    pub beneficiary: Address,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub goal: i128,
    pub deadline: u64,
    pub created_at: u64,
}

/// Mutable campaign totals and flags.
///
/// `balance == raised - refunded` until withdrawal, and `0` after it.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CampaignState {
    /// Cumulative accepted donations. Never decreases.
    pub raised: i128,
    /// Amount currently held in escrow for this campaign.
    pub balance: i128,
    /// Total returned to donors so far.
    pub refunded: i128,
    pub withdrawn: bool,
    /// Distinct donors.
    pub donor_count: u32,
    /// Donation records appended so far; also the next record index.
    pub donation_count: u32,
}

/// Full campaign view returned by queries and commands.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Dense sequential identifier, starting at 0.
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Address that submitted `create_campaign`.
    pub creator: Address,
    /// Address that receives withdrawn funds.
    pub beneficiary: Address,
    /// Target amount in the token's smallest unit.
    pub goal: i128,
    pub raised: i128,
    pub balance: i128,
    pub refunded: i128,
    /// Ledger timestamp at which donations stop.
    pub deadline: u64,
    pub created_at: u64,
    /// Derived: `true` only while the campaign accepts donations.
    pub active: bool,
    pub withdrawn: bool,
    pub donor_count: u32,
    pub donation_count: u32,
}

/// One accepted donation. Append-only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Result of a withdrawal or refund: what moved, to whom, and the post-state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferReceipt {
    pub campaign_id: u64,
    pub recipient: Address,
    pub amount: i128,
    pub campaign: Campaign,
}
