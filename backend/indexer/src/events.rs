//! Canonical event types emitted by the charity escrow contract.
//!
//! These mirror the contract events defined in
//! `contracts/charity_escrow/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the escrow contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A campaign was registered (`created` topic).
    CampaignCreated,
    /// A donation was accepted (`donated` topic).
    DonationReceived,
    /// A donation brought a campaign to its goal (`goal_met` topic).
    GoalReached,
    /// The escrow was paid out to the beneficiary (`withdrawn` topic).
    FundsWithdrawn,
    /// A donor was refunded (`refunded` topic).
    RefundIssued,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::CampaignCreated,
            "donated" => Self::DonationReceived,
            "goal_met" => Self::GoalReached,
            "withdrawn" => Self::FundsWithdrawn,
            "refunded" => Self::RefundIssued,
            _ => Self::Unknown,
        }
    }

    /// Short identifier stored in the `event_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignCreated => "campaign_created",
            Self::DonationReceived => "donation_received",
            Self::GoalReached => "goal_reached",
            Self::FundsWithdrawn => "funds_withdrawn",
            Self::RefundIssued => "refund_issued",
            Self::Unknown => "unknown",
        }
    }
}

/// A decoded escrow event, ready to be stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignEvent {
    /// RPC event id (paging token). Unique per contract event on the network.
    pub event_id: String,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// An event row as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
