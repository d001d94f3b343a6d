//! # Lifecycle
//!
//! The escrow state machine. Status is never stored: it is recomputed from
//! `(now, deadline, raised, goal, withdrawn, balance)` on every read and write,
//! so the derived `active` flag cannot drift from the fields it depends on.
//!
//! Reaching the goal closes the campaign to further donations in the same
//! invocation that records the crossing donation, even before the deadline.

use soroban_sdk::Env;

use crate::errors::Error;
use crate::types::{CampaignMeta, CampaignState, CampaignStatus};

/// Compute the lifecycle status of a campaign at ledger time `now`.
pub fn status_at(meta: &CampaignMeta, state: &CampaignState, now: u64) -> CampaignStatus {
    if state.withdrawn || (state.raised > 0 && state.balance == 0) {
        CampaignStatus::Closed
    } else if state.raised >= meta.goal {
        CampaignStatus::GoalMet
    } else if now >= meta.deadline {
        CampaignStatus::GoalMissed
    } else {
        CampaignStatus::Active
    }
}

pub fn status(env: &Env, meta: &CampaignMeta, state: &CampaignState) -> CampaignStatus {
    status_at(meta, state, env.ledger().timestamp())
}

pub fn is_active(env: &Env, meta: &CampaignMeta, state: &CampaignState) -> bool {
    status(env, meta, state) == CampaignStatus::Active
}

pub fn can_donate(env: &Env, meta: &CampaignMeta, state: &CampaignState) -> bool {
    is_active(env, meta, state)
}

/// Withdrawal is open once the goal is met, or once the deadline has passed
/// with something still in escrow, and only until the first withdrawal.
pub fn can_withdraw(env: &Env, meta: &CampaignMeta, state: &CampaignState) -> bool {
    !state.withdrawn
        && state.balance > 0
        && (state.raised >= meta.goal || env.ledger().timestamp() >= meta.deadline)
}

/// Refunds are open only for a campaign that ended below its goal and has
/// not been withdrawn.
pub fn can_refund(env: &Env, meta: &CampaignMeta, state: &CampaignState) -> bool {
    status(env, meta, state) == CampaignStatus::GoalMissed
}

pub fn require_can_donate(env: &Env, meta: &CampaignMeta, state: &CampaignState) -> Result<(), Error> {
    if can_donate(env, meta, state) {
        Ok(())
    } else {
        Err(Error::CampaignNotActive)
    }
}

pub fn require_can_withdraw(env: &Env, meta: &CampaignMeta, state: &CampaignState) -> Result<(), Error> {
    if state.withdrawn {
        return Err(Error::AlreadyWithdrawn);
    }
    if !can_withdraw(env, meta, state) {
        return Err(Error::NotWithdrawable);
    }
    Ok(())
}

pub fn require_can_refund(env: &Env, meta: &CampaignMeta, state: &CampaignState) -> Result<(), Error> {
    if !can_refund(env, meta, state) {
        return Err(Error::NotRefundable);
    }
    Ok(())
}
