//! # Fund transfers
//!
//! The only module that moves tokens. Each operation runs its guards, moves
//! the tokens, and only then writes the bookkeeping. A failed movement
//! returns [`Error::TransferFailed`]; since the entry point then returns an
//! error, the host rolls back the whole invocation, so a flag is never
//! committed without its transfer and a transfer never without its flag.

use soroban_sdk::{token, Address, Env};

use crate::access;
use crate::errors::Error;
use crate::events::{self, FundsWithdrawn, RefundIssued};
use crate::lifecycle;
use crate::registry;
use crate::storage;
use crate::types::TransferReceipt;

fn move_tokens(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, &storage::get_token(env));
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Pull a donation from `donor` into the contract's escrow account.
pub fn collect(env: &Env, donor: &Address, amount: i128) -> Result<(), Error> {
    move_tokens(env, donor, &env.current_contract_address(), amount)
}

fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    move_tokens(env, &env.current_contract_address(), to, amount)
}

/// Send the whole escrow balance to the beneficiary and mark the campaign
/// withdrawn.
pub fn withdraw(env: &Env, campaign_id: u64, caller: &Address) -> Result<TransferReceipt, Error> {
    let (meta, mut state) = registry::load(env, campaign_id)?;
    access::require_withdrawer(&meta, caller)?;
    lifecycle::require_can_withdraw(env, &meta, &state)?;

    let amount = state.balance;
    let recipient = meta.beneficiary.clone();
    pay_out(env, &recipient, amount)?;

    state.balance = 0;
    state.withdrawn = true;
    storage::save_campaign_state(env, campaign_id, &state);

    events::emit_funds_withdrawn(
        env,
        FundsWithdrawn {
            campaign_id,
            recipient: recipient.clone(),
            amount,
        },
    );

    Ok(TransferReceipt {
        campaign_id,
        recipient,
        amount,
        campaign: registry::view(env, meta, &state),
    })
}

/// Return to `caller` whatever part of their contribution has not yet been
/// refunded.
pub fn refund(env: &Env, campaign_id: u64, caller: &Address) -> Result<TransferReceipt, Error> {
    let (meta, mut state) = registry::load(env, campaign_id)?;
    access::require_refund_claimant(env, &meta, caller)?;
    lifecycle::require_can_refund(env, &meta, &state)?;

    let contributed = storage::donor_total(env, campaign_id, caller);
    let already = storage::donor_refunded(env, campaign_id, caller);
    let amount = contributed - already;
    if amount <= 0 {
        return Err(Error::AlreadyRefunded);
    }
    let balance = state
        .balance
        .checked_sub(amount)
        .filter(|remaining| *remaining >= 0)
        .ok_or(Error::NotRefundable)?;
    let refunded = state.refunded.checked_add(amount).ok_or(Error::AmountOverflow)?;

    pay_out(env, caller, amount)?;

    storage::set_donor_refunded(env, campaign_id, caller, contributed);
    state.balance = balance;
    state.refunded = refunded;
    storage::save_campaign_state(env, campaign_id, &state);

    events::emit_refund_issued(
        env,
        RefundIssued {
            campaign_id,
            donor: caller.clone(),
            amount,
        },
    );

    Ok(TransferReceipt {
        campaign_id,
        recipient: caller.clone(),
        amount,
        campaign: registry::view(env, meta, &state),
    })
}
