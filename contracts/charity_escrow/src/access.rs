//! # Access control
//!
//! Relationship checks between a caller and a campaign. Signature checks
//! (`require_auth`) happen at the entry points; these guards only decide
//! whether an authenticated caller may act on a given campaign.
//!
//! | Action   | Allowed caller                                         |
//! |----------|--------------------------------------------------------|
//! | create   | anyone; becomes `creator`                              |
//! | donate   | anyone                                                 |
//! | withdraw | `creator` or `beneficiary`                             |
//! | refund   | a donor of the campaign who is neither of the above    |

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::CampaignMeta;

fn is_owner(meta: &CampaignMeta, caller: &Address) -> bool {
    *caller == meta.creator || *caller == meta.beneficiary
}

pub fn require_withdrawer(meta: &CampaignMeta, caller: &Address) -> Result<(), Error> {
    if !is_owner(meta, caller) {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

/// The creator and beneficiary may not pull escrow back out through the
/// refund path, even if they also donated.
pub fn require_refund_claimant(env: &Env, meta: &CampaignMeta, caller: &Address) -> Result<(), Error> {
    if is_owner(meta, caller) {
        return Err(Error::BeneficiaryCannotRefund);
    }
    if storage::donor_total(env, meta.id, caller) <= 0 {
        return Err(Error::NotADonor);
    }
    Ok(())
}
