//! # Campaign registry
//!
//! Owns campaign identity and metadata. Ids are dense, start at 0 and are
//! never reused; campaigns are never deleted.

use soroban_sdk::{Address, Env, String};

use crate::errors::Error;
use crate::lifecycle;
use crate::storage;
use crate::types::{Campaign, CampaignMeta, CampaignState};

pub const MAX_TITLE_LEN: u32 = 100;
pub const MAX_DESCRIPTION_LEN: u32 = 2_000;
pub const MAX_IMAGE_URL_LEN: u32 = 512;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Arguments of a campaign creation command.
pub struct NewCampaign {
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub beneficiary: Address,
    pub goal: i128,
    pub duration_in_days: u64,
}

fn validate(params: &NewCampaign) -> Result<(), Error> {
    if params.title.len() == 0 {
        return Err(Error::EmptyTitle);
    }
    if params.description.len() == 0 {
        return Err(Error::EmptyDescription);
    }
    if params.title.len() > MAX_TITLE_LEN {
        return Err(Error::TitleTooLong);
    }
    if params.description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::DescriptionTooLong);
    }
    if params.image_url.len() > MAX_IMAGE_URL_LEN {
        return Err(Error::ImageUrlTooLong);
    }
    if params.goal <= 0 {
        return Err(Error::InvalidGoal);
    }
    if params.duration_in_days < 1 {
        return Err(Error::InvalidDuration);
    }
    Ok(())
}

/// Validate and persist a new campaign. Nothing is written on error.
pub fn create(env: &Env, params: NewCampaign) -> Result<CampaignMeta, Error> {
    validate(&params)?;

    let now = env.ledger().timestamp();
    let deadline = params
        .duration_in_days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| now.checked_add(secs))
        .ok_or(Error::InvalidDuration)?;

    let meta = CampaignMeta {
        id: storage::get_and_increment_campaign_id(env),
        creator: params.creator,
        beneficiary: params.beneficiary,
        title: params.title,
        description: params.description,
        image_url: params.image_url,
        goal: params.goal,
        deadline,
        created_at: now,
    };
    storage::save_campaign(env, &meta, &CampaignState::default());
    Ok(meta)
}

pub fn exists(env: &Env, id: u64) -> bool {
    storage::has_campaign(env, id)
}

pub fn count(env: &Env) -> u64 {
    storage::campaign_count(env)
}

/// Load both halves of a campaign.
pub fn load(env: &Env, id: u64) -> Result<(CampaignMeta, CampaignState), Error> {
    let meta = storage::load_campaign_meta(env, id)?;
    let state = storage::load_campaign_state(env, id)?;
    Ok((meta, state))
}

/// Reconstruct the public view, computing `active` at the current ledger time.
pub fn view(env: &Env, meta: CampaignMeta, state: &CampaignState) -> Campaign {
    let active = lifecycle::is_active(env, &meta, state);
    Campaign {
        id: meta.id,
        title: meta.title,
        description: meta.description,
        image_url: meta.image_url,
        creator: meta.creator,
        beneficiary: meta.beneficiary,
        goal: meta.goal,
        raised: state.raised,
        balance: state.balance,
        refunded: state.refunded,
        deadline: meta.deadline,
        created_at: meta.created_at,
        active,
        withdrawn: state.withdrawn,
        donor_count: state.donor_count,
        donation_count: state.donation_count,
    }
}

pub fn get(env: &Env, id: u64) -> Result<Campaign, Error> {
    let (meta, state) = load(env, id)?;
    Ok(view(env, meta, &state))
}
