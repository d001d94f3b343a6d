//! # Errors
//!
//! Every entry point returns `Result<_, Error>`. Returning an `Err` aborts the
//! invocation and the host discards all storage writes made during it, so a
//! caller never observes a half-applied command.
//!
//! Codes are grouped by [`ErrorKind`] so clients can branch on the family
//! without matching every variant:
//!
//! | Codes  | Kind            |
//! |--------|-----------------|
//! | 1–9    | `Validation`    |
//! | 10     | `NotFound`      |
//! | 20–24  | `State`         |
//! | 30–32  | `Authorization` |
//! | 40     | `Transfer`      |

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    EmptyTitle              = 1,
    EmptyDescription        = 2,
    TitleTooLong            = 3,
    DescriptionTooLong      = 4,
    ImageUrlTooLong         = 5,
    InvalidGoal             = 6,
    InvalidDuration         = 7,
    InvalidAmount           = 8,
    AmountOverflow          = 9,

    CampaignNotFound        = 10,

    CampaignNotActive       = 20,
    AlreadyWithdrawn        = 21,
    NotWithdrawable         = 22,
    NotRefundable           = 23,
    AlreadyRefunded         = 24,

    NotAuthorized           = 30,
    NotADonor               = 31,
    BeneficiaryCannotRefund = 32,

    TransferFailed          = 40,
}

/// Coarse error family, stable across new variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed input; rejected before any state is read for writing.
    Validation,
    /// Unknown campaign id.
    NotFound,
    /// Operation not legal in the campaign's current lifecycle state.
    State,
    /// Caller lacks the required relationship to the campaign.
    Authorization,
    /// The token movement itself failed.
    Transfer,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            1..=9 => ErrorKind::Validation,
            10 => ErrorKind::NotFound,
            20..=29 => ErrorKind::State,
            30..=39 => ErrorKind::Authorization,
            _ => ErrorKind::Transfer,
        }
    }
}
