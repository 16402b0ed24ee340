use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("Payment error: {0}")]
    PaymentError(#[from] PaymentError),
    #[error("Caller is not the admin")]
    Unauthorized(),
    #[error("Amount must be greater than zero")]
    InvalidAmount(),
    #[error("Campaign not found")]
    CampaignNotFound(),
    #[error("Campaign already exists")]
    CampaignExists(),
    #[error("Refund not allowed")]
    RefundNotAllowed(),
    #[error("Insufficient funds")]
    InsufficientFunds(),
    #[error("The ledger is paused")]
    Paused(),
    #[error("Campaign name is too long")]
    InvalidCampaignName(),
    #[error("Integer overflow")]
    Overflow(),
}

impl ContractError {
    /// Stable numeric identifier for the ledger's domain failures. `None` for
    /// host/payment errors that have no ledger-level code.
    pub fn code(&self) -> Option<u32> {
        use ContractError::*;
        match self {
            Unauthorized() => Some(100),
            InvalidAmount() => Some(101),
            CampaignNotFound() => Some(102),
            CampaignExists() => Some(103),
            RefundNotAllowed() => Some(104),
            InsufficientFunds() => Some(105),
            Paused() => Some(106),
            InvalidCampaignName() => Some(107),
            _ => None,
        }
    }
}
