use crate::state::{Campaign, RefundRecord};
use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating sender when omitted.
    pub admin: Option<String>,
    pub donation_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    CreateCampaign {
        name: String,
        description: String,
    },
    /// The donated amount is the native coin attached to the message.
    Donate {
        campaign_id: u64,
    },
    RequestRefund {
        campaign_id: u64,
        amount: u128,
    },
    ApproveRefund {
        donor: String,
        campaign_id: u64,
    },
    WithdrawFunds {
        campaign_id: u64,
        amount: u128,
        recipient: String,
    },
    SetAdmin {
        admin: String,
    },
    Pause {},
    Unpause {},
    DeactivateCampaign {
        campaign_id: u64,
    },
}

#[cw_serde]
pub struct TotalFundsResponse {
    pub amount: u128,
}

#[cw_serde]
pub struct ContributionResponse {
    pub amount: u128,
}

#[cw_serde]
pub struct CampaignDetailsResponse {
    pub campaign: Option<Campaign>,
}

#[cw_serde]
pub struct RefundStatusResponse {
    pub refund: Option<RefundRecord>,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: String,
}

#[cw_serde]
pub struct CampaignCountResponse {
    pub count: u64,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TotalFundsResponse)]
    TotalFunds { campaign_id: u64 },
    #[returns(ContributionResponse)]
    DonorContribution { donor: String, campaign_id: u64 },
    #[returns(CampaignDetailsResponse)]
    CampaignDetails { campaign_id: u64 },
    #[returns(RefundStatusResponse)]
    RefundStatus { donor: String, campaign_id: u64 },
    #[returns(PausedResponse)]
    Paused {},
    #[returns(AdminResponse)]
    Admin {},
    #[returns(CampaignCountResponse)]
    CampaignCount {},
}
