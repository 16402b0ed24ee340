use crate::{error::ContractError, msg::*, state::*};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let admin = match msg.admin {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => info.sender,
    };
    ADMIN.save(deps.storage, &admin)?;
    PAUSED.save(deps.storage, &false)?;
    CAMPAIGN_COUNT.save(deps.storage, &0)?;
    DONATION_DENOM.save(deps.storage, &msg.donation_denom)?;
    Ok(Response::new())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    use ExecuteMsg::*;
    match msg {
        CreateCampaign { name, description } => {
            execute::create_campaign(deps, env, info, name, description)
        }
        Donate { campaign_id } => execute::donate(deps, info, campaign_id),
        RequestRefund {
            campaign_id,
            amount,
        } => execute::request_refund(deps, info, campaign_id, amount),
        ApproveRefund { donor, campaign_id } => {
            execute::approve_refund(deps, info, donor, campaign_id)
        }
        WithdrawFunds {
            campaign_id,
            amount,
            recipient,
        } => execute::withdraw_funds(deps, info, campaign_id, amount, recipient),
        SetAdmin { admin } => execute::set_admin(deps, info, admin),
        Pause {} => execute::set_paused(deps, info, true),
        Unpause {} => execute::set_paused(deps, info, false),
        DeactivateCampaign { campaign_id } => {
            execute::deactivate_campaign(deps, info, campaign_id)
        }
    }
}

mod execute {
    use super::*;
    use cosmwasm_std::Storage;

    fn ensure_admin(storage: &dyn Storage, info: &MessageInfo) -> Result<(), ContractError> {
        if info.sender != ADMIN.load(storage)? {
            return Err(ContractError::Unauthorized());
        }
        Ok(())
    }

    fn ensure_not_paused(storage: &dyn Storage) -> Result<(), ContractError> {
        if PAUSED.load(storage)? {
            return Err(ContractError::Paused());
        }
        Ok(())
    }

    fn load_campaign(storage: &dyn Storage, id: u64) -> Result<Campaign, ContractError> {
        CAMPAIGNS
            .may_load(storage, id)?
            .ok_or(ContractError::CampaignNotFound())
    }

    pub fn create_campaign(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        name: String,
        description: String,
    ) -> Result<Response, ContractError> {
        ensure_not_paused(deps.storage)?;
        if name.chars().count() > MAX_CAMPAIGN_NAME_LEN {
            return Err(ContractError::InvalidCampaignName());
        }

        let id = CAMPAIGN_COUNT.load(deps.storage)? + 1;
        // Ids are strictly sequential; the collision check is defense in depth.
        if CAMPAIGNS.has(deps.storage, id) {
            return Err(ContractError::CampaignExists());
        }

        CAMPAIGNS.save(
            deps.storage,
            id,
            &Campaign {
                name: name.clone(),
                description,
                total_funds: 0,
                active: true,
                created_at: env.block.height,
                creator: info.sender.clone(),
            },
        )?;
        CAMPAIGN_COUNT.save(deps.storage, &id)?;

        let resp = Response::new().add_event(
            Event::new("create-campaign")
                .add_attribute("id", id.to_string())
                .add_attribute("name", name)
                .add_attribute("creator", info.sender),
        );
        Ok(resp)
    }

    pub fn donate(
        deps: DepsMut,
        info: MessageInfo,
        campaign_id: u64,
    ) -> Result<Response, ContractError> {
        ensure_not_paused(deps.storage)?;
        let denom = DONATION_DENOM.load(deps.storage)?;
        let amount = cw_utils::may_pay(&info, &denom)?.u128();
        if amount == 0 {
            return Err(ContractError::InvalidAmount());
        }
        let mut campaign = load_campaign(deps.storage, campaign_id)?;

        campaign.total_funds = campaign
            .total_funds
            .checked_add(amount)
            .ok_or(ContractError::Overflow())?;
        CAMPAIGNS.save(deps.storage, campaign_id, &campaign)?;

        let contributed = CONTRIBUTIONS
            .may_load(deps.storage, (&info.sender, campaign_id))?
            .unwrap_or(0);
        let contributed = contributed
            .checked_add(amount)
            .ok_or(ContractError::Overflow())?;
        CONTRIBUTIONS.save(deps.storage, (&info.sender, campaign_id), &contributed)?;

        let resp = Response::new().add_event(
            Event::new("donate")
                .add_attribute("campaign", campaign_id.to_string())
                .add_attribute("donor", info.sender)
                .add_attribute("amount", amount.to_string()),
        );
        Ok(resp)
    }

    pub fn request_refund(
        deps: DepsMut,
        info: MessageInfo,
        campaign_id: u64,
        amount: u128,
    ) -> Result<Response, ContractError> {
        ensure_not_paused(deps.storage)?;
        if amount == 0 {
            return Err(ContractError::InvalidAmount());
        }
        let campaign = load_campaign(deps.storage, campaign_id)?;
        let contributed = CONTRIBUTIONS
            .may_load(deps.storage, (&info.sender, campaign_id))?
            .unwrap_or(0);
        if contributed < amount {
            return Err(ContractError::InsufficientFunds());
        }
        // Refunds only open once the campaign has been wound down.
        if campaign.active {
            return Err(ContractError::RefundNotAllowed());
        }

        // A repeat request overwrites any earlier record for this pair.
        REFUNDS.save(
            deps.storage,
            (&info.sender, campaign_id),
            &RefundRecord {
                amount,
                requested: true,
                approved: false,
            },
        )?;

        let resp = Response::new().add_event(
            Event::new("request-refund")
                .add_attribute("campaign", campaign_id.to_string())
                .add_attribute("donor", info.sender)
                .add_attribute("amount", amount.to_string()),
        );
        Ok(resp)
    }

    // Deliberately not pause-gated: refund clearing stays available while new
    // financial activity is halted.
    pub fn approve_refund(
        deps: DepsMut,
        info: MessageInfo,
        donor: String,
        campaign_id: u64,
    ) -> Result<Response, ContractError> {
        ensure_admin(deps.storage, &info)?;
        let donor = deps.api.addr_validate(&donor)?;
        let mut campaign = load_campaign(deps.storage, campaign_id)?;
        let record = REFUNDS.may_load(deps.storage, (&donor, campaign_id))?;
        let mut record = match record {
            Some(record) if record.requested => record,
            _ => return Err(ContractError::RefundNotAllowed()),
        };
        if campaign.total_funds < record.amount {
            return Err(ContractError::InsufficientFunds());
        }

        campaign.total_funds -= record.amount;
        CAMPAIGNS.save(deps.storage, campaign_id, &campaign)?;
        // The record is kept with `requested` still set, so a second approval
        // for the same record sends the refund again.
        record.approved = true;
        REFUNDS.save(deps.storage, (&donor, campaign_id), &record)?;

        let denom = DONATION_DENOM.load(deps.storage)?;
        let message = BankMsg::Send {
            to_address: donor.to_string(),
            amount: coins(record.amount, denom),
        };
        let resp = Response::new().add_message(message).add_event(
            Event::new("approve-refund")
                .add_attribute("campaign", campaign_id.to_string())
                .add_attribute("donor", donor)
                .add_attribute("amount", record.amount.to_string()),
        );
        Ok(resp)
    }

    pub fn withdraw_funds(
        deps: DepsMut,
        info: MessageInfo,
        campaign_id: u64,
        amount: u128,
        recipient: String,
    ) -> Result<Response, ContractError> {
        ensure_admin(deps.storage, &info)?;
        ensure_not_paused(deps.storage)?;
        if amount == 0 {
            return Err(ContractError::InvalidAmount());
        }
        let recipient = deps.api.addr_validate(&recipient)?;
        let mut campaign = load_campaign(deps.storage, campaign_id)?;
        if campaign.total_funds < amount {
            return Err(ContractError::InsufficientFunds());
        }

        campaign.total_funds -= amount;
        CAMPAIGNS.save(deps.storage, campaign_id, &campaign)?;

        let denom = DONATION_DENOM.load(deps.storage)?;
        let message = BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(amount, denom),
        };
        let resp = Response::new().add_message(message).add_event(
            Event::new("withdraw-funds")
                .add_attribute("campaign", campaign_id.to_string())
                .add_attribute("recipient", recipient)
                .add_attribute("amount", amount.to_string()),
        );
        Ok(resp)
    }

    pub fn set_admin(
        deps: DepsMut,
        info: MessageInfo,
        admin: String,
    ) -> Result<Response, ContractError> {
        ensure_admin(deps.storage, &info)?;
        let admin = deps.api.addr_validate(&admin)?;
        ADMIN.save(deps.storage, &admin)?;

        let resp = Response::new()
            .add_event(Event::new("set-admin").add_attribute("admin", admin));
        Ok(resp)
    }

    pub fn set_paused(
        deps: DepsMut,
        info: MessageInfo,
        paused: bool,
    ) -> Result<Response, ContractError> {
        ensure_admin(deps.storage, &info)?;
        PAUSED.save(deps.storage, &paused)?;

        let event = if paused { "pause" } else { "unpause" };
        let resp = Response::new().add_event(Event::new(event));
        Ok(resp)
    }

    pub fn deactivate_campaign(
        deps: DepsMut,
        info: MessageInfo,
        campaign_id: u64,
    ) -> Result<Response, ContractError> {
        ensure_admin(deps.storage, &info)?;
        let mut campaign = load_campaign(deps.storage, campaign_id)?;
        // One-way switch; there is no reactivation.
        campaign.active = false;
        CAMPAIGNS.save(deps.storage, campaign_id, &campaign)?;

        let resp = Response::new().add_event(
            Event::new("deactivate-campaign").add_attribute("campaign", campaign_id.to_string()),
        );
        Ok(resp)
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use QueryMsg::*;
    match msg {
        TotalFunds { campaign_id } => to_json_binary(&query::total_funds(deps, campaign_id)?),
        DonorContribution { donor, campaign_id } => {
            to_json_binary(&query::donor_contribution(deps, &donor, campaign_id)?)
        }
        CampaignDetails { campaign_id } => {
            to_json_binary(&query::campaign_details(deps, campaign_id)?)
        }
        RefundStatus { donor, campaign_id } => {
            to_json_binary(&query::refund_status(deps, &donor, campaign_id)?)
        }
        Paused {} => to_json_binary(&PausedResponse {
            paused: PAUSED.load(deps.storage)?,
        }),
        Admin {} => to_json_binary(&AdminResponse {
            admin: ADMIN.load(deps.storage)?.to_string(),
        }),
        CampaignCount {} => to_json_binary(&CampaignCountResponse {
            count: CAMPAIGN_COUNT.load(deps.storage)?,
        }),
    }
}

mod query {
    use super::*;

    pub fn total_funds(deps: Deps, campaign_id: u64) -> StdResult<TotalFundsResponse> {
        let amount = CAMPAIGNS
            .may_load(deps.storage, campaign_id)?
            .map(|campaign| campaign.total_funds)
            .unwrap_or(0);
        Ok(TotalFundsResponse { amount })
    }

    pub fn donor_contribution(
        deps: Deps,
        donor: &str,
        campaign_id: u64,
    ) -> StdResult<ContributionResponse> {
        let donor = deps.api.addr_validate(donor)?;
        let amount = CONTRIBUTIONS
            .may_load(deps.storage, (&donor, campaign_id))?
            .unwrap_or(0);
        Ok(ContributionResponse { amount })
    }

    pub fn campaign_details(deps: Deps, campaign_id: u64) -> StdResult<CampaignDetailsResponse> {
        Ok(CampaignDetailsResponse {
            campaign: CAMPAIGNS.may_load(deps.storage, campaign_id)?,
        })
    }

    pub fn refund_status(
        deps: Deps,
        donor: &str,
        campaign_id: u64,
    ) -> StdResult<RefundStatusResponse> {
        let donor = deps.api.addr_validate(donor)?;
        Ok(RefundStatusResponse {
            refund: REFUNDS.may_load(deps.storage, (&donor, campaign_id))?,
        })
    }
}
