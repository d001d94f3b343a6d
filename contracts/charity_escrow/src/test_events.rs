extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{CampaignCreated, DonationReceived, FundsWithdrawn, GoalReached, RefundIssued};
use crate::registry::SECONDS_PER_DAY;
use crate::{CharityEscrow, CharityEscrowClient};

fn setup() -> (Env, CharityEscrowClient<'static>, token::StellarAssetClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let contract_id = env.register(CharityEscrow, (sac.address(),));
    let client = CharityEscrowClient::new(&env, &contract_id);
    let minter = token::StellarAssetClient::new(&env, &sac.address());
    (env, client, minter)
}

fn create_campaign(env: &Env, client: &CharityEscrowClient, creator: &Address, goal: i128) -> u64 {
    client
        .create_campaign(
            creator,
            &String::from_str(env, "Library"),
            &String::from_str(env, "Books for the school"),
            &String::from_str(env, ""),
            creator,
            &goal,
            &3,
        )
        .id
}

#[test]
fn test_campaign_created_event() {
    let (env, client, _) = setup();
    let creator = Address::generate(&env);
    let beneficiary = Address::generate(&env);

    let campaign = client.create_campaign(
        &creator,
        &String::from_str(&env, "Library"),
        &String::from_str(&env, "Books for the school"),
        &String::from_str(&env, ""),
        &beneficiary,
        &5_000,
        &3,
    );

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        campaign.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: campaign.id,
            creator,
            beneficiary,
            goal: 5_000,
            deadline: env.ledger().timestamp() + 3 * SECONDS_PER_DAY,
        }
    );
}

#[test]
fn test_donation_received_event() {
    let (env, client, minter) = setup();
    let creator = Address::generate(&env);
    let donor = Address::generate(&env);
    let id = create_campaign(&env, &client, &creator, 10_000);
    minter.mint(&donor, &1_000);

    client.donate(&id, &donor, &1_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&env, symbol_short!("donated").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: DonationReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationReceived {
            campaign_id: id,
            donor,
            amount: 1_000,
            raised: 1_000,
        }
    );
}

#[test]
fn test_goal_reached_event_follows_crossing_donation() {
    let (env, client, minter) = setup();
    let creator = Address::generate(&env);
    let donor = Address::generate(&env);
    let id = create_campaign(&env, &client, &creator, 500);
    minter.mint(&donor, &600);

    client.donate(&id, &donor, &600);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("goal_met").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: GoalReached = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, GoalReached { campaign_id: id, raised: 600 });

    let donated = all_events.get(all_events.len() - 2).unwrap();
    assert_eq!(
        donated.1,
        vec![&env, symbol_short!("donated").into_val(&env), id.into_val(&env)]
    );
}

#[test]
fn test_funds_withdrawn_event() {
    let (env, client, minter) = setup();
    let creator = Address::generate(&env);
    let donor = Address::generate(&env);
    let id = create_campaign(&env, &client, &creator, 500);
    minter.mint(&donor, &500);
    client.donate(&id, &donor, &500);

    client.withdraw_funds(&id, &creator);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("withdrawn").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            campaign_id: id,
            recipient: creator,
            amount: 500,
        }
    );
}

#[test]
fn test_refund_issued_event() {
    let (env, client, minter) = setup();
    let creator = Address::generate(&env);
    let donor = Address::generate(&env);
    let id = create_campaign(&env, &client, &creator, 500);
    minter.mint(&donor, &120);
    client.donate(&id, &donor, &120);

    env.ledger().with_mut(|li| li.timestamp += 3 * SECONDS_PER_DAY);
    client.request_refund(&id, &donor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("refunded").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: RefundIssued = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RefundIssued {
            campaign_id: id,
            donor,
            amount: 120,
        }
    );
}
