//! Lobby transactions, search and messaging against the fake SDK.

mod test_harness;

use std::cell::RefCell;
use std::rc::Rc;

use discord_game_sdk::Error;
use discord_game_sdk::types::{Lobby, LobbyType, ResultCode};
use test_harness::*;

#[test]
fn create_lobby_submits_the_transaction() {
    let discord = client();
    let lobbies = discord.lobby_manager().unwrap();
    let created = Rc::new(RefCell::new(None));

    let mut transaction = lobbies.lobby_create_transaction().unwrap();
    transaction.set_capacity(4).unwrap();
    transaction.set_metadata("mode", "ranked").unwrap();
    assert!(!transaction.is_submitted());

    let slot = created.clone();
    lobbies
        .create_lobby(&mut transaction, move |result| *slot.borrow_mut() = Some(result))
        .unwrap();
    assert!(transaction.is_submitted());
    discord.run_callbacks().unwrap();

    let lobby: Lobby = created.borrow_mut().take().expect("callback ran").unwrap();
    assert_eq!(lobby.id, CREATED_LOBBY_ID);
    assert_eq!(lobby.kind, LobbyType::Private);
    assert_eq!(lobby.owner_id, CURRENT_USER_ID);
    assert_eq!(lobby.capacity, 4);
    assert_eq!(lobby.secret, "lobby-secret");
    assert_eq!(
        calls(),
        vec![
            "lobby_tx.set_capacity(4)".to_owned(),
            "lobby_tx.set_metadata(mode=ranked)".to_owned(),
            "create_lobby".to_owned(),
        ]
    );
}

#[test]
fn transaction_is_inert_after_submission() {
    let discord = client();
    let lobbies = discord.lobby_manager().unwrap();

    let mut transaction = lobbies.lobby_create_transaction().unwrap();
    lobbies.create_lobby(&mut transaction, |_| {}).unwrap();
    let native_calls = calls().len();

    transaction.set_capacity(8).unwrap();
    transaction.set_type(LobbyType::Public).unwrap();
    transaction.set_locked(true).unwrap();
    transaction.delete_metadata("mode").unwrap();
    assert_eq!(calls().len(), native_calls);
}

#[test]
fn submitting_twice_fails_without_reaching_the_sdk() {
    let discord = client();
    let lobbies = discord.lobby_manager().unwrap();

    let mut transaction = lobbies.lobby_create_transaction().unwrap();
    lobbies.create_lobby(&mut transaction, |_| {}).unwrap();
    let err = lobbies.create_lobby(&mut transaction, |_| {}).unwrap_err();

    assert!(err.is_discord_error(ResultCode::TransactionAborted));
    assert_eq!(calls(), vec!["create_lobby".to_owned()]);
    assert_eq!(discord.pending_callbacks(), 1);
}

#[test]
fn member_transaction_is_inert_after_update() {
    let discord = client();
    let lobbies = discord.lobby_manager().unwrap();

    let mut transaction = lobbies.member_update_transaction(7, 500).unwrap();
    transaction.set_metadata("team", "blue").unwrap();
    lobbies.update_member(7, 500, &mut transaction, |_| {}).unwrap();
    assert!(transaction.is_submitted());

    transaction.set_metadata("team", "red").unwrap();
    assert_eq!(
        calls(),
        vec![
            "member_tx.set_metadata(team=blue)".to_owned(),
            "update_member(7, 500)".to_owned(),
        ]
    );
}

#[test]
fn search_query_is_inert_after_search() {
    let discord = client();
    let lobbies = discord.lobby_manager().unwrap();
    let outcome = Rc::new(RefCell::new(None));

    let mut query = lobbies.search_query().unwrap();
    query.limit(10).unwrap();
    let slot = outcome.clone();
    lobbies
        .search(&mut query, move |result| *slot.borrow_mut() = Some(result))
        .unwrap();
    query.limit(20).unwrap();
    discord.run_callbacks().unwrap();

    assert!(outcome.borrow_mut().take().expect("callback ran").is_ok());
    assert_eq!(
        calls(),
        vec!["query.limit(10)".to_owned(), "search".to_owned()]
    );
    assert_eq!(lobbies.lobby_count().unwrap(), 2);
    assert_eq!(lobbies.lobby_id(1).unwrap(), 2001);
    assert!(lobbies.lobby_id(5).is_err());
}

#[test]
fn setters_the_sdk_does_not_provide_report_missing_methods() {
    let discord = client();
    let lobbies = discord.lobby_manager().unwrap();
    let mut transaction = lobbies.lobby_create_transaction().unwrap();
    let err = transaction.set_owner(CURRENT_USER_ID).unwrap_err();
    assert!(matches!(err, Error::MissingMethod("set_owner")));
}

#[test]
fn metadata_with_interior_nul_is_rejected() {
    let discord = client();
    let lobbies = discord.lobby_manager().unwrap();
    let mut transaction = lobbies.lobby_create_transaction().unwrap();
    assert!(matches!(
        transaction.set_metadata("bad\0key", "value"),
        Err(Error::Nul(_))
    ));
    assert!(calls().is_empty());
}

#[test]
fn member_users_walks_every_member() {
    let discord = client();
    let members = discord.lobby_manager().unwrap().member_users(7).unwrap();
    let names: Vec<_> = members.iter().map(|user| user.username.as_str()).collect();
    assert_eq!(names, ["member500", "member501"]);
}

#[test]
fn lobby_messages_accept_text_and_bytes() {
    let discord = client();
    let lobbies = discord.lobby_manager().unwrap();

    lobbies.send_lobby_message(7, "gg", |_| {}).unwrap();
    lobbies.send_lobby_message(7, vec![0u8, 159, 255], |_| {}).unwrap();
    discord.run_callbacks().unwrap();

    assert_eq!(
        with(|fake| fake.lobby_messages.clone()),
        vec![(7, b"gg".to_vec()), (7, vec![0, 159, 255])]
    );
}

#[test]
fn lobby_message_event_carries_the_payload() {
    let discord = client();
    let received = Rc::new(RefCell::new(Vec::new()));

    let sink = received.clone();
    discord
        .lobby_manager()
        .unwrap()
        .on_lobby_message(move |lobby_id, user_id, data| {
            sink.borrow_mut().push((lobby_id, user_id, data.to_vec()));
        });

    fire_lobby_message(7, 500, b"ready");
    fire_lobby_message(7, 501, b"");
    assert_eq!(
        *received.borrow(),
        vec![(7, 500, b"ready".to_vec()), (7, 501, Vec::new())]
    );
}

#[test]
fn unimplemented_queries_report_missing_methods() {
    let discord = client();
    let err = discord.lobby_manager().unwrap().lobby(7).unwrap_err();
    assert!(matches!(err, Error::MissingMethod("get_lobby")));
}
