mod common;
use common::{memory_guest_store, session, setup_test_db};
use rbankroll::db::kv::kv_put;
use rbankroll::errors::AppError;
use rbankroll::models::bankroll::BankrollSettings;
use rbankroll::models::identity::{Mode, UserIdentity};
use rbankroll::store::guest::{GUEST_BANKROLL_KEY, GUEST_SESSIONS_KEY};
use rbankroll::store::{GuestStore, mode};

#[test]
fn test_missing_keys_are_empty_state() {
    let store = memory_guest_store();
    assert!(store.load_sessions().unwrap().is_empty());
    assert!(store.load_bankroll().unwrap().is_none());
    assert!(!store.has_data().unwrap());
}

#[test]
fn test_push_prepends() {
    let store = memory_guest_store();
    store.push_session(&session("a", "2025-01-10", "Casino", 300, 450)).unwrap();
    store.push_session(&session("b", "2025-01-11", "Home Game", 100, 80)).unwrap();

    let ids: Vec<String> = store.load_sessions().unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn test_bankroll_round_trip_and_clear() {
    let store = memory_guest_store();
    let settings = BankrollSettings {
        starting: 100000,
        goal: 500000,
    };
    store.save_bankroll(&settings).unwrap();
    store.push_session(&session("a", "2025-01-10", "Casino", 300, 450)).unwrap();
    assert_eq!(store.load_bankroll().unwrap(), Some(settings));

    store.clear().unwrap();
    assert!(!store.has_data().unwrap());
    assert!(store.load_sessions().unwrap().is_empty());
}

#[test]
fn test_corrupted_value_is_an_error() {
    let store = memory_guest_store();
    kv_put(&store.pool().conn, GUEST_SESSIONS_KEY, "not json").unwrap();
    assert!(matches!(
        store.load_sessions(),
        Err(AppError::Serialization(_))
    ));

    kv_put(&store.pool().conn, GUEST_BANKROLL_KEY, "{\"starting\":1}").unwrap();
    assert!(store.load_bankroll().is_err());
}

#[test]
fn test_data_survives_reopen() {
    let path = setup_test_db("store_reopen");
    {
        let store = GuestStore::open(&path).unwrap();
        store.push_session(&session("a", "2025-01-10", "Casino", 300, 450)).unwrap();
    }
    let store = GuestStore::open(&path).unwrap();
    assert_eq!(store.load_sessions().unwrap().len(), 1);
}

#[test]
fn test_mode_persistence() {
    let store = memory_guest_store();
    assert_eq!(mode::load(store.pool()).unwrap(), Mode::Anonymous);

    let user = Mode::Authenticated(UserIdentity {
        refresh_token: Some("r".into()),
        expires_at: Some(1_760_000_000),
        ..UserIdentity::new("u1", "ann@example.com", Some("t".into()))
    });
    mode::save(store.pool(), &user).unwrap();
    assert_eq!(mode::load(store.pool()).unwrap(), user);

    mode::save(store.pool(), &Mode::Guest).unwrap();
    assert_eq!(mode::load(store.pool()).unwrap(), Mode::Guest);
}

#[test]
fn test_mode_saved_before_token_refresh_still_loads() {
    let store = memory_guest_store();
    kv_put(
        &store.pool().conn,
        mode::ACTIVE_MODE_KEY,
        r#"{"mode":"authenticated","id":"u1","email":"ann@example.com","access_token":"t"}"#,
    )
    .unwrap();

    let user = mode::load(store.pool()).unwrap();
    assert_eq!(
        user,
        Mode::Authenticated(UserIdentity::new("u1", "ann@example.com", Some("t".into())))
    );
    assert!(!user.user().unwrap().needs_refresh(i64::MAX));
}
