mod common;
use common::memory_backend;
use rbankroll::errors::AppError;
use rbankroll::gateway::{NewSessionRow, ProfileRow, RemoteGateway};
use rbankroll::models::identity::UserIdentity;

fn row(user: &UserIdentity, date: &str, buy_in: i64, cash_out: i64) -> NewSessionRow {
    NewSessionRow {
        user_id: user.id.clone(),
        date: date.to_string(),
        game_type: "cash".to_string(),
        stakes: "1/2".to_string(),
        location: "Casino".to_string(),
        buy_in,
        cash_out,
        profit: cash_out - buy_in,
        notes: String::new(),
    }
}

#[test]
fn test_sign_up_then_sign_in() {
    let gw = memory_backend();
    let created = gw.sign_up("Ann@Example.com", "secret1").unwrap();
    assert_eq!(created.email, "ann@example.com");
    assert!(created.access_token.is_some());

    let again = gw.sign_in_with_password("ann@example.com", "secret1").unwrap();
    assert_eq!(again.id, created.id);
    assert_ne!(again.access_token, created.access_token);
}

#[test]
fn test_duplicate_and_bad_credentials() {
    let gw = memory_backend();
    gw.sign_up("ann@example.com", "secret1").unwrap();

    match gw.sign_up("ann@example.com", "other12") {
        Err(AppError::Gateway(msg)) => assert_eq!(msg, "User already registered"),
        other => panic!("expected duplicate error, got {other:?}"),
    }
    match gw.sign_in_with_password("ann@example.com", "wrong12") {
        Err(AppError::Gateway(msg)) => assert_eq!(msg, "Invalid login credentials"),
        other => panic!("expected credential error, got {other:?}"),
    }
    assert!(gw.sign_in_with_password("nobody@example.com", "secret1").is_err());
}

#[test]
fn test_new_profile_has_no_bankroll() {
    let gw = memory_backend();
    let user = gw.sign_up("ann@example.com", "secret1").unwrap();

    let profile = gw.select_profile(&user).unwrap().expect("profile row");
    assert_eq!(profile, ProfileRow::default());
    assert!(profile.settings().is_none());

    gw.update_profile(
        &user,
        &ProfileRow {
            starting_bankroll: Some(100000),
            bankroll_goal: Some(500000),
        },
    )
    .unwrap();
    let settings = gw.select_profile(&user).unwrap().and_then(|p| p.settings());
    assert_eq!(settings.map(|s| (s.starting, s.goal)), Some((100000, 500000)));
}

#[test]
fn test_sessions_are_private_and_ordered() {
    let gw = memory_backend();
    let ann = gw.sign_up("ann@example.com", "secret1").unwrap();
    let bob = gw.sign_up("bob@example.com", "secret1").unwrap();

    gw.insert_session(&ann, &row(&ann, "2025-01-10", 30000, 45000)).unwrap();
    gw.insert_session(&ann, &row(&ann, "2025-01-12", 10000, 8000)).unwrap();
    gw.insert_session(&bob, &row(&bob, "2025-01-11", 5000, 0)).unwrap();

    let dates: Vec<String> = gw
        .select_sessions(&ann)
        .unwrap()
        .into_iter()
        .map(|r| r.date)
        .collect();
    assert_eq!(dates, ["2025-01-12", "2025-01-10"]);
    assert_eq!(gw.select_sessions(&bob).unwrap().len(), 1);

    // Writing a row owned by someone else is refused.
    assert!(gw.insert_session(&ann, &row(&bob, "2025-01-13", 1, 1)).is_err());
}

#[test]
fn test_stored_row_converts_with_derived_profit() {
    let gw = memory_backend();
    let user = gw.sign_up("ann@example.com", "secret1").unwrap();

    let mut inconsistent = row(&user, "2025-01-10", 30000, 45000);
    inconsistent.profit = 999;
    let stored = gw.insert_session(&user, &inconsistent).unwrap();
    assert_eq!(stored.profit, Some(999));

    let session = stored.into_session().unwrap();
    assert_eq!(session.profit(), 15000);
}

#[test]
fn test_sign_out_revokes_token() {
    let gw = memory_backend();
    let user = gw.sign_up("ann@example.com", "secret1").unwrap();
    gw.sign_out(&user).unwrap();

    assert!(matches!(gw.select_sessions(&user), Err(AppError::Gateway(_))));

    let anonymous = UserIdentity {
        access_token: None,
        ..user
    };
    assert!(gw.select_profile(&anonymous).is_err());
}
