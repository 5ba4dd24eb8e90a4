use rbankroll::errors::AppError;
use rbankroll::gateway::wire::{
    AuthResponse, WireNewSession, WireProfile, WireSession, decode, is_auth_rejection,
};
use rbankroll::gateway::{NewSessionRow, ProfileRow, SessionRow};
use rbankroll::models::identity::UserIdentity;

#[test]
fn test_no_rows_means_not_configured() {
    let body = r#"{"code":"PGRST116","details":"The result contains 0 rows","hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#;
    let profile: Option<WireProfile> = decode(406, body).unwrap();
    assert!(profile.is_none());
}

#[test]
fn test_error_payloads_become_gateway_errors() {
    let other_406 = r#"{"code":"PGRST107","message":"None of these media types are available"}"#;
    match decode::<WireProfile>(406, other_406) {
        Err(AppError::Gateway(msg)) => {
            assert_eq!(msg, "None of these media types are available (HTTP 406)")
        }
        other => panic!("unexpected: {:?}", other.map(|_| ())),
    }

    match decode::<serde_json::Value>(401, r#"{"code":401,"msg":"JWT expired"}"#) {
        Err(AppError::Gateway(msg)) => assert_eq!(msg, "JWT expired (HTTP 401)"),
        other => panic!("unexpected: {:?}", other.map(|_| ())),
    }

    let bad_grant = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
    match decode::<serde_json::Value>(400, bad_grant) {
        Err(AppError::Gateway(msg)) => assert_eq!(msg, "Invalid login credentials (HTTP 400)"),
        other => panic!("unexpected: {:?}", other.map(|_| ())),
    }

    match decode::<serde_json::Value>(502, "Bad Gateway") {
        Err(AppError::Gateway(msg)) => assert_eq!(msg, "Bad Gateway (HTTP 502)"),
        other => panic!("unexpected: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_success_bodies() {
    assert!(decode::<serde_json::Value>(204, "").unwrap().is_none());

    let rows: Vec<WireSession> = decode(200, "[]").unwrap().unwrap_or_default();
    assert!(rows.is_empty());

    assert!(matches!(
        decode::<WireProfile>(200, "not json"),
        Err(AppError::Serialization(_))
    ));
}

#[test]
fn test_logout_rejections() {
    assert!(is_auth_rejection(401));
    assert!(is_auth_rejection(403));
    assert!(is_auth_rejection(404));
    assert!(!is_auth_rejection(500));
    assert!(!is_auth_rejection(204));
}

#[test]
fn test_profile_amounts_in_cents() {
    let body = r#"{"starting_bankroll":1000.5,"bankroll_goal":5000}"#;
    let profile: WireProfile = decode(200, body).unwrap().unwrap();
    let row = ProfileRow::from(profile);
    assert_eq!(row.starting_bankroll, Some(100050));
    assert_eq!(row.bankroll_goal, Some(500000));
    assert!(row.settings().is_some());

    let fresh: WireProfile = decode(200, r#"{"starting_bankroll":null,"bankroll_goal":null}"#)
        .unwrap()
        .unwrap();
    assert!(ProfileRow::from(fresh).settings().is_none());

    let outgoing = WireProfile::from(&ProfileRow {
        starting_bankroll: Some(123456),
        bankroll_goal: None,
    });
    let json = serde_json::to_value(&outgoing).unwrap();
    assert_eq!(json["starting_bankroll"], 1234.56);
    assert!(json["bankroll_goal"].is_null());
}

#[test]
fn test_session_amounts_in_cents() {
    let body = r#"{
        "id": "s1", "user_id": "u1", "date": "2025-01-10", "game_type": "tournament",
        "stakes": null, "location": "Casino", "buy_in": 109.99, "cash_out": 250.25,
        "profit": 140.26, "notes": null, "created_at": "2025-01-10T21:00:00Z"
    }"#;
    let wire: WireSession = decode(201, body).unwrap().unwrap();
    let row = SessionRow::from(wire);
    assert_eq!(row.buy_in, 10999);
    assert_eq!(row.cash_out, Some(25025));
    assert_eq!(row.profit, Some(14026));

    let session = row.into_session().unwrap();
    assert_eq!(session.profit(), 14026);
    assert_eq!(session.stakes, "");

    let new_row = NewSessionRow {
        user_id: "u1".into(),
        date: "2025-01-10".into(),
        game_type: "cash".into(),
        stakes: "1/2".into(),
        location: "Casino".into(),
        buy_in: 30000,
        cash_out: 45050,
        profit: 15050,
        notes: String::new(),
    };
    let json = serde_json::to_value(WireNewSession::from(&new_row)).unwrap();
    assert_eq!(json["buy_in"], 300.0);
    assert_eq!(json["cash_out"], 450.5);
    assert_eq!(json["profit"], 150.5);
    assert_eq!(json["user_id"], "u1");
}

#[test]
fn test_sign_up_awaiting_confirmation_has_no_token() {
    let body = r#"{"id":"u1","email":"ann@example.com","confirmation_sent_at":"2025-01-10T10:00:00Z"}"#;
    let auth: AuthResponse = decode(200, body).unwrap().unwrap();
    let user = auth.into_identity("ann@example.com", 1_000).unwrap();

    assert_eq!(user, UserIdentity::new("u1", "ann@example.com", None));
    assert!(!user.needs_refresh(i64::MAX));
}

#[test]
fn test_session_response_carries_refresh_data() {
    let body = r#"{
        "access_token": "jwt", "token_type": "bearer", "expires_in": 3600,
        "refresh_token": "r1", "user": {"id": "u1", "email": "ann@example.com"}
    }"#;
    let auth: AuthResponse = decode(200, body).unwrap().unwrap();
    let user = auth.into_identity("typed@example.com", 1_000).unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "ann@example.com");
    assert_eq!(user.access_token.as_deref(), Some("jwt"));
    assert_eq!(user.refresh_token.as_deref(), Some("r1"));
    assert_eq!(user.expires_at, Some(4_600));

    // Refreshed a minute ahead of the deadline.
    assert!(!user.needs_refresh(4_000));
    assert!(user.needs_refresh(4_540));

    let absolute: AuthResponse = decode(
        200,
        r#"{"access_token":"jwt","expires_in":3600,"expires_at":9000,"user":{"id":"u1"}}"#,
    )
    .unwrap()
    .unwrap();
    let user = absolute.into_identity("ann@example.com", 1_000).unwrap();
    assert_eq!(user.expires_at, Some(9_000));
    assert_eq!(user.email, "ann@example.com");
}

#[test]
fn test_auth_response_without_user_is_rejected() {
    let auth: AuthResponse = decode(200, r#"{"access_token":"jwt"}"#).unwrap().unwrap();
    assert!(matches!(
        auth.into_identity("ann@example.com", 0),
        Err(AppError::Gateway(_))
    ));
}
