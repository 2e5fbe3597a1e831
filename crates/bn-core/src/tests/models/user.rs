use crate::{SessionRecord, User};

fn alice() -> User {
    User {
        id: "u-1".into(),
        username: "alice".into(),
        email: "alice@example.com".into(),
        display_name: "Alice".into(),
        profile_image: Some("https://cdn.example.com/a.png".into()),
        bio: None,
        created_at: None,
        is_admin: true,
    }
}

#[test]
fn test_to_session_keeps_identity_fields() {
    let record = alice().to_session();

    assert_eq!(
        record,
        SessionRecord {
            user_id: "u-1".into(),
            email: "alice@example.com".into(),
            display_name: "Alice".into(),
            is_admin: true,
        }
    );
}

#[test]
fn test_from_session_uses_display_name_as_username() {
    let user = User::from_session(&alice().to_session());

    assert_eq!(user.id, "u-1");
    assert_eq!(user.username, "Alice");
    assert_eq!(user.display_name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(user.profile_image.is_none());
    assert!(user.is_admin);
}

#[test]
fn test_missing_is_admin_defaults_to_false() {
    let json = r#"{"id":"u-2","username":"bob","email":"bob@example.com","display_name":"Bob","profile_image":null,"bio":null,"created_at":null}"#;
    let user: User = serde_json::from_str(json).unwrap();

    assert!(!user.is_admin);
}
