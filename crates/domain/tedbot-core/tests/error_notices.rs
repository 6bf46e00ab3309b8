use tedbot_core::{ErrorKind, Severity};

#[test]
fn known_kinds_map_verbatim() {
    let cases = [
        (
            ErrorKind::TokenLoad,
            Severity::Warning,
            "Error loading the token from storage. Please log in again",
        ),
        (
            ErrorKind::TokenSave,
            Severity::Warning,
            "Error saving the login. You will have to log in again next time",
        ),
        (
            ErrorKind::TwitchAuth,
            Severity::Error,
            "Error logging into Twitch",
        ),
    ];

    for (kind, severity, message) in cases {
        let notice = kind.notice();
        assert_eq!(notice.severity, severity, "{kind:?}");
        assert_eq!(notice.message, message, "{kind:?}");
    }
}

#[test]
fn unrecognized_identifiers_fall_back() {
    let kind: ErrorKind = serde_json::from_str("\"SomethingAddedLater\"").unwrap();
    assert_eq!(kind, ErrorKind::Unknown);

    let notice = kind.notice();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.message, "An unknown error occured. Go slap Teddy");
}
