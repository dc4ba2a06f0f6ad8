//! Tests for notification_state

use super::*;
use proptest::prelude::*;

fn request(message: &str, message_type: MessageType) -> DisplayRequest {
    DisplayRequest::new(message, message_type).unwrap()
}

#[test]
fn test_request_defaults() {
    let req = request("Hello", MessageType::Info);
    assert_eq!(req.message(), "Hello");
    assert_eq!(req.message_type(), MessageType::Info);
    assert_eq!(req.position(), NotificationPosition::Top);
    assert!(req.auto_hide());
}

#[test]
fn test_request_builders_match_getters() {
    let req = request("Hello", MessageType::Warning)
        .with_position(NotificationPosition::BottomRight)
        .with_auto_hide(false);
    assert_eq!(req.position(), NotificationPosition::BottomRight);
    assert!(!req.auto_hide());

    let notif = NotificationState::new().display_status(req, Instant::now()).clone();
    assert_eq!(notif.position, NotificationPosition::BottomRight);
    assert!(!notif.auto_hide);
}

#[test]
fn test_style_follows_message_type() {
    let mut state = NotificationState::new();
    for message_type in MessageType::ALL {
        let notif = state.display_status(request("Styled", message_type), Instant::now());
        assert_eq!(notif.style(), message_type.style());
    }
}

#[test]
fn test_request_rejects_empty_message() {
    assert_eq!(
        DisplayRequest::new("", MessageType::Danger),
        Err(NotificationError::EmptyMessage)
    );
    assert_eq!(
        DisplayRequest::new("   \t", MessageType::Danger),
        Err(NotificationError::EmptyMessage)
    );
}

#[test]
fn test_initial_state_is_hidden() {
    let state = NotificationState::new();
    assert!(!state.is_visible());
    assert!(state.current().is_none());
    assert_eq!(state.hide_deadline(), None);
    assert_eq!(state.auto_hide_delay(), DEFAULT_AUTO_HIDE_DELAY);
}

#[test]
fn test_saved_success_without_auto_hide() {
    let mut state = NotificationState::new();
    let now = Instant::now();
    state.display_status(
        request("Saved", MessageType::Success)
            .with_position(NotificationPosition::Top)
            .with_auto_hide(false),
        now,
    );

    let notif = state.current().unwrap();
    assert_eq!(notif.message, "Saved");
    assert_eq!(notif.message_type, MessageType::Success);
    assert_eq!(notif.position, NotificationPosition::Top);
    assert!(!notif.auto_hide);
    assert_eq!(notif.hide_at, None);
    assert!(state.is_visible());

    // No automatic transition, however much time passes
    assert!(!state.clear_if_expired(now + Duration::from_secs(3600)));
    assert_eq!(state.current_message(), Some("Saved"));

    assert!(state.dismiss());
    assert!(!state.is_visible());
}

#[test]
fn test_auto_hide_arms_deadline() {
    let mut state = NotificationState::with_delay(Duration::from_millis(200));
    let now = Instant::now();
    let notif = state.display_status(request("Copied", MessageType::Info), now);

    assert_eq!(notif.hide_at, Some(now + Duration::from_millis(200)));
    assert_eq!(
        state.time_until_hide(now + Duration::from_millis(50)),
        Some(Duration::from_millis(150))
    );
}

#[test]
fn test_clear_if_expired() {
    let mut state = NotificationState::with_delay(Duration::from_millis(10));
    let now = Instant::now();
    state.display_status(request("Test", MessageType::Info), now);

    assert!(!state.clear_if_expired(now + Duration::from_millis(5))); // Not expired yet
    assert!(state.clear_if_expired(now + Duration::from_millis(10))); // Now expired
    assert!(state.current().is_none());
}

#[test]
fn test_time_until_hide_saturates() {
    let mut state = NotificationState::with_delay(Duration::from_millis(10));
    let now = Instant::now();
    state.display_status(request("Test", MessageType::Info), now);

    assert_eq!(
        state.time_until_hide(now + Duration::from_secs(1)),
        Some(Duration::ZERO)
    );
}

#[test]
fn test_replacement_leaves_no_stale_fields() {
    let mut state = NotificationState::new();
    let now = Instant::now();
    state.display_status(
        request("First", MessageType::Danger).with_position(NotificationPosition::BottomRight),
        now,
    );
    state.display_status(
        request("Second", MessageType::Info).with_auto_hide(false),
        now,
    );

    let notif = state.current().unwrap();
    assert_eq!(notif.message, "Second");
    assert_eq!(notif.message_type, MessageType::Info);
    assert_eq!(notif.position, NotificationPosition::Top);
    assert_eq!(notif.style(), MessageType::Info.style());
    assert_eq!(notif.hide_at, None);
}

#[test]
fn test_earlier_deadline_does_not_clear_newer_notification() {
    let mut state = NotificationState::with_delay(Duration::from_secs(5));
    let start = Instant::now();
    state.display_status(request("First", MessageType::Info), start);

    let later = start + Duration::from_secs(3);
    state.display_status(request("Second", MessageType::Warning), later);

    // First deadline has passed, second has not
    assert!(!state.clear_if_expired(start + Duration::from_secs(6)));
    assert_eq!(state.current_message(), Some("Second"));

    assert!(state.clear_if_expired(later + Duration::from_secs(5)));
    assert!(!state.is_visible());
}

#[test]
fn test_non_auto_hide_replacement_cancels_deadline() {
    let mut state = NotificationState::with_delay(Duration::from_secs(5));
    let now = Instant::now();
    state.display_status(request("Fading", MessageType::Info), now);
    state.display_status(
        request("Sticky", MessageType::Danger).with_auto_hide(false),
        now,
    );

    assert_eq!(state.hide_deadline(), None);
    assert!(!state.clear_if_expired(now + Duration::from_secs(60)));
    assert_eq!(state.current_message(), Some("Sticky"));
}

#[test]
fn test_dismiss_when_hidden_is_noop() {
    let mut state = NotificationState::new();
    assert!(!state.dismiss());
    assert!(!state.dismiss());
    assert!(!state.is_visible());
}

#[test]
fn test_dismiss_cancels_deadline() {
    let mut state = NotificationState::new();
    let now = Instant::now();
    state.display_status(request("Bye", MessageType::Success), now);
    state.dismiss();
    assert_eq!(state.hide_deadline(), None);
    assert_eq!(state.time_until_hide(now), None);
}

fn arb_message_type() -> impl Strategy<Value = MessageType> {
    prop::sample::select(MessageType::ALL.to_vec())
}

fn arb_position() -> impl Strategy<Value = NotificationPosition> {
    prop::sample::select(NotificationPosition::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After display_status the visible state reflects exactly the inputs
    #[test]
    fn prop_display_reflects_inputs(
        message in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,49}",
        message_type in arb_message_type(),
        position in arb_position(),
        auto_hide in prop::bool::ANY,
    ) {
        let mut state = NotificationState::new();
        let now = Instant::now();
        state.display_status(
            DisplayRequest::new(message.clone(), message_type)
                .unwrap()
                .with_position(position)
                .with_auto_hide(auto_hide),
            now,
        );

        let notif = state.current().unwrap();
        prop_assert_eq!(&notif.message, &message);
        prop_assert_eq!(notif.message_type, message_type);
        prop_assert_eq!(notif.position, position);
        prop_assert_eq!(notif.auto_hide, auto_hide);
        prop_assert_eq!(notif.hide_at.is_some(), auto_hide);
    }

    /// For any sequence of requests, only the most recent one is visible
    #[test]
    fn prop_notification_replacement(
        messages in prop::collection::vec(("[a-zA-Z0-9]{1,30}", arb_message_type()), 1..10)
    ) {
        let mut state = NotificationState::new();
        let now = Instant::now();

        for (msg, message_type) in &messages {
            state.display_status(request(msg, *message_type), now);
        }

        let (last_message, last_type) = messages.last().unwrap();
        prop_assert_eq!(state.current_message(), Some(last_message.as_str()));
        prop_assert_eq!(state.current().unwrap().message_type, *last_type);
    }

    /// Dismiss always ends Hidden, whatever came before
    #[test]
    fn prop_dismiss_always_hides(
        shown in prop::collection::vec("[a-z]{1,10}", 0..5),
        dismiss_twice in prop::bool::ANY,
    ) {
        let mut state = NotificationState::new();
        let now = Instant::now();
        for msg in &shown {
            state.display_status(request(msg, MessageType::Info), now);
        }

        state.dismiss();
        if dismiss_twice {
            state.dismiss();
        }
        prop_assert!(!state.is_visible());
    }
}
