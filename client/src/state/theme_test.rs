use super::*;

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn preference_default_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

#[test]
fn preference_parses_exact_literals() {
    for pref in ThemePreference::ALL {
        assert_eq!(pref.as_str().parse::<ThemePreference>(), Ok(pref));
    }
}

#[test]
fn preference_rejects_foreign_values() {
    assert_eq!(
        "blue".parse::<ThemePreference>(),
        Err(InvalidThemePreference("blue".to_owned()))
    );
    assert!("Dark".parse::<ThemePreference>().is_err());
    assert!(" light".parse::<ThemePreference>().is_err());
    assert!("".parse::<ThemePreference>().is_err());
}

#[test]
fn preference_menu_order() {
    let labels = ThemePreference::ALL.map(ThemePreference::label);
    assert_eq!(labels, ["Light", "Dark", "System"]);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_system_follows_os_signal() {
    assert_eq!(resolve(ThemePreference::System, Some(true)), ResolvedTheme::Dark);
    assert_eq!(resolve(ThemePreference::System, Some(false)), ResolvedTheme::Light);
}

#[test]
fn resolve_system_without_signal_is_light() {
    assert_eq!(resolve(ThemePreference::System, None), ResolvedTheme::Light);
}

#[test]
fn resolve_explicit_ignores_os_signal() {
    for signal in [Some(true), Some(false), None] {
        assert_eq!(resolve(ThemePreference::Dark, signal), ResolvedTheme::Dark);
        assert_eq!(resolve(ThemePreference::Light, signal), ResolvedTheme::Light);
    }
}

// =============================================================
// ThemeState / ThemeHandle
// =============================================================

#[test]
fn pending_state_displays_pending() {
    let state = ThemeState::pending();
    assert!(!state.ready);
    assert_eq!(state.display(), ThemeDisplay::Pending);
}

#[test]
fn ready_state_displays_resolved() {
    let state = ThemeState { ready: true, preference: ThemePreference::System, resolved: ResolvedTheme::Dark };
    assert_eq!(state.display(), ThemeDisplay::Resolved(ResolvedTheme::Dark));
}

#[test]
fn handle_request_is_taken_once() {
    let handle = ThemeHandle::new();
    assert_eq!(handle.take_request(), None);

    handle.set(ThemePreference::Dark);
    assert_eq!(handle.take_request(), Some(ThemePreference::Dark));
    assert_eq!(handle.take_request(), None);
}

#[test]
fn handle_publish_updates_state() {
    let handle = ThemeHandle::new();
    assert_eq!(handle.display(), ThemeDisplay::Pending);

    handle.publish(ThemeState { ready: true, preference: ThemePreference::Dark, resolved: ResolvedTheme::Dark });
    assert_eq!(handle.preference(), ThemePreference::Dark);
    assert_eq!(handle.display(), ThemeDisplay::Resolved(ResolvedTheme::Dark));
}
