use super::*;

#[test]
fn shell_state_default_is_light_and_disconnected() {
    let state = ShellState::default();
    assert_eq!(state.theme, ThemeMode::Light);
    assert_eq!(state.session, Session::default());
}

#[test]
fn apply_set_theme_replaces_mode() {
    let mut state = ShellState::default();
    state.apply(ShellAction::SetTheme(ThemeMode::Dark));
    assert_eq!(state.theme, ThemeMode::Dark);
    state.apply(ShellAction::SetTheme(ThemeMode::Dark));
    assert_eq!(state.theme, ThemeMode::Dark);
}

#[test]
fn apply_set_account_marks_connected() {
    let mut state = ShellState::with_theme(ThemeMode::Dark);
    state.apply(ShellAction::SetAccount("0xabc".to_owned()));
    assert_eq!(state.session.account, "0xabc");
    assert!(state.session.is_connected);
    assert_eq!(state.theme, ThemeMode::Dark);
}

#[test]
fn apply_empty_account_disconnects_and_resets_role() {
    let mut state = ShellState::default();
    state.apply(ShellAction::SetAccount("0xabc".to_owned()));
    state.apply(ShellAction::SetPosition(Role::Admin));
    state.apply(ShellAction::SetAccount(String::new()));
    assert!(!state.session.is_connected);
    assert_eq!(state.session.role, Role::Guest);
}

#[test]
fn apply_set_position_updates_role_only() {
    let mut state = ShellState::default();
    state.apply(ShellAction::SetAccount("0xabc".to_owned()));
    state.apply(ShellAction::SetPosition(Role::Member));
    assert_eq!(state.session.role, Role::Member);
    assert_eq!(state.session.account, "0xabc");
}

#[test]
fn action_kinds_use_store_names() {
    assert_eq!(ShellAction::SetTheme(ThemeMode::Light).kind(), "SET_THEME");
    assert_eq!(ShellAction::SetAccount(String::new()).kind(), "SET_ACCOUNT");
    assert_eq!(ShellAction::SetPosition(Role::Guest).kind(), "SET_POSITION");
}
