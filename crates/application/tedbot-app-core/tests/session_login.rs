use tedbot_app_core::app_core::{AppStore, DomainEvent};
use tedbot_app_core::domain::{AppState, Route, SessionState, Tab};
use tedbot_app_core::kernel::AppKernel;
use tedbot_app_core::{AppCommand, LocalBackend, Navigator, Notifier};
use tedbot_core::Notice;

#[derive(Default)]
struct RecordingNavigator {
    visited: Vec<Route>,
}
impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        self.visited.push(route);
    }
}

#[derive(Default)]
struct RecordingNotifier {
    shown: Vec<Notice>,
}
impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.shown.push(notice);
    }
}

fn kernel() -> AppKernel<RecordingNavigator, RecordingNotifier, LocalBackend> {
    AppKernel::new(
        AppStore::default(),
        RecordingNavigator::default(),
        RecordingNotifier::default(),
        LocalBackend::default(),
    )
}

#[test]
fn fresh_session_is_logged_out_on_the_actions_tab() {
    let session = SessionState::default();
    assert_eq!(session.username(), None);
    assert!(!session.logged_in());
    assert_eq!(session.current_tab, Tab::Actions);
    assert!(!session.debug);
}

#[test]
fn logged_in_tracks_username_presence() {
    let mut store = AppStore::new(AppState::default());
    assert_eq!(
        store.state().session.logged_in(),
        store.state().session.username().is_some()
    );

    store.apply(DomainEvent::LoggedIn("alice".into()));
    assert!(store.state().session.logged_in());
    assert_eq!(store.state().session.username(), Some("alice"));

    store.apply(DomainEvent::LoggedOut);
    assert!(!store.state().session.logged_in());
    assert_eq!(store.state().session.username(), None);
}

#[test]
fn register_login_sets_username_and_navigates_once() {
    let mut kernel = kernel();
    kernel.register_login("alice");

    assert_eq!(kernel.state().session.username(), Some("alice"));
    assert!(kernel.state().session.logged_in());
    assert_eq!(kernel.navigator().visited, [Route::Bot]);
    assert_eq!(Route::Bot.path(), "/bot");
    assert!(kernel.notifier().shown.is_empty());
}

#[test]
fn register_login_again_overwrites_and_renavigates() {
    let mut kernel = kernel();
    kernel.register_login("alice");
    kernel.register_login("bob");

    assert_eq!(kernel.state().session.username(), Some("bob"));
    assert_eq!(kernel.navigator().visited, [Route::Bot, Route::Bot]);
}

#[test]
fn logout_returns_to_login_screen() {
    let mut kernel = kernel();
    kernel.register_login("alice");
    kernel.dispatch(AppCommand::Logout);

    assert!(!kernel.state().session.logged_in());
    assert_eq!(kernel.navigator().visited, [Route::Bot, Route::Login]);
}

#[test]
fn tab_and_debug_are_plain_updates() {
    let mut kernel = kernel();
    kernel.dispatch(AppCommand::SelectTab(Tab::Obs));
    kernel.dispatch(AppCommand::SetDebug(true));

    assert_eq!(kernel.state().session.current_tab, Tab::Obs);
    assert!(kernel.state().session.debug);
    assert!(!kernel.state().session.logged_in());
    assert!(kernel.navigator().visited.is_empty());
}

#[test]
fn route_paths_match_the_router_table() {
    assert_eq!(Route::Login.path(), "/");
    assert_eq!(Route::Bot.path(), "/bot");
    assert_eq!(Route::from_path("/bot"), Some(Route::Bot));
    assert_eq!(Route::from_path("/settings"), None);
}
