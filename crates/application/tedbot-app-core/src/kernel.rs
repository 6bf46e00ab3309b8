use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tokio::sync::mpsc;

use tedbot_core::ErrorKind;

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::{AppState, Route};
use crate::error::BackendError;
use crate::notify::notify;
use crate::ports::{BackendPort, Navigator, Notifier};

/// Login generation a worker was started under.
pub type SessionId = u64;

/// Turns UI commands into state changes and port calls.
///
/// Backend calls run on short-lived worker threads and report back over a
/// channel that [`AppKernel::tick`] drains on the UI thread. Results started
/// under an earlier login or logout are dropped there.
pub struct AppKernel<N, T, B> {
    store: AppStore,
    navigator: N,
    notifier: T,
    backend: Arc<B>,
    pending: usize,
    session: SessionId,

    tx: mpsc::Sender<(SessionId, DomainEvent)>,
    rx: mpsc::Receiver<(SessionId, DomainEvent)>,
}

impl<N, T, B> AppKernel<N, T, B>
where
    N: Navigator,
    T: Notifier,
    B: BackendPort,
{
    pub fn new(store: AppStore, navigator: N, notifier: T, backend: B) -> Self {
        let (tx, rx) = mpsc::channel(tedbot_config::EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            navigator,
            notifier,
            backend: Arc::new(backend),
            pending: 0,
            session: 0,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn notifier(&self) -> &T {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut T {
        &mut self.notifier
    }

    /// True while a backend call has not reported back yet.
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Sets the username and moves to the bot dashboard. The name is not validated here.
    pub fn register_login(&mut self, username: impl Into<String>) {
        self.dispatch(AppCommand::RegisterLogin(username.into()));
    }

    pub fn notify_error(&mut self, kind: ErrorKind) {
        notify(&mut self.notifier, kind);
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::RegisterLogin(username) => {
                tracing::info!(%username, "login registered");
                self.session += 1;
                self.store.apply(DomainEvent::LoggedIn(username));
                self.navigator.navigate(Route::Bot);
            }

            AppCommand::Logout => {
                tracing::info!("logged out");
                self.session += 1;
                self.store.apply(DomainEvent::LoggedOut);
                self.navigator.navigate(Route::Login);
            }

            AppCommand::SelectTab(tab) => self.store.apply(DomainEvent::TabSelected(tab)),

            AppCommand::SetDebug(on) => {
                tracing::debug!(debug = on, "debug toggled");
                self.store.apply(DomainEvent::DebugSet(on));
            }

            AppCommand::RefreshActions => self.spawn_backend("list-actions", |backend| {
                backend.list_actions().map(DomainEvent::ActionsLoaded)
            }),

            AppCommand::SaveAction(action) => self.spawn_backend("save-action", move |backend| {
                backend.save_action(&action)?;
                Ok(DomainEvent::ActionSaved(action))
            }),

            AppCommand::DeleteAction(name) => {
                self.spawn_backend("delete-action", move |backend| {
                    backend.delete_action(&name)?;
                    Ok(DomainEvent::ActionDeleted(name))
                })
            }

            AppCommand::RefreshLog => self.spawn_backend("latest-log", |backend| {
                backend.latest_log().map(DomainEvent::LogLoaded)
            }),

            AppCommand::RefreshObs => self.spawn_backend("obs-status", |backend| {
                backend.obs_status().map(DomainEvent::ObsStatusLoaded)
            }),
        }
    }

    /// Applies everything the workers reported since the last call.
    pub fn tick(&mut self) {
        while let Ok((session, ev)) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            if session != self.session {
                tracing::debug!(session, current = self.session, "dropping stale backend result");
                continue;
            }
            match ev {
                DomainEvent::BackendFailed(err) => notify(&mut self.notifier, err.kind),
                ev => self.store.apply(ev),
            }
        }
    }

    fn spawn_backend<F>(&mut self, name: &str, job: F)
    where
        F: FnOnce(&B) -> Result<DomainEvent, BackendError> + Send + 'static,
    {
        let backend = self.backend.clone();
        let tx = self.tx.clone();
        let session = self.session;
        let spawn_res = std::thread::Builder::new()
            .name(format!("tedbot-{name}"))
            .spawn(move || {
                // A panicking call still has to report back, or `pending` never drops.
                let ev = panic::catch_unwind(AssertUnwindSafe(|| job(&*backend)))
                    .unwrap_or_else(|_| Err(BackendError::unknown("backend call panicked")))
                    .unwrap_or_else(DomainEvent::BackendFailed);
                let _ = tx.blocking_send((session, ev));
            });

        match spawn_res {
            Ok(_) => {
                tracing::debug!(worker = name, "backend call started");
                self.pending += 1;
            }
            Err(e) => {
                tracing::warn!(worker = name, "failed to start worker thread: {e}");
                self.notify_error(ErrorKind::Unknown);
            }
        }
    }
}
