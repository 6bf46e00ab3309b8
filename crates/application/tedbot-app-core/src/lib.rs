pub mod app_core;
pub mod domain;
pub mod error;
pub mod kernel;
pub mod local;
pub mod notify;
pub mod ports;
pub mod viewmodel;

pub use app_core::*;
pub use domain::{AppState, ObsStatus, Route, SessionState, Tab};
pub use error::BackendError;
pub use kernel::{AppKernel, SessionId};
pub use local::LocalBackend;
pub use notify::{notify, set_accent};
pub use ports::*;
pub use viewmodel::*;
