use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tedbot_core::{latest_log_name, Action};

use crate::domain::ObsStatus;
use crate::error::BackendError;
use crate::ports::BackendPort;

/// In-process backend: actions live in memory, logs are read from `log_dir`.
#[derive(Debug, Default)]
pub struct LocalBackend {
    actions: Mutex<Vec<Action>>,
    log_dir: Option<PathBuf>,
}

impl LocalBackend {
    pub fn new(log_dir: Option<PathBuf>) -> Self {
        Self {
            actions: Mutex::new(Vec::new()),
            log_dir,
        }
    }

    fn actions(&self) -> Result<MutexGuard<'_, Vec<Action>>, BackendError> {
        self.actions
            .lock()
            .map_err(|_| BackendError::unknown("action table lock poisoned"))
    }
}

impl BackendPort for LocalBackend {
    fn list_actions(&self) -> Result<Vec<Action>, BackendError> {
        Ok(self.actions()?.clone())
    }

    fn save_action(&self, action: &Action) -> Result<(), BackendError> {
        let mut actions = self.actions()?;
        match actions
            .iter_mut()
            .find(|a| a.trigger.name == action.trigger.name)
        {
            Some(existing) => *existing = action.clone(),
            None => actions.push(action.clone()),
        }
        Ok(())
    }

    fn delete_action(&self, trigger_name: &str) -> Result<(), BackendError> {
        self.actions()?.retain(|a| a.trigger.name != trigger_name);
        Ok(())
    }

    fn latest_log(&self) -> Result<Option<String>, BackendError> {
        let Some(dir) = &self.log_dir else {
            return Ok(None);
        };
        if !dir.is_dir() {
            return Ok(None);
        }

        let names: Vec<String> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok()?.file_name().into_string().ok())
            .collect();

        match latest_log_name(names.iter().map(String::as_str)) {
            Some(name) => Ok(Some(fs::read_to_string(dir.join(name))?)),
            None => Ok(None),
        }
    }

    fn obs_status(&self) -> Result<ObsStatus, BackendError> {
        Ok(ObsStatus::Disabled)
    }
}
