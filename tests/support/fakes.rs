//! In-memory collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sm_inject::core::types::SecretId;
use sm_inject::error::{Result, StoreError};
use sm_inject::{BatchOutcome, FetchFailure, Host, Secret, SecretStore};

/// Store holding fixed secrets, counting calls.
#[derive(Default)]
pub struct MemoryStore {
    secrets: Vec<(String, String)>,
    fail_list: bool,
    fail_get: bool,
    pub lists: AtomicUsize,
    pub gets: AtomicUsize,
}

impl MemoryStore {
    pub fn new(secrets: &[(&str, &str)]) -> Self {
        Self {
            secrets: secrets
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    /// Make `list_secret_ids` fail like a permission error.
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make `batch_get` fail like a network error.
    pub fn failing_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    pub fn list_calls(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretStore for MemoryStore {
    async fn list_secret_ids(&self) -> Result<Vec<SecretId>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(StoreError::List("AccessDeniedException: not authorized".into()).into());
        }
        Ok(self.secrets.iter().map(|(k, _)| k.clone()).collect())
    }

    async fn batch_get(&self, ids: &[SecretId]) -> Result<BatchOutcome> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_get {
            return Err(StoreError::Fetch("dispatch failure: connection refused".into()).into());
        }

        let mut outcome = BatchOutcome::default();
        for id in ids {
            match self.secrets.iter().find(|(k, _)| k == id) {
                Some((k, v)) => outcome.secrets.push(Secret::new(k.as_str(), v.as_str())),
                None => outcome.failures.push(FetchFailure::new(
                    id.as_str(),
                    "ResourceNotFoundException",
                    "Secrets Manager can't find the specified secret.",
                )),
            }
        }
        Ok(outcome)
    }
}

/// Host call as seen by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Redact(String),
    Export(String, String),
    Output(String, String),
    Warn(String),
    Debug(String),
    Fail(String),
}

/// Host that records every call.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn exports(&self) -> Vec<(String, String)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Export(n, v) => Some((n.clone(), v.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn outputs(&self) -> Vec<(String, String)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Output(n, v) => Some((n.clone(), v.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn redacted(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Redact(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Warn(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Host for RecordingHost {
    fn redact(&mut self, value: &str) -> Result<()> {
        self.calls.push(HostCall::Redact(value.to_string()));
        Ok(())
    }

    fn export_var(&mut self, name: &str, value: &str) -> Result<()> {
        self.calls
            .push(HostCall::Export(name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.calls
            .push(HostCall::Output(name.to_string(), value.to_string()));
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        self.calls.push(HostCall::Warn(message.to_string()));
        Ok(())
    }

    fn debug(&mut self, message: &str) -> Result<()> {
        self.calls.push(HostCall::Debug(message.to_string()));
        Ok(())
    }

    fn fail(&mut self, message: &str) -> Result<()> {
        self.calls.push(HostCall::Fail(message.to_string()));
        Ok(())
    }
}
