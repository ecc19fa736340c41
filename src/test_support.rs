//! In-memory upstream used by tests across the crate.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;

use crate::{common::errors::UpstreamError, fetch::Upstream};

enum Scripted {
    Page(String),
    Status(u16),
}

/// Serves fixed pages or status codes per locator and counts every call.
#[derive(Default)]
pub struct ScriptedUpstream {
    responses: HashMap<String, Scripted>,
    calls: Mutex<HashMap<String, usize>>,
    total: AtomicUsize,
}

impl ScriptedUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, locator: &str, body: &str) -> Self {
        self.responses
            .insert(locator.to_string(), Scripted::Page(body.to_string()));
        self
    }

    pub fn with_status(mut self, locator: &str, status: u16) -> Self {
        self.responses
            .insert(locator.to_string(), Scripted::Status(status));
        self
    }

    pub fn calls(&self, locator: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(locator)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Upstream for ScriptedUpstream {
    async fn get(&self, locator: &str) -> Result<String, UpstreamError> {
        self.total.fetch_add(1, Ordering::SeqCst);
        *self
            .calls
            .lock()
            .unwrap()
            .entry(locator.to_string())
            .or_default() += 1;

        match self.responses.get(locator) {
            Some(Scripted::Page(body)) => Ok(body.clone()),
            Some(Scripted::Status(status)) => Err(UpstreamError::Status {
                url: locator.to_string(),
                status: *status,
            }),
            None => Err(UpstreamError::Status {
                url: locator.to_string(),
                status: 404,
            }),
        }
    }
}
