//! Diagnostics sink for failures surfaced by the core and the screens.
//!
//! There is no global logger: the app owns one [`ErrorLog`] and hands it to
//! whichever component should report into it.

use crate::core::constants::MAX_ERROR_ENTRIES;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use uuid::Uuid;

/// Where and while doing what an error happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    pub component: &'static str,
    pub action: &'static str,
    pub details: BTreeMap<String, String>,
}

impl ErrorContext {
    pub fn new(component: &'static str, action: &'static str) -> Self {
        Self {
            component,
            action,
            details: BTreeMap::new(),
        }
    }

    /// Attach a key/value detail.
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.details.insert(key.to_string(), value.to_string());
        self
    }
}

/// A recorded failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    /// `source()` chain below the top-level error, outermost first.
    pub causes: Vec<String>,
    pub component: String,
    pub action: String,
    pub details: BTreeMap<String, String>,
}

impl ErrorEntry {
    pub fn new(error: &dyn Error, context: ErrorContext) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            message: error.to_string(),
            causes,
            component: context.component.to_string(),
            action: context.action.to_string(),
            details: context.details,
        }
    }
}

/// Something failures can be reported to.
pub trait DiagnosticsSink {
    fn report(&mut self, error: &dyn Error, context: ErrorContext);
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for Rc<RefCell<S>> {
    fn report(&mut self, error: &dyn Error, context: ErrorContext) {
        self.borrow_mut().report(error, context);
    }
}

pub type SubscriptionId = u64;

/// Called with `Some(entry)` for each new report and `None` when the log is cleared.
pub type ErrorListener = Box<dyn FnMut(Option<&ErrorEntry>)>;

/// Bounded, newest-first log of reported errors with change listeners.
pub struct ErrorLog {
    entries: VecDeque<ErrorEntry>,
    capacity: usize,
    listeners: Vec<(SubscriptionId, ErrorListener)>,
    next_subscription: SubscriptionId,
}

impl fmt::Debug for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorLog")
            .field("entries", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::with_capacity(MAX_ERROR_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Wrap in the shared handle the single-threaded UI passes around.
    pub fn shared(self) -> Rc<RefCell<ErrorLog>> {
        Rc::new(RefCell::new(self))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to `limit` newest entries.
    pub fn entries(&self, limit: usize) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter().take(limit)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        for (_, listener) in self.listeners.iter_mut() {
            listener(None);
        }
    }

    pub fn subscribe(&mut self, listener: ErrorListener) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns true if the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Write the log to ~/.dreamforge/errors.json.
    pub fn export_to_file(&self) -> io::Result<PathBuf> {
        crate::utils::persistence::save_json("errors.json", &self.entries)
    }
}

impl DiagnosticsSink for ErrorLog {
    fn report(&mut self, error: &dyn Error, context: ErrorContext) {
        let entry = ErrorEntry::new(error, context);
        tracing::error!(
            component = %entry.component,
            action = %entry.action,
            details = ?entry.details,
            "{}",
            entry.message
        );

        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }

        if let Some(newest) = self.entries.front() {
            for (_, listener) in self.listeners.iter_mut() {
                listener(Some(newest));
            }
        }
    }
}
