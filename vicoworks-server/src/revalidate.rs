//! View refresh signal
//!
//! Successful counter updates bump the generation of the views that render
//! the changed table. Front ends poll `/api/revalidations` or subscribe
//! in-process to re-render.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

/// A rendered page that depends on store data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// `/` - hero, statistics, skills, contact
    Home,
    /// `/projects` - the gallery
    Projects,
}

impl View {
    pub const ALL: [View; 2] = [View::Home, View::Projects];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Projects => "/projects",
        }
    }
}

/// Emitted after a view's data changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewRefreshed {
    pub view: View,
    pub generation: u64,
}

/// Per-view generation counters plus a broadcast of refresh events
#[derive(Debug)]
pub struct Revalidator {
    home: AtomicU64,
    projects: AtomicU64,
    events: broadcast::Sender<ViewRefreshed>,
}

impl Default for Revalidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Revalidator {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            home: AtomicU64::new(0),
            projects: AtomicU64::new(0),
            events,
        }
    }

    fn counter(&self, view: View) -> &AtomicU64 {
        match view {
            View::Home => &self.home,
            View::Projects => &self.projects,
        }
    }

    /// Mark `view` stale; returns its new generation.
    pub fn revalidate(&self, view: View) -> u64 {
        let generation = self.counter(view).fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(path = view.path(), generation, "view revalidated");
        // No subscribers is fine
        let _ = self.events.send(ViewRefreshed { view, generation });
        generation
    }

    pub fn generation(&self, view: View) -> u64 {
        self.counter(view).load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewRefreshed> {
        self.events.subscribe()
    }

    /// Current generation of every view.
    pub fn snapshot(&self) -> Vec<ViewRefreshed> {
        View::ALL
            .into_iter()
            .map(|view| ViewRefreshed {
                view,
                generation: self.generation(view),
            })
            .collect()
    }
}
