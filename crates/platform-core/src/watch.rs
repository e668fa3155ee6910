//! Follow fullscreen transitions by sampling the query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spaceprobe_common::clock::{PollInterval, RateController};

use crate::query::FullscreenSpaceQuery;
use crate::DesktopStateProvider;

/// A change in the fullscreen state of the active space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceTransition {
    pub at: DateTime<Utc>,
    /// `None` for the first observation.
    pub previous: Option<bool>,
    pub fullscreen: bool,
}

/// Remembers the last answer and reports only changes.
pub struct SpaceWatcher<P: DesktopStateProvider = Box<dyn DesktopStateProvider>> {
    query: FullscreenSpaceQuery<P>,
    last: Option<bool>,
    rate: RateController,
}

impl<P: DesktopStateProvider> SpaceWatcher<P> {
    pub fn new(query: FullscreenSpaceQuery<P>, interval: PollInterval) -> Self {
        Self {
            query,
            last: None,
            rate: RateController::new(interval),
        }
    }

    /// Last observed value, if any read has happened.
    pub fn last(&self) -> Option<bool> {
        self.last
    }

    pub fn query(&self) -> &FullscreenSpaceQuery<P> {
        &self.query
    }

    /// Read now. The first poll always yields a transition.
    pub fn poll(&mut self) -> Option<SpaceTransition> {
        let fullscreen = self.query.is_current_space_fullscreen();
        let previous = self.last.replace(fullscreen);
        if previous == Some(fullscreen) {
            return None;
        }

        let transition = SpaceTransition {
            at: Utc::now(),
            previous,
            fullscreen,
        };
        tracing::info!(
            previous = ?previous,
            fullscreen,
            "Active space fullscreen state changed"
        );
        Some(transition)
    }

    /// Read only if the poll interval has elapsed since the last read.
    ///
    /// Meant for event-driven callers (pointer moves) that fire far more
    /// often than the window server needs to be asked.
    pub fn poll_at(&mut self, now_ns: u64) -> Option<SpaceTransition> {
        if !self.rate.should_tick(now_ns) {
            return None;
        }
        self.poll()
    }
}
