//! Scripted provider for tests and demos.
//!
//! Replays a fixed sequence of space reads. Once the script runs out the
//! last step repeats, so a one-step script behaves like a constant desktop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use spaceprobe_common::error::{ProbeError, ProbeResult};

use crate::{DesktopStateProvider, DisplayServer, SpaceKind, SpaceSnapshot};

/// One scripted read.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    /// The active space has this kind and id.
    Space { id: u64, kind: SpaceKind },
    /// The read fails with a platform error carrying this message.
    Fail(String),
}

impl ScriptStep {
    pub fn desktop(id: u64) -> Self {
        Self::Space {
            id,
            kind: SpaceKind::Desktop,
        }
    }

    pub fn fullscreen(id: u64) -> Self {
        Self::Space {
            id,
            kind: SpaceKind::Fullscreen,
        }
    }
}

#[derive(Debug)]
pub struct ScriptedProvider {
    steps: Mutex<VecDeque<ScriptStep>>,
    last: Mutex<Option<ScriptStep>>,
    reads: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
            last: Mutex::new(None),
            reads: AtomicUsize::new(0),
        }
    }

    /// Always reports the same space.
    pub fn constant(kind: SpaceKind) -> Self {
        Self::new([ScriptStep::Space { id: 1, kind }])
    }

    /// Every read fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new([ScriptStep::Fail(message.into())])
    }

    /// Number of reads served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Append steps to the remaining script.
    pub fn push(&self, step: ScriptStep) {
        self.steps
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(step);
    }

    fn next_step(&self) -> Option<ScriptStep> {
        let mut steps = self.steps.lock().unwrap_or_else(|e| e.into_inner());
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(step) = steps.pop_front() {
            *last = Some(step);
        }
        last.clone()
    }
}

impl DesktopStateProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn current_space(&self) -> ProbeResult<SpaceSnapshot> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match self.next_step() {
            Some(ScriptStep::Space { id, kind }) => {
                Ok(SpaceSnapshot::new(Some(id), kind, DisplayServer::Unknown))
            }
            Some(ScriptStep::Fail(message)) => Err(ProbeError::platform(message)),
            None => Err(ProbeError::platform("empty script")),
        }
    }
}
