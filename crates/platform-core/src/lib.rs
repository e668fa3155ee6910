//! Spaceprobe platform core contracts.
//!
//! This crate holds the desktop-space data structures, the
//! [`DesktopStateProvider`] seam that OS backends implement, and the
//! consumers built on top of it: the fullscreen query, the transition
//! watcher, and the overlay visibility rule.

use serde::{Deserialize, Serialize};
use spaceprobe_common::error::ProbeResult;

pub mod query;
pub mod testing;
pub mod visibility;
pub mod watch;

pub use query::{FullscreenSpaceQuery, QueryOutcome};
pub use spaceprobe_common::config::FallbackPolicy;
pub use visibility::{OverlayAction, OverlayVisibility};
pub use watch::{SpaceTransition, SpaceWatcher};

/// Display server / platform family the snapshot was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayServer {
    Wayland,
    X11,
    Windows,
    #[serde(rename = "macos")]
    MacOS,
    #[default]
    Unknown,
}

/// What kind of virtual desktop is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "code")]
pub enum SpaceKind {
    /// Ordinary desktop that may host several windows.
    Desktop,
    /// Dedicated to a single fullscreen application.
    Fullscreen,
    /// Owned by the window server itself (e.g. Mission Control).
    System,
    /// The platform reported a code we do not recognize.
    Unknown(i32),
}

/// A point-in-time read of the active space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceSnapshot {
    /// Platform identifier of the active space, when the platform has one.
    pub space_id: Option<u64>,
    pub kind: SpaceKind,
    pub display_server: DisplayServer,
}

impl SpaceSnapshot {
    pub fn new(space_id: Option<u64>, kind: SpaceKind, display_server: DisplayServer) -> Self {
        Self {
            space_id,
            kind,
            display_server,
        }
    }

    /// Only a space the platform marks as fullscreen counts.
    pub fn is_fullscreen(&self) -> bool {
        self.kind == SpaceKind::Fullscreen
    }
}

/// Read-only access to the OS notion of "the current space".
///
/// Implementations observe window-server state and must never mutate it.
/// Every call is a fresh read: no caching, no retained subscriptions.
pub trait DesktopStateProvider: Send + Sync {
    /// Short identifier used in logs and `spaceprobe check`.
    fn name(&self) -> &'static str;

    /// Read the active space.
    fn current_space(&self) -> ProbeResult<SpaceSnapshot>;
}

impl<P: DesktopStateProvider + ?Sized> DesktopStateProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn current_space(&self) -> ProbeResult<SpaceSnapshot> {
        (**self).current_space()
    }
}

impl<P: DesktopStateProvider + ?Sized> DesktopStateProvider for std::sync::Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn current_space(&self) -> ProbeResult<SpaceSnapshot> {
        (**self).current_space()
    }
}

/// Provider for targets without any space facility. Always errors, so the
/// query falls back to its policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedProvider;

impl DesktopStateProvider for UnsupportedProvider {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn current_space(&self) -> ProbeResult<SpaceSnapshot> {
        Err(spaceprobe_common::error::ProbeError::unsupported(
            "this platform has no virtual desktop facility",
        ))
    }
}
