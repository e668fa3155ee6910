//! Windows space provider.
//!
//! Windows virtual desktops have no fullscreen flavour of their own, so the
//! active desktop counts as a fullscreen space while the Shell reports that
//! a fullscreen application owns it (`SHQueryUserNotificationState`).

use spaceprobe_common::error::{ProbeError, ProbeResult};
use spaceprobe_platform_core::{DesktopStateProvider, DisplayServer, SpaceKind, SpaceSnapshot};

/// `QUERY_USER_NOTIFICATION_STATE` values that mean a fullscreen app is up.
pub const QUNS_BUSY: i32 = 2;
pub const QUNS_RUNNING_D3D_FULL_SCREEN: i32 = 3;
pub const QUNS_PRESENTATION_MODE: i32 = 4;

pub fn kind_from_notification_state(code: i32) -> SpaceKind {
    match code {
        QUNS_BUSY | QUNS_RUNNING_D3D_FULL_SCREEN | QUNS_PRESENTATION_MODE => SpaceKind::Fullscreen,
        _ => SpaceKind::Desktop,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellNotificationProvider;

impl ShellNotificationProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DesktopStateProvider for ShellNotificationProvider {
    fn name(&self) -> &'static str {
        "windows-shell"
    }

    #[cfg(windows)]
    fn current_space(&self) -> ProbeResult<SpaceSnapshot> {
        use windows::Win32::UI::Shell::SHQueryUserNotificationState;

        // SAFETY: no arguments; the call only reads shell state.
        let state = unsafe { SHQueryUserNotificationState() }
            .map_err(|e| ProbeError::platform(format!("SHQueryUserNotificationState: {e}")))?;
        tracing::debug!(state = state.0, "Shell notification state");

        Ok(SpaceSnapshot::new(
            None,
            kind_from_notification_state(state.0),
            DisplayServer::Windows,
        ))
    }

    #[cfg(not(windows))]
    fn current_space(&self) -> ProbeResult<SpaceSnapshot> {
        Err(ProbeError::unsupported(
            "Shell notification state is only available on Windows",
        ))
    }
}
