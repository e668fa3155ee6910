//! macOS space provider.
//!
//! Reads the active space through the SkyLight window-server connection.
//! Only read calls are made; nothing here may change window-server state.

use spaceprobe_common::error::{ProbeError, ProbeResult};
use spaceprobe_platform_core::{DesktopStateProvider, DisplayServer, SpaceKind, SpaceSnapshot};

#[cfg(target_os = "macos")]
mod skylight;

/// `CGSSpaceType` codes reported by the window server.
pub const CGS_SPACE_TYPE_USER: i32 = 0;
pub const CGS_SPACE_TYPE_SYSTEM: i32 = 2;
pub const CGS_SPACE_TYPE_FULLSCREEN: i32 = 4;

/// Map a raw `CGSSpaceType` to a [`SpaceKind`].
pub fn space_kind_from_cgs_type(code: i32) -> SpaceKind {
    match code {
        CGS_SPACE_TYPE_USER => SpaceKind::Desktop,
        CGS_SPACE_TYPE_SYSTEM => SpaceKind::System,
        CGS_SPACE_TYPE_FULLSCREEN => SpaceKind::Fullscreen,
        other => SpaceKind::Unknown(other),
    }
}

/// Turn the raw connection/space/type triple into a snapshot.
///
/// A zero connection means the window server refused us (sandbox, or a
/// process outside the GUI session) and is a permission error. A zero space
/// id is a platform error.
pub fn snapshot_from_raw(
    connection: i32,
    space_id: u64,
    space_type: i32,
) -> ProbeResult<SpaceSnapshot> {
    if connection == 0 {
        return Err(ProbeError::permission_denied(
            "window server refused the connection (sandboxed or outside the GUI session)",
        ));
    }
    if space_id == 0 {
        return Err(ProbeError::platform("window server reported no active space"));
    }
    Ok(SpaceSnapshot::new(
        Some(space_id),
        space_kind_from_cgs_type(space_type),
        DisplayServer::MacOS,
    ))
}

/// Space provider backed by SkyLight.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkyLightProvider;

impl SkyLightProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DesktopStateProvider for SkyLightProvider {
    fn name(&self) -> &'static str {
        "macos-skylight"
    }

    #[cfg(target_os = "macos")]
    fn current_space(&self) -> ProbeResult<SpaceSnapshot> {
        let (connection, space_id, space_type) = skylight::active_space();
        tracing::debug!(connection, space_id, space_type, "SkyLight active space");
        snapshot_from_raw(connection, space_id, space_type)
    }

    #[cfg(not(target_os = "macos"))]
    fn current_space(&self) -> ProbeResult<SpaceSnapshot> {
        Err(ProbeError::unsupported(
            "SkyLight spaces are only available on macOS",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_space_types() {
        assert_eq!(space_kind_from_cgs_type(0), SpaceKind::Desktop);
        assert_eq!(space_kind_from_cgs_type(2), SpaceKind::System);
        assert_eq!(space_kind_from_cgs_type(4), SpaceKind::Fullscreen);
        assert_eq!(space_kind_from_cgs_type(1), SpaceKind::Unknown(1));
    }

    #[test]
    fn zero_ids_are_errors() {
        assert!(matches!(
            snapshot_from_raw(0, 12, 4),
            Err(ProbeError::PermissionDenied { .. })
        ));
        assert!(matches!(
            snapshot_from_raw(1234, 0, 4),
            Err(ProbeError::Platform { .. })
        ));
    }

    #[test]
    fn fullscreen_snapshot_from_raw() {
        let snapshot = snapshot_from_raw(1234, 12, CGS_SPACE_TYPE_FULLSCREEN).unwrap();
        assert!(snapshot.is_fullscreen());
        assert_eq!(snapshot.space_id, Some(12));
        assert_eq!(snapshot.display_server, DisplayServer::MacOS);
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn unsupported_off_macos() {
        assert!(SkyLightProvider::new()
            .current_space()
            .unwrap_err()
            .is_unsupported());
    }

    #[cfg(target_os = "macos")]
    #[test]
    #[ignore] // Requires a logged-in GUI session
    fn reads_live_space() {
        let snapshot = SkyLightProvider::new().current_space().unwrap();
        println!("Active space: {snapshot:?}");
    }
}
