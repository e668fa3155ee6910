//! Display server detection.

use spaceprobe_platform_core::DisplayServer;

/// Detect the current display server.
pub fn detect_display_server() -> DisplayServer {
    display_server_from_env(
        std::env::var("WAYLAND_DISPLAY").ok().as_deref(),
        std::env::var("DISPLAY").ok().as_deref(),
    )
}

/// Classify a session from its `WAYLAND_DISPLAY` / `DISPLAY` values.
/// Empty values count as unset.
pub fn display_server_from_env(wayland: Option<&str>, display: Option<&str>) -> DisplayServer {
    let set = |v: Option<&str>| v.is_some_and(|s| !s.is_empty());
    if set(wayland) {
        DisplayServer::Wayland
    } else if set(display) {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}

/// Whether an X server is reachable through `DISPLAY`, which is also true
/// under XWayland.
pub fn has_x11_display() -> bool {
    std::env::var("DISPLAY").is_ok_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wayland_wins_over_display() {
        assert_eq!(
            display_server_from_env(Some("wayland-0"), Some(":0")),
            DisplayServer::Wayland
        );
    }

    #[test]
    fn x11_when_only_display_is_set() {
        assert_eq!(display_server_from_env(None, Some(":1")), DisplayServer::X11);
    }

    #[test]
    fn empty_values_are_ignored() {
        assert_eq!(
            display_server_from_env(Some(""), Some("")),
            DisplayServer::Unknown
        );
        assert_eq!(display_server_from_env(None, None), DisplayServer::Unknown);
    }
}
