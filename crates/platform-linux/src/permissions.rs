//! Capability detection and guidance for Linux.
//!
//! The fullscreen query only works where an EWMH-compliant window manager
//! is reachable over X11; this module explains what is missing otherwise.

use crate::display::{detect_display_server, has_x11_display};
use spaceprobe_platform_core::DisplayServer;

/// A system capability the fullscreen query depends on.
#[derive(Debug, Clone)]
pub struct Capability {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub required: bool,
    pub fix_instructions: Option<String>,
}

/// Check all capabilities and report status.
pub fn check_capabilities() -> Vec<Capability> {
    vec![check_graphical_session(), check_x11_access(), check_wayland()]
}

fn check_graphical_session() -> Capability {
    let available = detect_display_server() != DisplayServer::Unknown;

    Capability {
        name: "Graphical Session".to_string(),
        description: "A running Wayland or X11 desktop session".to_string(),
        available,
        required: true,
        fix_instructions: if !available {
            Some("Run from inside a desktop session (GNOME, KDE, i3, ...)".to_string())
        } else {
            None
        },
    }
}

fn check_x11_access() -> Capability {
    let available = has_x11_display();

    Capability {
        name: "X11 / EWMH".to_string(),
        description: "X server with an EWMH window manager for _NET_WM_STATE_FULLSCREEN"
            .to_string(),
        available,
        required: true,
        fix_instructions: if !available {
            Some("Set DISPLAY, or enable XWayland in your compositor".to_string())
        } else {
            None
        },
    }
}

fn check_wayland() -> Capability {
    let wayland = detect_display_server() == DisplayServer::Wayland;

    Capability {
        name: "Native Wayland Windows".to_string(),
        description: "Fullscreen state of native Wayland clients".to_string(),
        available: !wayland,
        required: false,
        fix_instructions: if wayland {
            Some(
                "Only XWayland clients are visible; native Wayland fullscreen windows report false"
                    .to_string(),
            )
        } else {
            None
        },
    }
}

/// Print a user-friendly capability report.
pub fn print_capability_report(capabilities: &[Capability]) {
    println!("Spaceprobe System Capabilities:");
    println!("{}", "-".repeat(60));

    for cap in capabilities {
        let status = if cap.available {
            "[OK]"
        } else if cap.required {
            "[MISSING - REQUIRED]"
        } else {
            "[LIMITED]"
        };

        println!("  {} {}: {}", status, cap.name, cap.description);

        if let Some(ref fix) = cap.fix_instructions {
            println!("    Fix: {fix}");
        }
    }
}
