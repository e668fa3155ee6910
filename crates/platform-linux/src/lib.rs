//! Spaceprobe Linux Platform Integration
//!
//! Platform-specific implementations for Linux:
//! - **Display Detection:** Wayland / X11 session detection
//! - **EWMH:** Fullscreen state of the active window on X11 window managers
//! - **Permissions:** Capability detection and user guidance

pub mod display;
pub mod ewmh;
pub mod permissions;

pub use display::*;
pub use ewmh::EwmhProvider;
