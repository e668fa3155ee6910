//! Native provider selection.

use spaceprobe_platform_core::DesktopStateProvider;

/// The provider for the platform this binary was built for.
pub fn native_provider() -> Box<dyn DesktopStateProvider> {
    #[cfg(target_os = "macos")]
    {
        Box::new(spaceprobe_platform_macos::SkyLightProvider::new())
    }
    #[cfg(target_os = "windows")]
    {
        Box::new(spaceprobe_platform_windows::ShellNotificationProvider::new())
    }
    #[cfg(target_os = "linux")]
    {
        Box::new(spaceprobe_platform_linux::EwmhProvider::new())
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        Box::new(spaceprobe_platform_core::UnsupportedProvider)
    }
}
