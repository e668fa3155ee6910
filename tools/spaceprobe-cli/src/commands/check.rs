//! Check system capabilities.

use spaceprobe_common::config::AppConfig;
use spaceprobe_platform_core::FullscreenSpaceQuery;

use crate::provider::native_provider;

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("Spaceprobe System Check");
    println!("{}", "=".repeat(50));

    #[cfg(target_os = "linux")]
    {
        use spaceprobe_platform_core::DisplayServer;
        match spaceprobe_platform_linux::detect_display_server() {
            DisplayServer::Wayland => println!("[OK] Display server: Wayland"),
            DisplayServer::X11 => println!("[OK] Display server: X11"),
            _ => println!("[WARN] Display server: Unknown"),
        }
    }

    let query = FullscreenSpaceQuery::with_policy(native_provider(), config.query.fallback);
    println!("[OK] Provider: {}", query.provider().name());
    println!("     Fallback: {:?}", query.policy());

    let readable = match query.snapshot() {
        Ok(snapshot) => {
            let space = snapshot
                .space_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "[OK] Active space: {} ({:?}, fullscreen: {})",
                space,
                snapshot.kind,
                snapshot.is_fullscreen()
            );
            true
        }
        Err(e) => {
            println!("[FAIL] Active space: {e}");
            false
        }
    };

    #[cfg(target_os = "linux")]
    {
        let capabilities = spaceprobe_platform_linux::permissions::check_capabilities();
        println!();
        spaceprobe_platform_linux::permissions::print_capability_report(&capabilities);
    }

    println!();
    if readable {
        println!("The active space can be read. Spaceprobe is ready.");
    } else {
        println!(
            "The active space can't be read; queries will report {}.",
            query.policy().fallback_value()
        );
    }

    Ok(())
}
