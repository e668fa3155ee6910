//! Print whether the active space is fullscreen.

use spaceprobe_common::config::AppConfig;
use spaceprobe_platform_core::{FullscreenSpaceQuery, QueryOutcome};

use crate::provider::native_provider;

/// Exit status for a failed read under `--strict --exit-code`.
pub const EXIT_READ_FAILED: i32 = 2;

/// Exit status under `--exit-code`. `fullscreen` is `None` for a failed
/// strict read; a `None` result means exit normally.
fn exit_status(fullscreen: Option<bool>, exit_code: bool) -> Option<i32> {
    if !exit_code {
        return None;
    }
    match fullscreen {
        Some(true) => None,
        Some(false) => Some(1),
        None => Some(EXIT_READ_FAILED),
    }
}

pub fn run(config: &AppConfig, json: bool, strict: bool, exit_code: bool) -> anyhow::Result<()> {
    let query = FullscreenSpaceQuery::with_policy(native_provider(), config.query.fallback);

    let outcome = if strict {
        match query.snapshot() {
            Ok(snapshot) => QueryOutcome {
                snapshot: Some(snapshot),
                fullscreen: snapshot.is_fullscreen(),
            },
            Err(e) => match exit_status(None, exit_code) {
                Some(status) => {
                    eprintln!("Error: Failed to read active space: {e}");
                    std::process::exit(status);
                }
                None => return Err(anyhow::anyhow!("Failed to read active space: {e}")),
            },
        }
    } else {
        query.snapshot_or_fallback()
    };

    if json {
        let report = serde_json::json!({
            "fullscreen": outcome.fullscreen,
            "provider": query.provider().name(),
            "snapshot": outcome.snapshot,
        });
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", outcome.fullscreen);
    }

    if let Some(status) = exit_status(Some(outcome.fullscreen), exit_code) {
        std::process::exit(status);
    }
    Ok(())
}
