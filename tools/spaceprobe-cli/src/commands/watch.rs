//! Follow fullscreen transitions until Ctrl-C.

use std::future::Future;

use spaceprobe_common::clock::PollInterval;
use spaceprobe_common::config::AppConfig;
use spaceprobe_platform_core::{
    DesktopStateProvider, FullscreenSpaceQuery, OverlayVisibility, SpaceTransition, SpaceWatcher,
};

use crate::provider::native_provider;

pub async fn run(
    config: &AppConfig,
    interval_ms: Option<u64>,
    overlay_distance: Option<f64>,
    json: bool,
) -> anyhow::Result<()> {
    let interval = match interval_ms {
        Some(ms) => PollInterval::from_millis(ms)?,
        None => config.watch.poll_interval()?,
    };
    let overlay = OverlayVisibility::from(&config.overlay);

    let query = FullscreenSpaceQuery::with_policy(native_provider(), config.query.fallback);
    tracing::info!(
        provider = query.provider().name(),
        interval_ms = interval.as_millis(),
        "Watching active space"
    );
    let mut watcher = SpaceWatcher::new(query, interval);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    watch_until(&mut watcher, interval, shutdown, |transition| {
        print_transition(transition, overlay_distance.map(|d| (overlay, d)), json)
    })
    .await?;

    tracing::info!("Stopping watch");
    Ok(())
}

/// Poll every `interval` until `shutdown` resolves.
///
/// `shutdown` is pinned once, so a signal that arrives while a transition
/// is being handled is still seen on the next turn of the loop.
async fn watch_until<P, F>(
    watcher: &mut SpaceWatcher<P>,
    interval: PollInterval,
    shutdown: F,
    mut on_transition: impl FnMut(&SpaceTransition) -> anyhow::Result<()>,
) -> anyhow::Result<()>
where
    P: DesktopStateProvider,
    F: Future<Output = ()>,
{
    let mut ticker = tokio::time::interval(interval.as_duration());
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(transition) = watcher.poll() {
                    on_transition(&transition)?;
                }
            }
            _ = &mut shutdown => break,
        }
    }

    Ok(())
}

fn print_transition(
    transition: &SpaceTransition,
    overlay: Option<(OverlayVisibility, f64)>,
    json: bool,
) -> anyhow::Result<()> {
    let action = overlay.map(|(rule, distance)| rule.decide(transition.fullscreen, distance));

    if json {
        let line = serde_json::json!({
            "at": transition.at,
            "previous": transition.previous,
            "fullscreen": transition.fullscreen,
            "overlay": action,
        });
        println!("{}", serde_json::to_string(&line)?);
    } else {
        let state = if transition.fullscreen {
            "fullscreen"
        } else {
            "windowed"
        };
        match action {
            Some(action) => println!(
                "{} {state} (overlay: {action:?})",
                transition.at.to_rfc3339()
            ),
            None => println!("{} {state}", transition.at.to_rfc3339()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spaceprobe_platform_core::testing::{ScriptStep, ScriptedProvider};

    #[tokio::test]
    async fn shutdown_during_transition_handling_stops_the_loop() {
        let provider = ScriptedProvider::new([ScriptStep::desktop(1), ScriptStep::fullscreen(2)]);
        let interval = PollInterval::from_millis(10).unwrap();
        let mut watcher = SpaceWatcher::new(FullscreenSpaceQuery::new(provider), interval);

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let mut tx = Some(tx);
        let mut seen = Vec::new();

        let shutdown = async {
            let _ = rx.await;
        };
        let result = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            watch_until(&mut watcher, interval, shutdown, |t| {
                seen.push(t.fullscreen);
                if t.fullscreen {
                    if let Some(tx) = tx.take() {
                        let _ = tx.send(());
                    }
                }
                Ok(())
            }),
        )
        .await;

        assert!(result.expect("watch loop should stop").is_ok());
        assert_eq!(seen, vec![false, true]);
    }

    #[tokio::test]
    async fn handler_error_ends_the_watch() {
        let provider = ScriptedProvider::constant(spaceprobe_platform_core::SpaceKind::Desktop);
        let interval = PollInterval::from_millis(10).unwrap();
        let mut watcher = SpaceWatcher::new(FullscreenSpaceQuery::new(provider), interval);

        let result = watch_until(&mut watcher, interval, std::future::pending(), |_| {
            Err(anyhow::anyhow!("stdout closed"))
        })
        .await;
        assert!(result.is_err());
    }
}
