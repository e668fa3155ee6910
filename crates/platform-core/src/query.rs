//! The fullscreen-space query.
//!
//! [`FullscreenSpaceQuery::is_current_space_fullscreen`] answers one
//! question, "is the active virtual desktop a fullscreen space right now?",
//! and never fails: when the provider cannot be read the configured
//! [`FallbackPolicy`] decides the answer.

use serde::Serialize;
use spaceprobe_common::config::FallbackPolicy;
use spaceprobe_common::error::ProbeResult;

use crate::{DesktopStateProvider, SpaceSnapshot};

/// Answer of a fallback-protected read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    /// `None` when the read failed and the fallback decided.
    pub snapshot: Option<SpaceSnapshot>,
    pub fullscreen: bool,
}

/// Stateless query over a [`DesktopStateProvider`].
pub struct FullscreenSpaceQuery<P: DesktopStateProvider = Box<dyn DesktopStateProvider>> {
    provider: P,
    policy: FallbackPolicy,
}

impl<P: DesktopStateProvider> FullscreenSpaceQuery<P> {
    /// Query with the default policy (unreadable state reports `false`).
    pub fn new(provider: P) -> Self {
        Self::with_policy(provider, FallbackPolicy::default())
    }

    pub fn with_policy(provider: P, policy: FallbackPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Whether the active space is fullscreen at the moment of the call.
    pub fn is_current_space_fullscreen(&self) -> bool {
        self.snapshot_or_fallback().fullscreen
    }

    /// Read the active space, applying the fallback policy on failure.
    pub fn snapshot_or_fallback(&self) -> QueryOutcome {
        match self.snapshot() {
            Ok(snapshot) => QueryOutcome {
                snapshot: Some(snapshot),
                fullscreen: snapshot.is_fullscreen(),
            },
            Err(e) => {
                let value = self.policy.fallback_value();
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %e,
                    fallback = value,
                    "Could not read the active space, using fallback"
                );
                QueryOutcome {
                    snapshot: None,
                    fullscreen: value,
                }
            }
        }
    }

    /// Same read without the fallback.
    pub fn try_is_current_space_fullscreen(&self) -> ProbeResult<bool> {
        self.snapshot().map(|s| s.is_fullscreen())
    }

    /// Full snapshot of the active space.
    pub fn snapshot(&self) -> ProbeResult<SpaceSnapshot> {
        let snapshot = self.provider.current_space()?;
        tracing::debug!(
            provider = self.provider.name(),
            space_id = ?snapshot.space_id,
            kind = ?snapshot.kind,
            "Read active space"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProvider;
    use crate::SpaceKind;

    #[test]
    fn ordinary_space_is_not_fullscreen() {
        let query = FullscreenSpaceQuery::new(ScriptedProvider::constant(SpaceKind::Desktop));
        assert!(!query.is_current_space_fullscreen());
    }

    #[test]
    fn fullscreen_space_is_fullscreen() {
        let query = FullscreenSpaceQuery::new(ScriptedProvider::constant(SpaceKind::Fullscreen));
        assert!(query.is_current_space_fullscreen());
        assert!(query.try_is_current_space_fullscreen().unwrap());
    }

    #[test]
    fn system_and_unknown_spaces_are_not_fullscreen() {
        for kind in [SpaceKind::System, SpaceKind::Unknown(99)] {
            let query = FullscreenSpaceQuery::new(ScriptedProvider::constant(kind));
            assert!(!query.is_current_space_fullscreen());
        }
    }

    #[test]
    fn unreadable_state_defaults_to_false() {
        let query = FullscreenSpaceQuery::new(ScriptedProvider::failing("permission denied"));
        assert!(!query.is_current_space_fullscreen());
        assert!(query.try_is_current_space_fullscreen().is_err());
    }

    #[test]
    fn outcome_carries_snapshot_when_readable() {
        let query = FullscreenSpaceQuery::new(ScriptedProvider::constant(SpaceKind::Fullscreen));
        let outcome = query.snapshot_or_fallback();
        assert!(outcome.fullscreen);
        assert_eq!(outcome.snapshot.map(|s| s.kind), Some(SpaceKind::Fullscreen));
    }

    #[test]
    fn outcome_uses_policy_when_unreadable() {
        let query = FullscreenSpaceQuery::with_policy(
            ScriptedProvider::failing("sandboxed"),
            FallbackPolicy::AssumeFullscreen,
        );
        let outcome = query.snapshot_or_fallback();
        assert_eq!(outcome.snapshot, None);
        assert!(outcome.fullscreen);
    }

    #[test]
    fn fallback_policy_can_assume_fullscreen() {
        let query = FullscreenSpaceQuery::with_policy(
            ScriptedProvider::failing("no window server"),
            FallbackPolicy::AssumeFullscreen,
        );
        assert!(query.is_current_space_fullscreen());
    }

    #[test]
    fn repeated_calls_without_change_agree() {
        let query = FullscreenSpaceQuery::new(ScriptedProvider::constant(SpaceKind::Fullscreen));
        let first = query.is_current_space_fullscreen();
        for _ in 0..10 {
            assert_eq!(query.is_current_space_fullscreen(), first);
        }
        assert_eq!(query.provider().reads(), 11);
    }

    #[test]
    fn boxed_provider_is_the_default_parameter() {
        let provider: Box<dyn DesktopStateProvider> =
            Box::new(ScriptedProvider::constant(SpaceKind::Desktop));
        let query: FullscreenSpaceQuery = FullscreenSpaceQuery::new(provider);
        assert!(!query.is_current_space_fullscreen());
        assert_eq!(query.provider().name(), "scripted");
    }
}
