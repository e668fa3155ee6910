//! Show/hide rule for an overlay that stands in for the menu bar.
//!
//! In a fullscreen space the system menu bar is hidden until the pointer
//! reaches the top edge. An overlay (a clock, a status readout) is useful
//! only while the menu bar is away, so it shows when the space is fullscreen
//! and the pointer is clear of the top edge, and hides otherwise.

use serde::{Deserialize, Serialize};
use spaceprobe_common::config::OverlayConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayAction {
    Show,
    Hide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayVisibility {
    /// Distance from the top edge (points) at or below which the overlay hides.
    pub hide_threshold: f64,
}

impl Default for OverlayVisibility {
    fn default() -> Self {
        Self {
            hide_threshold: 35.0,
        }
    }
}

impl From<&OverlayConfig> for OverlayVisibility {
    fn from(config: &OverlayConfig) -> Self {
        Self {
            hide_threshold: config.hide_threshold,
        }
    }
}

impl OverlayVisibility {
    pub fn decide(&self, fullscreen: bool, distance_from_top: f64) -> OverlayAction {
        if !fullscreen || distance_from_top <= self.hide_threshold {
            OverlayAction::Hide
        } else {
            OverlayAction::Show
        }
    }
}

/// Pointer distance from the top edge of a screen, in bottom-left origin
/// coordinates (y grows upward).
pub fn distance_from_top(screen_max_y: f64, pointer_y: f64) -> f64 {
    screen_max_y - pointer_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_outside_fullscreen_regardless_of_pointer() {
        let rule = OverlayVisibility::default();
        assert_eq!(rule.decide(false, 500.0), OverlayAction::Hide);
        assert_eq!(rule.decide(false, 0.0), OverlayAction::Hide);
    }

    #[test]
    fn shows_in_fullscreen_when_pointer_is_away() {
        let rule = OverlayVisibility::default();
        assert_eq!(rule.decide(true, 400.0), OverlayAction::Show);
        assert_eq!(rule.decide(true, 35.1), OverlayAction::Show);
    }

    #[test]
    fn threshold_is_inclusive() {
        let rule = OverlayVisibility::default();
        assert_eq!(rule.decide(true, 35.0), OverlayAction::Hide);
        assert_eq!(rule.decide(true, 2.0), OverlayAction::Hide);
    }

    #[test]
    fn distance_uses_bottom_left_origin() {
        assert_eq!(distance_from_top(1080.0, 1050.0), 30.0);
        assert_eq!(distance_from_top(1080.0, 0.0), 1080.0);
    }

    #[test]
    fn threshold_comes_from_config() {
        let config = OverlayConfig {
            hide_threshold: 10.0,
        };
        let rule = OverlayVisibility::from(&config);
        assert_eq!(rule.decide(true, 20.0), OverlayAction::Show);
    }
}
