/*
 * Graph Parameters Module
 *
 * This module defines the GraphParams struct that holds every tunable of the
 * skill graph: the labels, the edge visibility threshold and opacity, the seeding
 * speed range and the text/edge styling. Defaults reproduce the skills section
 * of the portfolio page. The same struct is deserialized from YAML (see `config`)
 * and edited live through the egui panel, which relies on the snapshot-based
 * change detection below.
 */

use serde::Deserialize;

use crate::surface::{Color, Font};
use crate::{BASE_ALPHA, DEFAULT_SKILLS, EDGE_THRESHOLD, LABEL_OFFSET, MAX_AXIS_SPEED};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphParams {
    pub labels: Vec<String>,
    pub edge_threshold: f32,
    pub base_alpha: f32,
    pub max_axis_speed: f32,
    pub label_offset: f32,
    pub font_size: u32,
    pub font_family: String,
    pub text_color: Color,
    pub edge_color: Color,
    pub background: Color,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    #[serde(skip)]
    #[doc(hidden)]
    pub previous_values: Option<ParamSnapshot>,
}

// A snapshot of the values the UI can change
#[derive(Debug, Clone, PartialEq)]
struct ParamSnapshot {
    edge_threshold: f32,
    base_alpha: f32,
    max_axis_speed: f32,
    show_debug: bool,
    pause_simulation: bool,
}

/// What changed since the last snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamChanges {
    // Velocities are drawn from the speed range only when seeding
    pub reseed_needed: bool,
    pub any_changed: bool,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            labels: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            edge_threshold: EDGE_THRESHOLD,
            base_alpha: BASE_ALPHA,
            max_axis_speed: MAX_AXIS_SPEED,
            label_offset: LABEL_OFFSET,
            font_size: 14,
            font_family: "Inter".to_string(),
            text_color: Color::rgb(0x1e, 0x29, 0x3b),
            edge_color: Color::rgb(80, 0, 0),
            background: Color::WHITE,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl GraphParams {
    pub fn font(&self) -> Font {
        Font {
            size: self.font_size,
            family: self.font_family.clone(),
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Compare against the last snapshot; no snapshot means nothing changed
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };

        let current = self.snapshot();
        ParamChanges {
            reseed_needed: current.max_axis_speed != prev.max_axis_speed,
            any_changed: current != *prev,
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            edge_threshold: self.edge_threshold,
            base_alpha: self.base_alpha,
            max_axis_speed: self.max_axis_speed,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Parameter ranges for UI sliders
    pub fn edge_threshold_range() -> std::ops::RangeInclusive<f32> {
        10.0..=400.0
    }

    pub fn base_alpha_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn max_axis_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let params = GraphParams::default();
        assert_eq!(params.labels.len(), 9);
        assert_eq!(params.labels[0], "C#");
        assert_eq!(params.edge_threshold, 150.0);
        assert_eq!(params.base_alpha, 0.3);
        assert_eq!(params.max_axis_speed, 0.5);
        assert_eq!(params.text_color.to_string(), "#1e293b");
        assert_eq!(params.font(), Font { size: 14, family: "Inter".to_string() });
    }

    #[test]
    fn no_snapshot_reports_nothing() {
        let mut params = GraphParams::default();
        params.base_alpha = 0.9;
        assert_eq!(params.detect_changes(), ParamChanges::default());
    }

    #[test]
    fn speed_change_requires_reseed() {
        let mut params = GraphParams::default();
        params.take_snapshot();
        params.max_axis_speed = 2.0;

        let changes = params.detect_changes();
        assert!(changes.reseed_needed);
        assert!(changes.any_changed);
    }

    #[test]
    fn style_change_does_not_reseed() {
        let mut params = GraphParams::default();
        params.take_snapshot();
        params.edge_threshold = 200.0;

        let changes = params.detect_changes();
        assert!(!changes.reseed_needed);
        assert!(changes.any_changed);
    }
}
