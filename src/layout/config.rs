//! Configuration for the layout engine

/// Configuration options for layout post-processing and fallback planning
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Whether symmetrical-pair enforcement writes the mirrored
    /// coordinates back, or only computes and reports them. The computed
    /// targets appear in diagnostics either way.
    pub apply_pair_overrides: bool,

    /// Whether the bed-position rule moves the bed to its preferred
    /// flush-wall position, or only reports it. Off by default: moving
    /// the anchor item can invalidate a proposer's whole arrangement.
    pub apply_bed_correction: bool,

    /// Minimum walkway gap between items, feet. Used by the planner's
    /// collision test and the post-layout audit.
    pub min_clearance: f64,

    /// Retry budget for the planner's collision-avoidance perturbation.
    pub max_collision_retries: usize,

    /// Inward margin from the side walls for non-nightstand pairs, feet.
    pub pair_margin: f64,

    /// Spacing of the planner's bottom-wall overflow row, feet.
    pub row_spacing: f64,

    /// Inclusive space-utilization band considered comfortable.
    pub optimal_utilization: (f64, f64),
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            apply_pair_overrides: true,
            apply_bed_correction: false,
            min_clearance: 0.25,
            max_collision_retries: 10,
            pair_margin: 1.0,
            row_spacing: 3.0,
            optimal_utilization: (0.15, 0.40),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable writing enforced pair coordinates
    pub fn with_pair_overrides(mut self, apply: bool) -> Self {
        self.apply_pair_overrides = apply;
        self
    }

    /// Enable or disable authoritative bed correction
    pub fn with_bed_correction(mut self, apply: bool) -> Self {
        self.apply_bed_correction = apply;
        self
    }

    /// Set the minimum walkway clearance
    pub fn with_min_clearance(mut self, clearance: f64) -> Self {
        self.min_clearance = clearance;
        self
    }

    /// Set the inward margin for mirrored non-nightstand pairs
    pub fn with_pair_margin(mut self, margin: f64) -> Self {
        self.pair_margin = margin;
        self
    }

    /// Set the comfortable utilization band
    pub fn with_optimal_utilization(mut self, low: f64, high: f64) -> Self {
        self.optimal_utilization = (low, high);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert!(config.apply_pair_overrides);
        assert!(!config.apply_bed_correction);
        assert_eq!(config.min_clearance, 0.25);
        assert_eq!(config.max_collision_retries, 10);
        assert_eq!(config.pair_margin, 1.0);
        assert_eq!(config.row_spacing, 3.0);
        assert_eq!(config.optimal_utilization, (0.15, 0.40));
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_pair_overrides(false)
            .with_bed_correction(true)
            .with_min_clearance(0.5);

        assert!(!config.apply_pair_overrides);
        assert!(config.apply_bed_correction);
        assert_eq!(config.min_clearance, 0.5);
    }
}
