use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

/// Fixed domain of the payload range slider.
///
/// Deliberately independent of the dataset's own payload span: a dataset
/// heavier than `max` has records no slider position can reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Distance between labelled tick marks.
    pub mark_interval: f64,
}

impl Default for SliderDomain {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
            mark_interval: 500.0,
        }
    }
}

impl SliderDomain {
    /// Round `value` to the nearest step and clamp it into the domain.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Tick mark positions from `min` to `max` inclusive.
    pub fn marks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.mark_interval).floor() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.mark_interval)
            .collect()
    }

    /// Position of `value` along the domain as a 0..=1 fraction (clamped).
    pub fn fraction(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Inverse of [`Self::fraction`], before snapping.
    pub fn value_at(&self, fraction: f64) -> f64 {
        self.min + fraction.clamp(0.0, 1.0) * (self.max - self.min)
    }
}

/// Everything the binary needs to start; compiled-in, no flags or env vars.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub slider: SliderDomain,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            window_title: "SpaceX Launch Records Dashboard".to_string(),
            inner_size: [1200.0, 900.0],
            min_inner_size: [600.0, 400.0],
            slider: SliderDomain::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_step_and_clamps() {
        let domain = SliderDomain::default();
        assert_eq!(domain.snap(1_499.0), 1_000.0);
        assert_eq!(domain.snap(1_500.0), 2_000.0);
        assert_eq!(domain.snap(-300.0), 0.0);
        assert_eq!(domain.snap(15_600.0), 10_000.0);
    }

    #[test]
    fn marks_every_five_hundred() {
        let marks = SliderDomain::default().marks();
        assert_eq!(marks.len(), 21);
        assert_eq!(marks[0], 0.0);
        assert_eq!(marks[1], 500.0);
        assert_eq!(marks[20], 10_000.0);
    }

    #[test]
    fn fraction_and_value_are_inverse_inside_domain() {
        let domain = SliderDomain::default();
        assert_eq!(domain.fraction(2_500.0), 0.25);
        assert_eq!(domain.value_at(0.25), 2_500.0);
        assert_eq!(domain.fraction(20_000.0), 1.0);
    }
}
