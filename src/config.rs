use crate::flight_control::{GuidanceError, common::math::STANDARD_GRAVITY};
use serde::Deserialize;
use std::{path::Path, time::Duration};

/// Tunable constants of the ascent and insertion guidance.
///
/// All thresholds are empirically chosen values without a physical derivation; they are kept
/// configurable so that scenarios and tests can move them. Missing TOML keys fall back to
/// [`GuidanceConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GuidanceConfig {
    /// Altitude (m) at which the gravity turn starts tilting away from vertical.
    pub turn_start_altitude: f64,
    /// Altitude (m) at which the gravity turn reaches horizontal.
    pub turn_end_altitude: f64,
    /// Target apoapsis altitude (m) and thereby the altitude of the final circular orbit.
    pub target_altitude: f64,
    /// Fixed heading (deg) of every ascent attitude command.
    pub heading: f64,
    /// Minimum pitch change (deg) before a new attitude command is issued.
    pub pitch_hysteresis: f64,
    /// Stage propellant level below which the watched stage counts as burnt out.
    pub propellant_epsilon: f64,
    /// Decouple stage whose propellant is watched for separation.
    pub watched_stage: u32,
    /// Fraction of the target apoapsis at which full-throttle ascent ends.
    pub approach_fraction: f64,
    /// Altitude (m) above which the vehicle is considered out of the atmosphere.
    pub atmosphere_altitude: f64,
    /// Standard gravity (m/s²) used to turn specific impulse into exhaust velocity.
    pub standard_gravity: f64,
    /// Seconds before ignition at which a time warp must end.
    pub burn_lead_time_secs: f64,
    /// Seconds cut from the timed main burn and left for fine tuning.
    pub fine_tune_margin_secs: f64,
    /// Interval between two telemetry samples of a polling wait.
    pub poll_interval_ms: u64,
    /// Length of the pre-launch countdown in seconds.
    pub countdown_secs: u64,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            turn_start_altitude: 250.0,
            turn_end_altitude: 45_000.0,
            target_altitude: 181_000.0,
            heading: 90.0,
            pitch_hysteresis: 0.5,
            propellant_epsilon: 0.1,
            watched_stage: 2,
            approach_fraction: 0.9,
            atmosphere_altitude: 70_500.0,
            standard_gravity: STANDARD_GRAVITY,
            burn_lead_time_secs: 5.0,
            fine_tune_margin_secs: 0.1,
            poll_interval_ms: 20,
            countdown_secs: 3,
        }
    }
}

impl GuidanceConfig {
    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> Result<Self, GuidanceError> {
        let config: GuidanceConfig =
            toml::from_str(text).map_err(|e| GuidanceError::config("toml", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GuidanceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GuidanceError::config("path", format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Checks every value for its admissible range.
    pub fn validate(&self) -> Result<(), GuidanceError> {
        let positive = [
            ("target_altitude", self.target_altitude),
            ("pitch_hysteresis", self.pitch_hysteresis),
            ("propellant_epsilon", self.propellant_epsilon),
            ("approach_fraction", self.approach_fraction),
            ("standard_gravity", self.standard_gravity),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GuidanceError::config(field, format!("{value} is not positive")));
            }
        }
        let non_negative = [
            ("turn_start_altitude", self.turn_start_altitude),
            ("atmosphere_altitude", self.atmosphere_altitude),
            ("burn_lead_time_secs", self.burn_lead_time_secs),
            ("fine_tune_margin_secs", self.fine_tune_margin_secs),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GuidanceError::config(field, format!("{value} is negative")));
            }
        }
        if !self.turn_end_altitude.is_finite() || self.turn_end_altitude <= self.turn_start_altitude {
            return Err(GuidanceError::config(
                "turn_end_altitude",
                format!("{} must lie above the turn start", self.turn_end_altitude),
            ));
        }
        if self.approach_fraction >= 1.0 {
            return Err(GuidanceError::config(
                "approach_fraction",
                format!("{} must be below 1", self.approach_fraction),
            ));
        }
        if !self.heading.is_finite() {
            return Err(GuidanceError::config("heading", "non-finite"));
        }
        if self.poll_interval_ms == 0 {
            return Err(GuidanceError::config("poll_interval_ms", "must be at least 1 ms"));
        }
        Ok(())
    }

    /// Apoapsis altitude at which full-throttle ascent hands over to the approach phase.
    pub fn approach_altitude(&self) -> f64 { self.target_altitude * self.approach_fraction }

    pub fn poll_interval(&self) -> Duration { Duration::from_millis(self.poll_interval_ms) }

    pub fn burn_lead_time(&self) -> f64 { self.burn_lead_time_secs }

    pub fn fine_tune_margin(&self) -> f64 { self.fine_tune_margin_secs }
}

#[cfg(test)]
mod tests {
    use super::GuidanceConfig;
    use crate::flight_control::GuidanceError;

    #[test]
    fn test_defaults_are_valid() {
        let config = GuidanceConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.approach_altitude() - 162_900.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GuidanceConfig::from_toml_str(
            "target_altitude = 182000.0\npoll_interval_ms = 10\n",
        )
        .unwrap();
        assert!((config.target_altitude - 182_000.0).abs() < f64::EPSILON);
        assert_eq!(config.poll_interval_ms, 10);
        assert!((config.turn_end_altitude - 45_000.0).abs() < f64::EPSILON);
        assert!((config.approach_altitude() - 163_800.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("guidance-{}.toml", std::process::id()));
        std::fs::write(&path, "target_altitude = 182000.0\ncountdown_secs = 5\n").unwrap();
        let loaded = GuidanceConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        let config = loaded.unwrap();
        assert!((config.target_altitude - 182_000.0).abs() < f64::EPSILON);
        assert_eq!(config.countdown_secs, 5);
        assert_eq!(config.watched_stage, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("guidance-does-not-exist.toml");
        let res = GuidanceConfig::load(&path);
        assert!(matches!(res, Err(GuidanceError::InvalidConfiguration { field: "path", .. })));
    }

    #[test]
    fn test_rejects_inverted_turn() {
        let res = GuidanceConfig::from_toml_str(
            "turn_start_altitude = 5000.0\nturn_end_altitude = 1000.0\n",
        );
        assert!(matches!(
            res,
            Err(GuidanceError::InvalidConfiguration { field: "turn_end_altitude", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = GuidanceConfig { approach_fraction: 1.2, ..GuidanceConfig::default() };
        assert!(config.validate().is_err());
        let config = GuidanceConfig { poll_interval_ms: 0, ..GuidanceConfig::default() };
        assert!(config.validate().is_err());
        let config = GuidanceConfig { standard_gravity: f64::NAN, ..GuidanceConfig::default() };
        assert!(config.validate().is_err());
        assert!(GuidanceConfig::from_toml_str("target_altitude = \"high\"").is_err());
    }
}
