use crate::constants::*;
use crate::error::ConfigError;

/// What to do with a pending balloon whose asset arrives after other
/// balloons have moved into its spot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrivalPolicy {
    /// Place it where it was decided, even if that now overlaps.
    #[default]
    Keep,
    /// Re-run the separation check on arrival and drop it if it fails.
    Recheck,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorldParams {
    pub volume_threshold: f32,
    pub min_separation: f32,
    pub max_attempts: u32,
    pub half_width_x: f32,
    pub half_depth_z: f32,
    pub start_y: f32,
    pub scale: f32,
    pub speed_min: f32,
    pub speed_span: f32,
    pub ceiling_y: f32,
    pub sway_amplitude: f32,
    pub light_distance: f32,
    pub arrival: ArrivalPolicy,
    /// Fixed spawner seed; `None` draws one from the platform.
    pub seed: Option<u64>,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            volume_threshold: VOLUME_THRESHOLD,
            min_separation: MIN_SEPARATION,
            max_attempts: SPAWN_MAX_ATTEMPTS,
            half_width_x: SPAWN_HALF_WIDTH_X,
            half_depth_z: SPAWN_HALF_DEPTH_Z,
            start_y: SPAWN_START_Y,
            scale: BALLOON_SCALE,
            speed_min: RISE_SPEED_MIN,
            speed_span: RISE_SPEED_SPAN,
            ceiling_y: RETIRE_CEILING_Y,
            sway_amplitude: SWAY_AMPLITUDE,
            light_distance: LIGHT_DISTANCE,
            arrival: ArrivalPolicy::Keep,
            seed: None,
        }
    }
}

impl WorldParams {
    #[inline]
    pub fn min_separation_sq(&self) -> f32 {
        self.min_separation * self.min_separation
    }

    /// Apply `key=value` overrides from a URL query string (leading `?`
    /// optional). Keys that don't parse keep their current value and are
    /// returned as errors for the caller to report.
    pub fn with_query(mut self, query: &str) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if let Err(e) = self.apply(key, value) {
                errors.push(e);
            }
        }
        (self, errors)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "threshold" => self.volume_threshold = parse_non_negative(value).ok_or_else(invalid)?,
            "separation" => self.min_separation = parse_non_negative(value).ok_or_else(invalid)?,
            "ceiling" => {
                let y: f32 = value.parse().map_err(|_| invalid())?;
                if !y.is_finite() || y <= self.start_y {
                    return Err(invalid());
                }
                self.ceiling_y = y;
            }
            "max_attempts" => {
                self.max_attempts = value
                    .parse::<u32>()
                    .ok()
                    .filter(|n| (1..=SPAWN_MAX_ATTEMPTS_CAP).contains(n))
                    .ok_or_else(invalid)?
            }
            "arrival" => {
                self.arrival = match value {
                    "keep" => ArrivalPolicy::Keep,
                    "recheck" => ArrivalPolicy::Recheck,
                    _ => return Err(invalid()),
                }
            }
            "seed" => self.seed = Some(value.parse::<u64>().map_err(|_| invalid())?),
            // consumed by the front-end before the world is built
            "log" => {}
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_non_negative(value: &str) -> Option<f32> {
    value.parse::<f32>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let p = WorldParams::default();
        assert_eq!(p.volume_threshold, 60.0);
        assert_eq!(p.max_attempts, 10);
        assert!((p.min_separation_sq() - 0.09).abs() < 1e-6);
        assert_eq!(p.arrival, ArrivalPolicy::Keep);
    }

    #[test]
    fn query_overrides_known_keys() {
        let (p, errors) =
            WorldParams::default().with_query("?threshold=45&arrival=recheck&seed=7&log=debug");
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(p.volume_threshold, 45.0);
        assert_eq!(p.arrival, ArrivalPolicy::Recheck);
        assert_eq!(p.seed, Some(7));
    }

    #[test]
    fn bad_entries_are_reported_and_skipped() {
        let (p, errors) =
            WorldParams::default().with_query("threshold=loud&bogus=1&ceiling=-9&max_attempts=0");
        assert_eq!(p, WorldParams::default());
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ConfigError::UnknownKey("bogus".into())));
        assert!(errors.contains(&ConfigError::InvalidValue {
            key: "threshold".into(),
            value: "loud".into()
        }));
    }

    #[test]
    fn max_attempts_is_bounded() {
        let (p, errors) = WorldParams::default().with_query("max_attempts=4000000000");
        assert_eq!(p.max_attempts, SPAWN_MAX_ATTEMPTS);
        assert_eq!(
            errors,
            vec![ConfigError::InvalidValue {
                key: "max_attempts".into(),
                value: "4000000000".into()
            }]
        );

        let (p, errors) = WorldParams::default().with_query("max_attempts=1000");
        assert!(errors.is_empty());
        assert_eq!(p.max_attempts, SPAWN_MAX_ATTEMPTS_CAP);

        let (_, errors) = WorldParams::default().with_query("max_attempts=1001");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_query_is_default() {
        let (p, errors) = WorldParams::default().with_query("");
        assert!(errors.is_empty());
        assert_eq!(p, WorldParams::default());
    }
}
