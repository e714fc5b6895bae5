use crate::round_to_hundredths;

/// Rest assumed between two consecutive sets.
///
/// This is a fixed policy of the metric preview, not an input.
pub const REST_BETWEEN_SETS: f64 = 60.0;

/// Durations in seconds of the four phases of a repetition.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TempoPhases {
    pub concentric: f64,
    pub isometric_1: f64,
    pub eccentric: f64,
    pub isometric_2: f64,
}

impl TempoPhases {
    /// Duration of one repetition. Negative or non-finite phases count as zero.
    #[must_use]
    pub fn total(&self) -> f64 {
        [
            self.concentric,
            self.isometric_1,
            self.eccentric,
            self.isometric_2,
        ]
        .into_iter()
        .map(non_negative)
        .sum()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub total_tempo: f64,
    pub time_under_tension: f64,
    pub total_rest: f64,
    /// Load volume per second, rounded to hundredths. `None` if no time elapses.
    pub density: Option<f64>,
}

/// Derives all training-density metrics from scratch.
#[must_use]
pub fn derive_metrics(tempo: &TempoPhases, reps: f64, sets: f64, weight: f64) -> DerivedMetrics {
    let reps = non_negative(reps);
    let sets = non_negative(sets);
    let weight = non_negative(weight);

    let total_tempo = tempo.total();
    let time_under_tension = total_tempo * reps * sets;
    let total_rest = if sets > 1.0 {
        (sets - 1.0) * REST_BETWEEN_SETS
    } else {
        0.0
    };
    let duration = time_under_tension + total_rest;
    let density = if duration > 0.0 {
        Some(round_to_hundredths(weight * reps * sets / duration))
    } else {
        None
    };

    DerivedMetrics {
        total_tempo,
        time_under_tension,
        total_rest,
        density,
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const TEMPO: TempoPhases = TempoPhases {
        concentric: 2.0,
        isometric_1: 1.0,
        eccentric: 2.0,
        isometric_2: 1.0,
    };

    #[rstest]
    #[case(TEMPO, 6.0)]
    #[case(TempoPhases::default(), 0.0)]
    #[case(TempoPhases { concentric: 1.5, isometric_1: 0.0, eccentric: 3.0, isometric_2: 0.5 }, 5.0)]
    #[case(TempoPhases { concentric: -2.0, isometric_1: f64::NAN, eccentric: 3.0, isometric_2: 1.0 }, 4.0)]
    fn test_tempo_phases_total(#[case] tempo: TempoPhases, #[case] expected: f64) {
        assert_eq!(tempo.total(), expected);
    }

    #[test]
    fn test_derive_metrics() {
        let metrics = derive_metrics(&TEMPO, 10.0, 3.0, 50.0);
        assert_eq!(
            metrics,
            DerivedMetrics {
                total_tempo: 6.0,
                time_under_tension: 180.0,
                total_rest: 120.0,
                density: Some(5.0),
            }
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(42.5)]
    #[case(100.0)]
    fn test_derive_metrics_density_scales_with_weight(#[case] weight: f64) {
        let density = derive_metrics(&TEMPO, 10.0, 3.0, weight).density.unwrap();
        assert_approx_eq!(density, round_to_hundredths(weight * 30.0 / 300.0));
    }

    #[rstest]
    #[case(1.0, 0.0)]
    #[case(0.0, 0.0)]
    #[case(2.0, 60.0)]
    #[case(5.0, 240.0)]
    fn test_derive_metrics_total_rest(#[case] sets: f64, #[case] expected: f64) {
        assert_eq!(derive_metrics(&TEMPO, 12.0, sets, 20.0).total_rest, expected);
    }

    #[test]
    fn test_derive_metrics_single_set_ignores_reps_and_tempo_for_rest() {
        for reps in [1.0, 8.0, 20.0] {
            let metrics = derive_metrics(&TempoPhases::default(), reps, 1.0, 80.0);
            assert_eq!(metrics.total_rest, 0.0);
            assert_eq!(metrics.density, None);
        }
    }

    #[test]
    fn test_derive_metrics_rounds_density() {
        // 3 * 5 * 2 = 30 s under tension, 60 s rest, 70 * 5 * 2 / 90 = 7.777...
        let tempo = TempoPhases {
            concentric: 3.0,
            ..TempoPhases::default()
        };
        assert_eq!(derive_metrics(&tempo, 5.0, 2.0, 70.0).density, Some(7.78));
    }

    #[test]
    fn test_derive_metrics_without_input() {
        assert_eq!(
            derive_metrics(&TempoPhases::default(), 0.0, 0.0, 0.0),
            DerivedMetrics::default()
        );
    }
}
