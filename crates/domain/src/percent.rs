use std::collections::BTreeMap;

use crate::LoadCatalog;

/// A working load that is achievable with the available equipment, and its share of the 1RM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentOption {
    pub percent: u32,
    pub load: f64,
}

/// Computes the distinct %1RM values that can be loaded from the catalog.
///
/// Only loads up to the one-rep max are considered. If several loads round to the same
/// percentage, the lightest one is kept. The result is ordered by percentage. A one-rep max
/// that is not a positive finite number yields no options.
#[must_use]
pub fn derive_percent_options(one_rep_max: f64, catalog: &LoadCatalog) -> Vec<PercentOption> {
    if !one_rep_max.is_finite() || one_rep_max <= 0.0 {
        return vec![];
    }

    let mut options = BTreeMap::new();
    for load in catalog.values().filter(|&l| l > 0.0 && l <= one_rep_max) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (load / one_rep_max * 100.0).round() as u32;
        options
            .entry(percent)
            .or_insert(PercentOption { percent, load });
    }
    options.into_values().collect()
}

/// Looks up the option for a previously selected percentage.
///
/// `None` means the selection is not achievable anymore and has to be cleared together with
/// the working weight derived from it.
#[must_use]
pub fn selected_option(options: &[PercentOption], percent: Option<u32>) -> Option<PercentOption> {
    let percent = percent?;
    options.iter().find(|o| o.percent == percent).copied()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{LoadEntry, Unit};

    fn catalog(values: &[f64]) -> LoadCatalog {
        values
            .iter()
            .map(|v| LoadEntry::new(*v, Unit::Kg).unwrap())
            .collect()
    }

    fn option(percent: u32, load: f64) -> PercentOption {
        PercentOption { percent, load }
    }

    #[rstest]
    #[case::evenly_spaced(
        &[20.0, 40.0, 60.0, 80.0],
        100.0,
        vec![option(20, 20.0), option(40, 40.0), option(60, 60.0), option(80, 80.0)]
    )]
    #[case::odd_load(
        &[20.0, 40.0, 65.0, 80.0],
        100.0,
        vec![option(20, 20.0), option(40, 40.0), option(65, 65.0), option(80, 80.0)]
    )]
    #[case::heavier_than_max(
        &[50.0, 100.0, 120.0],
        100.0,
        vec![option(50, 50.0), option(100, 100.0)]
    )]
    #[case::same_rounded_percent(
        &[100.0, 100.5, 102.0, 150.0],
        200.0,
        vec![option(50, 100.0), option(51, 102.0), option(75, 150.0)]
    )]
    #[case::rounds_half_up(
        &[12.5],
        20.0,
        vec![option(63, 12.5)]
    )]
    #[case::uneven_max(
        &[30.0, 60.0, 90.0],
        135.0,
        vec![option(22, 30.0), option(44, 60.0), option(67, 90.0)]
    )]
    fn test_derive_percent_options(
        #[case] loads: &[f64],
        #[case] one_rep_max: f64,
        #[case] expected: Vec<PercentOption>,
    ) {
        assert_eq!(derive_percent_options(one_rep_max, &catalog(loads)), expected);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-100.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_derive_percent_options_invalid_max(#[case] one_rep_max: f64) {
        assert_eq!(
            derive_percent_options(one_rep_max, &catalog(&[20.0, 40.0])),
            vec![]
        );
    }

    #[rstest]
    #[case(1.0)]
    #[case(100.0)]
    #[case(f64::MAX)]
    fn test_derive_percent_options_empty_catalog(#[case] one_rep_max: f64) {
        assert_eq!(derive_percent_options(one_rep_max, &LoadCatalog::empty()), vec![]);
    }

    #[test]
    fn test_derive_percent_options_invariants() {
        let loads = (1..=80).map(|i| f64::from(i) * 2.5).collect::<Vec<_>>();
        let catalog = catalog(&loads);
        for one_rep_max in [37.5, 61.0, 99.9, 142.5, 180.0, 250.0] {
            let options = derive_percent_options(one_rep_max, &catalog);
            assert_eq!(options, derive_percent_options(one_rep_max, &catalog));
            for window in options.windows(2) {
                assert!(window[0].percent < window[1].percent);
                assert!(window[0].load < window[1].load);
            }
            for o in &options {
                assert!(o.load <= one_rep_max);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let percent = (o.load / one_rep_max * 100.0).round() as u32;
                assert_eq!(o.percent, percent);
            }
        }
    }

    #[rstest]
    #[case(Some(40), Some(option(40, 40.0)))]
    #[case(Some(45), None)]
    #[case(None, None)]
    fn test_selected_option(#[case] percent: Option<u32>, #[case] expected: Option<PercentOption>) {
        let options = vec![option(20, 20.0), option(40, 40.0)];
        assert_eq!(selected_option(&options, percent), expected);
    }
}
