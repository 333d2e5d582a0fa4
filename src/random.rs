use xxhash_rust::xxh3::xxh3_64;

use crate::error::RenderError;

/// Reproducible pseudo-random sequence for decorative layout.
///
/// The same `(seed, count, low, high)` always yields the same values, on
/// any platform and across runs, so regenerating unchanged data produces
/// byte-identical SVGs. Distinct seed labels give decorrelated streams.
pub fn deterministic_sequence(
    seed: &str,
    count: usize,
    low: f64,
    high: f64,
) -> Result<Vec<f64>, RenderError> {
    if count == 0 {
        return Err(RenderError::invalid_parameter("count must be positive"));
    }
    if !low.is_finite() || !high.is_finite() {
        return Err(RenderError::invalid_parameter("range bounds must be finite"));
    }
    if low > high {
        return Err(RenderError::invalid_parameter(format!(
            "inverted range: {low} > {high}"
        )));
    }

    let span = high - low;
    let values = (0..count)
        .map(|index| {
            let hash = xxh3_64(format!("{seed}:{index}").as_bytes());
            // Top 53 bits map exactly onto an f64 in [0, 1).
            let unit = (hash >> 11) as f64 / (1u64 << 53) as f64;
            low + unit * span
        })
        .collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_calls_yield_identical_sequences() {
        let a = deterministic_sequence("neural-x", 8, 100.0, 750.0).unwrap();
        let b = deterministic_sequence("neural-x", 8, 100.0, 750.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
        assert!(a.iter().all(|v| (100.0..=750.0).contains(v)));
    }

    #[test]
    fn distinct_seeds_diverge() {
        let a = deterministic_sequence("neural-x", 8, 0.0, 1.0).unwrap();
        let b = deterministic_sequence("neural-y", 8, 0.0, 1.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_seed_is_valid() {
        let values = deterministic_sequence("", 4, -10.0, 10.0).unwrap();
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn degenerate_range_yields_constant() {
        let values = deterministic_sequence("flat", 5, 3.0, 3.0).unwrap();
        assert!(values.iter().all(|v| *v == 3.0));
    }

    #[test]
    fn zero_count_rejected() {
        let err = deterministic_sequence("s", 0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, RenderError::InvalidParameter { .. }));
    }

    #[test]
    fn inverted_range_rejected() {
        let err = deterministic_sequence("s", 3, 5.0, 1.0).unwrap_err();
        assert!(matches!(err, RenderError::InvalidParameter { .. }));
    }

    proptest! {
        #[test]
        fn values_stay_in_range(
            seed in ".*",
            count in 1usize..64,
            low in -1e6f64..1e6,
            span in 0.0f64..1e6,
        ) {
            let high = low + span;
            let values = deterministic_sequence(&seed, count, low, high).unwrap();
            prop_assert_eq!(values.len(), count);
            for value in &values {
                prop_assert!(*value >= low && *value <= high);
            }
        }

        #[test]
        fn sequences_are_repeatable(seed in ".*", count in 1usize..64) {
            let a = deterministic_sequence(&seed, count, 0.0, 100.0).unwrap();
            let b = deterministic_sequence(&seed, count, 0.0, 100.0).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
