//! Locating the -3 dB point of an amplitude response.
//!
//! Amplitudes are in decibels and indexed from zero; the first sample is the
//! reference level. The search is a single linear pass that keeps the first
//! closest sample, so ties resolve to the lowest index.

use num_traits::Float;
use tracing::{debug, trace};

use crate::error::{DspError, Result};

/// Drop from the reference level that defines the cutoff, in dB.
pub const CUTOFF_DROP_DB: f64 = 3.0;

/// Returns the index of the amplitude closest to `amplitudes[0] - drop_db`.
///
/// Returns `None` for an empty slice. A `NaN` distance counts as the minimum,
/// so the first `NaN` encountered is returned.
pub fn find_db_drop_index<F: Float>(amplitudes: &[F], drop_db: F) -> Option<usize> {
    let reference = *amplitudes.first()?;
    let target = reference - drop_db;

    let mut best_idx = 0;
    let mut best = F::infinity();
    for (idx, &amp) in amplitudes.iter().enumerate() {
        let distance = (amp - target).abs();
        if distance.is_nan() {
            return Some(idx);
        }
        if distance < best {
            best = distance;
            best_idx = idx;
        }
    }
    Some(best_idx)
}

#[inline]
fn cutoff_drop<F: Float>() -> F {
    let one = F::one();
    one + one + one
}

/// Returns the index of the amplitude closest to 3 dB below the first sample.
///
/// Amplitudes must be floating point; convert integer dB readings with
/// `as f64` (or `f64::from`) before searching.
///
/// # Panics
///
/// Panics if `array` is empty, since there is no reference level to measure
/// the drop from. Use [`try_find_3db_cutoff_frequency`] to get an error instead.
pub fn find_3db_cutoff_frequency<F: Float>(array: &[F]) -> usize {
    match find_db_drop_index(array, cutoff_drop()) {
        Some(idx) => idx,
        None => panic!(
            "index out of bounds: cannot locate a -3 dB cutoff in an empty amplitude array"
        ),
    }
}

pub fn try_find_3db_cutoff_frequency<F: Float>(array: &[F]) -> Result<usize> {
    match find_db_drop_index(array, cutoff_drop()) {
        Some(idx) => {
            trace!(idx, len = array.len(), "located -3 dB cutoff");
            Ok(idx)
        }
        None => {
            debug!("cutoff search on empty amplitude array");
            Err(DspError::EmptyAmplitudes)
        }
    }
}

/// Looks up the frequency of the -3 dB point given matching frequency bins.
pub fn cutoff_frequency<F: Float>(frequencies: &[F], amplitudes: &[F]) -> Result<F> {
    if frequencies.len() != amplitudes.len() {
        debug!(
            frequencies = frequencies.len(),
            amplitudes = amplitudes.len(),
            "frequency and amplitude lengths differ"
        );
        return Err(DspError::LengthMismatch {
            frequencies: frequencies.len(),
            amplitudes: amplitudes.len(),
        });
    }
    let idx = try_find_3db_cutoff_frequency(amplitudes)?;
    Ok(frequencies[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_array_returns_first_index() {
        assert_eq!(find_3db_cutoff_frequency(&[5.0, 5.0, 5.0, 5.0]), 0);
    }

    #[test]
    fn decreasing_array_hits_exact_match() {
        assert_eq!(
            find_3db_cutoff_frequency(&[0.0, -1.0, -2.0, -3.0, -4.0, -5.0]),
            3
        );
    }

    #[test]
    fn single_element() {
        assert_eq!(find_3db_cutoff_frequency(&[10.0f32]), 0);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        // Target is -3; indices 1 and 3 are both 0.5 away.
        assert_eq!(find_3db_cutoff_frequency(&[0.0, -2.5, -1.0, -3.5]), 1);
    }

    #[test]
    fn closest_not_first_below_target() {
        assert_eq!(find_3db_cutoff_frequency(&[0.0, -2.0, -3.1, -6.0]), 2);
    }

    #[test]
    fn integer_readings_after_conversion() {
        let readings = [5i32, 5, 5, 5];
        let amps: Vec<f64> = readings.iter().map(|&r| f64::from(r)).collect();
        assert_eq!(find_3db_cutoff_frequency(&amps), 0);
    }

    #[test]
    fn drop_is_exactly_three_db() {
        assert_eq!(cutoff_drop::<f32>(), 3.0);
        assert_eq!(cutoff_drop::<f64>(), CUTOFF_DROP_DB);
        // Exact target hit only if the drop is exactly 3 dB.
        assert_eq!(find_3db_cutoff_frequency(&[1.0f32, -1.0, -2.0, -4.0]), 2);
    }

    #[test]
    fn input_is_left_untouched() {
        let amps = vec![1.0, 0.0, -2.0];
        let copy = amps.clone();
        let _ = find_3db_cutoff_frequency(&amps);
        assert_eq!(amps, copy);
    }

    #[test]
    fn nan_counts_as_minimum() {
        assert_eq!(find_3db_cutoff_frequency(&[0.0, -1.0, f64::NAN, -3.0]), 2);
        assert_eq!(find_3db_cutoff_frequency(&[f64::NAN, -3.0]), 0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn empty_array_panics() {
        let empty: [f64; 0] = [];
        find_3db_cutoff_frequency(&empty);
    }

    #[test]
    fn checked_search_reports_empty() {
        let empty: [f32; 0] = [];
        assert_eq!(
            try_find_3db_cutoff_frequency(&empty),
            Err(DspError::EmptyAmplitudes)
        );
        assert_eq!(try_find_3db_cutoff_frequency(&[0.0, -3.0]), Ok(1));
    }

    #[test]
    fn custom_drop() {
        let amps = [0.0, -3.0, -6.0, -9.0];
        assert_eq!(find_db_drop_index(&amps, 6.0), Some(2));
        assert_eq!(find_db_drop_index::<f64>(&[], 6.0), None);
    }

    #[test]
    fn frequency_lookup_on_empty_response() {
        let empty: [f64; 0] = [];
        assert_eq!(
            cutoff_frequency(&empty, &empty),
            Err(DspError::EmptyAmplitudes)
        );
    }

    #[test]
    fn frequency_lookup() {
        let freqs = [10.0, 100.0, 1_000.0, 10_000.0];
        let amps = [0.0, -0.5, -3.2, -20.0];
        assert_eq!(cutoff_frequency(&freqs, &amps), Ok(1_000.0));
        assert_eq!(
            cutoff_frequency(&freqs[..2], &amps),
            Err(DspError::LengthMismatch {
                frequencies: 2,
                amplitudes: 4
            })
        );
    }
}
