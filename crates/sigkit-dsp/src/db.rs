//! Conversions between linear amplitude and decibels.

use crate::Decibels;

/// Minimum linear amplitude treated as silence to avoid numerical issues.
const MIN_AMPLITUDE: f64 = 1e-12;

/// Converts a linear amplitude ratio to decibels.
#[inline]
pub fn amplitude_to_db(amplitude: f64) -> Decibels {
    if amplitude <= MIN_AMPLITUDE {
        f64::NEG_INFINITY
    } else {
        20.0 * amplitude.log10()
    }
}

/// Converts decibels to a linear amplitude ratio.
#[inline]
pub fn db_to_amplitude(db: Decibels) -> f64 {
    if db == f64::NEG_INFINITY {
        0.0
    } else {
        10f64.powf(db / 20.0)
    }
}

/// Converts a linear magnitude response to decibels, one value per bin.
pub fn magnitudes_to_db(magnitudes: &[f64]) -> Vec<Decibels> {
    magnitudes.iter().map(|&m| amplitude_to_db(m)).collect()
}
