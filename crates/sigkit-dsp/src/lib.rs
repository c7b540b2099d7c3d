//! Numeric helpers for signal measurements: converting raw ADC codes to volts
//! and locating the -3 dB cutoff in an amplitude response.
//!
//! The plain functions keep the minimal contract: no validation, and
//! degenerate inputs surface as IEEE `inf`/`NaN` or a bounds panic. The
//! `try_*` functions are a stricter variant that reject bit depths outside
//! `1..=MAX_ADC_BITS`, non-positive ranges and empty amplitude arrays with a
//! [`DspError`].

pub mod adc;
pub mod cutoff;
pub mod db;
pub mod error;

pub use adc::{
    adc_counts_to_volts, adc_counts_to_volts_into, try_adc_counts_to_volts, AdcConfig, MAX_ADC_BITS,
};
pub use cutoff::{
    cutoff_frequency, find_3db_cutoff_frequency, find_db_drop_index, try_find_3db_cutoff_frequency,
    CUTOFF_DROP_DB,
};
pub use error::{DspError, Result};

/// Convenience type alias for values expressed in decibels.
pub type Decibels = f64;
