//! Conversion of raw ADC codes to volts.
//!
//! Each code `c` maps to `range * c / (2^bits - 1)`. The plain functions do no
//! validation: a bit depth of zero divides by zero and yields `inf` or `NaN`,
//! and codes outside `[0, 2^bits - 1]` are converted without clamping. Use
//! [`try_adc_counts_to_volts`] with an [`AdcConfig`] to reject degenerate
//! parameters up front.

use num_traits::AsPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{DspError, Result};

/// Widest bit depth whose full scale code is exactly representable in `f64`.
pub const MAX_ADC_BITS: u32 = f64::MANTISSA_DIGITS;

/// Full scale voltage span and resolution of a converter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdcConfig {
    /// Full scale voltage span.
    pub range: f64,
    /// Resolution in bits.
    pub bits: u32,
}

impl AdcConfig {
    #[inline]
    pub fn new(range: f64, bits: u32) -> Self {
        Self { range, bits }
    }

    /// Checks `range > 0` and `1 <= bits <= MAX_ADC_BITS`.
    pub fn validate(&self) -> Result<()> {
        if !self.range.is_finite() || self.range <= 0.0 {
            return Err(DspError::InvalidRange(self.range));
        }
        if self.bits == 0 {
            return Err(DspError::ZeroBitDepth);
        }
        if self.bits > MAX_ADC_BITS {
            return Err(DspError::BitDepthTooLarge {
                bits: self.bits,
                max: MAX_ADC_BITS,
            });
        }
        Ok(())
    }

    /// Largest code the converter produces, `2^bits - 1`.
    #[inline]
    pub fn full_scale_code(&self) -> f64 {
        full_scale_code(self.bits)
    }

    /// Volts represented by one code step.
    #[inline]
    pub fn lsb(&self) -> f64 {
        self.range / self.full_scale_code()
    }

    #[inline]
    pub fn to_volts<C: AsPrimitive<f64>>(&self, count: C) -> f64 {
        count_to_volts(self.range, self.full_scale_code(), count)
    }

    /// Parses a JSON object such as `{"range": 3.3, "bits": 12}` and validates it.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| DspError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[inline]
fn full_scale_code(bits: u32) -> f64 {
    // Saturates to infinity past f64's exponent range.
    2f64.powi(bits.min(i32::MAX as u32) as i32) - 1.0
}

#[inline]
fn count_to_volts<C: AsPrimitive<f64>>(range: f64, full_scale: f64, count: C) -> f64 {
    range * (count.as_() / full_scale)
}

/// Converts ADC codes to volts.
///
/// The output has the same length and order as `adc_counts`. Requires
/// `adc_bits >= 1`; with zero bits every element is `inf`, `-inf` or `NaN`.
pub fn adc_counts_to_volts<C: AsPrimitive<f64>>(
    adc_range: f64,
    adc_bits: u32,
    adc_counts: &[C],
) -> Vec<f64> {
    let full_scale = full_scale_code(adc_bits);
    let mut volts = Vec::with_capacity(adc_counts.len());
    volts.extend(
        adc_counts
            .iter()
            .map(|&count| count_to_volts(adc_range, full_scale, count)),
    );
    volts
}

/// Converts ADC codes into a caller-owned buffer.
///
/// Converts `min(adc_counts.len(), out.len())` elements and returns that count.
pub fn adc_counts_to_volts_into<C: AsPrimitive<f64>>(
    adc_range: f64,
    adc_bits: u32,
    adc_counts: &[C],
    out: &mut [f64],
) -> usize {
    let full_scale = full_scale_code(adc_bits);
    let mut written = 0;
    for (dst, &count) in out.iter_mut().zip(adc_counts) {
        *dst = count_to_volts(adc_range, full_scale, count);
        written += 1;
    }
    written
}

/// Validates `config` before converting.
///
/// Codes outside the converter's code range are still converted linearly.
pub fn try_adc_counts_to_volts<C: AsPrimitive<f64>>(
    config: &AdcConfig,
    adc_counts: &[C],
) -> Result<Vec<f64>> {
    if let Err(err) = config.validate() {
        debug!(range = config.range, bits = config.bits, %err, "rejected ADC configuration");
        return Err(err);
    }
    let volts = adc_counts_to_volts(config.range, config.bits, adc_counts);
    trace!(
        samples = volts.len(),
        bits = config.bits,
        "converted ADC counts"
    );
    Ok(volts)
}
