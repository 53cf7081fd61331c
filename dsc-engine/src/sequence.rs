//! Helpers shared by the engines

use crate::error::{EngineError, Result};

/// First index whose value equals `target` exactly (IEEE `==`, no epsilon)
pub(crate) fn position_of<'a, I>(values: I, target: f64) -> Option<usize>
where
    I: IntoIterator<Item = &'a f64>,
{
    values.into_iter().position(|&v| v == target)
}

/// Validate a signed position against `len`
///
/// Valid range is `0..len`, or `0..=len` when `allow_end` is set (insertion).
pub(crate) fn checked_position(position: i64, len: usize, allow_end: bool) -> Result<usize> {
    let invalid = EngineError::InvalidPosition { position, len };
    let index = usize::try_from(position).map_err(|_| invalid.clone())?;

    let in_range = if allow_end { index <= len } else { index < len };
    if in_range {
        Ok(index)
    } else {
        Err(invalid)
    }
}

/// Compensated (Neumaier) summation
///
/// Falls back to the plain sum when it overflows or a term is infinite, where
/// the correction term would otherwise turn the result into NaN.
pub(crate) fn compensated_sum<'a, I>(values: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
{
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    let mut plain = 0.0_f64;
    for &x in values {
        plain += x;
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }

    let compensated = sum + c;
    if compensated.is_nan() && plain.is_infinite() {
        plain
    } else {
        compensated
    }
}
