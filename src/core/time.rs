//! Conversions between hours+minutes and decimal hours.

/// Whole hours plus minutes, as entered or displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursMinutes {
    /// Whole hours
    pub hours: u32,
    /// Minutes, 0-59
    pub minutes: u32,
}

/// `hours + minutes / 60`.
#[must_use]
pub fn hours_to_decimal(hours: u32, minutes: u32) -> f64 {
    f64::from(hours) + f64::from(minutes) / 60.0
}

/// Splits a non-negative decimal into whole hours and rounded minutes.
///
/// Rounding that lands on 60 minutes carries into the hour, so `1.999`
/// becomes `2:00` rather than `1:60`. Negative input is treated as its
/// magnitude; use [`format_signed_time`] when the sign matters.
#[must_use]
pub fn decimal_to_hours(decimal: f64) -> HoursMinutes {
    let decimal = if decimal.is_finite() { decimal.abs() } else { 0.0 };
    let whole = decimal.floor();

    // Cast safety: whole and the minute fraction are finite and non-negative
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (mut hours, mut minutes) = (whole as u32, ((decimal - whole) * 60.0).round() as u32);
    if minutes >= 60 {
        hours += 1;
        minutes -= 60;
    }
    HoursMinutes { hours, minutes }
}

/// `"H:MM"` rendering of a decimal hour value.
#[must_use]
pub fn format_time(decimal: f64) -> String {
    let HoursMinutes { hours, minutes } = decimal_to_hours(decimal);
    format!("{hours}:{minutes:02}")
}

/// Like [`format_time`] but with an explicit `+`/`-` sign, for variances.
#[must_use]
pub fn format_signed_time(decimal: f64) -> String {
    let sign = if decimal < 0.0 { '-' } else { '+' };
    format!("{sign}{}", format_time(decimal))
}
