// ABOUTME: Display-layer formatting for macro quantities and entry times
// ABOUTME: Integer-aware quantity rendering and 12-hour clock conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! Formatting helpers for the display layer.
//!
//! These never fail: a malformed time string is returned unchanged rather
//! than breaking the entry list it appears in.

/// Render a macro quantity: whole numbers without decimals, otherwise one decimal
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Render an entry time (`HH:MM:SS`) as a 12-hour clock (`h:MM AM|PM`)
///
/// Input that does not look like a wall-clock time is returned unchanged.
#[must_use]
pub fn format_clock_time(time: &str) -> String {
    let mut parts = time.split(':');
    let (Some(hours), Some(minutes)) = (parts.next(), parts.next()) else {
        return time.to_owned();
    };
    let (Ok(hour), Ok(minute)) = (hours.parse::<u32>(), minutes.parse::<u32>()) else {
        return time.to_owned();
    };
    if hour > 23 || minute > 59 || minutes.len() != 2 {
        return time.to_owned();
    }

    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minutes} {meridiem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_quantities_drop_decimals() {
        assert_eq!(format_quantity(15.0), "15");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn fractional_quantities_keep_one_decimal() {
        assert_eq!(format_quantity(15.26), "15.3");
        assert_eq!(format_quantity(0.5), "0.5");
    }

    #[test]
    fn afternoon_times_render_as_pm() {
        assert_eq!(format_clock_time("14:05:09"), "2:05 PM");
        assert_eq!(format_clock_time("12:00:00"), "12:00 PM");
    }

    #[test]
    fn morning_times_render_as_am() {
        assert_eq!(format_clock_time("00:30:00"), "12:30 AM");
        assert_eq!(format_clock_time("09:26:53"), "9:26 AM");
    }

    #[test]
    fn malformed_times_pass_through_unchanged() {
        assert_eq!(format_clock_time("noonish"), "noonish");
        assert_eq!(format_clock_time("25:00:00"), "25:00:00");
    }
}
