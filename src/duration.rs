//! Human-readable rendering of device runtime counters.
//!
//! Runtimes are broken down into years, months, weeks, days, hours, minutes
//! and seconds using fixed unit sizes: a month is thirty weeks and a year is
//! twelve such months. These are display approximations, not calendar units.
//!
//! ```
//! assert_eq!(tapoctl::duration::format_seconds(3661), "1 hour 1 minute 1 second");
//! assert_eq!(tapoctl::duration::format_seconds(0), "0 second");
//! ```

use crate::error::AppError;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * WEEK;
const YEAR: u64 = 12 * MONTH;

/// Unit names and sizes, largest first.
const UNITS: [(&str, u64); 7] = [
    ("year", YEAR),
    ("month", MONTH),
    ("week", WEEK),
    ("day", DAY),
    ("hour", HOUR),
    ("minute", MINUTE),
    ("second", 1),
];

/// Renders `"<count> <unit> "`, adding an `s` only for counts of two or more.
///
/// Zero is singular (`"0 second "`). The trailing space is trimmed once the
/// full string is assembled.
pub fn plural(count: u64, unit: &str) -> String {
    if count == 0 || count == 1 {
        format!("{count} {unit} ")
    } else {
        format!("{count} {unit}s ")
    }
}

/// Splits `total` seconds into one count per entry of the unit table.
///
/// Each count is taken from `total` reduced modulo the next larger unit,
/// rather than from a running remainder.
pub fn breakdown(total: u64) -> [u64; 7] {
    let mut counts = [0; 7];
    let mut larger: Option<u64> = None;
    for (count, (_, size)) in counts.iter_mut().zip(UNITS) {
        let remaining = match larger {
            Some(modulus) => total % modulus,
            None => total,
        };
        *count = remaining / size;
        larger = Some(size);
    }
    counts
}

/// Formats a runtime from its largest non-zero unit down to seconds.
pub fn format_seconds(total: u64) -> String {
    let counts = breakdown(total);
    let first = counts[..UNITS.len() - 1]
        .iter()
        .position(|&count| count > 0)
        .unwrap_or(UNITS.len() - 1);

    let mut out = String::new();
    for (count, (unit, _)) in counts.iter().zip(UNITS).skip(first) {
        out.push_str(&plural(*count, unit));
    }
    out.trim().to_string()
}

/// Formats a runtime counter as reported by a device.
///
/// Negative counters are rejected with [`AppError::InvalidInput`].
pub fn seconds_to_human(seconds: i64) -> Result<String, AppError> {
    let total = u64::try_from(seconds).map_err(|_| {
        AppError::InvalidInput(format!("negative runtime: {seconds} seconds"))
    })?;
    Ok(format_seconds(total))
}
