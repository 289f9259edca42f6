use time::{Date, macros::format_description};

/// Zone appended when callers do not name one.
pub const DEFAULT_ZONE: &str = "UTC";

// PayPal dates look like `2014-02-27 PST` or `2014-02-27 10:00:00 PST`.
// Only the calendar date is interpreted here; the zone is passed through.

/// Formats `date` in PayPal's `yyyy-MM-dd z` form.
#[must_use]
pub fn format_paypal_date(date: Date, zone: &str) -> String {
    let format = format_description!("[year]-[month]-[day]");
    match date.format(&format) {
        Ok(day) => format!("{day} {zone}"),
        Err(e) => {
            warn!("Failed to format date {date}: {e}");
            format!("{date} {zone}")
        }
    }
}

/// Parses the calendar date out of a PayPal date or date-time string.
///
/// Accepts `yyyy-MM-dd`, `yyyy-MM-dd z`, `yyyy-MM-dd HH:mm:ss z` and
/// ISO-8601 `yyyy-MM-ddTHH:mm:ssZ`.
pub fn parse_paypal_date(date_str: &str) -> Result<Date, String> {
    let date_part = date_str
        .trim()
        .split([' ', 'T'])
        .next()
        .unwrap_or_default();

    let format = format_description!("[year]-[month]-[day]");
    Date::parse(date_part, &format).map_err(|e| format!("Failed to parse date '{date_str}': {e}"))
}

/// The zone suffix of a PayPal date string, if it carries one.
#[must_use]
pub fn zone_of(date_str: &str) -> Option<&str> {
    let mut parts = date_str.trim().split(' ');
    parts.next()?;
    parts
        .last()
        .filter(|zone| zone.chars().all(|c| c.is_ascii_alphabetic()))
}
