// src/core/dates.rs

// Date text handling. Post ages arrive as relative phrases ("just now",
// "5 hours ago", "7 days ago", "1 month ago"); cake days as word dates
// ("January 17, 2018"). The archive keeps both day-first.

use chrono::{Days, Local, NaiveDate};

pub const DATE_FMT: &str = "%d.%m.%Y";

/// Convert a relative post age into the absolute publish date.
pub fn date_from_time_lapse(lapse: &str) -> Option<String> {
    date_from_time_lapse_at(Local::now().date_naive(), lapse)
}

/// Pure half of the conversion: anything phrased in hours collapses to
/// today, "month" counts as 31 days, otherwise the leading integer token
/// is a day count.
pub fn date_from_time_lapse_at(today: NaiveDate, lapse: &str) -> Option<String> {
    let days = if lapse.contains("just now") || lapse.contains("hour") {
        0
    } else if lapse.contains("month") {
        31
    } else {
        lapse.split_whitespace().next()?.parse::<u64>().ok()?
    };
    let date = today.checked_sub_days(Days::new(days))?;
    Some(date.format(DATE_FMT).to_string())
}

/// "January 17, 2018" → "17.01.2018". Abbreviated month names pass too.
pub fn date_from_words(text: &str) -> Option<String> {
    let t = text.trim();
    let parsed = NaiveDate::parse_from_str(t, "%B %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(t, "%b %d, %Y"))
        .ok()?;
    Some(parsed.format(DATE_FMT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn hour_phrases_collapse_to_today() {
        let today = day(2020, 12, 28);
        assert_eq!(date_from_time_lapse_at(today, "just now").as_deref(), Some("28.12.2020"));
        assert_eq!(date_from_time_lapse_at(today, "5 hours ago").as_deref(), Some("28.12.2020"));
        assert_eq!(date_from_time_lapse_at(today, "1 hour ago").as_deref(), Some("28.12.2020"));
    }

    #[test]
    fn month_counts_as_31_days() {
        let today = day(2020, 12, 28);
        assert_eq!(date_from_time_lapse_at(today, "1 month ago").as_deref(), Some("27.11.2020"));
    }

    #[test]
    fn day_phrases_subtract_the_leading_integer() {
        let today = day(2020, 12, 28);
        assert_eq!(date_from_time_lapse_at(today, "7 days ago").as_deref(), Some("21.12.2020"));
        assert_eq!(date_from_time_lapse_at(today, "11 days ago").as_deref(), Some("17.12.2020"));
    }

    #[test]
    fn unusable_phrases_yield_none() {
        let today = day(2020, 12, 28);
        assert_eq!(date_from_time_lapse_at(today, "yesterday"), None);
        assert_eq!(date_from_time_lapse_at(today, ""), None);
    }

    #[test]
    fn word_dates_convert_day_first() {
        assert_eq!(date_from_words("January 17, 2018").as_deref(), Some("17.01.2018"));
        assert_eq!(date_from_words("April 30, 2020").as_deref(), Some("30.04.2020"));
        assert_eq!(date_from_words("Apr 30, 2020").as_deref(), Some("30.04.2020"));
        assert_eq!(date_from_words("not a date"), None);
    }
}
