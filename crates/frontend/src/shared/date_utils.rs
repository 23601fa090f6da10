//! Date parsing and display. The API sends RFC 3339 timestamps or plain
//! `YYYY-MM-DD` dates; everything is shown in the browser's local time.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// "Mar 15, 2024". Unparseable input is shown as-is.
pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "Mar 15, 2024, 2:02 PM".
pub fn format_datetime(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%b %-d, %Y, %-I:%M %p").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn format_date_opt(value: Option<&str>) -> String {
    value.map(format_date).unwrap_or_else(|| "N/A".to_string())
}

/// Calendar-day wording for a delivery date on the purchase queue.
pub fn due_text(due: NaiveDateTime, now: NaiveDateTime) -> String {
    let days = (due.date() - now.date()).num_days();
    match days {
        0 => format!("Due: Today {}", due.format("%-I:%M%p")),
        1 => "Due: Tomorrow".to_string(),
        d if d < 0 => format!("{} days overdue", -d),
        d => format!("Due in {} days", d),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Critical => "urgency urgency--critical",
            Severity::Warning => "urgency urgency--warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Urgency {
    pub text: String,
    pub severity: Severity,
}

/// Banner for tickets due within a day or already late; `None` otherwise.
pub fn urgency(due: NaiveDateTime, now: NaiveDateTime) -> Option<Urgency> {
    let hours = (due - now).num_hours();
    let minutes = (due - now).num_minutes();
    let (text, severity) = if hours <= -24 {
        (format!("{} days overdue", -hours / 24), Severity::Critical)
    } else if minutes < 0 {
        (format!("{} hours overdue", (-minutes + 59) / 60), Severity::Critical)
    } else if hours < 2 {
        ("Due in 2 hours".to_string(), Severity::Warning)
    } else if hours < 24 {
        ("Due within a day".to_string(), Severity::Warning)
    } else {
        return None;
    };
    Some(Urgency { text, severity })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn formats_plain_dates_and_naive_timestamps() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_datetime("2024-03-05T14:02:26.123"), "Mar 5, 2024, 2:02 PM");
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date_opt(None), "N/A");
    }

    #[test]
    fn rfc3339_is_accepted() {
        assert!(parse_timestamp("2024-03-15T14:02:26.123Z").is_some());
        assert!(parse_timestamp("2024-03-15T14:02:26+05:30").is_some());
    }

    #[test]
    fn due_text_by_calendar_day() {
        let now = at("2025-01-10 09:00");
        assert_eq!(due_text(at("2025-01-10 15:30"), now), "Due: Today 3:30PM");
        assert_eq!(due_text(at("2025-01-11 08:00"), now), "Due: Tomorrow");
        assert_eq!(due_text(at("2025-01-14 00:00"), now), "Due in 4 days");
        assert_eq!(due_text(at("2025-01-07 12:00"), now), "3 days overdue");
    }

    #[test]
    fn urgency_bands() {
        let now = at("2025-01-10 09:00");
        assert_eq!(urgency(at("2025-01-13 09:00"), now), None);
        assert_eq!(urgency(at("2025-01-10 20:00"), now).unwrap().text, "Due within a day");
        assert_eq!(urgency(at("2025-01-10 10:00"), now).unwrap().text, "Due in 2 hours");
        let late = urgency(at("2025-01-10 05:30"), now).unwrap();
        assert_eq!(late.text, "4 hours overdue");
        assert_eq!(late.severity, Severity::Critical);
        assert_eq!(urgency(at("2025-01-07 09:00"), now).unwrap().text, "3 days overdue");
    }
}
