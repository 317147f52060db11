use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Clock abstracts access to the current date so aggregations remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current local date. Defaults to `now().date()`.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in the machine's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one date, used for `--today` overrides and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

const DATE_TIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the timestamp shapes the ledger endpoints emit. Offsets are dropped
/// after parsing so the wall-clock time the server reported is kept.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Language used for generated display labels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LabelLocale {
    #[default]
    Ko,
    En,
}

impl LabelLocale {
    /// Maps a language tag such as `ko-KR` or `en-US`; unknown tags fall back to Korean.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("en") {
            LabelLocale::En
        } else {
            LabelLocale::Ko
        }
    }

    pub fn today(self) -> &'static str {
        match self {
            LabelLocale::Ko => "오늘",
            LabelLocale::En => "Today",
        }
    }

    pub fn yesterday(self) -> &'static str {
        match self {
            LabelLocale::Ko => "어제",
            LabelLocale::En => "Yesterday",
        }
    }

    /// Sub-label used when a transaction has neither category nor memo.
    pub fn other(self) -> &'static str {
        match self {
            LabelLocale::Ko => "기타",
            LabelLocale::En => "Other",
        }
    }

    pub fn weekday(self, weekday: Weekday) -> &'static str {
        match (self, weekday) {
            (LabelLocale::Ko, Weekday::Mon) => "월요일",
            (LabelLocale::Ko, Weekday::Tue) => "화요일",
            (LabelLocale::Ko, Weekday::Wed) => "수요일",
            (LabelLocale::Ko, Weekday::Thu) => "목요일",
            (LabelLocale::Ko, Weekday::Fri) => "금요일",
            (LabelLocale::Ko, Weekday::Sat) => "토요일",
            (LabelLocale::Ko, Weekday::Sun) => "일요일",
            (LabelLocale::En, Weekday::Mon) => "Monday",
            (LabelLocale::En, Weekday::Tue) => "Tuesday",
            (LabelLocale::En, Weekday::Wed) => "Wednesday",
            (LabelLocale::En, Weekday::Thu) => "Thursday",
            (LabelLocale::En, Weekday::Fri) => "Friday",
            (LabelLocale::En, Weekday::Sat) => "Saturday",
            (LabelLocale::En, Weekday::Sun) => "Sunday",
        }
    }
}

/// "today" / "yesterday" / weekday name of `date`, relative to `today`.
pub fn day_label(date: NaiveDate, today: NaiveDate, locale: LabelLocale) -> String {
    if date == today {
        locale.today().to_string()
    } else if date == today - Duration::days(1) {
        locale.yesterday().to_string()
    } else {
        locale.weekday(date.weekday()).to_string()
    }
}
