/// Utilities for date and time formatting
///
/// es-ES uses day-first dates and a 24h clock, en-US month-first and a 12h clock.
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use contracts::enums::Language;

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// 2026-03-05 -> "05/03/2026" (es-ES) or "03/05/2026" (en-US)
pub fn format_date(date: NaiveDate, lang: Language) -> String {
    match lang {
        Language::EsEs => date.format("%d/%m/%Y").to_string(),
        Language::EnUs => date.format("%m/%d/%Y").to_string(),
    }
}

pub fn format_time(time: NaiveTime, lang: Language) -> String {
    match lang {
        Language::EsEs => time.format("%H:%M").to_string(),
        Language::EnUs => time.format("%-I:%M %p").to_string(),
    }
}

pub fn format_datetime(datetime: NaiveDateTime, lang: Language) -> String {
    format!(
        "{} {}",
        format_date(datetime.date(), lang),
        format_time(datetime.time(), lang)
    )
}

pub fn month_name(month: u32, lang: Language) -> &'static str {
    let idx = (month.clamp(1, 12) - 1) as usize;
    match lang {
        Language::EsEs => MONTHS_ES[idx],
        Language::EnUs => MONTHS_EN[idx],
    }
}

/// Month filter code "2026-03" -> "marzo 2026" / "March 2026"
pub fn format_month_code(code: &str, lang: Language) -> String {
    match NaiveDate::parse_from_str(&format!("{code}-01"), "%Y-%m-%d") {
        Ok(date) => format!("{} {}", month_name(date.month(), lang), date.year()),
        Err(_) => code.to_string(),
    }
}

/// Score with the local decimal separator: 7.5 -> "7,5" / "7.5"
pub fn format_score(score: f64, lang: Language) -> String {
    let text = format!("{:.1}", score);
    match lang {
        Language::EsEs => text.replace('.', ","),
        Language::EnUs => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2026, 3, 5), Language::EsEs), "05/03/2026");
        assert_eq!(format_date(date(2026, 3, 5), Language::EnUs), "03/05/2026");
    }

    #[test]
    fn test_format_datetime() {
        let dt = date(2026, 3, 17).and_hms_opt(14, 5, 0).unwrap();
        assert_eq!(format_datetime(dt, Language::EsEs), "17/03/2026 14:05");
        assert_eq!(format_datetime(dt, Language::EnUs), "03/17/2026 2:05 PM");
    }

    #[test]
    fn test_format_month_code() {
        assert_eq!(format_month_code("2026-03", Language::EsEs), "marzo 2026");
        assert_eq!(format_month_code("2026-12", Language::EnUs), "December 2026");
    }

    #[test]
    fn test_invalid_month_code_is_echoed() {
        assert_eq!(format_month_code("invalid", Language::EnUs), "invalid");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(7.26, Language::EsEs), "7,3");
        assert_eq!(format_score(9.0, Language::EnUs), "9.0");
    }
}
