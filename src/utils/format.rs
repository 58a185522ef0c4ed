// ============================================================================
// FORMATO DE FECHAS - Locale id-ID
// ============================================================================

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Utc};

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

/// WIB (UTC+7)
const WIB_OFFSET_SECONDS: i32 = 7 * 3600;

fn month_name(date: &NaiveDate) -> &'static str {
    MONTHS_ID[date.month0() as usize]
}

/// `15 Agustus 2025`
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(&date), date.year())
}

/// Rango compacto para competiciones y cursos:
/// `15 - 17 Agustus 2025`, `30 Agustus - 2 September 2025`,
/// `30 Desember 2025 - 2 Januari 2026`
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let end = match end {
        Some(end) if end > start => end,
        _ => return format_date(start),
    };

    if start.year() != end.year() {
        format!("{} - {}", format_date(start), format_date(end))
    } else if start.month() != end.month() {
        format!("{} {} - {}", start.day(), month_name(&start), format_date(end))
    } else {
        format!("{} - {}", start.day(), format_date(end))
    }
}

/// Fecha de publicación en hora de Jakarta: `15 Agustus 2025, 17:05 WIB`
pub fn format_published(at: DateTime<Utc>) -> String {
    let local = match FixedOffset::east_opt(WIB_OFFSET_SECONDS) {
        Some(offset) => at.with_timezone(&offset).naive_local(),
        None => at.naive_utc(),
    };
    format!(
        "{}, {:02}:{:02} WIB",
        format_date(local.date()),
        local.hour(),
        local.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_single_dates_in_indonesian() {
        assert_eq!(format_date(date(2025, 8, 15)), "15 Agustus 2025");
        assert_eq!(format_date(date(2024, 1, 1)), "1 Januari 2024");
    }

    #[test]
    fn collapses_ranges_within_the_same_month() {
        assert_eq!(
            format_date_range(date(2025, 8, 15), Some(date(2025, 8, 17))),
            "15 - 17 Agustus 2025"
        );
    }

    #[test]
    fn keeps_both_months_when_range_crosses_month_or_year() {
        assert_eq!(
            format_date_range(date(2025, 8, 30), Some(date(2025, 9, 2))),
            "30 Agustus - 2 September 2025"
        );
        assert_eq!(
            format_date_range(date(2025, 12, 30), Some(date(2026, 1, 2))),
            "30 Desember 2025 - 2 Januari 2026"
        );
    }

    #[test]
    fn missing_or_inverted_end_prints_start_only() {
        assert_eq!(format_date_range(date(2025, 8, 15), None), "15 Agustus 2025");
        assert_eq!(
            format_date_range(date(2025, 8, 15), Some(date(2025, 8, 1))),
            "15 Agustus 2025"
        );
    }

    #[test]
    fn published_time_is_shown_in_wib() {
        let at = Utc.with_ymd_and_hms(2025, 8, 15, 10, 5, 0).unwrap();
        assert_eq!(format_published(at), "15 Agustus 2025, 17:05 WIB");

        let late = Utc.with_ymd_and_hms(2025, 8, 15, 20, 0, 0).unwrap();
        assert_eq!(format_published(late), "16 Agustus 2025, 03:00 WIB");
    }
}
