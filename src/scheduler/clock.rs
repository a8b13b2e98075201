use chrono::NaiveTime;

/// Minutes from midnight.
pub type Minute = u32;

pub const DAY_START: Minute = 9 * 60;
pub const DAY_END: Minute = 18 * 60;
pub const LUNCH_START: Minute = 12 * 60 + 30;
pub const LUNCH_DURATION: Minute = 45;
pub const ASSESSMENT_START: Minute = 16 * 60;
pub const ASSESSMENT_WINDOW: Minute = DAY_END - ASSESSMENT_START;
pub const MIN_SESSION: Minute = 15;

/// Length of the teaching day, 09:00 to 18:00.
pub const DAY_LENGTH: Minute = DAY_END - DAY_START;

fn to_time(minute: Minute) -> NaiveTime {
    let minute = minute % (24 * 60);
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Formats a minute as `HH:MMhrs`, e.g. `09:00hrs`.
pub fn format_hrs(minute: Minute) -> String {
    to_time(minute).format("%H:%Mhrs").to_string()
}

/// Formats a minute as `H:MM AM/PM`, e.g. `1:15 PM`.
pub fn format_12h(minute: Minute) -> String {
    to_time(minute).format("%-I:%M %p").to_string()
}

pub fn format_timing(start: Minute, end: Minute) -> String {
    format!("{} - {}", format_12h(start), format_12h(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hrs() {
        assert_eq!(format_hrs(DAY_START), "09:00hrs");
        assert_eq!(format_hrs(LUNCH_START), "12:30hrs");
        assert_eq!(format_hrs(DAY_END), "18:00hrs");
    }

    #[test]
    fn test_format_12h() {
        assert_eq!(format_12h(DAY_START), "9:00 AM");
        assert_eq!(format_12h(12 * 60), "12:00 PM");
        assert_eq!(format_12h(LUNCH_START + LUNCH_DURATION), "1:15 PM");
        assert_eq!(format_12h(DAY_END), "6:00 PM");
    }

    #[test]
    fn test_format_timing() {
        assert_eq!(format_timing(DAY_START, 11 * 60 + 20), "9:00 AM - 11:20 AM");
    }

    #[test]
    fn test_window_constants() {
        assert_eq!(DAY_LENGTH, 540);
        assert_eq!(ASSESSMENT_WINDOW, 120);
    }
}
