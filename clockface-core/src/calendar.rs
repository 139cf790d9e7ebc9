//! Calendar conversion for the clock view

use core::fmt::Write;

use heapless::String;

const SECONDS_PER_DAY: u32 = 86_400;

/// Broken-down UTC (or offset-adjusted) time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    /// Convert seconds since 1970-01-01T00:00:00
    pub fn from_epoch_seconds(secs: u32) -> Self {
        let days = secs / SECONDS_PER_DAY;
        let rem = secs % SECONDS_PER_DAY;
        let (year, month, day) = civil_from_days(days);

        Self {
            year,
            month,
            day,
            hour: (rem / 3600) as u8,
            minute: (rem % 3600 / 60) as u8,
            second: (rem % 60) as u8,
        }
    }

    /// Convert with a local offset applied, clamped at the epoch
    pub fn from_epoch_with_offset(secs: u32, offset_minutes: i16) -> Self {
        let shifted = secs as i64 + offset_minutes as i64 * 60;
        Self::from_epoch_seconds(shifted.clamp(0, u32::MAX as i64) as u32)
    }

    pub fn same_day(&self, other: &DateTime) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }

    pub fn same_minute(&self, other: &DateTime) -> bool {
        self.same_day(other) && self.hour == other.hour && self.minute == other.minute
    }

    /// `DD.MM.YY`
    pub fn date_string(&self) -> String<8> {
        let mut s = String::new();
        let _ = write!(s, "{:02}.{:02}.{:02}", self.day, self.month, self.year % 100);
        s
    }

    /// `HH:MM:`
    pub fn time_string(&self) -> String<6> {
        let mut s = String::new();
        let _ = write!(s, "{:02}:{:02}:", self.hour, self.minute);
        s
    }

    /// `SS`
    pub fn seconds_string(&self) -> String<2> {
        let mut s = String::new();
        let _ = write!(s, "{:02}", self.second);
        s
    }
}

/// Days since 1970-01-01 to (year, month, day), proleptic Gregorian
fn civil_from_days(days: u32) -> (u16, u8, u8) {
    // Shift the epoch to 0000-03-01 so leap days fall at the end of a year
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}
