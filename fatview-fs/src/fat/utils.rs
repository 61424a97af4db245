// SPDX-License-Identifier: MIT

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::{format, string::String};

use time::{Date, Month, PrimitiveDateTime, Time};

use crate::fat::constant::FAT_EPOCH_YEAR;

/// Wall-clock creation time decoded from the packed word at slot offset
/// 0x0E plus the 10ms-resolution byte at 0x0D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FatTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

/// Calendar date decoded from the packed word at slot offset 0x10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FatDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// Strips the trailing NUL and ASCII-space padding FAT uses in its
/// fixed-width name fields.
pub fn trim_padding(field: &[u8]) -> &[u8] {
    let end = field
        .iter()
        .rposition(|&b| b != b' ' && b != 0)
        .map_or(0, |p| p + 1);
    &field[..end]
}

/// Decode an 8.3 name pair into `NAME.EXT`, without the dot when the
/// extension field is blank.
#[cfg(feature = "alloc")]
pub fn decode_name(name: &[u8; 8], ext: &[u8; 3]) -> String {
    let base = String::from_utf8_lossy(trim_padding(name));
    let ext = String::from_utf8_lossy(trim_padding(ext));
    if ext.is_empty() {
        base.into_owned()
    } else {
        format!("{base}.{ext}")
    }
}

/// Unpacks `hhhhh mmmmmm sssss` (seconds stored in 2s units). The tenth
/// byte counts 10ms and can exceed one second, carrying into the seconds.
pub fn decode_time(raw: u16, tenth: u8) -> FatTime {
    let mut second = ((raw & 0x1F) * 2) as u8;
    let mut millisecond = tenth as u16 * 10;
    if millisecond >= 1000 {
        millisecond -= 1000;
        second += 1;
    }
    FatTime {
        hour: (raw >> 11) as u8,
        minute: ((raw >> 5) & 0x3F) as u8,
        second,
        millisecond,
    }
}

/// Unpacks `yyyyyyy mmmm ddddd`, the year biased against 1980.
pub fn decode_date(raw: u16) -> FatDate {
    FatDate {
        year: ((raw >> 9) & 0x7F) + FAT_EPOCH_YEAR,
        month: ((raw >> 5) & 0x0F) as u8,
        day: (raw & 0x1F) as u8,
    }
}

/// Converts a decoded date/time pair into a calendar datetime, or `None`
/// when the raw fields do not name a real instant (day 0, month 15, an
/// hour past 23...). Zeroed slots fall out naturally as `None`.
pub fn to_datetime(date: FatDate, time: FatTime) -> Option<PrimitiveDateTime> {
    let month = Month::try_from(date.month).ok()?;
    let date = Date::from_calendar_date(date.year as i32, month, date.day).ok()?;
    let time = Time::from_hms_milli(time.hour, time.minute, time.second, time.millisecond).ok()?;
    Some(PrimitiveDateTime::new(date, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_time_word() {
        // 0110 1011 0100 1111 -> 13h, 26m, 15 * 2s
        let t = decode_time(0x6B4F, 0);
        assert_eq!(t.hour, 13);
        assert_eq!(t.minute, 26);
        assert_eq!(t.second, 30);
        assert_eq!(t.millisecond, 0);
    }

    #[test]
    fn test_decode_time_subsecond_carry() {
        // 150 tenth-units = 1500ms: one second carries over.
        let t = decode_time(0x6B4F, 150);
        assert_eq!(t.second, 31);
        assert_eq!(t.millisecond, 500);
    }

    #[test]
    fn test_decode_time_subsecond_no_carry() {
        let t = decode_time(0x6B4F, 99);
        assert_eq!(t.second, 30);
        assert_eq!(t.millisecond, 990);
    }

    #[test]
    fn test_decode_date_word() {
        let d = decode_date((30 << 9) | (6 << 5) | 15);
        assert_eq!(d.year, 2010);
        assert_eq!(d.month, 6);
        assert_eq!(d.day, 15);
    }

    #[test]
    fn test_decode_date_epoch() {
        let d = decode_date((0 << 9) | (1 << 5) | 1);
        assert_eq!(d.year, 1980);
        assert_eq!(d.month, 1);
        assert_eq!(d.day, 1);
    }

    #[test]
    fn test_to_datetime() {
        let dt = to_datetime(
            decode_date((30 << 9) | (6 << 5) | 15),
            decode_time(0x6B4F, 150),
        )
        .unwrap();
        assert_eq!(dt.year(), 2010);
        assert_eq!(dt.month(), Month::June);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 13);
        assert_eq!(dt.minute(), 26);
        assert_eq!(dt.second(), 31);
        assert_eq!(dt.millisecond(), 500);
    }

    #[test]
    fn test_to_datetime_rejects_impossible_fields() {
        // Day 0 and month 0 come out of a zeroed slot.
        assert!(to_datetime(decode_date(0), decode_time(0, 0)).is_none());
        // Month 15 is expressible in 4 bits but is no month.
        assert!(
            to_datetime(
                FatDate {
                    year: 2000,
                    month: 15,
                    day: 1
                },
                decode_time(0, 0)
            )
            .is_none()
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_trim_padding() {
        assert_eq!(trim_padding(b"NAME    "), b"NAME");
        assert_eq!(trim_padding(b"AB\0\0"), b"AB");
        assert_eq!(trim_padding(b"A B "), b"A B");
        assert_eq!(trim_padding(b"        "), b"");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_decode_name() {
        assert_eq!(decode_name(b"HELLO   ", b"TXT"), "HELLO.TXT");
        assert_eq!(decode_name(b"KERNEL  ", b"   "), "KERNEL");
    }
}
