//! Scalar conversions at the automation boundary.
//!
//! Automation servers marshal values as loosely-typed primitives: colors
//! as BGR-packed integers, booleans as `VARIANT_BOOL` (-1/0), dates as
//! fractional days since 1899-12-30. Facade types convert at every
//! property boundary so callers only ever see the semantic types.

use chrono::NaiveDateTime;

/// Days between the OLE epoch (1899-12-30) and the Unix epoch.
const OLE_EPOCH_UNIX_DAYS: f64 = 25_569.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// An sRGB color, converted from/to the OLE BGR integer packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks an OLE color value (0x00BBGGRR).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_ole(raw: i32) -> Self {
        Self {
            r: (raw & 0xFF) as u8,
            g: ((raw >> 8) & 0xFF) as u8,
            b: ((raw >> 16) & 0xFF) as u8,
        }
    }

    /// Packs into an OLE color value (0x00BBGGRR).
    pub const fn to_ole(self) -> i32 {
        ((self.b as i32) << 16) | ((self.g as i32) << 8) | (self.r as i32)
    }
}

/// `VARIANT_BOOL` encoding: all bits set for true.
pub const fn bool_to_variant_bool(value: bool) -> i32 {
    if value {
        -1
    } else {
        0
    }
}

/// Any nonzero `VARIANT_BOOL` reads as true.
pub const fn variant_bool_to_bool(raw: i32) -> bool {
    raw != 0
}

/// The MsoTriState values that matter for formatting properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tristate {
    True,
    False,
    /// A selection spanning mixed formatting.
    Mixed,
}

impl Tristate {
    pub const fn raw(self) -> i32 {
        match self {
            Self::True => -1,
            Self::False => 0,
            Self::Mixed => -2,
        }
    }

    /// Total conversion: unknown nonzero values (e.g. `msoCTrue`) read as
    /// true, matching how the servers coerce them.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            -1 => Self::True,
            0 => Self::False,
            -2 => Self::Mixed,
            _ => Self::True,
        }
    }
}

/// Converts an OLE automation date to a naive UTC datetime. Sub-second
/// precision is rounded away, as the wire format cannot carry it reliably.
#[allow(clippy::cast_possible_truncation)]
pub fn ole_date_to_datetime(ole_date: f64) -> Option<NaiveDateTime> {
    let total_secs = (ole_date - OLE_EPOCH_UNIX_DAYS) * SECONDS_PER_DAY;
    chrono::DateTime::from_timestamp(total_secs.round() as i64, 0).map(|utc| utc.naive_utc())
}

/// Converts a naive UTC datetime to an OLE automation date.
#[allow(clippy::cast_precision_loss)]
pub fn datetime_to_ole_date(datetime: NaiveDateTime) -> f64 {
    datetime.and_utc().timestamp() as f64 / SECONDS_PER_DAY + OLE_EPOCH_UNIX_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    #[test]
    fn ole_color_is_bgr_packed() {
        let red = Rgb::new(0xFF, 0x00, 0x00);
        assert_eq!(red.to_ole(), 0x0000_00FF);
        let blue = Rgb::new(0x00, 0x00, 0xFF);
        assert_eq!(blue.to_ole(), 0x00FF_0000);
        assert_eq!(Rgb::from_ole(0x0000_8000), Rgb::new(0x00, 0x80, 0x00));
    }

    #[test]
    fn ole_color_round_trips() {
        for color in [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(0x12, 0x34, 0x56),
        ] {
            assert_eq!(Rgb::from_ole(color.to_ole()), color);
        }
    }

    #[test]
    fn variant_bool_convention() {
        assert_eq!(bool_to_variant_bool(true), -1);
        assert_eq!(bool_to_variant_bool(false), 0);
        assert!(variant_bool_to_bool(-1));
        assert!(variant_bool_to_bool(1));
        assert!(!variant_bool_to_bool(0));
    }

    #[test]
    fn tristate_round_trips_and_coerces() {
        for state in [Tristate::True, Tristate::False, Tristate::Mixed] {
            assert_eq!(Tristate::from_raw(state.raw()), state);
        }
        // msoCTrue coerces to true.
        assert_eq!(Tristate::from_raw(1), Tristate::True);
    }

    #[test]
    fn ole_date_epoch_alignment() {
        // Day 25569 is the Unix epoch.
        let epoch = ole_date_to_datetime(OLE_EPOCH_UNIX_DAYS).expect("valid date");
        assert_eq!(
            epoch,
            NaiveDate::from_ymd_opt(1970, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn ole_date_round_trips_to_the_second() {
        let datetime: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(13, 45, 30)
            .unwrap();
        let ole = datetime_to_ole_date(datetime);
        assert_eq!(ole_date_to_datetime(ole), Some(datetime));
    }
}
