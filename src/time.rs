//! # Time system
//!
//! Julian dates, calendar conversions and Greenwich sidereal time.
//!
//! ## Overview
//! -----------------
//! - [`JulianDate`] keeps the whole Julian day number and the fraction of day apart, which
//!   preserves sub-millisecond resolution over centuries where a single `f64` would not.
//! - [`days_to_mdhms`] splits a TLE epoch (day of year + fraction) into calendar fields.
//! - [`gstime`] (IAU-82 polynomial in UT1 centuries) and [`theta_g_jd`] (1992 Astronomical
//!   Almanac form, split integer/fractional UT) both return the Greenwich mean sidereal
//!   angle. They agree to sub-arcsecond level but are not bit-identical; the ECI → geodetic
//!   path uses the former and the observer geometry uses the latter.
//!
//! ## Leap years
//! -----------------
//! [`days_to_mdhms`] uses `year % 4 == 0`. The century rules are ignored, which is exact
//! for every year between 1901 and 2099, i.e. the whole range a two-digit TLE epoch
//! can express.
use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{
    Minutes, Radian, DAYS_PER_JULIAN_CENTURY, DEG2RAD, DPI, JD, JD_J2000, MINUTES_PER_DAY,
    SECONDS_PER_DAY, SIDEREAL_RATE,
};

/// Upper bound of the month search loop in [`days_to_mdhms`].
///
/// The twelve-entry month table stops the loop first, so this bound never triggers.
pub const MAX_MONTH_ITERATIONS: u32 = 22;

const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const LEAP_MONTH_LENGTHS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// An instant expressed as a Julian day number plus a fraction of day.
///
/// The calendar constructor produces a `day` ending in `.5` (Julian days start at noon)
/// and a `fraction` in `[0, 1)` for valid clock fields. The type does not normalize:
/// callers composing several fractional contributions must do it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianDate {
    pub day: f64,
    pub fraction: f64,
}

impl JulianDate {
    pub fn new(day: f64, fraction: f64) -> Self {
        JulianDate { day, fraction }
    }

    /// Julian date of a Gregorian calendar date and UT clock time.
    ///
    /// Arguments
    /// -----------------
    /// * `year`, `mon`, `day`: calendar date (month 1..=12)
    /// * `hr`, `minute`, `sec`: clock time, seconds may carry a fraction
    ///
    /// Return
    /// ----------
    /// * the [`JulianDate`] split into day number and day fraction.
    ///
    /// Out-of-range fields are not rejected: the formula yields a finite but meaningless
    /// date for them.
    pub fn from_calendar(year: i32, mon: u32, day: u32, hr: u32, minute: u32, sec: f64) -> Self {
        let year = year as f64;
        let mon = mon as f64;

        let jd = 367.0 * year - (7.0 * (year + ((mon + 9.0) / 12.0).floor()) * 0.25).floor()
            + (275.0 * mon / 9.0).floor()
            + day as f64
            + 1721013.5;
        let fr = (sec + minute as f64 * 60.0 + hr as f64 * 3600.0) / SECONDS_PER_DAY;

        JulianDate::new(jd, fr)
    }

    /// Julian date of a [`hifitime::Epoch`], read in the UTC time scale.
    pub fn from_epoch(epoch: &Epoch) -> Self {
        let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
        JulianDate::from_calendar(
            year,
            month as u32,
            day as u32,
            hour as u32,
            minute as u32,
            second as f64 + nanos as f64 * 1e-9,
        )
    }

    /// Convert back into a UTC [`hifitime::Epoch`] (single-`f64` precision).
    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_jde_utc(self.single())
    }

    /// Days elapsed between an absolute Julian date `reference` and this date.
    ///
    /// Used to express the TLE epoch as days since
    /// [`SGP4_JD_REFERENCE`](crate::constants::SGP4_JD_REFERENCE) for the propagator.
    pub fn subtract(&self, reference: JD) -> f64 {
        self.day + self.fraction - reference
    }

    /// Signed difference `self − other` in minutes.
    ///
    /// Day numbers and fractions are differenced separately before scaling.
    pub fn minutes_since(&self, other: &JulianDate) -> Minutes {
        (self.day - other.day) * MINUTES_PER_DAY
            + (self.fraction - other.fraction) * MINUTES_PER_DAY
    }

    /// Collapse into a single Julian date, accepting the precision loss.
    pub fn single(&self) -> JD {
        self.day + self.fraction
    }
}

/// Calendar fields of a day-of-year epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarTime {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// Number of days of `year` under the `year % 4` leap rule.
pub fn days_in_year(year: i32) -> u32 {
    month_lengths(year).iter().sum()
}

fn month_lengths(year: i32) -> &'static [u32; 12] {
    if year % 4 == 0 {
        &LEAP_MONTH_LENGTHS
    } else {
        &MONTH_LENGTHS
    }
}

/// Convert a day of year with fractional day into month, day, hour, minute and second.
///
/// Arguments
/// -----------------
/// * `year`: four-digit year, selects the leap-year month table (`year % 4 == 0`)
/// * `epoch_days`: day of year, 1-based, with the time of day as fraction. Must be
///   at least 1: the calendar fields are unsigned and smaller values saturate to 0.
///   [`parse_tle_with`](crate::tle::parse_tle_with) rejects such epochs beforehand.
///
/// Return
/// ----------
/// * the [`CalendarTime`] of the epoch. Seconds keep the remaining fraction.
///
/// The month search stops once December is reached, so a day of year past the end of
/// the year lands in December with an overflowing day of month instead of indexing out
/// of the month table.
pub fn days_to_mdhms(year: i32, epoch_days: f64) -> CalendarTime {
    let lengths = month_lengths(year);
    let day_of_year = epoch_days.floor();

    let mut month = 1u32;
    let mut elapsed = 0.0;
    while month < MAX_MONTH_ITERATIONS && (month as usize) < lengths.len() {
        let len = lengths[month as usize - 1] as f64;
        if day_of_year <= elapsed + len {
            break;
        }
        elapsed += len;
        month += 1;
    }
    let day = day_of_year - elapsed;

    let mut temp = (epoch_days - day_of_year) * 24.0;
    let hour = temp.floor();
    temp = (temp - hour) * 60.0;
    let minute = temp.floor();
    let second = (temp - minute) * 60.0;

    CalendarTime {
        month,
        day: day as u32,
        hour: hour as u32,
        minute: minute as u32,
        second,
    }
}

/// Greenwich mean sidereal time (IAU-82) of a UT1 Julian date.
///
/// Arguments
/// -----------------
/// * `jdut1`: Julian date in the UT1 time scale
///
/// Return
/// ----------
/// * GMST in radians, in `[0, 2π)`.
pub fn gstime(jdut1: JD) -> Radian {
    let tut1 = (jdut1 - JD_J2000) / DAYS_PER_JULIAN_CENTURY;

    let mut temp = -6.2e-6 * tut1 * tut1 * tut1
        + 0.093104 * tut1 * tut1
        + (876600.0 * 3600.0 + 8640184.812866) * tut1
        + 67310.54841;
    // sidereal seconds → degrees is /240
    temp = (temp * DEG2RAD / 240.0) % DPI;

    if temp < 0.0 {
        temp += DPI;
    }
    temp
}

/// Greenwich mean sidereal time of a calendar date, through [`gstime`].
pub fn gstime_from_date(year: i32, mon: u32, day: u32, hr: u32, min: u32, sec: f64) -> Radian {
    gstime(JulianDate::from_calendar(year, mon, day, hr, min, sec).single())
}

/// Greenwich mean sidereal time from a Julian date (1992 Astronomical Almanac, p. B6).
///
/// The date is split into the Julian date of the previous 0h UT and the UT fraction of
/// day; the polynomial is evaluated at 0h and the Earth rotation during the fraction is
/// added at the sidereal rate.
///
/// Arguments
/// -----------------
/// * `jday`: Julian date (UT)
///
/// Return
/// ----------
/// * GMST in radians, in `[0, 2π)`. The seconds-of-day remainder is negative before
///   J2000.0 and is shifted by one day in that case.
pub fn theta_g_jd(jday: JD) -> Radian {
    let ut = (jday + 0.5).fract();
    let jday = jday - ut;
    let tu = (jday - JD_J2000) / DAYS_PER_JULIAN_CENTURY;

    let mut gmst = 24110.54841 + tu * (8640184.812866 + tu * (0.093104 - tu * 6.2e-6));
    gmst = (gmst + SECONDS_PER_DAY * SIDEREAL_RATE * ut) % SECONDS_PER_DAY;
    if gmst < 0.0 {
        gmst += SECONDS_PER_DAY;
    }

    DPI * gmst / SECONDS_PER_DAY
}
