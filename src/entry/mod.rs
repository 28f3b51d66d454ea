//! The 4-digit `mm:ss` entry buffer.
//!
//! Digits are typed in from the right, shifting the buffer left and dropping
//! the oldest digit, the way a microwave keypad behaves. The buffer holds
//! raw keypad input, so a seconds field above 59 is representable until
//! [`TimeEntry::validate`] clamps it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod error;

pub use error::EntryError;

/// Number of digits in the buffer.
pub const ENTRY_LEN: usize = 4;

/// Largest value a buffer can hold once validated: 99:59.
pub const MAX_TOTAL_SECONDS: u32 = 99 * 60 + 59;

/// A single keypad digit, `0..=9`.
///
/// # Example
///
/// ```rust
/// use microwave::entry::{Digit, EntryError};
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(Digit::try_from('x'), Err(EntryError::InvalidArgument('x')));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(u8);

impl Digit {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = EntryError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or(EntryError::InvalidArgument(c))
    }
}

impl From<Digit> for char {
    fn from(d: Digit) -> char {
        d.as_char()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Keypad buffer `[M1, M2, S1, S2]`.
///
/// `Display` prints the raw digits (`"0130"`); [`TimeEntry::display`]
/// renders the panel text (`"01:30"`).
///
/// # Example
///
/// ```rust
/// use microwave::entry::TimeEntry;
///
/// let mut entry = TimeEntry::new();
/// for d in ['1', '2', '9', '9'] {
///     entry.push_digit(d).unwrap();
/// }
/// assert_eq!(entry.display(), "12:99");
///
/// entry.validate();
/// assert_eq!(entry.display(), "12:59");
/// assert_eq!(entry.total_seconds(), 12 * 60 + 59);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeEntry {
    digits: [u8; ENTRY_LEN],
}

impl TimeEntry {
    /// Create a zeroed entry (`"0000"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a keypad character, shifting the buffer left.
    ///
    /// Returns [`EntryError::InvalidArgument`] for anything outside
    /// `'0'..='9'`; the buffer is left untouched in that case.
    pub fn push_digit(&mut self, d: char) -> Result<(), EntryError> {
        let digit = Digit::try_from(d)?;
        self.push(digit);
        Ok(())
    }

    /// Push an already validated digit.
    pub fn push(&mut self, digit: Digit) {
        self.digits.rotate_left(1);
        self.digits[ENTRY_LEN - 1] = digit.value();
    }

    /// Reset to `"0000"`.
    pub fn clear(&mut self) {
        self.digits = [0; ENTRY_LEN];
    }

    pub fn minutes(&self) -> u32 {
        u32::from(self.digits[0]) * 10 + u32::from(self.digits[1])
    }

    pub fn seconds(&self) -> u32 {
        u32::from(self.digits[2]) * 10 + u32::from(self.digits[3])
    }

    /// `mm * 60 + ss`, read from the raw digits.
    pub fn total_seconds(&self) -> u32 {
        self.minutes() * 60 + self.seconds()
    }

    /// Write `n` seconds back as `mm:ss`, saturating at 99:59.
    pub fn set_total_seconds(&mut self, n: u32) {
        let n = n.min(MAX_TOTAL_SECONDS);
        let (mins, secs) = (n / 60, n % 60);
        self.digits = [
            (mins / 10) as u8,
            (mins % 10) as u8,
            (secs / 10) as u8,
            (secs % 10) as u8,
        ];
    }

    /// Clamp the seconds field to 59.
    ///
    /// Keypad overflow such as `12:99` cooks for 12:59 rather than being
    /// rejected or wrapped. Idempotent.
    pub fn validate(&mut self) {
        if self.seconds() > 59 {
            self.digits[2] = 5;
            self.digits[3] = 9;
        }
    }

    /// Validated copy, leaving `self` untouched.
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Panel text, `"MM:SS"`.
    pub fn display(&self) -> String {
        let [m1, m2, s1, s2] = self.digits;
        format!("{m1}{m2}:{s1}{s2}")
    }
}

impl fmt::Display for TimeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for TimeEntry {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != ENTRY_LEN {
            return Err(EntryError::InvalidLength(count));
        }

        let mut entry = TimeEntry::new();
        for c in s.chars() {
            entry.push_digit(c)?;
        }
        Ok(entry)
    }
}

impl TryFrom<String> for TimeEntry {
    type Error = EntryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeEntry> for String {
    fn from(entry: TimeEntry) -> String {
        entry.to_string()
    }
}
