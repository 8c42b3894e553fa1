//! Byte sizes and elapsed times with a human readable form.
use std::fmt;
use std::ops::Add;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;
const TB: u64 = GB * 1024;
const PB: u64 = TB * 1024;

const SECOND: u128 = 1000;
const MINUTE: u128 = SECOND * 60;
const HOUR: u128 = MINUTE * 60;
const DAY: u128 = HOUR * 24;

/// A size, in bytes, of some on disk data.
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct ByteSize(pub u64);

impl ByteSize {
    pub fn bytes(&self) -> u64 {
        self.0
    }
}

impl Add for ByteSize {
    type Output = ByteSize;

    fn add(self, other: ByteSize) -> ByteSize {
        ByteSize(self.0.saturating_add(other.0))
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        ByteSize(bytes)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bytes = self.0;
        let (unit, suffix) = match bytes {
            b if b >= PB => (PB, "pb"),
            b if b >= TB => (TB, "tb"),
            b if b >= GB => (GB, "gb"),
            b if b >= MB => (MB, "mb"),
            b if b >= KB => (KB, "kb"),
            _ => return write!(f, "{}b", bytes),
        };
        let value = bytes as f64 / unit as f64;
        write!(f, "{}{}", one_decimal(value), suffix)
    }
}

/// Format a [`Duration`] using the largest unit that fits it.
///
/// For example `1500ms` is formatted as `1.5s` and `120000ms` as `2m`.
pub fn human_duration(time: &Duration) -> String {
    let millis = time.as_millis();
    let (unit, suffix) = match millis {
        m if m >= DAY => (DAY, "d"),
        m if m >= HOUR => (HOUR, "h"),
        m if m >= MINUTE => (MINUTE, "m"),
        m if m >= SECOND => (SECOND, "s"),
        _ => return format!("{}ms", millis),
    };
    let value = millis as f64 / unit as f64;
    format!("{}{}", one_decimal(value), suffix)
}

/// Round to one decimal place and drop a trailing `.0`.
fn one_decimal(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}
