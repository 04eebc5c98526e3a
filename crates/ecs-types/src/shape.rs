//! Scalar wrappers and rendering shared by every model shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Renders a shape as `{name: value,name: value}` using its wire field names.
///
/// Absent fields never reach the serialized form, so they are omitted here
/// too. Lists render as `[a, b]`, nested shapes recurse. A shape that cannot
/// be serialized, such as one holding a non-finite [`Double`], falls back to
/// its `Debug` form.
pub(crate) fn write_shape<T: Serialize + fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    shape: &T,
) -> fmt::Result {
    match serde_json::to_value(shape) {
        Ok(value) => write_value(f, &value),
        Err(_) => write!(f, "{:?}", shape),
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(flag) => write!(f, "{}", flag),
        Value::Number(number) => write!(f, "{}", number),
        Value::String(text) => f.write_str(text),
        Value::Array(items) => {
            f.write_str("[")?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write_value(f, item)?;
            }
            f.write_str("]")
        }
        Value::Object(fields) => {
            f.write_str("{")?;
            for (index, (name, item)) in fields.iter().enumerate() {
                if index > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}: ", name)?;
                write_value(f, item)?;
            }
            f.write_str("}")
        }
    }
}

/// A point in time as exchanged with the service.
///
/// On the wire this is a number of seconds since the Unix epoch, possibly
/// fractional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Build from epoch seconds, keeping microsecond precision. Returns `None`
    /// for non-finite or out of range input.
    pub fn from_epoch_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let whole = seconds.floor();
        let mut secs = whole as i64;
        let mut micros = ((seconds - whole) * 1e6).round() as u32;
        if micros >= 1_000_000 {
            secs = secs.checked_add(1)?;
            micros = 0;
        }
        DateTime::from_timestamp(secs, micros * 1_000).map(Self)
    }

    /// Seconds since the Unix epoch, with sub-second precision.
    pub fn epoch_seconds(&self) -> f64 {
        self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_nanos()) / 1e9
    }

    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.timestamp_subsec_nanos() == 0 {
            serializer.serialize_i64(self.0.timestamp())
        } else {
            serializer.serialize_f64(self.epoch_seconds())
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        Self::from_epoch_seconds(seconds).ok_or_else(|| {
            serde::de::Error::custom(format!("timestamp out of range: {}", seconds))
        })
    }
}

/// A double-precision value with bitwise equality and hashing.
///
/// Two values are equal when their IEEE-754 bit patterns are equal, which
/// makes `NaN == NaN` and `0.0 != -0.0`. Shapes holding doubles keep
/// structural `Eq` and `Hash` that way.
///
/// JSON has no representation for `NaN` or the infinities, so serializing a
/// non-finite value is an error rather than a `null` on the wire.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(transparent)]
pub struct Double(pub f64);

impl Serialize for Double {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            return Err(serde::ser::Error::custom(format!("non-finite double: {}", self.0)));
        }
        serializer.serialize_f64(self.0)
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Double {}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Double> for f64 {
    fn from(value: Double) -> Self {
        value.0
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
