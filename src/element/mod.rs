//! Hashable Floating Point Elements
//!
//! `f64` is neither `Eq` nor `Hash`, so it cannot be stored in a set
//! directly. [`Float`] and [`Complex`] wrap floating point values with value
//! equality: `0.0` and `-0.0` are the same element, and every NaN payload is
//! the same element.

use core::fmt;
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Bit pattern shared by every NaN
const CANONICAL_NAN: u64 = 0x7ff8_0000_0000_0000;

/// `f64` usable as a set element
///
/// # Example
/// ```rust
/// use setkit::prelude::*;
///
/// let set = new_set([Float::new(0.0), Float::new(-0.0), Float::new(1.5)]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&Float::new(0.0)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Float(pub f64);

impl Float {
    /// Wraps a floating point value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped value
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Bit pattern with both zeros and all NaNs collapsed
    fn canonical_bits(self) -> u64 {
        if self.0.is_nan() {
            CANONICAL_NAN
        } else if self.0 == 0.0 {
            0.0f64.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl From<f64> for Float {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Float> for f64 {
    fn from(value: Float) -> Self {
        value.0
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Complex number usable as a set element
///
/// Two complex numbers are the same element when both parts are, under the
/// rules of [`Float`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Complex {
    re: Float,
    im: Float,
}

impl Complex {
    /// Creates a complex number from its real and imaginary parts
    pub const fn new(re: f64, im: f64) -> Self {
        Self {
            re: Float(re),
            im: Float(im),
        }
    }

    /// Returns the real part
    pub const fn re(self) -> f64 {
        self.re.0
    }

    /// Returns the imaginary part
    pub const fn im(self) -> f64 {
        self.im.0
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im.0)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Float {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Float {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Complex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.re.0, self.im.0).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Complex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <(f64, f64)>::deserialize(deserializer).map(Self::from)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_float_serialization() {
        let json = serde_json::to_string(&Float::new(1.5)).unwrap();
        assert_eq!(json, "1.5");
        let back: Float = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Float::new(1.5));
    }

    #[test]
    fn test_complex_serialization() {
        let json = serde_json::to_string(&Complex::new(1.0, -2.0)).unwrap();
        assert_eq!(json, "[1.0,-2.0]");
        let back: Complex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Complex::new(1.0, -2.0));
    }
}
