use rand::Rng;
use serde::de::IgnoredAny;
use serde::Deserialize;

/// How a [`ValueRange`] came to hold its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeOrigin {
    /// A bare integer, `3`
    Scalar,
    /// An object `{"min": 1, "max": 3}` or a pair `[1, 3]`
    Bounds,
    /// The field was not present
    #[default]
    Absent,
    /// The field was present but could not be read; the range fell back to zero
    Malformed,
}

/// Closed integer interval rolled for counts, levels and pool repetitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "RawRange")]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
    origin: RangeOrigin,
}

/// Accepted authoring forms, tried in order
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRange {
    Scalar(i32),
    Pair([i32; 2]),
    Bounds {
        #[serde(default)]
        min: i32,
        #[serde(default)]
        max: i32,
    },
    Other(IgnoredAny),
}

impl From<RawRange> for ValueRange {
    fn from(raw: RawRange) -> Self {
        match raw {
            RawRange::Scalar(n) => ValueRange {
                min: n,
                max: n,
                origin: RangeOrigin::Scalar,
            },
            RawRange::Pair([min, max]) | RawRange::Bounds { min, max } => ValueRange {
                min,
                max,
                origin: RangeOrigin::Bounds,
            },
            RawRange::Other(_) => {
                log::warn!("Unreadable value range, defaulting to 0");
                ValueRange {
                    min: 0,
                    max: 0,
                    origin: RangeOrigin::Malformed,
                }
            }
        }
    }
}

impl ValueRange {
    pub fn new(min: i32, max: i32) -> Self {
        ValueRange {
            min,
            max,
            origin: RangeOrigin::Bounds,
        }
    }

    /// A range that always rolls `value`
    pub fn fixed(value: i32) -> Self {
        ValueRange {
            min: value,
            max: value,
            origin: RangeOrigin::Scalar,
        }
    }

    pub fn origin(&self) -> RangeOrigin {
        self.origin
    }

    /// True when the value was not authored, or could not be read
    pub fn is_defaulted(&self) -> bool {
        matches!(self.origin, RangeOrigin::Absent | RangeOrigin::Malformed)
    }

    /// Whether rolling always yields `min`
    pub fn is_fixed(&self) -> bool {
        self.max <= self.min
    }

    /// Roll a value uniformly from `[min, max]`.
    ///
    /// Degenerate ranges (`max <= min`) return `min` without touching the rng.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> i32 {
        if self.is_fixed() {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}
