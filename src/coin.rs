//! Coin faces and rotation axis directions.
//!
//! Both types carry the integer encoding used by the configuration surface
//! (`1`/`-1` for faces, `-1`/`0`/`1` for directions) and validate it on the
//! way in.

use std::fmt;

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TossError;

/// One side of the coin. Also used as the toss outcome.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    /// Heads. Encoded as `1`.
    #[default]
    Front,
    /// Tails. Encoded as `-1`.
    Reverse,
}

impl Face {
    /// The other side of the coin.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Reverse,
            Self::Reverse => Self::Front,
        }
    }

    /// Signed encoding: `1` for front, `-1` for reverse.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Front => 1,
            Self::Reverse => -1,
        }
    }

    /// Fair draw over both faces.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Front
        } else {
            Self::Reverse
        }
    }
}

impl TryFrom<i32> for Face {
    type Error = TossError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Front),
            -1 => Ok(Self::Reverse),
            other => Err(TossError::InvalidOutcome(other)),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => f.write_str("front"),
            Self::Reverse => f.write_str("reverse"),
        }
    }
}

/// Rotation sense around one axis.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AxisDirection {
    /// Rotate with negative degrees. Encoded as `-1`.
    Negative,
    /// No rotation around this axis. Encoded as `0`.
    #[default]
    None,
    /// Rotate with positive degrees. Encoded as `1`.
    Positive,
}

impl AxisDirection {
    /// Parse a signed direction for the named axis.
    ///
    /// Anything with a magnitude above one is rejected.
    pub fn parse(axis: &'static str, value: i32) -> Result<Self, TossError> {
        match value {
            -1 => Ok(Self::Negative),
            0 => Ok(Self::None),
            1 => Ok(Self::Positive),
            other => {
                Err(TossError::InvalidAxisDirection { axis, value: other })
            }
        }
    }

    /// Multiplier applied to the rotation angle.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Negative => -1.0,
            Self::None => 0.0,
            Self::Positive => 1.0,
        }
    }
}
