//! Opaque user record identifier.
//!
//! ## Generated id format
//!
//! Ids minted locally by [`RecordId::generate`] are exactly
//! [`GENERATED_ID_LENGTH`] (24) lowercase hex characters:
//!
//! ```text
//! tttttttttttttt rrrrrrrrrr
//! |            | |        |
//! |            | +--------+-- 40 random bits (10 hex digits)
//! +------------+------------- monotonic microsecond tick (14 hex digits)
//! ```
//!
//! The tick is strictly increasing within a process, so two ids generated by
//! the same process never collide, however fast they are requested. Across
//! processes a collision needs the same tick AND the same 40 random bits.
//! That probability is negligible but NOT zero, and nothing here removes it.
//!
//! Ids coming back from a database backend may use a different format. Callers
//! must treat every id as an opaque string.

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use error_location::ErrorLocation;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hex digits used by the tick component of a generated id
pub const TICK_WIDTH: usize = 14;

/// Hex digits used by the random component of a generated id
pub const RANDOM_WIDTH: usize = 10;

/// Total length of a generated id
pub const GENERATED_ID_LENGTH: usize = TICK_WIDTH + RANDOM_WIDTH;

const RANDOM_MASK: u64 = (1 << (RANDOM_WIDTH * 4)) - 1;

/// Last tick handed out in this process. Shared by every generator.
static LAST_TICK: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an existing id. Empty or whitespace-containing ids are rejected.
    #[track_caller]
    pub fn new(value: impl Into<String>) -> CoreErrorResult<Self> {
        let value = value.into();

        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidRecordId {
                value,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value))
    }

    /// Mint a new id without consulting any sequence authority.
    pub fn generate() -> Self {
        let tick = next_tick();
        let random = rand::rng().random::<u64>() & RANDOM_MASK;

        Self(format!(
            "{tick:0tick_width$x}{random:0random_width$x}",
            tick_width = TICK_WIDTH,
            random_width = RANDOM_WIDTH,
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strictly increasing microsecond tick: wall clock when it moves forward,
/// previous tick + 1 when it doesn't.
fn next_tick() -> u64 {
    let now = Utc::now().timestamp_micros().max(0) as u64;

    let previous = match LAST_TICK.fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
        Some(now.max(last + 1))
    }) {
        Ok(previous) | Err(previous) => previous,
    };

    now.max(previous + 1)
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id.simple().to_string())
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::new(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
