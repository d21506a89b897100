use std::{fmt, str::FromStr};

use crate::{
    constants::{MOON_PATH, NEW_MOON_PATH, SUN_PATH},
    horolong_errors::HoroLongError,
};

/// The quantity a route computes over a date range.
///
/// `NewMoon` is the moon longitude minus the sun longitude, normalized by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    NewMoon,
}

impl Body {
    pub const ALL: [Body; 3] = [Body::Sun, Body::Moon, Body::NewMoon];

    /// Fixed route path, relative to the service base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Body::Sun => SUN_PATH,
            Body::Moon => MOON_PATH,
            Body::NewMoon => NEW_MOON_PATH,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::NewMoon => "new_moon",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = HoroLongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" => Ok(Body::Sun),
            "moon" => Ok(Body::Moon),
            "new_moon" | "new-moon" | "newmoon" => Ok(Body::NewMoon),
            _ => Err(HoroLongError::UnknownBody(s.to_string())),
        }
    }
}
