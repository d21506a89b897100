//! # Constants for horolong
//!
//! Service defaults, route paths and calendar bounds shared by the client, the
//! configuration layer and the CLI.

use std::time::Duration;

// -------------------------------------------------------------------------------------------------
// Service defaults
// -------------------------------------------------------------------------------------------------

/// Base URL of a locally running longitude service (routes are mounted under `/api`)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api";

/// Global timeout applied to every HTTP request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Time zone the service assumes when it reads a [`DateRangeRequest`](crate::date::DateRangeRequest)
pub const SERVICE_TIME_ZONE: f64 = 8.0;

// -------------------------------------------------------------------------------------------------
// Routes
// -------------------------------------------------------------------------------------------------

pub const SUN_PATH: &str = "/sun";
pub const MOON_PATH: &str = "/moon";
pub const NEW_MOON_PATH: &str = "/new_moon";

// -------------------------------------------------------------------------------------------------
// Calendar bounds
// -------------------------------------------------------------------------------------------------

/// Smallest year accepted by the service
pub const MIN_YEAR: i32 = 1900;

/// Time zone offsets are expressed in hours, east positive
pub const MAX_TIME_ZONE: f64 = 12.0;

/// Full turn in degrees
pub const FULL_CIRCLE: f64 = 360.0;

// -------------------------------------------------------------------------------------------------
// Environment variables read by [`ClientConfig::from_env`](crate::config::ClientConfig::from_env)
// -------------------------------------------------------------------------------------------------

pub const ENV_BASE_URL: &str = "HOROLONG_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "HOROLONG_TIMEOUT_SECS";
pub const ENV_VALIDATE: &str = "HOROLONG_VALIDATE";
