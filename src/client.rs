//! # Longitude client
//!
//! [`LongClient`] binds the three routes of the longitude service:
//!
//! | Method                              | Route       | Quantity                          |
//! |-------------------------------------|-------------|-----------------------------------|
//! | [`sun_long`](LongClient::sun_long)           | `/sun`      | ecliptic longitude of the Sun     |
//! | [`moon_long`](LongClient::moon_long)         | `/moon`     | ecliptic longitude of the Moon    |
//! | [`new_moon_long`](LongClient::new_moon_long) | `/new_moon` | Moon minus Sun longitude          |
//!
//! Each call sends exactly one POST whose body is the serialized [`DateRangeRequest`], and
//! resolves to the samples in the order the server produced them. Transport failures,
//! non-success statuses and malformed bodies are returned as-is; nothing is retried.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use horolong::{client::LongClient, config::ClientConfig, date::{DateRangeRequest, DateValue}};
//!
//! # async fn run() -> horolong::horolong_errors::Result<()> {
//! let client = LongClient::new(&ClientConfig::default())?;
//! let request = DateRangeRequest::new(
//!     DateValue::new(2024, 1, 1, 0, 0, 0),
//!     DateValue::new(2024, 1, 2, 0, 0, 0),
//! );
//! for sample in client.sun_long(&request).await? {
//!     println!("{} {}", sample.date, sample.long);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Calls share no state besides the connection pool of the transport: several requests can
//! be in flight at once and complete in any order.

use tracing::debug;

use crate::{
    body::Body,
    config::ClientConfig,
    date::DateRangeRequest,
    horolong_errors::{HoroLongError, Result},
    response::LongResponser,
    transport::{ReqwestTransport, Transport},
};

#[derive(Debug, Clone)]
pub struct LongClient<T = ReqwestTransport> {
    transport: T,
    validate_requests: bool,
}

impl LongClient<ReqwestTransport> {
    /// Construct a client talking HTTP to the service described by `config`.
    ///
    /// Arguments
    /// -----------------
    /// * `config`: base URL, timeout and validation flag.
    ///
    /// Return
    /// ----------
    /// * A new [`LongClient`], or an error if the configuration is unusable.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(LongClient {
            transport: ReqwestTransport::new(config)?,
            validate_requests: config.validate_requests,
        })
    }
}

impl<T: Transport> LongClient<T> {
    pub fn with_transport(transport: T, validate_requests: bool) -> Self {
        LongClient {
            transport,
            validate_requests,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sun ecliptic longitude over `request` (POST `/sun`).
    pub async fn sun_long(&self, request: &DateRangeRequest) -> Result<Vec<LongResponser>> {
        self.longitudes(Body::Sun, request).await
    }

    /// Moon ecliptic longitude over `request` (POST `/moon`).
    pub async fn moon_long(&self, request: &DateRangeRequest) -> Result<Vec<LongResponser>> {
        self.longitudes(Body::Moon, request).await
    }

    /// Moon minus Sun longitude over `request` (POST `/new_moon`).
    pub async fn new_moon_long(&self, request: &DateRangeRequest) -> Result<Vec<LongResponser>> {
        self.longitudes(Body::NewMoon, request).await
    }

    /// Post `request` to the route of `body` and decode the answer.
    ///
    /// Arguments
    /// -----------------
    /// * `body`: selects the route.
    /// * `request`: sent unchanged, unless local validation is enabled and rejects it,
    ///   in which case nothing is sent.
    ///
    /// Return
    /// ----------
    /// * The samples in server order, or:
    ///   - [`HoroLongError::Transport`] when the request could not be completed,
    ///   - [`HoroLongError::Status`] with the raw body when the status is not 2xx,
    ///   - [`HoroLongError::Deserialize`] when the body is not an array of [`LongResponser`].
    pub async fn longitudes(
        &self,
        body: Body,
        request: &DateRangeRequest,
    ) -> Result<Vec<LongResponser>> {
        if self.validate_requests {
            request.validate()?;
        }

        let payload = serde_json::to_value(request)?;
        debug!(route = body.path(), start = %request.start, end = %request.end, "requesting longitudes");

        let response = self.transport.post_json(body.path(), &payload).await?;
        if !response.is_success() {
            return Err(HoroLongError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let longs: Vec<LongResponser> = serde_json::from_str(&response.body)?;
        debug!(route = body.path(), count = longs.len(), "received longitudes");
        Ok(longs)
    }
}
