pub mod body;
pub mod client;
pub mod config;
pub mod constants;
pub mod csv_output;
pub mod date;
pub mod horolong_errors;
pub mod response;
pub mod transport;

pub use body::Body;
pub use client::LongClient;
pub use config::ClientConfig;
pub use date::{DateRangeRequest, DateValue, HoroDateTime};
pub use horolong_errors::{HoroLongError, Result};
pub use response::LongResponser;
