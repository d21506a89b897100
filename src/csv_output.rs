use std::io::Write;

use crate::{horolong_errors::Result, response::LongResponser};

/// Write `longs` as CSV with a `date,tz,long` header, one row per sample, in order.
///
/// The date column is the local civil time (`YYYY-MM-DD HH:MM:SS`) of each sample.
pub fn write_csv<W: Write>(writer: W, longs: &[LongResponser]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["date", "tz", "long"])?;
    for sample in longs {
        csv_writer.write_record([
            sample.date.local().to_string(),
            sample.date.tz.to_string(),
            sample.long.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
