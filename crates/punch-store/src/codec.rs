//! CSV record encoding and error mapping shared by the file stores.

use std::io;
use std::path::Path;

use punch_core::StoreError;

/// Encodes rows as CSV bytes, one record per row.
pub fn encode_rows<R, F>(rows: R) -> io::Result<Vec<u8>>
where
    R: IntoIterator<Item = F>,
    F: IntoIterator,
    F::Item: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    writer.into_inner().map_err(|e| e.into_error())
}

/// Maps a CSV error on `path` to a [`StoreError`].
///
/// I/O failures stay I/O failures; everything else means the file content
/// cannot be trusted.
pub fn csv_error(path: &Path, err: csv::Error) -> StoreError {
    let record = err.position().map_or(0, csv::Position::record);
    if err.is_io_error() {
        if let csv::ErrorKind::Io(source) = err.into_kind() {
            return StoreError::io(path, source);
        }
        return StoreError::malformed(path, record, "unexpected i/o error");
    }
    StoreError::malformed(path, record, err.to_string())
}

/// Checks that a parsed header matches `expected` exactly.
pub fn check_header(
    path: &Path,
    headers: &csv::StringRecord,
    expected: &[&str],
) -> Result<(), StoreError> {
    if headers.iter().eq(expected.iter().copied()) {
        Ok(())
    } else {
        Err(StoreError::malformed(
            path,
            0,
            format!(
                "expected header {}, found {}",
                expected.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        ))
    }
}
