//! Asynchronous delimited table loading.

use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use std::path::Path;
use tokio::io::AsyncRead;

use crate::ReadError;

/// A rectangular-ish table of string cells, one `Vec` per row.
pub type Table = Vec<Vec<String>>;

/// Reads a comma-separated file into a table of cells.
///
/// No header handling is applied: the first line is returned as row 0 and the
/// readers decide whether to skip it. Rows may have differing widths.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid delimited text.
pub async fn read_table(path: impl AsRef<Path>) -> Result<Table, ReadError> {
    let file = tokio::fs::File::open(path.as_ref()).await?;
    read_table_from(file).await
}

/// Reads comma-separated text from any async reader into a table of cells.
///
/// # Errors
///
/// Returns an error if the input is not valid delimited text.
pub async fn read_table_from<R>(reader: R) -> Result<Table, ReadError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut csv = AsyncReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .create_reader(reader);

    let mut rows = Vec::new();
    let mut records = csv.records();
    while let Some(record) = records.next().await {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}
