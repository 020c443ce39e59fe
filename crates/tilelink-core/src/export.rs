use crate::error::{LinkerError, Result};
use crate::prereq::PREREQUISITES_COLUMN;
use crate::table::{TileId, TileTable};
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

/// Writes the table back out with every field quoted, overwriting (or
/// appending) the prerequisites column from the given per-tile map.
/// Rows without an entry keep their pre-existing cell value.
pub fn write_prerequisites<W: io::Write>(
    writer: W,
    table: &TileTable,
    id_column: &str,
    prereqs: &BTreeMap<TileId, String>,
) -> Result<()> {
    let id_idx = table
        .column_index(id_column)
        .ok_or_else(|| LinkerError::MissingColumn(id_column.to_string()))?;

    let mut headers: Vec<String> = table.headers().to_vec();
    let prereq_idx = match headers.iter().position(|h| h == PREREQUISITES_COLUMN) {
        Some(idx) => idx,
        None => {
            headers.push(PREREQUISITES_COLUMN.to_string());
            headers.len() - 1
        }
    };

    let mut out = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);
    out.write_record(&headers)
        .map_err(|e| LinkerError::CsvWrite(e.to_string()))?;

    for record in table.records() {
        let mut row = record.clone();
        row.resize(headers.len(), String::new());
        let id = TileId::new(&row[id_idx]);
        if let Some(encoded) = prereqs.get(&id) {
            row[prereq_idx] = encoded.clone();
        }
        out.write_record(&row)
            .map_err(|e| LinkerError::CsvWrite(e.to_string()))?;
    }

    out.flush()
        .map_err(|e| LinkerError::FileWriteError(e.to_string()))?;
    Ok(())
}

pub fn export_csv(
    path: &Path,
    table: &TileTable,
    id_column: &str,
    prereqs: &BTreeMap<TileId, String>,
) -> Result<()> {
    let file = File::create(path).map_err(|e| LinkerError::FileWriteError(e.to_string()))?;
    write_prerequisites(file, table, id_column, prereqs)
}
