use crate::error::{LinkerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

/// Tile identifier, taken verbatim from the mapped id column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(Arc<str>);

impl TileId {
    pub fn new<S>(s: S) -> Self
    where
        S: AsRef<str>,
    {
        TileId(Arc::from(s.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for TileId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TileId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TileId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TileId(Arc::from(s)))
    }
}

/// Which CSV headers hold which tile fields. Id, top, and left are
/// required; the rest are optional refinements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub id: String,
    pub top: String,
    pub left: String,
    pub width: Option<String>,
    pub height: Option<String>,
    pub description: Option<String>,
}

impl ColumnMap {
    pub fn required(id: &str, top: &str, left: &str) -> Self {
        Self {
            id: id.to_string(),
            top: top.to_string(),
            left: left.to_string(),
            width: None,
            height: None,
            description: None,
        }
    }
}

/// One resolved tile row: verbatim id plus coerced coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: TileId,
    /// Index of the backing record after unparseable rows were dropped.
    pub row: usize,
    pub top: f64,
    pub left: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Outcome of applying a [`ColumnMap`] to a [`TileTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub tiles: Vec<Tile>,
    pub start_tiles: BTreeSet<TileId>,
    pub dropped_rows: usize,
    /// True when both a width and a height column resolved, in which
    /// case tile centers are computed from the top-left corner.
    pub use_centering: bool,
}

/// Raw CSV contents. Headers and surviving records are kept verbatim
/// so the export can round-trip untouched cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileTable {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

fn parse_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

impl TileTable {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LinkerError::FileNotFound(path.to_path_buf()));
        }
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| LinkerError::CsvRead(e.to_string()))?;
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| LinkerError::CsvRead(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| LinkerError::CsvRead(e.to_string()))?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            // Short rows are padded so every record indexes like the header.
            row.resize(headers.len(), String::new());
            records.push(row);
        }

        Ok(Self { headers, records })
    }

    pub fn from_rows(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| LinkerError::MissingColumn(name.to_string()))
    }

    /// Resolves the mapping against this table. Rows whose top or left
    /// cell fails numeric coercion are removed from the table; the
    /// count of removed rows is reported back. Optional columns that
    /// are mapped but absent from the header row are ignored.
    pub fn apply_mapping(&mut self, map: &ColumnMap) -> Result<Resolution> {
        let id_idx = self.require_column(&map.id)?;
        let top_idx = self.require_column(&map.top)?;
        let left_idx = self.require_column(&map.left)?;
        let width_idx = map.width.as_deref().and_then(|n| self.column_index(n));
        let height_idx = map.height.as_deref().and_then(|n| self.column_index(n));
        let desc_idx = map
            .description
            .as_deref()
            .and_then(|n| self.column_index(n));

        let cell = |record: &[String], idx: usize| -> Option<f64> {
            record.get(idx).and_then(|c| parse_numeric(c))
        };

        let before = self.records.len();
        self.records
            .retain(|record| cell(record, top_idx).is_some() && cell(record, left_idx).is_some());
        let dropped_rows = before - self.records.len();

        let mut tiles = Vec::with_capacity(self.records.len());
        let mut start_tiles = BTreeSet::new();
        for (row, record) in self.records.iter().enumerate() {
            let id = TileId::new(record.get(id_idx).map(String::as_str).unwrap_or_default());
            if let Some(desc_idx) = desc_idx
                && record
                    .get(desc_idx)
                    .is_some_and(|d| d.to_lowercase().contains("start"))
            {
                start_tiles.insert(id.clone());
            }
            tiles.push(Tile {
                id,
                row,
                top: cell(record, top_idx).unwrap_or_default(),
                left: cell(record, left_idx).unwrap_or_default(),
                width: width_idx.and_then(|i| cell(record, i)),
                height: height_idx.and_then(|i| cell(record, i)),
            });
        }

        Ok(Resolution {
            tiles,
            start_tiles,
            dropped_rows,
            use_centering: width_idx.is_some() && height_idx.is_some(),
        })
    }
}
