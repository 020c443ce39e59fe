use crate::adjacency::LinkSet;
use crate::constants::CoreConstants;
use crate::error::Result;
use crate::export;
use crate::geometry::{CoordinateSpace, Extent, project, tile_center};
use crate::prereq::prerequisite_map;
use crate::spatial::SpatialIndex;
use crate::table::{ColumnMap, Tile, TileId, TileTable};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// The loaded board: table, resolved tiles, projected centers, the
/// spatial index over them, and the editable link relation.
///
/// Centers, the center lookup, and the index are derived state,
/// rebuilt together whenever the coordinate space changes.
#[derive(Clone)]
pub struct Board {
    table: TileTable,
    mapping: ColumnMap,
    tiles: Vec<Tile>,
    start_tiles: BTreeSet<TileId>,
    dropped_rows: usize,
    use_centering: bool,
    space: CoordinateSpace,
    centers: Vec<[f64; 2]>,
    center_by_id: BTreeMap<TileId, [f64; 2]>,
    index: SpatialIndex,
    pub links: LinkSet,
}

impl Board {
    pub fn from_table(mut table: TileTable, mapping: ColumnMap) -> Result<Self> {
        let resolution = table.apply_mapping(&mapping)?;
        let mut links = LinkSet::new();
        links.reset(resolution.tiles.iter().map(|t| t.id.clone()));

        let mut board = Self {
            table,
            mapping,
            tiles: resolution.tiles,
            start_tiles: resolution.start_tiles,
            dropped_rows: resolution.dropped_rows,
            use_centering: resolution.use_centering,
            space: CoordinateSpace::Raw,
            centers: Vec::new(),
            center_by_id: BTreeMap::new(),
            index: SpatialIndex::default(),
            links,
        };
        board.rebuild_spatial();
        Ok(board)
    }

    fn rebuild_spatial(&mut self) {
        self.centers = self
            .tiles
            .iter()
            .map(|t| project(tile_center(t, self.use_centering), self.space))
            .collect();
        self.index = SpatialIndex::build(&self.centers);
        self.center_by_id = self
            .tiles
            .iter()
            .zip(&self.centers)
            .map(|(t, c)| (t.id.clone(), *c))
            .collect();
    }

    /// Switches coordinate space and reprojects. Links are kept; the
    /// caller decides whether to re-run auto-linking.
    pub fn set_space(&mut self, space: CoordinateSpace) {
        self.space = space;
        self.rebuild_spatial();
    }

    pub fn space(&self) -> CoordinateSpace {
        self.space
    }

    /// Replaces the link relation with all pairs whose center distance
    /// lies in `[min, max]`. Returns the number of links made.
    pub fn relink_in_range(&mut self, min: f64, max: f64) -> usize {
        let pairs = self.index.pairs_within(min, max);
        self.links.rebuild(&self.tiles, &pairs);
        self.links.link_count()
    }

    /// Nearest tile within the tolerance, for click hit-testing.
    pub fn tile_at(&self, x: f64, y: f64, tolerance: f64) -> Option<&Tile> {
        let (idx, dist) = self.index.nearest(x, y)?;
        (dist < tolerance).then(|| &self.tiles[idx])
    }

    pub fn center_of(&self, id: &TileId) -> Option<[f64; 2]> {
        self.center_by_id.get(id).copied()
    }

    pub fn extent(&self) -> Option<Extent> {
        Extent::from_points(&self.centers)
    }

    /// Slider maximum suited to the current space: a fixed share of
    /// the image dimensions when one is loaded, of the data spread
    /// otherwise. None when the spread is degenerate.
    pub fn suggested_range_max(&self) -> Option<f64> {
        match self.space {
            CoordinateSpace::Raw => {
                if self.tiles.len() < 2 {
                    return None;
                }
                let max_dim = self.extent()?.max_dimension();
                (max_dim > 0.0).then(|| max_dim * CoreConstants::RANGE_EXTENT_RATIO)
            }
            CoordinateSpace::ImagePercent { width, height } => {
                Some(width.max(height) * CoreConstants::RANGE_EXTENT_RATIO)
            }
        }
    }

    pub fn export_to_path(&self, path: &Path) -> Result<()> {
        let prereqs = prerequisite_map(&self.links, &self.start_tiles);
        export::export_csv(path, &self.table, &self.mapping.id, &prereqs)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn centers(&self) -> &[[f64; 2]] {
        &self.centers
    }

    pub fn start_tiles(&self) -> &BTreeSet<TileId> {
        &self.start_tiles
    }

    pub fn mapping(&self) -> &ColumnMap {
        &self.mapping
    }

    pub fn table(&self) -> &TileTable {
        &self.table
    }

    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PERCENT_SPAN;

    fn str_row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    /// Four tiles on a unit-spaced horizontal line, percent-scaled
    /// coordinates, first tile marked as the start.
    fn line_board() -> Board {
        let table = TileTable::from_rows(
            vec![
                "Tile".to_string(),
                "Top".to_string(),
                "Left".to_string(),
                "Notes".to_string(),
            ],
            vec![
                str_row(&["A", "10", "10", "start here"]),
                str_row(&["B", "10", "11", ""]),
                str_row(&["C", "10", "12", ""]),
                str_row(&["D", "10", "13", ""]),
            ],
        );
        let mut mapping = ColumnMap::required("Tile", "Top", "Left");
        mapping.description = Some("Notes".to_string());
        Board::from_table(table, mapping).unwrap()
    }

    fn id(s: &str) -> TileId {
        TileId::new(s)
    }

    #[test]
    fn test_relink_in_range_links_adjacent_tiles() {
        let mut board = line_board();
        let count = board.relink_in_range(0.0, 1.0);
        assert_eq!(count, 3);
        assert!(board.links.contains(&id("A"), &id("B")));
        assert!(board.links.contains(&id("B"), &id("C")));
        assert!(!board.links.contains(&id("A"), &id("C")));
    }

    #[test]
    fn test_relink_discards_manual_links() {
        let mut board = line_board();
        board.relink_in_range(0.0, 1.0);
        board.links.add(&id("A"), &id("D"));
        board.relink_in_range(0.0, 1.0);
        assert!(!board.links.contains(&id("A"), &id("D")));
    }

    #[test]
    fn test_tile_at_within_tolerance() {
        let board = line_board();
        let tile = board.tile_at(11.2, 10.0, 0.5).unwrap();
        assert_eq!(tile.id.as_str(), "B");
        assert!(board.tile_at(11.2, 10.0, 0.1).is_none());
    }

    #[test]
    fn test_start_tiles_detected_from_description() {
        let board = line_board();
        assert_eq!(board.start_tiles().len(), 1);
        assert!(board.start_tiles().contains(&id("A")));
    }

    #[test]
    fn test_set_space_rescales_centers_and_queries() {
        let mut board = line_board();
        board.set_space(CoordinateSpace::ImagePercent {
            width: 1000.0,
            height: 500.0,
        });

        // left=10% of 1000px, top=10% of 500px
        assert_eq!(board.center_of(&id("A")).unwrap(), [100.0, 50.0]);

        // Unit spacing became 10px, so a 1.0 radius finds nothing.
        assert_eq!(board.relink_in_range(0.0, 1.0), 0);
        assert_eq!(board.relink_in_range(0.0, 10.0), 3);
    }

    #[test]
    fn test_suggested_range_max_raw() {
        let board = line_board();
        // Spread is 3.0 wide, 0.0 tall.
        let max = board.suggested_range_max().unwrap();
        assert!((max - 3.0 * CoreConstants::RANGE_EXTENT_RATIO).abs() < 1e-12);
    }

    #[test]
    fn test_suggested_range_max_image() {
        let mut board = line_board();
        board.set_space(CoordinateSpace::ImagePercent {
            width: 800.0,
            height: 600.0,
        });
        assert_eq!(board.suggested_range_max().unwrap(), 200.0);
    }

    #[test]
    fn test_suggested_range_max_degenerate_spread() {
        let table = TileTable::from_rows(
            vec!["Tile".to_string(), "Top".to_string(), "Left".to_string()],
            vec![str_row(&["A", "5", "5"]), str_row(&["B", "5", "5"])],
        );
        let board =
            Board::from_table(table, ColumnMap::required("Tile", "Top", "Left")).unwrap();
        assert_eq!(board.suggested_range_max(), None);
    }

    #[test]
    fn test_export_excludes_start_tiles() {
        let mut board = line_board();
        board.relink_in_range(0.0, 1.0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiles_with_prerequisites.csv");
        board.export_to_path(&path).unwrap();

        let exported = std::fs::read_to_string(&path).unwrap();
        let mut lines = exported.lines();
        assert_eq!(
            lines.next().unwrap(),
            r#""Tile","Top","Left","Notes","Prerequisites""#
        );
        // A is a start tile: no prerequisites despite its link to B.
        assert_eq!(
            lines.next().unwrap(),
            r#""A","10","10","start here","""#
        );
        assert_eq!(
            lines.next().unwrap(),
            r#""B","10","11","","[[""A""],[""C""]]""#
        );
    }

    #[test]
    fn test_empty_board_is_inert() {
        let table = TileTable::from_rows(
            vec!["Tile".to_string(), "Top".to_string(), "Left".to_string()],
            vec![str_row(&["A", "x", "y"])],
        );
        let mut board =
            Board::from_table(table, ColumnMap::required("Tile", "Top", "Left")).unwrap();
        assert!(board.is_empty());
        assert_eq!(board.dropped_rows(), 1);
        assert_eq!(board.relink_in_range(0.0, 100.0), 0);
        assert!(board.tile_at(0.0, 0.0, 10.0).is_none());
        assert_eq!(board.extent(), None);
    }
}
