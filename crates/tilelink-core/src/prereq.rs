use crate::adjacency::LinkSet;
use crate::table::TileId;
use std::collections::{BTreeMap, BTreeSet};

/// Header of the column the export writes prerequisites into.
pub const PREREQUISITES_COLUMN: &str = "Prerequisites";

/// Encodes neighbors as single-member OR groups: `[["E1"],["E2"]]`
/// means E1 OR E2 unlocks the tile. Compact JSON, neighbors sorted.
pub fn encode_or_groups(neighbors: &BTreeSet<TileId>) -> String {
    let groups: Vec<Vec<&str>> = neighbors.iter().map(|n| vec![n.as_str()]).collect();
    serde_json::to_string(&groups).unwrap_or_default()
}

/// Prerequisite encoding per tile. Start tiles and tiles without
/// links get no entry; their exported cells keep whatever value the
/// input table carried.
pub fn prerequisite_map(
    links: &LinkSet,
    start_tiles: &BTreeSet<TileId>,
) -> BTreeMap<TileId, String> {
    links
        .iter()
        .filter(|(id, neighbors)| !neighbors.is_empty() && !start_tiles.contains(*id))
        .map(|(id, neighbors)| (id.clone(), encode_or_groups(neighbors)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TileId {
        TileId::new(s)
    }

    #[test]
    fn test_encoding_is_compact_json() {
        let neighbors: BTreeSet<TileId> = [id("E2"), id("E1")].into_iter().collect();
        assert_eq!(encode_or_groups(&neighbors), r#"[["E1"],["E2"]]"#);
    }

    #[test]
    fn test_encoding_sorts_neighbors() {
        let neighbors: BTreeSet<TileId> = [id("C"), id("A"), id("B")].into_iter().collect();
        assert_eq!(encode_or_groups(&neighbors), r#"[["A"],["B"],["C"]]"#);
    }

    #[test]
    fn test_encoding_escapes_quotes_in_ids() {
        let neighbors: BTreeSet<TileId> = [id(r#"E"1"#)].into_iter().collect();
        assert_eq!(encode_or_groups(&neighbors), r#"[["E\"1"]]"#);
    }

    #[test]
    fn test_map_excludes_start_tiles() {
        let mut links = LinkSet::new();
        links.add(&id("A"), &id("B"));
        links.add(&id("B"), &id("C"));
        let start_tiles: BTreeSet<TileId> = [id("A")].into_iter().collect();

        let map = prerequisite_map(&links, &start_tiles);
        assert!(!map.contains_key(&id("A")));
        assert_eq!(map.get(&id("B")).unwrap(), r#"[["A"],["C"]]"#);
        assert_eq!(map.get(&id("C")).unwrap(), r#"[["B"]]"#);
    }

    #[test]
    fn test_map_skips_unlinked_tiles() {
        let mut links = LinkSet::new();
        links.reset([id("A"), id("B")]);
        let map = prerequisite_map(&links, &BTreeSet::new());
        assert!(map.is_empty());
    }

    #[test]
    fn test_start_tile_still_appears_in_neighbor_groups() {
        let mut links = LinkSet::new();
        links.add(&id("S"), &id("B"));
        let start_tiles: BTreeSet<TileId> = [id("S")].into_iter().collect();

        let map = prerequisite_map(&links, &start_tiles);
        assert_eq!(map.get(&id("B")).unwrap(), r#"[["S"]]"#);
    }
}
