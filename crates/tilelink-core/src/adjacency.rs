use crate::table::{Tile, TileId};
use std::collections::{BTreeMap, BTreeSet};

/// Symmetric, irreflexive link relation over tile ids.
///
/// BTree-backed so neighbor iteration (and therefore the exported
/// encoding) is deterministic. Every tile on the board has an entry,
/// possibly empty, so export can iterate tiles uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    links: BTreeMap<TileId, BTreeSet<TileId>>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-keys the relation to exactly the given tiles, dropping all
    /// existing links.
    pub fn reset<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = TileId>,
    {
        self.links = ids.into_iter().map(|id| (id, BTreeSet::new())).collect();
    }

    /// Replaces all links with the given index pairs (auto-linking).
    pub fn rebuild(&mut self, tiles: &[Tile], pairs: &[(usize, usize)]) {
        self.reset(tiles.iter().map(|t| t.id.clone()));
        for &(i, j) in pairs {
            self.add(&tiles[i].id.clone(), &tiles[j].id.clone());
        }
    }

    /// Links two tiles in both directions. Self-links are rejected.
    pub fn add(&mut self, a: &TileId, b: &TileId) -> bool {
        if a == b {
            return false;
        }
        let inserted = self.links.entry(a.clone()).or_default().insert(b.clone());
        self.links.entry(b.clone()).or_default().insert(a.clone());
        inserted
    }

    /// Removes a link in both directions. Returns whether it existed.
    pub fn remove(&mut self, a: &TileId, b: &TileId) -> bool {
        let removed = self.links.get_mut(a).is_some_and(|set| set.remove(b));
        if let Some(set) = self.links.get_mut(b) {
            set.remove(a);
        }
        removed
    }

    pub fn contains(&self, a: &TileId, b: &TileId) -> bool {
        self.links.get(a).is_some_and(|set| set.contains(b))
    }

    pub fn neighbors(&self, id: &TileId) -> Option<&BTreeSet<TileId>> {
        self.links.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TileId, &BTreeSet<TileId>)> {
        self.links.iter()
    }

    /// Each undirected link once, lexicographically ordered.
    pub fn edges(&self) -> impl Iterator<Item = (&TileId, &TileId)> {
        self.links.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |b| a < *b)
                .map(move |b| (a, b))
        })
    }

    pub fn link_count(&self) -> usize {
        self.edges().count()
    }

    pub fn tile_count(&self) -> usize {
        self.links.len()
    }

    pub fn clear(&mut self) {
        self.links.clear();
    }
}
