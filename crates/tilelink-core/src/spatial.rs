use rstar::{AABB, PointDistance, RTree, RTreeObject};

/// A projected tile center with its index into the board's tile list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

impl TilePoint {
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }

    fn distance_to(&self, other: &TilePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl RTreeObject for TilePoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for TilePoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.x - point[0];
        let dy = self.y - point[1];
        dx * dx + dy * dy
    }

    fn contains_point(&self, point: &[f64; 2]) -> bool {
        (self.x - point[0]).abs() < f64::EPSILON && (self.y - point[1]).abs() < f64::EPSILON
    }
}

/// R-tree over tile centers. Rebuilt wholesale whenever the table,
/// mapping, or coordinate space changes.
#[derive(Clone)]
pub struct SpatialIndex {
    tree: RTree<TilePoint>,
    len: usize,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self {
            tree: RTree::new(),
            len: 0,
        }
    }
}

impl SpatialIndex {
    pub fn build(points: &[[f64; 2]]) -> Self {
        let entries: Vec<TilePoint> = points
            .iter()
            .enumerate()
            .map(|(index, p)| TilePoint::new(index, p[0], p[1]))
            .collect();
        Self {
            len: entries.len(),
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nearest tile to a point, with its euclidean distance.
    pub fn nearest(&self, x: f64, y: f64) -> Option<(usize, f64)> {
        self.tree
            .nearest_neighbor(&[x, y])
            .map(|point| (point.index, point.distance_2(&[x, y]).sqrt()))
    }

    /// All unordered index pairs whose distance d satisfies
    /// `min_dist <= d <= max_dist`. Pairs are unique with i < j and
    /// sorted for deterministic downstream iteration.
    pub fn pairs_within(&self, min_dist: f64, max_dist: f64) -> Vec<(usize, usize)> {
        if max_dist < 0.0 || max_dist < min_dist {
            return Vec::new();
        }
        let max_sq = max_dist * max_dist;
        let mut pairs = Vec::new();
        for point in self.tree.iter() {
            for other in self.tree.locate_within_distance([point.x, point.y], max_sq) {
                if other.index <= point.index {
                    continue;
                }
                if point.distance_to(other) >= min_dist {
                    pairs.push((point.index, other.index));
                }
            }
        }
        pairs.sort_unstable();
        pairs
    }
}
