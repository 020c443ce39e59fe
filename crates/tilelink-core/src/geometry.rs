use crate::table::Tile;

/// Coordinates are percentages of the image dimensions when a
/// background image is active, raw CSV values otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateSpace {
    Raw,
    ImagePercent { width: f64, height: f64 },
}

pub const PERCENT_SPAN: f64 = 100.0;

/// Center of a tile in its source coordinate space. With centering,
/// missing width/height cells contribute 0, so the point degrades to
/// the top-left corner rather than failing.
pub fn tile_center(tile: &Tile, use_centering: bool) -> [f64; 2] {
    if use_centering {
        [
            tile.left + tile.width.unwrap_or_default() / 2.0,
            tile.top + tile.height.unwrap_or_default() / 2.0,
        ]
    } else {
        [tile.left, tile.top]
    }
}

pub fn project(point: [f64; 2], space: CoordinateSpace) -> [f64; 2] {
    match space {
        CoordinateSpace::Raw => point,
        CoordinateSpace::ImagePercent { width, height } => [
            point[0] / PERCENT_SPAN * width,
            point[1] / PERCENT_SPAN * height,
        ],
    }
}

/// Axis-aligned bounding box of a point set. Y grows downward
/// throughout (screen convention, 0 at the top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Extent {
    pub fn from_points(points: &[[f64; 2]]) -> Option<Self> {
        let first = points.first()?;
        let mut extent = Extent {
            min: *first,
            max: *first,
        };
        for p in &points[1..] {
            extent.min[0] = extent.min[0].min(p[0]);
            extent.min[1] = extent.min[1].min(p[1]);
            extent.max[0] = extent.max[0].max(p[0]);
            extent.max[1] = extent.max[1].max(p[1]);
        }
        Some(extent)
    }

    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    pub fn max_dimension(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn center(&self) -> [f64; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TileId;

    fn tile(left: f64, top: f64, width: Option<f64>, height: Option<f64>) -> Tile {
        Tile {
            id: TileId::new("T"),
            row: 0,
            top,
            left,
            width,
            height,
        }
    }

    #[test]
    fn test_center_without_centering_uses_top_left() {
        let t = tile(20.0, 10.0, Some(4.0), Some(6.0));
        assert_eq!(tile_center(&t, false), [20.0, 10.0]);
    }

    #[test]
    fn test_center_with_centering_offsets_by_half_size() {
        let t = tile(20.0, 10.0, Some(4.0), Some(6.0));
        assert_eq!(tile_center(&t, true), [22.0, 13.0]);
    }

    #[test]
    fn test_center_with_missing_size_degrades_to_corner() {
        let t = tile(20.0, 10.0, None, Some(6.0));
        assert_eq!(tile_center(&t, true), [20.0, 13.0]);
    }

    #[test]
    fn test_project_raw_is_identity() {
        assert_eq!(project([3.0, 4.0], CoordinateSpace::Raw), [3.0, 4.0]);
    }

    #[test]
    fn test_project_percent_scales_to_image_pixels() {
        let space = CoordinateSpace::ImagePercent {
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(project([50.0, 25.0], space), [400.0, 150.0]);
        assert_eq!(project([100.0, 100.0], space), [800.0, 600.0]);
    }

    #[test]
    fn test_extent_of_empty_set() {
        assert_eq!(Extent::from_points(&[]), None);
    }

    #[test]
    fn test_extent_spans_points() {
        let extent =
            Extent::from_points(&[[1.0, 5.0], [4.0, -2.0], [2.0, 3.0]]).unwrap();
        assert_eq!(extent.min, [1.0, -2.0]);
        assert_eq!(extent.max, [4.0, 5.0]);
        assert_eq!(extent.width(), 3.0);
        assert_eq!(extent.height(), 7.0);
        assert_eq!(extent.max_dimension(), 7.0);
        assert_eq!(extent.center(), [2.5, 1.5]);
    }

    #[test]
    fn test_extent_of_single_point_is_degenerate() {
        let extent = Extent::from_points(&[[2.0, 2.0]]).unwrap();
        assert_eq!(extent.max_dimension(), 0.0);
    }
}
