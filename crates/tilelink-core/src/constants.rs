pub struct CoreConstants;

impl CoreConstants {
    pub const DEFAULT_LOG_ENTRIES: usize = 500;
    pub const MAX_LOG_ENTRIES: usize = 5000;

    /// Slider bounds before any data is loaded.
    pub const DEFAULT_RANGE_MAX: f64 = 200.0;
    pub const DEFAULT_RANGE_MIN_VALUE: f64 = 0.0;
    pub const DEFAULT_RANGE_MAX_VALUE: f64 = 6.5;

    /// Slider maximum is this share of the content extent.
    pub const RANGE_EXTENT_RATIO: f64 = 0.25;
    /// Initial max-handle position after loading raw-coordinate data.
    pub const RAW_INITIAL_SPAN_RATIO: f64 = 0.5;
    /// Initial max-handle position after loading a background image.
    pub const IMAGE_INITIAL_SPAN_RATIO: f64 = 0.4;

    /// Click hit-test tolerance as a share of the visible world width.
    pub const CLICK_TOLERANCE_RATIO: f64 = 0.01;
}
