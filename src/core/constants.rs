//! Engine-wide constants for the graticule overlay.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

/// Half the side of the Web Mercator projected square, in meters.
pub const PROJECTED_EXTENT_MAX: f64 = 20037508.3427892;

/// Lower bound of the projected square on both axes.
pub const PROJECTED_EXTENT_MIN: f64 = -PROJECTED_EXTENT_MAX;

/// No latitude line is drawn past this magnitude.
pub const MAX_LATITUDE: f64 = 85.0;

/// No longitude line is drawn past this magnitude (the antimeridian).
pub const MAX_LONGITUDE: f64 = 180.0;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Highest integral tile zoom served by the default tile source.
pub const MAX_TILE_ZOOM: u8 = 18;

/// Smallest step, in degrees, a user can configure.
pub const MIN_STEP: f64 = 0.001;

/// Largest step, in degrees, a user can configure.
pub const MAX_STEP: f64 = 180.0;

/// Step used at tile zoom 0; auto-step halves it for every zoom level.
pub const STANDARD_STEP: f64 = 120.0;

/// Grid stroke color (`#6d5b33`).
pub const STROKE_RGB: (u8, u8, u8) = (0x6d, 0x5b, 0x33);

/// Grid stroke width in pixels.
pub const STROKE_WIDTH: f32 = 3.0;

/// Dash pattern of grid lines: dash length, then gap length.
pub const DASH_PATTERN: [f32; 2] = [4.0, 2.0];

/// Label font size in pixels.
pub const LABEL_FONT_SIZE: f32 = 14.0;

/// Offset between a line and its label, in pixels.
pub const LABEL_PADDING: f64 = 5.0;

/// Longitude labels run along the line.
pub const LONGITUDE_LABEL_ROTATION: f64 = 90.0;
