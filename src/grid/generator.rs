//! Grid line generation and the engine entry point.

use crate::core::config::GraticuleConfig;
use crate::core::geo::Point;
use crate::core::interpolation::SpaceMapper;
use crate::core::projection::{Projection, ProjectionAdapter, WebMercator};
use crate::core::viewport::{TileGeometry, Viewport};
use crate::grid::descriptors::{format_degrees, Axis, GraticuleStyle, GridLine, Label, LineSegment};
use crate::grid::range::{select_range, step_values, AxisSpan};
use serde::{Deserialize, Serialize};

/// Lines and labels for one frame.
///
/// Latitude entries come first, by increasing magnitude (upper line before
/// lower line), then longitude entries (left line before right line).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graticule {
    pub lines: Vec<GridLine>,
    pub labels: Vec<Label>,
    /// World size the frame was computed at; 0 when nothing was computed
    pub world_size: f64,
}

impl Graticule {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.labels.is_empty()
    }

    pub fn lines_for(&self, axis: Axis) -> impl Iterator<Item = &GridLine> {
        self.lines.iter().filter(move |line| line.axis == axis)
    }

    pub fn labels_for(&self, axis: Axis) -> impl Iterator<Item = &Label> {
        self.labels.iter().filter(move |label| label.axis == axis)
    }
}

/// Converts candidate degree values of one viewport into screen geometry
pub struct GridLineGenerator<'a, P: Projection> {
    mapper: &'a SpaceMapper,
    projection: &'a ProjectionAdapter<P>,
    style: &'a GraticuleStyle,
    width: f64,
    height: f64,
}

impl<'a, P: Projection> GridLineGenerator<'a, P> {
    pub fn new(
        mapper: &'a SpaceMapper,
        projection: &'a ProjectionAdapter<P>,
        style: &'a GraticuleStyle,
        viewport: &Viewport,
    ) -> Self {
        Self {
            mapper,
            projection,
            style,
            width: viewport.width,
            height: viewport.height,
        }
    }

    /// Parallels visible at `step` degrees
    pub fn latitudes(&self, step: f64, out: &mut Graticule) {
        let axis = Axis::Latitude;
        let span = AxisSpan::latitude(self.mapper, self.projection);
        let range = select_range(&span, step, axis);
        let segment = self.horizontal_segment();

        for value in step_values(range, step, axis.limit()) {
            let northing = self.projection.latitude_northing(value);
            // World pixel rows grow southwards, so the northern line sits at
            // the mirrored northing.
            let north_y = self.mapper.meters_to_screen_y(-northing);
            let south_y = self.mapper.meters_to_screen_y(northing);

            if inside(north_y, self.height) {
                self.push_latitude(value, north_y, segment, out);
            }
            if value > 0.0 && inside(south_y, self.height) {
                self.push_latitude(-value, south_y, segment, out);
            }
        }
    }

    /// Meridians visible at `step` degrees
    pub fn longitudes(&self, step: f64, out: &mut Graticule) {
        let axis = Axis::Longitude;
        let span = AxisSpan::longitude(self.mapper, self.projection);
        let range = select_range(&span, step, axis);
        let segment = self.vertical_segment();

        for value in step_values(range, step, axis.limit()) {
            let easting = self.projection.longitude_easting(value);
            let west_x = self.mapper.meters_to_screen_x(-easting);
            let east_x = self.mapper.meters_to_screen_x(easting);

            if inside(west_x, self.width) {
                self.push_longitude(-value, west_x, segment, out);
            }
            if value > 0.0 && inside(east_x, self.width) {
                self.push_longitude(value, east_x, segment, out);
            }
        }
    }

    /// Horizontal span of a parallel, clipped to the world edges, relative
    /// to an anchor at `-left`
    fn horizontal_segment(&self) -> LineSegment {
        let screen = self.mapper.screen();
        let (x1, x2) = clip_to_world(screen.left, screen.right, self.mapper.world_size());
        LineSegment::new(x1, 0.0, x2, 0.0)
    }

    /// Vertical span of a meridian, clipped to the world edges, relative to
    /// an anchor at `-top`
    fn vertical_segment(&self) -> LineSegment {
        let screen = self.mapper.screen();
        let (y1, y2) = clip_to_world(screen.top, screen.bottom, self.mapper.world_size());
        LineSegment::new(0.0, y1, 0.0, y2)
    }

    fn push_latitude(&self, value: f64, y: f64, segment: LineSegment, out: &mut Graticule) {
        let value = normalize_zero(value);
        out.lines.push(GridLine {
            axis: Axis::Latitude,
            value_degrees: value,
            anchor: Point::new(-self.mapper.screen().left, y),
            segment,
            style: self.style.line.clone(),
        });
        out.labels.push(Label {
            axis: Axis::Latitude,
            value_degrees: value,
            text: format_degrees(value),
            position: Point::new(0.0, y + self.style.label.padding),
            rotation_degrees: 0.0,
        });
    }

    fn push_longitude(&self, value: f64, x: f64, segment: LineSegment, out: &mut Graticule) {
        let value = normalize_zero(value);
        out.lines.push(GridLine {
            axis: Axis::Longitude,
            value_degrees: value,
            anchor: Point::new(x, -self.mapper.screen().top),
            segment,
            style: self.style.line.clone(),
        });
        out.labels.push(Label {
            axis: Axis::Longitude,
            value_degrees: value,
            text: format_degrees(value),
            position: Point::new(x - self.style.label.padding, 0.0),
            rotation_degrees: crate::core::constants::LONGITUDE_LABEL_ROTATION,
        });
    }
}

fn inside(position: f64, size: f64) -> bool {
    position > 0.0 && position < size
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// World-pixel span `[start, finish]` cut at `0` and `world_size`
fn clip_to_world(start: f64, finish: f64, world_size: f64) -> (f64, f64) {
    match (start < 0.0, finish > world_size) {
        (true, true) => (0.0, world_size),
        (true, false) => (0.0, finish),
        (false, true) => (start, world_size),
        (false, false) => (start, finish),
    }
}

/// Stateless graticule engine.
///
/// Holds only the projection and the drawing style, so one engine can be
/// shared between threads and called every frame.
#[derive(Debug, Clone, Default)]
pub struct GraticuleEngine<P: Projection = WebMercator> {
    projection: ProjectionAdapter<P>,
    style: GraticuleStyle,
}

impl GraticuleEngine<WebMercator> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Projection> GraticuleEngine<P> {
    pub fn with_projection(projection: P) -> Self {
        Self {
            projection: ProjectionAdapter::new(projection),
            style: GraticuleStyle::default(),
        }
    }

    pub fn with_style(mut self, style: GraticuleStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &GraticuleStyle {
        &self.style
    }

    pub fn projection(&self) -> &ProjectionAdapter<P> {
        &self.projection
    }

    /// Space mapper for a viewport, as used by [`compute`](Self::compute)
    pub fn space_mapper(&self, viewport: &Viewport, tiles: &TileGeometry) -> SpaceMapper {
        let world_size = tiles.world_size(viewport.zoom);
        SpaceMapper::new(viewport, world_size, self.projection.extent())
    }

    /// Visible lines and labels. Empty when the grid is hidden or the
    /// viewport has no area.
    pub fn compute(
        &self,
        viewport: &Viewport,
        tiles: &TileGeometry,
        config: &GraticuleConfig,
    ) -> Graticule {
        if !config.show || viewport.is_degenerate() {
            return Graticule::default();
        }

        let mapper = self.space_mapper(viewport, tiles);
        let generator = GridLineGenerator::new(&mapper, &self.projection, &self.style, viewport);
        let mut graticule = Graticule {
            world_size: mapper.world_size(),
            ..Default::default()
        };

        generator.latitudes(config.clamp_step(config.latitudes_step), &mut graticule);
        generator.longitudes(config.clamp_step(config.longitudes_step), &mut graticule);

        log::debug!(
            "graticule at world size {}: {} lines, {} labels",
            graticule.world_size,
            graticule.lines.len(),
            graticule.labels.len()
        );
        graticule
    }
}

/// [`GraticuleEngine::compute`] with the Web Mercator projection and the
/// default style
pub fn compute_graticule(
    viewport: &Viewport,
    tiles: &TileGeometry,
    config: &GraticuleConfig,
) -> Graticule {
    GraticuleEngine::new().compute(viewport, tiles, config)
}
