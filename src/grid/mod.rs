//! Grid-line selection: which parallels and meridians are visible, where
//! they land on screen, and how they are labelled.

pub mod auto_step;
pub mod descriptors;
pub mod generator;
pub mod range;

pub use auto_step::AdaptiveStepController;
pub use descriptors::{
    format_degrees, Axis, GraticuleStyle, GridLine, Label, LabelStyle, LineSegment, LineStyle,
    SerializableColor,
};
pub use generator::{compute_graticule, Graticule, GraticuleEngine};
pub use range::{select_range, step_values, AxisSpan, RangeRule, StepRange};
