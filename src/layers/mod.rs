pub mod base;
pub mod graticule;

pub use base::{LayerProperties, LayerTrait, LayerType};
pub use graticule::GraticuleLayer;
