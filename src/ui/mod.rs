pub mod overlay;
pub mod painter;

pub use overlay::GraticuleOverlay;
pub use painter::paint_queue;
