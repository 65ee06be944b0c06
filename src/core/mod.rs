pub mod config;
pub mod constants;
pub mod geo;
pub mod interpolation;
pub mod projection;
pub mod viewport;
