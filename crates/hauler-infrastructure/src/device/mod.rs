//! Device simulators: cameras and locators.

mod camera;
mod geolocation;

pub use camera::{StaticImageCamera, UnavailableCamera};
pub use geolocation::{DeniedGeolocation, FixedGeolocation};
