pub mod backdrop;
pub mod constants;
pub mod glitch;
pub mod math;
pub mod morph;
pub mod recording;
pub mod schedule;
pub mod surface;

pub use backdrop::*;
pub use glitch::*;
pub use morph::*;
pub use schedule::*;
pub use surface::*;
