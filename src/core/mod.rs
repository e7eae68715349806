pub mod constants;
pub mod emit;
pub mod field;
pub mod morph;
pub mod scroll;
pub mod shapes;

pub use constants::*;
pub use emit::*;
pub use field::*;
pub use morph::*;
pub use scroll::*;
pub use shapes::*;

// Shader bundled as a string constant
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
