pub mod io;
pub mod pixel;
pub mod rgba;

pub use self::pixel::Rgba;
pub use self::rgba::RgbaImage;
