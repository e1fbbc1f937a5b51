#![forbid(unsafe_code)]

pub mod banner;
pub mod color;
pub mod emit;
pub mod error;
pub mod font;
pub mod gradient;
pub mod logo;
pub mod plan;
pub mod surface;
pub mod wave;

pub use banner::{BANNER_HEIGHT, BANNER_WIDTH, banner_ops, compose_banner};
pub use color::{Rgba, Theme};
pub use emit::{HEADER_FILE, LOGO_FILE, generate, write_png};
pub use error::{BrandError, BrandResult};
pub use font::{FontHandle, FontStyle};
pub use logo::{LOGO_SIZE, compose_logo, logo_ops};
pub use plan::{DrawOp, execute_ops};
pub use surface::Surface;
pub use wave::WaveSpec;
