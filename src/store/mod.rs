pub mod domain_bitmap;
pub mod int_buffer;

pub use domain_bitmap::DomainBitmap;
pub use int_buffer::{IntBuffer, MIN_CAPACITY};
