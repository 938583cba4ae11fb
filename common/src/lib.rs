pub mod bits;
pub mod constants;
pub mod error;

pub use bits::BitVector;
pub use error::WidthError;
