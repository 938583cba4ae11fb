mod width;

pub use width::WidthError;
