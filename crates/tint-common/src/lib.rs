pub mod errors;

pub use errors::InvalidColorValue;

pub type Result<T> = std::result::Result<T, InvalidColorValue>;
