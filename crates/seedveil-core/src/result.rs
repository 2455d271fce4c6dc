use crate::error::SeedveilError;

pub type Result<T> = std::result::Result<T, SeedveilError>;
