pub mod drop_zone;
pub mod results;
pub mod summary;
