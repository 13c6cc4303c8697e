pub mod coordinates;
pub mod date_range;
pub mod format;
pub mod frequency;
pub mod metric;
