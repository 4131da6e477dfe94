pub mod catalog;

pub use catalog::{load_catalog, read_catalog};
