pub mod domain;
pub mod grayscale;
pub mod infrastructure;
