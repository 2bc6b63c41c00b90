pub mod integrity;

pub use integrity::IntegrityViolation;
