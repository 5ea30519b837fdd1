pub mod fields;
pub mod resume;
pub mod skills;

pub use resume::normalize_resume;
