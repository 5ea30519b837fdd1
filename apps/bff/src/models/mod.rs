pub mod master;
pub mod resume;
pub mod user;
