pub mod catalog;
pub mod credentials;
pub mod log;
pub mod profile;
