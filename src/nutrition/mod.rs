pub mod advice;
pub mod food;
pub mod journal;
pub mod profile;
pub mod profile_block;
pub mod targets;
