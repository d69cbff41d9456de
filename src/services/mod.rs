pub mod diet;
pub mod scoring;
pub mod streaks;
pub mod tasks;
