pub mod diary;
pub mod health;
pub mod profiles;
pub mod stats;
pub mod streaks;
pub mod tasks;
