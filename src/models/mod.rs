pub mod diary;
pub mod profile;
pub mod streak;
pub mod survey;
pub mod task;
