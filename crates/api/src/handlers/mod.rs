pub mod dashboard;
pub mod lifecycle;
pub mod project;
pub mod schedule;
