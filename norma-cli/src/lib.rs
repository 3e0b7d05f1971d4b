//! Derive vacant teaching posts from course-assignment spreadsheets

pub mod cli;
pub mod config;
pub mod sheet;
pub mod staffing;
