pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod report;
pub mod storage;
pub mod task_api;
