pub mod config;
pub mod logging;

pub mod fetch_head;
pub mod last_modified;
pub mod report;
