pub mod add;
pub mod config;
pub mod day;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod status;
pub mod summary;
pub mod timeline;
