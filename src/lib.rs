pub mod config;
pub mod error;
pub mod input;
pub mod packer;
pub mod profiles;
pub mod render;
pub mod report;
pub mod types;
pub mod wizard;
