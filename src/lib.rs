pub mod aggregate;
pub mod cli;
pub mod config;
pub mod contrib;
pub mod error;
pub mod github;
pub mod model;
pub mod output;
