pub mod branch;
pub mod config;
pub mod whoami;
