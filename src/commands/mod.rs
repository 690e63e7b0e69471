pub mod config;
pub mod languages;
pub mod run;
