pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod print;
pub mod table;
pub mod ui;
