pub mod action;
pub mod config;
pub mod department;
pub mod employee;
pub mod stats;
pub mod tui;
