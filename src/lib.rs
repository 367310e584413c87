// src/lib.rs

pub mod cards;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod motion;

pub mod gui;
pub mod logging;
