#![cfg_attr(not(test), no_std)]

//! Portable state for the pageturn reader: chapter paging with a timed
//! page-flip window, font/theme settings, intents and the view model.

pub mod app;
pub mod content;
pub mod input;
pub mod render;
pub mod sequencer;
pub mod settings;
