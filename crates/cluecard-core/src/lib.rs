//! Portable engine for the clue card round timer.
//!
//! Everything here is host agnostic: the binary supplies the word list text,
//! an input provider, a presenter and a cue player, then calls
//! [`app::GameApp::tick`] from its loop.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod app;
pub mod audio;
pub mod content;
pub mod input;
pub mod pool;
pub mod render;
pub mod settings;
pub mod shuffle;
pub mod timer;
