//! Classic arcade Snake for the terminal.
//!
//! The simulation side ([`snake`], [`food`], [`game`], [`timing`]) is pure
//! and deterministic under a seeded RNG; the binary wires it to a terminal
//! shell built from [`input`], [`renderer`], [`ui`], [`sound`], and
//! [`score`].

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod sound;
pub mod timing;
pub mod ui;
