//! Head-tracked prize wheel.
//!
//! A face tracker streams landmarks in over a socket; each frame the nose
//! direction is turned into a heading, the heading picks a sector on a
//! randomly weighted wheel, and the sector's color decides the prize.

pub mod board;
pub mod config;
pub mod events;
pub mod game;
pub mod sys;
pub mod wheel;
