//! Shared roster logic for the event check-in tool.
//!
//! Everything here is platform independent: the browser frontend drives these
//! types from Yew messages, and the test suite drives them against
//! [`roster::MemoryStorage`].

pub mod checkin;
pub mod config;
pub mod csv;
pub mod error;
pub mod model;
pub mod reset;
pub mod roster;
pub mod search;
