//! Top navigation header for a question-and-answer client.
//!
//! - [`session`]: current-user reducer, store, bootstrap and login guard
//! - [`view`]: responsive breakpoint and persisted theme
//! - [`header`]: the mounted header and its rendered model
//! - [`date`]: UTC calendar breakdown of timestamps

pub mod config;
pub mod date;
pub mod header;
pub mod logging;
pub mod mvi;
pub mod session;
pub mod storage;
pub mod view;
