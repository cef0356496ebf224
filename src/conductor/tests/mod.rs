//! Conductor tests
//!
//! All suites drive the conductor through the fake container and item in
//! `fixtures`, with a recording scheduler standing in for the main-loop
//! timer:
//! - Synchronization outcomes and the attach/detach lifecycle
//! - Attach-time deferral marking

mod fixtures;
mod sync_tests;
