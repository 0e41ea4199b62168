//! exovision-web — The ExoVision dashboard.
//! Provides a server-rendered UI with:
//!   - Model overview dashboard
//!   - Catalog browser with sorting and pagination
//!   - Single-observation classification form
//!   - Analytics (feature correlation, confusion matrix, history)
//!   - Model training configuration

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
