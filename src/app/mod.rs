//! Main application module for msgscope.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`app`]    | [`MsgScopeApp`]: per-frame data ingestion and panel rendering |
//! | [`run`]    | Top-level [`run_msgscope()`] entry point |

mod app;
mod run;

pub use app::MsgScopeApp;
pub use run::run_msgscope;
