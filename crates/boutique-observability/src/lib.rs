//! Observability for the Golden Sass Boutique storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one browser session
//! - `StructuredLogger` - Structured logging with session context
//! - `LogSink` - Where rendered entries go (stderr, memory, browser console)

mod logging;
mod session;
mod sink;

pub use logging::*;
pub use session::*;
pub use sink::*;
