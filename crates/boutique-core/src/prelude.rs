//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use boutique_core::prelude::*;
//! ```

pub use crate::{ConfigError, StoreApp, StoreConfig, StorePage, StoreSession};

pub use boutique_commerce::prelude::*;
pub use boutique_observability::{LogFormat, LogLevel, SessionId, StructuredLogger};
