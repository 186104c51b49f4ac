//! Provide tracing, tailored to this crate.
//!
//! The crate only emits events; installing a subscriber is left to the
//! application. Modules include `use crate::tracing::prelude::*` for
//! convenient access to the `trace!()`, `debug!()`, `info!()`, `warn!()`, and
//! `error!()` macros.

pub mod prelude {
    #[allow(unused_imports)]
    pub use tracing::{trace, debug, info, warn, error};
}
