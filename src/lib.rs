//! tourdb-rs — workspace facade for [`tourdb_core`].
//!
//! This crate re-exports the core library so the demos under `demos/` can
//! depend on a single name. For application code, depend on `tourdb-core`
//! directly.

pub use tourdb_core::*;

pub mod prelude {
    pub use tourdb_core::prelude::*;
}
