#![doc(test(attr(deny(warnings))))]

//! Personal finance tracker: a persisted transaction ledger with derived
//! totals, filters, and charts, driven from a terminal shell.

pub mod cli;
pub mod utils;

pub use pfm_config as config;
pub use pfm_domain as domain;
pub use pfm_core as ledger;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("pfm tracing initialized.");
    });
}

/// Build metadata baked in at compile time.
pub fn build_info() -> String {
    format!(
        "pfm {} ({} {}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("PFM_BUILD_HASH"),
        env!("PFM_BUILD_PROFILE"),
        env!("PFM_BUILD_TIMESTAMP"),
    )
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }

    #[test]
    fn build_info_names_the_package() {
        assert!(super::build_info().starts_with("pfm "));
    }
}
