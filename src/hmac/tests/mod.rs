// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;


/// Installs a TRACE-level subscriber writing through the test harness.
/// Repeated calls are no-ops.
pub(crate) fn init_tracing() {
    use std::sync::Once;
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::level_filters::LevelFilter::TRACE)
            .try_init();
    });
}
