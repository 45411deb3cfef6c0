
use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Route `trace!` output from the lexer to the test harness.
pub(super) fn init_test_logger() {
    INIT.call_once(|| {
        Builder::new()
            .filter_level(LevelFilter::Trace)
            .is_test(true)
            .init();
    });
}

#[cfg(feature = "logging")]
#[test]
fn test_logging_is_enabled_by_default() {
    init_test_logger();
    assert!(cfg!(feature = "logging"));
    assert!(log::log_enabled!(log::Level::Trace));
    assert_eq!(super::tokenize("1+1").map(|t| t.len()), Ok(3));
}
