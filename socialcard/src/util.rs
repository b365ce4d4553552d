//! Small internal helpers.

/// Initializes `env_logger` for a unit test.
///
/// Safe to call more than once - later calls are no-ops.
#[cfg(test)]
pub(crate) fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}
