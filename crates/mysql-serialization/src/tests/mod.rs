mod property_untrusted;
mod snapshot_errors;

/// Iterations for quickcheck properties.
fn quickcheck_tests() -> u64 {
    #[cfg(not(feature = "test-fast"))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(feature = "test-fast")]
    let tests = 10;
    tests
}
