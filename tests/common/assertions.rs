//! Custom assertion macros
//!
//! Provides assertion macros with more descriptive failure output for HTML
//! bodies.

/// Assert that a string contains a substring
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a string does not contain a substring
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            !$haystack.contains($needle),
            "Expected '{}' not to contain '{}'",
            $haystack,
            $needle
        );
    };
}
