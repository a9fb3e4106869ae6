//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a wrapper directory name like upstream dist archives carry
    /// (`rust-std-1.84.0-x86_64-unknown-linux-gnu`, `rustc-nightly-...`)
    pub fn wrapper_name() -> impl Strategy<Value = String> {
        (
            prop_oneof!["rust-std", "rustc", "rust"],
            prop_oneof![
                (1u32..2, 0u32..100, 0u32..10)
                    .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}")),
                Just("nightly".to_string()),
                Just("beta".to_string()),
            ],
            "[a-z0-9_]{1,12}",
        )
            .prop_map(|(component, channel, suffix)| format!("{component}-{channel}-{suffix}"))
    }

    /// Generate a target triple
    pub fn target_triple() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("x86_64-unknown-linux-gnu".to_string()),
            Just("aarch64-apple-darwin".to_string()),
            Just("x86_64-pc-windows-msvc".to_string()),
            Just("riscv64gc-unknown-linux-gnu".to_string()),
            Just("armv7-unknown-linux-gnueabihf".to_string()),
        ]
    }
}
