// Copyright (c) 2023 MASSA LABS <info@massa.net>

//! Protobuf schemas of the two trie leaf formats decoded by the consumer.
//!
//! The generated code is committed; regenerate it from the `.proto` sources
//! with `cargo check --features build-proto`.

/// Leaf wire formats, v1
pub mod trie {
    /// Version 1
    pub mod v1 {
        include!("trie.v1.rs");
    }
}
