// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Test tooling: mock implementations of the controller traits, for use by
//! crates that need a consumer without a real store or cache behind it.

mod mock;

pub use mock::{MockAccountStoreController, MockProgressCacheController};
