// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// Consumer error: any of these is fatal for the message being processed
/// and must be surfaced to the transport so it redelivers
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone)]
pub enum ConsumerError {
    /// message format error: {0}
    MessageFormat(String),
    /// account store error: {0}
    Store(String),
    /// progress cache error: {0}
    Cache(String),
    /// channel error: {0}
    Channel(String),
}
