/*
 * lib.rs
 *
 * Copyright (C) 2024 Posit Software, PBC. All rights reserved.
 *
 */

pub mod error;
pub mod wire;

pub use error::Error;
pub type Result<T> = std::result::Result<T, error::Error>;
