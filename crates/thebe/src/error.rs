/*
 * error.rs
 *
 * Copyright (C) 2024 Posit Software, PBC. All rights reserved.
 *
 */

use std::fmt;

#[derive(Debug)]
pub enum Error {
    CannotSerialize(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CannotSerialize(err) => {
                write!(f, "Cannot serialize message content: {}", err)
            },
        }
    }
}

impl std::error::Error for Error {}
