/*
 * language_info.rs
 *
 * Copyright (C) 2022 Posit Software, PBC. All rights reserved.
 *
 */

use serde::Serialize;

/// Represents information about the language that the kernel implements
#[derive(Debug, Serialize, Clone)]
pub struct LanguageInfo {
    /// The name of the programming language the kernel implements
    pub name: String,

    /// The version of the language
    pub version: String,

    /// The file extension for script files in the language
    pub file_extension: String,

    /// Codemirror mode (for editing)
    pub codemirror_mode: String,

    /// Pygments lexer (for highlighting)
    pub pygments_lexer: String,
}
