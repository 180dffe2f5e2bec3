// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::state::FailureContext;

/// Error returned by [`MessageParser::finish`](crate::MessageParser::finish).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ParseError {
    /// The parser latched a failure; the context describes the first one.
    #[error("ParseFailed: {0}")]
    Failed(FailureContext),
}

impl ParseError {
    /// The snapshot captured at the first failure.
    pub fn context(&self) -> &FailureContext {
        match self {
            Self::Failed(context) => context,
        }
    }
}

impl From<FailureContext> for ParseError {
    fn from(context: FailureContext) -> Self {
        Self::Failed(context)
    }
}
