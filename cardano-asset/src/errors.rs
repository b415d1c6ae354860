/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;
use std::io;

/// Error type returned by every fallible operation in this crate. The `kind`
/// is what callers should match on; `source` carries the underlying error
/// when one exists.
#[derive(Debug)]
pub struct AssetError {
    pub kind: AssetErrorKind,
    pub source: Option<Box<dyn Error>>,
    pub backtrace: Backtrace,
}

/// Enum used to differentiate between failure modes. Nothing in here is
/// retryable: the same inputs always fail the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetErrorKind {
    /// A computed symbol fell outside the 32-character alphabet. Only a logic
    /// error can cause this.
    AlphabetOverflow,
    AssetNameTooLong,
    InvalidAssetId,
    InvalidCharacter,
    InvalidChecksum,
    InvalidData,
    InvalidHrp,
    InvalidLength,
    InvalidNetwork,
    InvalidPadding,
    InvalidPolicyId,
    Io,
    MissingSeparator,
    MixedCase,
    UnexpectedHrp,
}

impl AssetError {
    pub fn new(kind: AssetErrorKind) -> Self {
        Self {
            kind,
            source: None,
            backtrace: Backtrace::capture(),
        }
    }

    pub fn new_with_source<E>(kind: AssetErrorKind, source: E) -> Self
    where
        E: Into<Box<dyn Error>>,
    {
        Self {
            kind,
            source: Some(source.into()),
            backtrace: Backtrace::capture(),
        }
    }
}

impl Error for AssetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(source) = &self.source {
            write!(f, "\nCaused by: \n{}", source)?;
        }
        if self.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nBacktrace:\n{}", self.backtrace)?;
        }
        Ok(())
    }
}

impl From<AssetErrorKind> for AssetError {
    fn from(kind: AssetErrorKind) -> Self {
        AssetError::new(kind)
    }
}

impl From<io::Error> for AssetError {
    fn from(e: io::Error) -> AssetError {
        AssetError::new_with_source(AssetErrorKind::Io, e)
    }
}
