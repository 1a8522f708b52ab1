//! Newtype wrappers around the host's integer identifiers.
//!
//! Using distinct types prevents accidentally passing a `TestRunItemId`
//! where a `FolderId` is expected. All ids are non-negative integers as
//! issued by the test-management backend.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `u64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Return the inner integer value.
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a folder in the test case tree.
    FolderId
);

define_id!(
    /// Identifier of a test run (test cycle).
    TestRunId
);

define_id!(
    /// Identifier of an item within a test run.
    TestRunItemId
);

/// Build a folder chain from raw integers.
pub fn folder_chain(ids: &[u64]) -> Vec<FolderId> {
    ids.iter().copied().map(FolderId).collect()
}
