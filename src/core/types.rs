//! Type aliases for domain concepts.

use std::collections::BTreeMap;

/// A key inside a secret record (e.g. `database-url`).
pub type SecretKey = String;

/// Raw secret value. Never assumed to be valid UTF-8.
pub type SecretValue = Vec<u8>;

/// Key-value payload of one record.
///
/// Keys are unique by construction. Iteration order is not part of any
/// output contract; renderers sort explicitly.
pub type SecretData = BTreeMap<SecretKey, SecretValue>;
