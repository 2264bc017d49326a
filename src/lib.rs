//! Nullable value wrappers that model SQL `NULL` / JSON `null` next to an in-domain value.

/// Nullable wrapper types, their codecs, the driver-value adapter, and the binary envelope registry.
pub mod nul;
