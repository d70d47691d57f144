//! Explicit outcome of an upstream lookup

/// Result of a weather or traffic lookup for one city.
///
/// Lookups never surface errors to their callers; a failed call is
/// `Unavailable` and the city is left out of the ranking.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Available(T),
    Unavailable,
}
