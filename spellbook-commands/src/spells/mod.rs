/// Paginated browse of all spell names.
pub mod browse;
/// Single-spell detail lookup.
pub mod lookup;
