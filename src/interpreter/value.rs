/// The `Value` enum and its conversions.
///
/// Defines the runtime value type, its type tag, checked accessors and the
/// textual rendering used by `print`, `throw` and string concatenation.
pub mod core;
