/// Identifier for a point in a [`crate::field::PointField`].
///
/// This is an index into `PointField::points`, and is only meaningful within
/// the lifetime of a given `PointField` instance.
pub type PointId = usize;
