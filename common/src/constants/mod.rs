/// Widest register a Booth run may use. Two of them concatenated fill a `u128`.
pub const MAX_REGISTER_WIDTH: u32 = 64;
pub const MAX_VECTOR_WIDTH: u32 = u128::BITS;
/// Readability floor applied by automatic width selection.
pub const DEFAULT_MIN_WIDTH: u32 = 4;
