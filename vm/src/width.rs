//! Register width selection.

/// Width of the narrowest register that holds `value`: one bit for zero, otherwise the
/// bit length of `|value|` plus a sign bit.
///
/// For negative powers of two this is one wider than strictly needed (`-8` fits in four
/// bits but is given five); the extra bit keeps `|value|` itself representable.
pub fn minimum_width(value: i128) -> u32 {
    if value == 0 {
        return 1;
    }
    let magnitude = value.unsigned_abs();
    (u128::BITS - magnitude.leading_zeros()) + 1
}

/// Widest [`minimum_width`] over `values`, never below `floor`.
///
/// The floor only pads small examples for readability.
pub fn select_width<I>(values: I, floor: u32) -> u32
where
    I: IntoIterator<Item = i128>,
{
    values
        .into_iter()
        .map(minimum_width)
        .fold(floor, u32::max)
}
