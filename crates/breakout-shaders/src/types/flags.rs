//! Bit flags carried in [`PerQuad::flags`](super::PerQuad::flags).
//!
//! Bit 0 selects oval rendering; every other bit is reserved and must be zero.

/// Render the quad as a rectangle.
pub const PER_QUAD_FLAGS_NONE: u32 = 0;
/// Render the quad as an oval inscribed in its rectangle.
pub const PER_QUAD_FLAGS_AS_CIRCLE: u32 = 1 << 0;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PerQuadFlags: u32 {
        const AS_CIRCLE = PER_QUAD_FLAGS_AS_CIRCLE;
    }
}

impl PerQuadFlags {
    pub const NONE: Self = Self::empty();

    /// Bits set in `raw` that no flag defines.
    pub const fn reserved_bits(raw: u32) -> u32 {
        raw & !Self::all().bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_zero() {
        assert_eq!(PER_QUAD_FLAGS_NONE, 0);
        assert_eq!(PerQuadFlags::NONE.bits(), PER_QUAD_FLAGS_NONE);
        assert_eq!(PerQuadFlags::default(), PerQuadFlags::NONE);
    }

    #[test]
    fn as_circle_is_bit_zero() {
        assert_eq!(PER_QUAD_FLAGS_AS_CIRCLE, 1);
        assert_eq!(PerQuadFlags::AS_CIRCLE.bits(), 1);
    }

    #[test]
    fn as_circle_is_distinguishable_from_none() {
        assert_ne!(PER_QUAD_FLAGS_AS_CIRCLE & PER_QUAD_FLAGS_AS_CIRCLE, 0);
        assert_eq!(PER_QUAD_FLAGS_NONE & PER_QUAD_FLAGS_AS_CIRCLE, 0);
    }

    #[test]
    fn reserved_bits_are_everything_but_bit_zero() {
        assert_eq!(PerQuadFlags::reserved_bits(PER_QUAD_FLAGS_AS_CIRCLE), 0);
        assert_eq!(PerQuadFlags::reserved_bits(0b110), 0b110);
        assert_eq!(
            PerQuadFlags::from_bits_truncate(0b111),
            PerQuadFlags::AS_CIRCLE
        );
    }
}
