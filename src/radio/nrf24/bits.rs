/// The position of the lowest set bit in `mask`, or `None` for an empty mask.
const fn lsb(mask: u8) -> Option<u32> {
    if mask == 0 {
        None
    } else {
        Some(mask.trailing_zeros())
    }
}

/// Extract the bits of `byte` covered by a contiguous `mask`, right-aligned.
///
/// ```
/// use nrf24::get_bits;
/// assert_eq!(get_bits(0x3A, 0xF0), 0x03);
/// assert_eq!(get_bits(0x3A, 0x0F), 0x0A);
/// ```
///
/// Non-contiguous masks are not supported; the result is unspecified.
pub const fn get_bits(byte: u8, mask: u8) -> u8 {
    match lsb(mask) {
        Some(shift) => (byte & mask) >> shift,
        None => 0,
    }
}

/// Overwrite the bits of `byte` covered by a contiguous `mask` with `value`.
///
/// `value` is unshifted. Bits of `value` that do not fit the mask's width are discarded.
///
/// ```
/// use nrf24::set_bits;
/// assert_eq!(set_bits(0xFF, 0xF0, 0x03), 0x3F);
/// assert_eq!(set_bits(0x3F, 0x0F, 0x0A), 0x3A);
/// ```
pub const fn set_bits(byte: u8, mask: u8, value: u8) -> u8 {
    match lsb(mask) {
        Some(shift) => (byte & !mask) | ((value << shift) & mask),
        None => byte,
    }
}

/// A named, contiguous bit field within a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    /// The register address that holds this field.
    pub register: u8,
    pub mask: u8,
}

impl Field {
    pub const fn new(name: &'static str, register: u8, mask: u8) -> Self {
        Self {
            name,
            register,
            mask,
        }
    }

    /// Read this field's value out of a raw register `byte`.
    pub const fn get(&self, byte: u8) -> u8 {
        get_bits(byte, self.mask)
    }

    /// Write `value` into this field of a raw register `byte`.
    pub const fn set(&self, byte: u8, value: u8) -> u8 {
        set_bits(byte, self.mask, value)
    }

    /// The number of bits covered by this field.
    pub const fn width(&self) -> u32 {
        self.mask.count_ones()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Field {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{=str} (reg {=u8:#x}, mask {=u8:#x})",
            self.name,
            self.register,
            self.mask
        )
    }
}

#[cfg(test)]
mod test {
    use super::{get_bits, set_bits};
    use crate::radio::nrf24::fields;

    /// Every contiguous mask within a byte.
    fn contiguous_masks() -> impl Iterator<Item = u8> {
        (1u32..=8).flat_map(|width| {
            (0..=(8 - width)).map(move |shift| (((1u16 << width) - 1) << shift) as u8)
        })
    }

    #[test]
    fn get_after_set() {
        for mask in contiguous_masks() {
            let max = get_bits(0xFF, mask);
            for value in 0..=max {
                for base in [0u8, 0xFF, 0xA5, 0x5A] {
                    assert_eq!(get_bits(set_bits(base, mask, value), mask), value);
                }
            }
        }
    }

    #[test]
    fn set_leaves_other_bits() {
        for mask in contiguous_masks() {
            assert_eq!(set_bits(0xA5, mask, 0) & !mask, 0xA5 & !mask);
        }
    }

    #[test]
    fn oversized_value_truncated() {
        // 3 bit field, value needs 4 bits
        assert_eq!(get_bits(set_bits(0, 0x0E, 0x0F), 0x0E), 0x07);
        assert_eq!(set_bits(0, 0x0E, 0x0F), 0x0E);
        assert_eq!(set_bits(0, 0x80, 0x02), 0);
    }

    #[test]
    fn empty_mask() {
        assert_eq!(get_bits(0xFF, 0), 0);
        assert_eq!(set_bits(0x12, 0, 0xFF), 0x12);
    }

    #[test]
    fn field_table_masks_are_contiguous() {
        for field in fields::ALL {
            let shifted = field.mask >> field.mask.trailing_zeros();
            assert_eq!(shifted & shifted.wrapping_add(1), 0, "{}", field.name);
            assert_eq!(field.get(field.set(0, 0xFF)), get_bits(0xFF, field.mask));
            assert!(field.width() >= 1);
        }
    }
}
