//! Escher (Office Drawing) property codec.
//!
//! Shape options travel as a list of properties, each led by a packed
//! 16-bit identifier: the low 14 bits carry the property number, bit 14
//! marks blip-reference values, bit 15 marks complex (variable-length)
//! properties. Layout per MS-ODRAW section 2.3.
//!
//! An Opt record serializes the 6-byte fixed parts of all properties
//! first, then each complex property appends its variable-length data
//! in the same order.

use std::io::Write;

use crate::error::{BiffError, BiffResult};

mod complex;
mod simple;

pub use complex::EscherComplexProperty;
pub use simple::EscherSimpleProperty;

/// Bit 14: the value is a blip (picture) reference.
pub const IS_BLIP: u16 = 0x4000;
/// Bit 15: variable-length data follows the fixed parts.
pub const IS_COMPLEX: u16 = 0x8000;
/// Lower 14 bits: property number.
pub const PROPERTY_NUMBER_MASK: u16 = 0x3FFF;

/// Packed 16-bit property identifier.
///
/// The identifier is distinct from the property number: it combines the
/// number with the blip and complex flag bits in the positions the wire
/// format fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(u16);

impl PropertyId {
    /// Pack a property number and the two flag bits.
    ///
    /// Numbers above the 14-bit range are rejected rather than silently
    /// masked. Callers holding a raw wire identifier use
    /// [`from_raw`](Self::from_raw), which is total.
    pub fn new(property_number: u16, is_complex: bool, is_blip_id: bool) -> BiffResult<Self> {
        if property_number > PROPERTY_NUMBER_MASK {
            return Err(BiffError::PropertyNumberOutOfRange {
                number: property_number,
            });
        }
        let mut raw = property_number;
        if is_complex {
            raw |= IS_COMPLEX;
        }
        if is_blip_id {
            raw |= IS_BLIP;
        }
        Ok(Self(raw))
    }

    /// Reinterpret a raw 16-bit identifier; never fails.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The packed 16-bit value as it appears on the wire.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The 14-bit property number.
    #[inline]
    pub const fn property_number(self) -> u16 {
        self.0 & PROPERTY_NUMBER_MASK
    }

    /// True if variable-length data follows the fixed parts.
    #[inline]
    pub const fn is_complex(self) -> bool {
        self.0 & IS_COMPLEX != 0
    }

    /// True if the value is a reference into the blip store.
    #[inline]
    pub const fn is_blip_id(self) -> bool {
        self.0 & IS_BLIP != 0
    }
}

/// Shared serialization contract for simple and complex properties.
///
/// Both halves return the byte count they wrote so the Opt record
/// writer can account for the variable section without inspecting
/// property kinds.
pub trait EscherProperty {
    /// Packed identifier of this property.
    fn id(&self) -> PropertyId;

    /// Write the 6-byte fixed part; returns the bytes written.
    fn serialize_fixed_part(&self, writer: &mut dyn Write) -> BiffResult<usize>;

    /// Write the trailing variable part; returns the bytes written
    /// (zero for simple properties).
    fn serialize_variable_part(&self, writer: &mut dyn Write) -> BiffResult<usize>;

    /// Total encoded size of both parts.
    fn serialized_size(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_sets_fixed_bit_positions() {
        let id = PropertyId::new(0x0181, false, false).unwrap();
        assert_eq!(id.raw(), 0x0181);

        let id = PropertyId::new(0x0104, false, true).unwrap();
        assert_eq!(id.raw(), 0x4104);

        let id = PropertyId::new(0x0145, true, false).unwrap();
        assert_eq!(id.raw(), 0x8145);

        let id = PropertyId::new(0x3FFF, true, true).unwrap();
        assert_eq!(id.raw(), 0xFFFF);
    }

    #[test]
    fn test_unpack_is_total() {
        for raw in [0x0000u16, 0x0181, 0x4104, 0x8145, 0xFFFF] {
            let id = PropertyId::from_raw(raw);
            assert_eq!(id.raw(), raw);
            assert_eq!(id.property_number(), raw & PROPERTY_NUMBER_MASK);
            assert_eq!(id.is_blip_id(), raw & IS_BLIP != 0);
            assert_eq!(id.is_complex(), raw & IS_COMPLEX != 0);
        }
    }

    #[test]
    fn test_out_of_range_number_is_rejected() {
        let err = PropertyId::new(0x4000, false, false).unwrap_err();
        assert!(matches!(
            err,
            BiffError::PropertyNumberOutOfRange { number: 0x4000 }
        ));
        assert!(PropertyId::new(0xFFFF, true, true).is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pack_unpack_agree_on_in_range_numbers(
                number in 0u16..=0x3FFF,
                is_complex: bool,
                is_blip_id: bool,
            ) {
                let id = PropertyId::new(number, is_complex, is_blip_id).unwrap();
                prop_assert_eq!(id.property_number(), number);
                prop_assert_eq!(id.is_complex(), is_complex);
                prop_assert_eq!(id.is_blip_id(), is_blip_id);
            }

            #[test]
            fn raw_round_trip_is_a_bijection(raw: u16) {
                let id = PropertyId::from_raw(raw);
                let mut repacked = id.property_number();
                if id.is_complex() {
                    repacked |= IS_COMPLEX;
                }
                if id.is_blip_id() {
                    repacked |= IS_BLIP;
                }
                prop_assert_eq!(repacked, raw);
            }
        }
    }
}
