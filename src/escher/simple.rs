//! Simple (fixed-length) Escher property.

use std::io::Write;

use super::{EscherProperty, PropertyId};
use crate::binary::BiffReader;
use crate::error::BiffResult;

/// A property whose whole value fits in 32 bits.
///
/// Values that need more space travel as
/// [`EscherComplexProperty`](super::EscherComplexProperty) instead.
/// Immutable once built; equality and hashing cover the identifier and
/// the value only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscherSimpleProperty {
    id: PropertyId,
    value: i32,
}

impl EscherSimpleProperty {
    /// Pack the identifier parts and store the value.
    pub fn new(
        property_number: u16,
        is_complex: bool,
        is_blip_id: bool,
        value: i32,
    ) -> BiffResult<Self> {
        Ok(Self {
            id: PropertyId::new(property_number, is_complex, is_blip_id)?,
            value,
        })
    }

    /// Build from an already-packed identifier.
    pub const fn with_id(id: PropertyId, value: i32) -> Self {
        Self { id, value }
    }

    /// Read the 6-byte fixed part of a property.
    pub fn read(reader: &mut BiffReader<'_>) -> BiffResult<Self> {
        let id = PropertyId::from_raw(reader.read_u16()?);
        let value = reader.read_i32()?;
        Ok(Self { id, value })
    }

    /// The 32-bit value of this property.
    #[inline]
    pub const fn value(self) -> i32 {
        self.value
    }
}

impl EscherProperty for EscherSimpleProperty {
    fn id(&self) -> PropertyId {
        self.id
    }

    fn serialize_fixed_part(&self, writer: &mut dyn Write) -> BiffResult<usize> {
        writer.write_all(&self.id.raw().to_le_bytes())?;
        writer.write_all(&self.value.to_le_bytes())?;
        Ok(6)
    }

    // Simple properties carry no variable part; the method exists to
    // satisfy the contract shared with complex properties.
    fn serialize_variable_part(&self, _writer: &mut dyn Write) -> BiffResult<usize> {
        Ok(0)
    }

    fn serialized_size(&self) -> usize {
        6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_part_is_exactly_six_bytes() {
        let prop = EscherSimpleProperty::new(0x0181, false, false, 0x00C0_FFEE).unwrap();

        let mut buf = Vec::new();
        assert_eq!(prop.serialize_fixed_part(&mut buf).unwrap(), 6);
        assert_eq!(buf, [0x81, 0x01, 0xEE, 0xFF, 0xC0, 0x00]);

        let written = prop.serialize_variable_part(&mut buf).unwrap();
        assert_eq!(written, 0);
        assert_eq!(buf.len(), 6);
        assert_eq!(prop.serialized_size(), 6);
    }

    #[test]
    fn test_negative_value_little_endian() {
        let prop = EscherSimpleProperty::new(0x0004, false, false, -1).unwrap();
        let mut buf = Vec::new();
        prop.serialize_fixed_part(&mut buf).unwrap();
        assert_eq!(&buf[2..], [0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_read_inverts_serialize() {
        let prop = EscherSimpleProperty::new(0x0104, false, true, 3).unwrap();
        let mut buf = Vec::new();
        prop.serialize_fixed_part(&mut buf).unwrap();

        let decoded = EscherSimpleProperty::read(&mut BiffReader::new(&buf)).unwrap();
        assert_eq!(decoded, prop);
        assert_eq!(decoded.id().property_number(), 0x0104);
        assert!(decoded.id().is_blip_id());
        assert_eq!(decoded.value(), 3);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = EscherSimpleProperty::new(0x0181, false, false, 7).unwrap();
        let b = EscherSimpleProperty::new(0x0181, false, false, 7).unwrap();
        let c = EscherSimpleProperty::new(0x0181, false, false, 8).unwrap();
        let d = EscherSimpleProperty::new(0x0182, false, false, 7).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(EscherSimpleProperty::with_id(a.id(), 7), a);
    }

    #[test]
    fn test_out_of_range_number_propagates() {
        assert!(EscherSimpleProperty::new(0x7FFF, false, false, 0).is_err());
    }
}
