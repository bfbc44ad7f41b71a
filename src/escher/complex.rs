//! Complex (variable-length) Escher property.

use std::io::Write;

use bytes::Bytes;

use super::{EscherProperty, IS_COMPLEX, PropertyId};
use crate::error::BiffResult;

/// A property whose data does not fit in 32 bits.
///
/// The fixed part stores the byte length of the payload in place of a
/// value; the payload itself follows the fixed parts of all properties
/// in the Opt record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EscherComplexProperty {
    id: PropertyId,
    data: Bytes,
}

impl EscherComplexProperty {
    /// Pack the identifier parts and take ownership of the payload.
    pub fn new(property_number: u16, is_blip_id: bool, data: Bytes) -> BiffResult<Self> {
        Ok(Self {
            id: PropertyId::new(property_number, true, is_blip_id)?,
            data,
        })
    }

    /// Build from an already-packed identifier.
    ///
    /// The complex bit is forced on; an identifier without it would
    /// declare a fixed-size property.
    pub fn with_id(id: PropertyId, data: Bytes) -> Self {
        Self {
            id: PropertyId::from_raw(id.raw() | IS_COMPLEX),
            data,
        }
    }

    /// The variable-length payload.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl EscherProperty for EscherComplexProperty {
    fn id(&self) -> PropertyId {
        self.id
    }

    fn serialize_fixed_part(&self, writer: &mut dyn Write) -> BiffResult<usize> {
        writer.write_all(&self.id.raw().to_le_bytes())?;
        writer.write_all(&(self.data.len() as i32).to_le_bytes())?;
        Ok(6)
    }

    fn serialize_variable_part(&self, writer: &mut dyn Write) -> BiffResult<usize> {
        writer.write_all(&self.data)?;
        Ok(self.data.len())
    }

    fn serialized_size(&self) -> usize {
        6 + self.data.len()
    }
}
