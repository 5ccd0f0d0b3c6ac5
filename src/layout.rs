//! Space-efficient struct layout as a sorting consumer.
//!
//! Fields are tagged with their declaration index and physically reordered
//! biggest-first to minimize padding. A declaration-index to physical-slot
//! table is built once at construction, so every field stays addressable by
//! the order it was declared in no matter where it physically ended up.

use crate::comparator::{key_order, Rev};
use crate::stable::rank_sort;

/// A field as it ended up in the physical layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhysicalField {
    /// Position of the field in the declaration order it was supplied in.
    pub decl_index: usize,
    pub size: usize,
    pub offset: usize,
}

#[derive(Clone, Debug)]
pub struct StructLayout {
    physical: Vec<PhysicalField>,
    slot_of_decl: Vec<usize>,
    size: usize,
}

impl StructLayout {
    /// Computes the layout for fields of the given byte sizes, supplied in
    /// declaration order.
    ///
    /// The sort is descending by size and stable, so equal-size fields keep
    /// their declaration order. Offsets are assigned by prefix sum; for
    /// power-of-two field sizes, biggest-first packing leaves no padding.
    pub fn optimize(field_sizes: &[usize]) -> StructLayout {
        let tagged: Vec<(usize, usize)> = field_sizes.iter().copied().enumerate().collect();

        let by_size_desc = Rev(key_order(|field: &(usize, usize)| field.1));
        let sorted = rank_sort::sorted_by(&tagged, &by_size_desc);

        let mut physical = Vec::with_capacity(sorted.len());
        let mut slot_of_decl = vec![0; sorted.len()];
        let mut offset = 0;
        for (slot, (decl_index, size)) in sorted.into_iter().enumerate() {
            slot_of_decl[decl_index] = slot;
            physical.push(PhysicalField {
                decl_index,
                size,
                offset,
            });
            offset += size;
        }

        StructLayout {
            physical,
            slot_of_decl,
            size: offset,
        }
    }

    /// Physical slot of the field declared at `decl_index`.
    pub fn slot(&self, decl_index: usize) -> usize {
        self.slot_of_decl[decl_index]
    }

    /// The field declared at `decl_index`, wherever it physically ended up.
    pub fn field(&self, decl_index: usize) -> &PhysicalField {
        &self.physical[self.slot_of_decl[decl_index]]
    }

    /// Byte offset of the field declared at `decl_index`.
    pub fn offset(&self, decl_index: usize) -> usize {
        self.field(decl_index).offset
    }

    /// Fields in physical order.
    pub fn physical_fields(&self) -> &[PhysicalField] {
        &self.physical
    }

    /// Total byte size of the layout.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.physical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.physical.is_empty()
    }
}
