use crate::error::PackError;
use crate::types::{Bin, Item};

/// Largest-first first-fit packer for a single bar length.
#[derive(Debug, Clone, Copy)]
pub struct Packer {
    capacity: u32,
}

impl Packer {
    pub fn new(capacity: u32) -> Result<Self, PackError> {
        if capacity == 0 {
            return Err(PackError::InvalidCapacity);
        }
        Ok(Self { capacity })
    }

    /// Packs `items` into bars and returns the bins in the order they were opened.
    ///
    /// Every item must be positive and no longer than the capacity; the whole call
    /// is rejected otherwise, nothing is dropped or clamped.
    pub fn pack(&self, items: &[Item]) -> Result<Vec<Bin>, PackError> {
        for item in items {
            self.check_item(item)?;
        }

        let mut sorted: Vec<&Item> = items.iter().collect();
        // Stable, so equal lengths keep their input order
        sorted.sort_by(|a, b| b.length.cmp(&a.length));

        let mut bins: Vec<Bin> = Vec::new();
        for item in sorted {
            match bins.iter_mut().find(|b| b.fits(item.length, self.capacity)) {
                Some(bin) => bin.items.push(item.clone()),
                None => bins.push(Bin {
                    items: vec![item.clone()],
                }),
            }
        }

        tracing::debug!(
            capacity = self.capacity,
            items = items.len(),
            bins = bins.len(),
            "packed cuts"
        );
        Ok(bins)
    }

    fn check_item(&self, item: &Item) -> Result<(), PackError> {
        if item.length == 0 {
            return Err(PackError::InvalidLength {
                origin: item.origin.clone(),
            });
        }
        if item.length > self.capacity {
            return Err(PackError::ItemExceedsCapacity {
                length: item.length,
                origin: item.origin.clone(),
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

pub fn pack(items: &[Item], capacity: u32) -> Result<Vec<Bin>, PackError> {
    Packer::new(capacity)?.pack(items)
}

/// Bars needed if cuts could be spliced: `ceil(sum / capacity)`.
pub fn lower_bound(items: &[Item], capacity: u32) -> Result<usize, PackError> {
    if capacity == 0 {
        return Err(PackError::InvalidCapacity);
    }
    let total: u64 = items.iter().map(|i| i.length as u64).sum();
    Ok(total.div_ceil(capacity as u64) as usize)
}
