use serde::{Deserialize, Serialize};

/// One required cut: a length in mm and the wall it was requested for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub length: u32,
    pub origin: String,
}

impl Item {
    pub fn new(length: u32, origin: impl Into<String>) -> Self {
        Self {
            length,
            origin: origin.into(),
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mm ---> {}", self.length, self.origin)
    }
}

/// Cuts assigned to a single stock bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    pub items: Vec<Item>,
}

impl Bin {
    pub fn total(&self) -> u64 {
        self.items.iter().map(|i| i.length as u64).sum()
    }

    /// Unused length of a bar of `capacity` mm after this bin's cuts.
    pub fn leftover(&self, capacity: u32) -> u64 {
        (capacity as u64).saturating_sub(self.total())
    }

    pub fn fits(&self, length: u32, capacity: u32) -> bool {
        self.total() + length as u64 <= capacity as u64
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub number: String,
}

impl ProjectInfo {
    /// Export file stem, e.g. `Tower_B_Cut_Lists`.
    pub fn export_stem(&self) -> String {
        format!("{}_Cut_Lists", self.name.replace(' ', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_totals() {
        let bin = Bin {
            items: vec![Item::new(3000, "Wall 1"), Item::new(2000, "Wall 1")],
        };
        assert_eq!(bin.total(), 5000);
        assert_eq!(bin.leftover(5880), 880);
        assert!(bin.fits(880, 5880));
        assert!(!bin.fits(881, 5880));
    }

    #[test]
    fn test_export_stem() {
        let project = ProjectInfo {
            name: "Tower B East".to_string(),
            number: "24-117".to_string(),
        };
        assert_eq!(project.export_stem(), "Tower_B_East_Cut_Lists");
    }

    #[test]
    fn test_item_display() {
        assert_eq!(Item::new(2500, "Wall 3").to_string(), "2500 mm ---> Wall 3");
    }
}
