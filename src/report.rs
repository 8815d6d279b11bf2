//! Cut-plan reporting.
//!
//! Groups cuts by profile, packs each group into bars and annotates every bar
//! with its total and leftover. The resulting [`CutPlan`] is what the text
//! renderer and the JSON export consume.

use serde::{Deserialize, Serialize};

use crate::error::PackError;
use crate::packer::{Packer, lower_bound};
use crate::types::{Item, ProjectInfo};

/// Cuts per profile, in the order each profile was first entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileGroups {
    groups: Vec<(String, Vec<Item>)>,
}

impl ProfileGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, profile: &str, items: impl IntoIterator<Item = Item>) {
        match self.groups.iter_mut().find(|(p, _)| p == profile) {
            Some((_, existing)) => existing.extend(items),
            None => self
                .groups
                .push((profile.to_string(), items.into_iter().collect())),
        }
    }

    pub fn get(&self, profile: &str) -> Option<&[Item]> {
        self.groups
            .iter()
            .find(|(p, _)| p == profile)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.groups.iter().map(|(p, i)| (p.as_str(), i.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CutGroup {
    /// 1-based bar number within its profile.
    pub label: usize,
    pub total: u64,
    pub leftover: u64,
    pub cuts: Vec<Item>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePlan {
    pub profile: String,
    pub pieces: usize,
    /// Bars needed if cuts could be spliced; `pieces` never goes below it.
    pub min_pieces: usize,
    pub groups: Vec<CutGroup>,
}

impl ProfilePlan {
    pub fn total_cut(&self) -> u64 {
        self.groups.iter().map(|g| g.total).sum()
    }

    pub fn total_leftover(&self) -> u64 {
        self.groups.iter().map(|g| g.leftover).sum()
    }

    pub fn waste_percent(&self) -> f64 {
        let stock = self.total_cut() + self.total_leftover();
        if stock == 0 {
            return 0.0;
        }
        self.total_leftover() as f64 / stock as f64 * 100.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CutPlan {
    pub capacity: u32,
    pub profiles: Vec<ProfilePlan>,
}

impl CutPlan {
    pub fn bar_count(&self) -> usize {
        self.profiles.iter().map(|p| p.pieces).sum()
    }

    pub fn total_waste_percent(&self) -> f64 {
        let stock = self.bar_count() as u64 * self.capacity as u64;
        let leftover: u64 = self.profiles.iter().map(|p| p.total_leftover()).sum();
        if stock == 0 {
            return 0.0;
        }
        leftover as f64 / stock as f64 * 100.0
    }
}

/// Packs every profile group and numbers the resulting bars.
pub fn build_plan(groups: &ProfileGroups, capacity: u32) -> Result<CutPlan, PackError> {
    let packer = Packer::new(capacity)?;
    let profiles = groups
        .iter()
        .map(|(profile, items)| -> Result<ProfilePlan, PackError> {
            let bins = packer.pack(items)?;
            let min_pieces = lower_bound(items, capacity)?;
            let groups: Vec<CutGroup> = bins
                .into_iter()
                .enumerate()
                .map(|(i, bin)| CutGroup {
                    label: i + 1,
                    total: bin.total(),
                    leftover: bin.leftover(capacity),
                    cuts: bin.items,
                })
                .collect();
            tracing::info!(profile, pieces = groups.len(), "planned profile");
            Ok(ProfilePlan {
                profile: profile.to_string(),
                pieces: groups.len(),
                min_pieces,
                groups,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CutPlan { capacity, profiles })
}

/// Everything an external document generator needs for one export.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDocument {
    pub project: ProjectInfo,
    pub generated_at: String,
    pub capacity: u32,
    pub file_stem: String,
    pub plan: CutPlan,
}

impl PlanDocument {
    pub fn new(project: ProjectInfo, generated_at: String, plan: CutPlan) -> Self {
        Self {
            file_stem: project.export_stem(),
            capacity: plan.capacity,
            project,
            generated_at,
            plan,
        }
    }
}

/// Local wall-clock time in the export header format, e.g. `17-10-2026 14:03:59`.
pub fn timestamp_now() -> String {
    jiff::Zoned::now().strftime("%d-%m-%Y %H:%M:%S").to_string()
}
