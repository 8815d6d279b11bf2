//! Step-by-step entry session.
//!
//! The session is plain data: the project header, one list of profile rows per
//! wall and the index of the current step. Every interaction is a method call
//! that either moves the session forward or returns the reason it cannot,
//! leaving previously entered data untouched.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RowError, SessionError};
use crate::input::{DEFAULT_CAPACITY, parse_lengths, validate_capacity};
use crate::profiles;
use crate::report::{CutPlan, ProfileGroups, build_plan};
use crate::types::{Item, ProjectInfo};

pub const INITIAL_ROWS: usize = 5;
pub const MAX_ROWS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ProjectInfo,
    /// Zero-based wall index.
    WallProfiles(usize),
    Summary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub profile: Option<String>,
    pub lengths: String,
}

impl ProfileRow {
    fn is_filled(&self) -> bool {
        self.profile.is_some() && !self.lengths.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallEntry {
    pub name: String,
    pub rows: Vec<ProfileRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    step: usize,
    project: ProjectInfo,
    capacity: u32,
    wall_count: usize,
    walls: Vec<WallEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            step: 1,
            project: ProjectInfo::default(),
            capacity: DEFAULT_CAPACITY,
            wall_count: 1,
            walls: Vec::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        match self.step {
            1 => Step::ProjectInfo,
            s if s - 1 <= self.wall_count => Step::WallProfiles(s - 2),
            _ => Step::Summary,
        }
    }

    pub fn project(&self) -> &ProjectInfo {
        &self.project
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn walls(&self) -> &[WallEntry] {
        &self.walls
    }

    /// Stores the project header and moves on to the first wall.
    pub fn submit_project(
        &mut self,
        project: ProjectInfo,
        wall_count: usize,
        capacity: i64,
    ) -> Result<(), SessionError> {
        if self.current_step() != Step::ProjectInfo {
            return Err(SessionError::WrongStep);
        }
        if wall_count == 0 {
            return Err(ConfigError::NoWalls.into());
        }
        let capacity = validate_capacity(capacity)?;

        self.project = project;
        self.capacity = capacity;
        self.wall_count = wall_count;
        // Rows entered for walls that still exist are kept
        self.walls.truncate(wall_count);
        for (i, wall) in self.walls.iter_mut().enumerate() {
            wall.name = wall_name(i);
        }
        self.step += 1;
        tracing::debug!(walls = wall_count, capacity, "project submitted");
        Ok(())
    }

    /// Rows of the wall on the current step, created blank on first visit.
    pub fn current_rows(&mut self) -> Result<&mut Vec<ProfileRow>, SessionError> {
        let Step::WallProfiles(index) = self.current_step() else {
            return Err(SessionError::WrongStep);
        };
        while self.walls.len() <= index {
            let name = wall_name(self.walls.len());
            self.walls.push(WallEntry {
                name,
                rows: vec![ProfileRow::default(); INITIAL_ROWS],
            });
        }
        Ok(&mut self.walls[index].rows)
    }

    pub fn add_row(&mut self) -> Result<usize, SessionError> {
        let wall = self.current_wall_name()?;
        let rows = self.current_rows()?;
        if rows.len() >= MAX_ROWS {
            return Err(SessionError::TooManyRows {
                wall,
                max: MAX_ROWS,
            });
        }
        rows.push(ProfileRow::default());
        Ok(rows.len())
    }

    pub fn set_row(
        &mut self,
        row: usize,
        profile: Option<&str>,
        lengths: &str,
    ) -> Result<(), SessionError> {
        if let Some(name) = profile
            && !profiles::is_known(name)
        {
            return Err(SessionError::UnknownProfile(name.to_string()));
        }
        let wall = self.current_wall_name()?;
        let rows = self.current_rows()?;
        let slot = rows
            .get_mut(row)
            .ok_or(SessionError::NoSuchRow { wall, row })?;
        slot.profile = profile.map(str::to_string);
        slot.lengths = lengths.to_string();
        Ok(())
    }

    /// Per-row validation errors for the current wall, empty when all rows parse.
    pub fn row_errors(&mut self) -> Result<Vec<RowError>, SessionError> {
        let capacity = self.capacity;
        let wall = self.current_wall_name()?;
        let rows = self.current_rows()?;
        Ok(rows_errors(&wall, rows, capacity))
    }

    /// Advances from a wall step once its rows are valid and at least one is filled.
    pub fn next(&mut self) -> Result<Step, SessionError> {
        match self.current_step() {
            Step::WallProfiles(_) => {
                let errors = self.row_errors()?;
                if !errors.is_empty() {
                    tracing::debug!(errors = errors.len(), "wall rows rejected");
                    return Err(SessionError::InvalidRows(errors));
                }
                if !self.current_rows()?.iter().any(ProfileRow::is_filled) {
                    return Err(SessionError::NothingSelected);
                }
                self.step += 1;
                Ok(self.current_step())
            }
            Step::ProjectInfo | Step::Summary => Err(SessionError::WrongStep),
        }
    }

    pub fn back(&mut self) -> Step {
        if self.step > 1 {
            self.step -= 1;
        }
        self.current_step()
    }

    /// Returns to the project step, keeping everything entered so far.
    pub fn home(&mut self) {
        self.step = 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Groups all filled rows by profile.
    ///
    /// Every wall is re-validated against the current capacity, so rows that stopped
    /// parsing after a capacity change are reported instead of left out.
    pub fn profile_groups(&self) -> Result<ProfileGroups, SessionError> {
        let mut groups = ProfileGroups::new();
        let mut errors = Vec::new();
        for wall in &self.walls {
            for (row, entry) in wall.rows.iter().enumerate() {
                let lengths = match parse_lengths(&entry.lengths, self.capacity) {
                    Ok(lengths) => lengths,
                    Err(error) => {
                        errors.push(RowError {
                            wall: wall.name.clone(),
                            row,
                            error,
                        });
                        continue;
                    }
                };
                if let Some(profile) = &entry.profile
                    && !lengths.is_empty()
                {
                    groups.extend(
                        profile,
                        lengths.into_iter().map(|l| Item::new(l, &wall.name)),
                    );
                }
            }
        }

        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "session rows rejected");
            return Err(SessionError::InvalidRows(errors));
        }
        Ok(groups)
    }

    pub fn plan(&self) -> Result<CutPlan, SessionError> {
        Ok(build_plan(&self.profile_groups()?, self.capacity)?)
    }

    fn current_wall_name(&self) -> Result<String, SessionError> {
        match self.current_step() {
            Step::WallProfiles(index) => Ok(wall_name(index)),
            _ => Err(SessionError::WrongStep),
        }
    }
}

fn rows_errors(wall: &str, rows: &[ProfileRow], capacity: u32) -> Vec<RowError> {
    rows.iter()
        .enumerate()
        .filter_map(|(row, r)| {
            parse_lengths(&r.lengths, capacity)
                .err()
                .map(|error| RowError {
                    wall: wall.to_string(),
                    row,
                    error,
                })
        })
        .collect()
}

fn wall_name(index: usize) -> String {
    format!("Wall {}", index + 1)
}
