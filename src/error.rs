use thiserror::Error;

/// Rejections raised by the packer before any bin is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("capacity must be a positive length in mm")]
    InvalidCapacity,

    #[error("cut length must be positive ({origin})")]
    InvalidLength { origin: String },

    #[error("cut of {length} mm ({origin}) exceeds bar capacity {capacity} mm")]
    ItemExceedsCapacity {
        length: u32,
        origin: String,
        capacity: u32,
    },
}

/// Problems with one comma-separated list of lengths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("please enter valid numbers separated by commas ('{0}')")]
    NotANumber(String),

    #[error("all lengths must be positive numbers (got {0})")]
    NotPositive(i64),

    #[error("lengths cannot exceed {capacity}mm (got {length})")]
    ExceedsCapacity { length: i64, capacity: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maximum profile length must be between {min} and {max} mm, got {value}")]
    CapacityOutOfRange { value: i64, min: u32, max: u32 },

    #[error("number of walls must be at least 1")]
    NoWalls,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown profile '{0}'")]
    UnknownProfile(String),

    #[error("row {row} does not exist on {wall}")]
    NoSuchRow { wall: String, row: usize },

    #[error("{wall} already has the maximum of {max} profile rows")]
    TooManyRows { wall: String, max: usize },

    #[error("please fix the errors before proceeding")]
    InvalidRows(Vec<RowError>),

    #[error("please select at least one profile and enter its lengths")]
    NothingSelected,

    #[error("this action is not available on the current step")]
    WrongStep,

    #[error(transparent)]
    Pack(#[from] PackError),
}

/// A validation failure attached to the row it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub wall: String,
    pub row: usize,
    pub error: LengthError,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, profile {}: {}", self.wall, self.row + 1, self.error)
    }
}
