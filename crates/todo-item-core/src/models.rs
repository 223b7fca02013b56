//! Task Record
//!
//! The to-do entry shown by one row, with its closed status and importance sets.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TodoError;

/// Progress of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Ongoing,
    Completed,
}

impl Status {
    /// Badge order in edit mode
    pub const ALL: [Status; 3] = [Status::Pending, Status::Ongoing, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Ongoing => "ongoing",
            Status::Completed => "completed",
        }
    }

    /// Text shown on the badge
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Ongoing => "Ongoing",
            Status::Completed => "Completed",
        }
    }
}

impl FromStr for Status {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "ongoing" => Ok(Status::Ongoing),
            "completed" => Ok(Status::Completed),
            other => Err(TodoError::invalid("status", other)),
        }
    }
}

/// How important a task is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    #[default]
    Mid,
    High,
}

impl Importance {
    /// Selector option order
    pub const ALL: [Importance; 3] = [Importance::Low, Importance::Mid, Importance::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Low => "low",
            Importance::Mid => "mid",
            Importance::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Importance::Low => "Low",
            Importance::Mid => "Mid",
            Importance::High => "High",
        }
    }
}

impl FromStr for Importance {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Importance::Low),
            "mid" => Ok(Importance::Mid),
            "high" => Ok(Importance::High),
            other => Err(TodoError::invalid("importance", other)),
        }
    }
}

/// A single to-do entry, owned by the list that renders it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Unique identifier, never changed by an edit
    pub id: u32,
    /// Task description
    pub task: String,
    pub status: Status,
    pub importance: Importance,
}

impl TaskRecord {
    pub fn new(id: u32, task: impl Into<String>, status: Status, importance: Importance) -> Self {
        Self {
            id,
            task: task.into(),
            status,
            importance,
        }
    }
}
