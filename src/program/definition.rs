use crate::io::IoPoint;
use crate::step::{self, Step};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The complete, canonical definition of a ladder-logic program: the unit
/// that is exported and saved. This is the target structure for any custom
/// data model conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub steps: Vec<Step>,
    /// Denormalized pre-order step count, kept in sync by the editor.
    pub total_steps: u32,
    /// The I/O point list in effect when the program was last modified.
    pub io_list: Vec<IoPoint>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Program {
    /// Creates an empty program with the given name.
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            steps: Vec::new(),
            total_steps: 0,
            io_list: Vec::new(),
            created: now,
            modified: now,
        }
    }

    /// Creates a program from an existing step sequence, renumbering it and
    /// deriving the total step count.
    pub fn from_steps(name: &str, mut steps: Vec<Step>, io_list: Vec<IoPoint>) -> Self {
        step::renumber(&mut steps);
        let total_steps = step::count(&steps);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            steps,
            total_steps,
            io_list,
            created: now,
            modified: now,
        }
    }
}
