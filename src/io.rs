//! I/O point records supplied by the external I/O configuration collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type IoPointId = Uuid;

/// Signal direction of an I/O point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IoDirection {
    #[serde(rename = "INPUT")]
    Input,
    #[serde(rename = "OUTPUT")]
    Output,
}

impl fmt::Display for IoDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoDirection::Input => write!(f, "INPUT"),
            IoDirection::Output => write!(f, "OUTPUT"),
        }
    }
}

/// Data type of the signal behind an I/O point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IoDataType {
    #[serde(rename = "BOOL")]
    Bool,
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "REAL")]
    Real,
    #[serde(rename = "WORD")]
    Word,
}

impl fmt::Display for IoDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IoDataType::Bool => "BOOL",
            IoDataType::Int => "INT",
            IoDataType::Real => "REAL",
            IoDataType::Word => "WORD",
        };
        write!(f, "{}", name)
    }
}

/// A named address exposed by the I/O configuration. Elements reference a
/// point by id for label binding only; the point list itself is owned by
/// the program, not by the step tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoPoint {
    pub id: IoPointId,
    pub address: String,
    pub direction: IoDirection,
    pub label: String,
    pub data_type: IoDataType,
    pub description: Option<String>,
}

impl IoPoint {
    pub fn new(address: &str, direction: IoDirection, label: &str, data_type: IoDataType) -> Self {
        Self {
            id: Uuid::new_v4(),
            address: address.to_string(),
            direction,
            label: label.to_string(),
            data_type,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
