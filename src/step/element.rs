use crate::io::IoPointId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identity of an element within a program.
pub type ElementId = Uuid;

/// The value carried by an element.
///
/// Boolean for I/O conditions and actions, numeric for delay magnitudes and
/// loop counters, text for free-form entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            ElementValue::Bool(b) => write!(f, "{}", b),
            ElementValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Time unit attached to delay elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "ms")]
    Ms,
    #[serde(rename = "sec", alias = "s")]
    Sec,
    #[serde(rename = "min")]
    Min,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Ms => write!(f, "ms"),
            TimeUnit::Sec => write!(f, "sec"),
            TimeUnit::Min => write!(f, "min"),
        }
    }
}

/// A single labeled value inside an instruction step.
///
/// Elements are exclusively owned by their parent step. The optional
/// `io_ref` ties the element to an external I/O point for display only;
/// the I/O list itself is never owned by the step tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub label: String,
    pub value: ElementValue,
    pub unit: Option<TimeUnit>,
    pub io_ref: Option<IoPointId>,
}

impl Element {
    pub fn new(label: &str, value: ElementValue) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
            value,
            unit: None,
            io_ref: None,
        }
    }

    pub fn with_unit(label: &str, value: ElementValue, unit: TimeUnit) -> Self {
        Self {
            unit: Some(unit),
            ..Self::new(label, value)
        }
    }

    /// Renders the element as `label:value` with the unit appended when present.
    pub fn render(&self) -> String {
        match self.unit {
            Some(unit) => format!("{}:{}{}", self.label, self.value, unit),
            None => format!("{}:{}", self.label, self.value),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
