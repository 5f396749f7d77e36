//! Raw structs for the legacy browser-editor JSON shape.
//!
//! The source format grew several incompatible step schemas over time;
//! these structs accept their union (camelCase aliases, optional
//! `groupSteps` children, stringly-typed kinds, stray UI flags) and convert
//! it into the one canonical [`Program`] model. UI-only fields are accepted
//! and dropped.

use crate::error::ProgramConversionError;
use crate::io::{IoDataType, IoDirection, IoPoint, IoPointId};
use crate::program::{IntoProgram, Program};
use crate::step::{
    Element, ElementValue, InstructionKind, LogicalOperator, Step, StepBody, TimeUnit,
};
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

/// Legacy program wrapper.
#[derive(Debug, Deserialize)]
pub struct RawProgram {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_program_name")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<RawStep>,
    #[serde(default, alias = "ioList")]
    pub io_list: Vec<RawIoPoint>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
}

fn default_program_name() -> String {
    "New Program".to_string()
}

/// Legacy step: a bag of optional fields covering every historical shape.
#[derive(Debug, Deserialize)]
pub struct RawStep {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub elements: Vec<RawElement>,
    #[serde(default)]
    pub operators: Vec<String>,
    #[serde(default, alias = "repeatCount")]
    pub repeat_count: Option<i64>,
    #[serde(default, alias = "loopStart")]
    pub loop_start: Option<i64>,
    #[serde(default, alias = "loopEnd")]
    pub loop_end: Option<i64>,
    #[serde(default, alias = "groupName")]
    pub group_name: Option<String>,
    #[serde(default, alias = "groupSteps", alias = "children")]
    pub group_steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
pub struct RawElement {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    pub value: serde_json::Value,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, alias = "ioPointId")]
    pub io_point_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawIoPoint {
    #[serde(default)]
    pub id: Option<String>,
    pub address: String,
    #[serde(rename = "type")]
    pub direction: String,
    pub label: String,
    #[serde(alias = "dataType")]
    pub data_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawProgram {
    /// Parses the legacy JSON text.
    pub fn from_json(json: &str) -> Result<Self, ProgramConversionError> {
        serde_json::from_str(json)
            .map_err(|e| ProgramConversionError::JsonParseError(e.to_string()))
    }
}

impl IntoProgram for RawProgram {
    fn into_program(self) -> Result<Program, ProgramConversionError> {
        // I/O points first: elements reference them by the legacy string
        // id, which gets replaced with a fresh typed id here.
        let mut id_map: AHashMap<String, IoPointId> = AHashMap::new();
        let mut io_list = Vec::with_capacity(self.io_list.len());
        for raw in self.io_list {
            let point = convert_io_point(raw, &mut id_map)?;
            io_list.push(point);
        }

        let steps = self
            .steps
            .into_iter()
            .map(|raw| convert_step(raw, &id_map))
            .collect::<Result<Vec<Step>, ProgramConversionError>>()?;

        let mut program = Program::from_steps(&self.name, steps, io_list);
        program.description = self.description;
        if let Some(created) = self.created {
            program.created = created;
        }
        if let Some(modified) = self.modified {
            program.modified = modified;
        }
        Ok(program)
    }
}

fn convert_io_point(
    raw: RawIoPoint,
    id_map: &mut AHashMap<String, IoPointId>,
) -> Result<IoPoint, ProgramConversionError> {
    let direction = match raw.direction.trim().to_uppercase().as_str() {
        "INPUT" => IoDirection::Input,
        "OUTPUT" => IoDirection::Output,
        other => {
            return Err(ProgramConversionError::InvalidIoPoint {
                address: raw.address,
                message: format!("unknown direction '{}'", other),
            });
        }
    };
    let data_type = match raw.data_type.trim().to_uppercase().as_str() {
        "BOOL" => IoDataType::Bool,
        "INT" => IoDataType::Int,
        "REAL" => IoDataType::Real,
        "WORD" => IoDataType::Word,
        other => {
            return Err(ProgramConversionError::InvalidIoPoint {
                address: raw.address,
                message: format!("unknown data type '{}'", other),
            });
        }
    };

    let mut point = IoPoint::new(&raw.address, direction, &raw.label, data_type);
    point.description = raw.description;
    if let Some(legacy_id) = raw.id {
        id_map.insert(legacy_id, point.id);
    }
    Ok(point)
}

fn convert_step(
    raw: RawStep,
    id_map: &AHashMap<String, IoPointId>,
) -> Result<Step, ProgramConversionError> {
    let step_id = raw.id.clone().unwrap_or_default();

    if raw.kind.trim().eq_ignore_ascii_case("GROUP") {
        let children = raw
            .group_steps
            .into_iter()
            .map(|child| convert_step(child, id_map))
            .collect::<Result<Vec<Step>, ProgramConversionError>>()?;
        let mut step = Step::group(raw.group_name.as_deref().unwrap_or("New Group"));
        if let StepBody::Group { children: slot, .. } = &mut step.body {
            *slot = children;
        }
        return Ok(step);
    }

    let kind = InstructionKind::from_str(&raw.kind).map_err(|kind| {
        ProgramConversionError::UnknownInstructionKind {
            step_id: step_id.clone(),
            kind,
        }
    })?;

    let elements = raw
        .elements
        .into_iter()
        .map(|e| convert_element(e, &step_id, id_map))
        .collect::<Result<Vec<Element>, ProgramConversionError>>()?;

    let operators = raw
        .operators
        .iter()
        .map(|op| {
            LogicalOperator::from_str(op).map_err(|operator| {
                ProgramConversionError::UnknownOperator {
                    step_id: step_id.clone(),
                    operator,
                }
            })
        })
        .collect::<Result<Vec<LogicalOperator>, ProgramConversionError>>()?;

    // The historical shapes stored the repeat count under three names.
    let repeat = raw
        .repeat_count
        .or(raw.loop_start)
        .or(raw.loop_end)
        .filter(|_| kind.is_loop_boundary())
        .map(|n| n.max(0) as u32);

    let mut step = Step::instruction(kind, elements);
    if let StepBody::Instruction {
        operators: op_slot,
        repeat: repeat_slot,
        ..
    } = &mut step.body
    {
        *op_slot = operators;
        *repeat_slot = repeat;
    }
    Ok(step)
}

fn convert_element(
    raw: RawElement,
    step_id: &str,
    id_map: &AHashMap<String, IoPointId>,
) -> Result<Element, ProgramConversionError> {
    let value = match &raw.value {
        serde_json::Value::Bool(b) => ElementValue::Bool(*b),
        serde_json::Value::Number(n) => ElementValue::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => ElementValue::Text(s.clone()),
        other => {
            return Err(ProgramConversionError::ValidationError(format!(
                "step '{}': unsupported element value '{}'",
                step_id, other
            )));
        }
    };

    let unit = match raw.unit.as_deref() {
        None => None,
        Some("ms") => Some(TimeUnit::Ms),
        Some("sec") | Some("s") => Some(TimeUnit::Sec),
        Some("min") => Some(TimeUnit::Min),
        Some(other) => {
            return Err(ProgramConversionError::ValidationError(format!(
                "step '{}': unknown time unit '{}'",
                step_id, other
            )));
        }
    };

    let mut element = Element::new(&raw.label, value);
    element.unit = unit;
    // Legacy references either carry the original uuid or a foreign string
    // id remapped during I/O conversion; anything else stays unbound.
    element.io_ref = raw.io_point_id.and_then(|legacy| {
        id_map
            .get(&legacy)
            .copied()
            .or_else(|| Uuid::parse_str(&legacy).ok())
    });
    Ok(element)
}
