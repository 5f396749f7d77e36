use super::Element;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identity of a step within a program.
pub type StepId = Uuid;

/// The closed set of instruction kinds a leaf step can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionKind {
    Input,
    Output,
    Delay,
    Program,
    LoopStart,
    LoopEnd,
    Analog,
    Feedback,
}

impl InstructionKind {
    /// All instruction kinds in menu order.
    pub const ALL: [InstructionKind; 8] = [
        InstructionKind::Input,
        InstructionKind::Output,
        InstructionKind::Delay,
        InstructionKind::Program,
        InstructionKind::LoopStart,
        InstructionKind::LoopEnd,
        InstructionKind::Analog,
        InstructionKind::Feedback,
    ];

    /// Whether this kind describes a multi-condition step whose elements
    /// are joined by logical connectors.
    pub fn is_conditional(&self) -> bool {
        matches!(self, InstructionKind::Input | InstructionKind::Output)
    }

    /// Whether this kind marks a loop boundary and carries a repeat count.
    pub fn is_loop_boundary(&self) -> bool {
        matches!(self, InstructionKind::LoopStart | InstructionKind::LoopEnd)
    }
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstructionKind::Input => "INPUT",
            InstructionKind::Output => "OUTPUT",
            InstructionKind::Delay => "DELAY",
            InstructionKind::Program => "PROGRAM",
            InstructionKind::LoopStart => "LOOP START",
            InstructionKind::LoopEnd => "LOOP END",
            InstructionKind::Analog => "ANALOG",
            InstructionKind::Feedback => "FEEDBACK",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for InstructionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('_', " ").as_str() {
            "INPUT" => Ok(InstructionKind::Input),
            "OUTPUT" => Ok(InstructionKind::Output),
            "DELAY" => Ok(InstructionKind::Delay),
            "PROGRAM" => Ok(InstructionKind::Program),
            "LOOP START" => Ok(InstructionKind::LoopStart),
            "LOOP END" => Ok(InstructionKind::LoopEnd),
            "ANALOG" => Ok(InstructionKind::Analog),
            "FEEDBACK" => Ok(InstructionKind::Feedback),
            other => Err(other.to_string()),
        }
    }
}

/// What kind of step to construct: a leaf instruction or a group container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    Instruction(InstructionKind),
    Group,
}

impl From<InstructionKind> for StepKind {
    fn from(kind: InstructionKind) -> Self {
        StepKind::Instruction(kind)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Instruction(kind) => write!(f, "{}", kind),
            StepKind::Group => write!(f, "GROUP"),
        }
    }
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("GROUP") {
            return Ok(StepKind::Group);
        }
        InstructionKind::from_str(s).map(StepKind::Instruction)
    }
}

/// Logical connector placed between adjacent elements of a conditional step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
    Xor,
    Not,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
            LogicalOperator::Xor => "XOR",
            LogicalOperator::Not => "NOT",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for LogicalOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AND" => Ok(LogicalOperator::And),
            "OR" => Ok(LogicalOperator::Or),
            "XOR" => Ok(LogicalOperator::Xor),
            "NOT" => Ok(LogicalOperator::Not),
            other => Err(other.to_string()),
        }
    }
}

/// The body of a step: either a leaf instruction or a group container.
///
/// The two shapes are mutually exclusive. A group never carries elements
/// of its own and an instruction never carries children, so the invariant
/// holds structurally instead of through optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepBody {
    Instruction {
        kind: InstructionKind,
        elements: Vec<Element>,
        /// Connectors between adjacent elements, `elements.len() - 1` long
        /// for conditional kinds.
        operators: Vec<LogicalOperator>,
        /// Repeat count for loop-boundary kinds.
        repeat: Option<u32>,
    },
    Group {
        name: String,
        children: Vec<Step>,
    },
}

/// One node in the editable step sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    /// Display number, assigned by pre-order renumbering after each mutation.
    pub number: u32,
    pub body: StepBody,
}

impl Step {
    /// Creates an instruction step with the given elements. The display
    /// number is assigned by the next renumbering pass.
    pub fn instruction(kind: InstructionKind, elements: Vec<Element>) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: 0,
            body: StepBody::Instruction {
                kind,
                elements,
                operators: Vec::new(),
                repeat: None,
            },
        }
    }

    /// Creates an empty group step with the given display name.
    pub fn group(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: 0,
            body: StepBody::Group {
                name: name.to_string(),
                children: Vec::new(),
            },
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.body, StepBody::Group { .. })
    }

    /// The instruction kind, or `None` for a group step.
    pub fn kind(&self) -> Option<InstructionKind> {
        match &self.body {
            StepBody::Instruction { kind, .. } => Some(*kind),
            StepBody::Group { .. } => None,
        }
    }

    /// The step's elements; empty for a group step.
    pub fn elements(&self) -> &[Element] {
        match &self.body {
            StepBody::Instruction { elements, .. } => elements,
            StepBody::Group { .. } => &[],
        }
    }

    /// The step's connector list; empty for a group step.
    pub fn operators(&self) -> &[LogicalOperator] {
        match &self.body {
            StepBody::Instruction { operators, .. } => operators,
            StepBody::Group { .. } => &[],
        }
    }

    /// Child steps of a group; empty for an instruction step.
    pub fn children(&self) -> &[Step] {
        match &self.body {
            StepBody::Group { children, .. } => children,
            StepBody::Instruction { .. } => &[],
        }
    }
}
