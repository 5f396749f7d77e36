//! Default step construction per instruction kind.

use crate::step::{Element, ElementValue, InstructionKind, Step, StepBody, StepKind, TimeUnit};

/// Label given to freshly created boolean elements.
pub const NEW_ELEMENT_LABEL: &str = "New_Label";

/// Constructs a new step of the given kind with the default element set
/// appropriate to that kind: none for a group, one boolean element for
/// condition/action kinds, one numeric element with a millisecond unit for
/// delays, a counter element plus repeat count for loop boundaries.
pub fn default_step(kind: StepKind) -> Step {
    match kind {
        StepKind::Group => Step::group("New Group"),
        StepKind::Instruction(kind) => {
            let mut step = Step::instruction(kind, default_elements(kind));
            if kind.is_loop_boundary() {
                if let StepBody::Instruction { repeat, .. } = &mut step.body {
                    *repeat = Some(1);
                }
            }
            step
        }
    }
}

fn default_elements(kind: InstructionKind) -> Vec<Element> {
    match kind {
        InstructionKind::Input | InstructionKind::Output => {
            vec![Element::new(NEW_ELEMENT_LABEL, ElementValue::Bool(true))]
        }
        InstructionKind::Delay => {
            vec![Element::with_unit(
                "Delay",
                ElementValue::Number(50.0),
                TimeUnit::Ms,
            )]
        }
        InstructionKind::LoopStart => {
            vec![Element::new("Cycle Count", ElementValue::Number(0.0))]
        }
        InstructionKind::LoopEnd => {
            vec![Element::new("Loop End", ElementValue::Number(0.0))]
        }
        InstructionKind::Program | InstructionKind::Analog | InstructionKind::Feedback => {
            Vec::new()
        }
    }
}

/// A freshly labeled boolean element used when growing an element list.
pub fn default_element() -> Element {
    Element::new(NEW_ELEMENT_LABEL, ElementValue::Bool(true))
}
