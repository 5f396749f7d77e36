//! Common test utilities for building programs and I/O lists.
use ladderspec::prelude::*;

/// Creates a simple two-step program: `OUTPUT` then `DELAY 50ms`.
#[allow(dead_code)]
pub fn create_simple_program() -> Program {
    let steps = vec![
        Step::instruction(
            InstructionKind::Output,
            vec![Element::new("L_AC.Fwd", ElementValue::Bool(true))],
        ),
        Step::instruction(
            InstructionKind::Delay,
            vec![Element::with_unit(
                "Delay",
                ElementValue::Number(50.0),
                TimeUnit::Ms,
            )],
        ),
    ];
    Program::from_steps("Simple", steps, vec![])
}

/// Creates a program containing a group with two children between two
/// top-level steps.
#[allow(dead_code)]
pub fn create_grouped_program() -> Program {
    let mut group = Step::group("Clamp Sequence");
    if let StepBody::Group { children, .. } = &mut group.body {
        children.push(Step::instruction(
            InstructionKind::Output,
            vec![Element::new("Clamp", ElementValue::Bool(true))],
        ));
        children.push(Step::instruction(
            InstructionKind::Delay,
            vec![Element::with_unit(
                "Delay",
                ElementValue::Number(100.0),
                TimeUnit::Ms,
            )],
        ));
    }

    let steps = vec![
        Step::instruction(
            InstructionKind::Input,
            vec![Element::new("Part_Present", ElementValue::Bool(true))],
        ),
        group,
        Step::instruction(
            InstructionKind::Output,
            vec![Element::new("Done", ElementValue::Bool(false))],
        ),
    ];
    Program::from_steps("Grouped", steps, vec![])
}

/// Creates a small I/O list with one input and one output point.
#[allow(dead_code)]
pub fn create_io_list() -> Vec<IoPoint> {
    vec![
        IoPoint::new("X0", IoDirection::Input, "Part_Present", IoDataType::Bool)
            .with_description("Part presence sensor"),
        IoPoint::new("Y0", IoDirection::Output, "L_AC.Fwd", IoDataType::Bool)
            .with_description("Conveyor forward"),
    ]
}

/// Collects the display numbers of every step in pre-order.
#[allow(dead_code)]
pub fn collect_numbers(steps: &[Step]) -> Vec<u32> {
    let mut numbers = Vec::new();
    ladderspec::step::for_each(steps, &mut |step, _| numbers.push(step.number));
    numbers
}

/// A legacy-format program JSON covering the historical shape quirks:
/// camelCase keys, `groupSteps` nesting and stray UI flags.
#[allow(dead_code)]
pub const LEGACY_PROGRAM_JSON: &str = r#"{
    "name": "Legacy Clamp",
    "steps": [
        {
            "id": "step-1",
            "stepNumber": 1,
            "type": "INPUT",
            "enabled": true,
            "showDropdown": false,
            "elements": [
                { "id": "el-1", "label": "L_AC.Fwd", "value": true },
                { "id": "el-2", "label": "Clam_Fwd", "value": false }
            ],
            "operators": ["AND"]
        },
        {
            "id": "step-2",
            "stepNumber": 2,
            "type": "DELAY",
            "enabled": true,
            "elements": [
                { "id": "el-3", "label": "Delay", "value": 50, "unit": "ms" }
            ]
        },
        {
            "id": "step-3",
            "stepNumber": 3,
            "type": "GROUP",
            "groupName": "Retract",
            "groupSteps": [
                {
                    "id": "step-4",
                    "type": "OUTPUT",
                    "elements": [
                        { "id": "el-4", "label": "Clamp_Rev", "value": true, "ioPointId": "io-1" }
                    ]
                }
            ]
        }
    ],
    "totalSteps": 3,
    "ioList": [
        {
            "id": "io-1",
            "address": "Y1",
            "type": "OUTPUT",
            "label": "Clamp_Rev",
            "dataType": "BOOL",
            "description": "Clamp retract coil"
        }
    ]
}"#;
