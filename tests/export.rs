//! Tests for the export serializers: notes form, variable dump and caps.
mod common;
use common::*;
use ladderspec::export::{
    format_io_as_text, format_variables, NotesFormatter, VariableDump, MAX_ELEMENTS_PER_STEP,
    MAX_STEPS,
};
use ladderspec::prelude::*;

#[test]
fn test_notes_contains_kinds_and_values_in_order() {
    let program = create_simple_program();
    let notes = NotesFormatter::format_program(&program);

    let output_pos = notes.find("OUTPUT").expect("OUTPUT rendered");
    let delay_pos = notes.find("50ms").expect("50ms rendered");
    assert!(output_pos < delay_pos);
}

#[test]
fn test_notes_renders_connectors_between_elements() {
    let mut editor = SequenceEditor::new("Connectors");
    let step = editor.add_step(StepKind::Instruction(InstructionKind::Input), None);
    editor.set_element_count(step, 2);
    editor.set_operator(step, 0, LogicalOperator::Or);

    let notes = NotesFormatter::format_program(editor.program());

    assert!(notes.contains("New_Label:true OR New_Label:true"));
}

#[test]
fn test_notes_renders_groups_with_indented_children() {
    let program = create_grouped_program();
    let notes = NotesFormatter::format_program(&program);

    assert!(notes.contains("Step 2: Clamp Sequence"));
    assert!(notes.contains("    - Step 3: OUTPUT"));
    assert!(notes.contains("    - Step 4: DELAY"));
}

#[test]
fn test_exports_are_pure() {
    let program = create_grouped_program();

    assert_eq!(
        NotesFormatter::format_program(&program),
        NotesFormatter::format_program(&program)
    );
    assert_eq!(format_variables(&program), format_variables(&program));
}

#[test]
fn test_variable_dump_caps_steps_at_100() {
    let mut editor = SequenceEditor::new("Capped");
    for _ in 0..101 {
        editor.add_step(StepKind::Instruction(InstructionKind::Output), None);
    }

    let dump = VariableDump::from_program(editor.program());

    assert_eq!(dump.step_count, MAX_STEPS);
    assert_eq!(dump.truncated_steps, 1);
    assert_eq!(dump.kind_codes.len(), 100);
    assert_eq!(dump.and_or_flags.len(), 100);
    assert_eq!(dump.output_counts.len(), 100);
    assert_eq!(dump.output_addresses.len(), 100 * MAX_ELEMENTS_PER_STEP);
}

#[test]
fn test_variable_dump_caps_elements_at_5() {
    let mut editor = SequenceEditor::new("Capped");
    let step = editor.add_step(StepKind::Instruction(InstructionKind::Input), None);
    editor.set_element_count(step, 6);

    let dump = VariableDump::from_program(editor.program());

    assert_eq!(dump.input_counts[0], 5);
    // Only the first five elements occupy the step's slot stride.
    assert_eq!(dump.input_addresses.len(), MAX_ELEMENTS_PER_STEP);
    assert!(dump.input_addresses.iter().all(|a| !a.is_empty()));
}

#[test]
fn test_variable_dump_inlines_groups() {
    let program = create_grouped_program();
    let dump = VariableDump::from_program(&program);

    // INPUT, group's OUTPUT + DELAY, trailing OUTPUT; the group itself
    // contributes no entry.
    assert_eq!(dump.step_count, 4);
    assert_eq!(dump.kind_codes, vec![1, 2, 3, 2]);
}

#[test]
fn test_variable_dump_normalizes_delay_to_ms() {
    let mut editor = SequenceEditor::new("Delays");
    let delay = editor.add_step(StepKind::Instruction(InstructionKind::Delay), None);
    editor.set_time_unit(delay, TimeUnit::Sec);
    let element = editor.element_id_at(delay, 0).unwrap();
    editor.set_element_value(delay, element, ElementValue::Number(2.0));

    let dump = VariableDump::from_program(editor.program());

    assert_eq!(dump.delay_ms, vec![2000]);
}

#[test]
fn test_variable_dump_uses_bound_addresses() {
    let mut editor = SequenceEditor::new("Binding");
    let io_list = create_io_list();
    let point = io_list[1].clone();
    editor.set_io_list(io_list);
    let step = editor.add_step(StepKind::Instruction(InstructionKind::Output), None);
    editor.bind_element_to_io_point(step, 0, &point);

    let dump = VariableDump::from_program(editor.program());

    assert_eq!(dump.output_addresses[0], "Y0");
    assert_eq!(dump.output_values[0], "TRUE");
}

#[test]
fn test_variable_render_structure() {
    let program = create_grouped_program();
    let rendered = format_variables(&program);

    assert!(rendered.starts_with("PROGRAM PLC_PRG\n"));
    assert!(rendered.contains("VAR_GLOBAL"));
    assert!(rendered.contains("iStepType : ARRAY[1..100] OF INT"));
    assert!(rendered.contains("END_VAR"));
    assert!(!rendered.contains("were dropped"));
}

#[test]
fn test_variable_render_surfaces_truncation() {
    let mut editor = SequenceEditor::new("Capped");
    for _ in 0..103 {
        editor.add_step(StepKind::Instruction(InstructionKind::Output), None);
    }

    let rendered = format_variables(editor.program());

    assert!(rendered.contains("(* 3 step(s) beyond the 100-step limit were dropped *)"));
}

#[test]
fn test_io_list_text_form() {
    let io_text = format_io_as_text(&create_io_list());

    assert!(io_text.contains("Inputs:"));
    assert!(io_text.contains("  - Part_Present (X0): Part presence sensor"));
    assert!(io_text.contains("Outputs:"));
    assert!(io_text.contains("  - L_AC.Fwd (Y0): Conveyor forward"));
}

#[test]
fn test_io_list_text_form_when_empty() {
    let io_text = format_io_as_text(&[]);

    assert!(io_text.contains("(No inputs defined)"));
    assert!(io_text.contains("(No outputs defined)"));
}

#[test]
fn test_var_global_block_in_render() {
    let program = Program::from_steps("IO", vec![], create_io_list());
    let rendered = format_variables(&program);

    assert!(rendered.contains("(* Inputs *)"));
    assert!(rendered.contains("  Part_Present AT X0 : BOOL; (* Part presence sensor *)"));
    assert!(rendered.contains("(* Outputs *)"));
}
