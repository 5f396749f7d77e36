//! Integration tests for ladderspec
//!
//! End-to-end tests that verify conversion, editing, export and persistence
//! work together.
mod common;
use common::*;
use ladderspec::prelude::*;

#[test]
fn test_legacy_json_to_canonical_program() {
    let raw = RawProgram::from_json(LEGACY_PROGRAM_JSON).expect("valid JSON");
    let program = raw.into_program().expect("convertible");

    assert_eq!(program.name, "Legacy Clamp");
    // INPUT, DELAY, GROUP and its OUTPUT child.
    assert_eq!(program.total_steps, 4);
    assert_eq!(collect_numbers(&program.steps), vec![1, 2, 3, 4]);

    let input = &program.steps[0];
    assert_eq!(input.kind(), Some(InstructionKind::Input));
    assert_eq!(input.elements().len(), 2);
    assert_eq!(input.operators(), &[LogicalOperator::And]);

    let group = &program.steps[2];
    assert!(group.is_group());
    assert_eq!(group.children().len(), 1);

    // The legacy ioPointId string reference is remapped onto the typed id.
    let bound = &group.children()[0].elements()[0];
    assert_eq!(bound.io_ref, Some(program.io_list[0].id));
}

#[test]
fn test_conversion_rejects_unknown_kind() {
    let json = r#"{ "name": "Bad", "steps": [ { "type": "CONTACT", "elements": [] } ] }"#;
    let result = RawProgram::from_json(json).unwrap().into_program();

    assert!(matches!(
        result,
        Err(ProgramConversionError::UnknownInstructionKind { .. })
    ));
}

#[test]
fn test_conversion_rejects_unknown_operator() {
    let json = r#"{
        "name": "Bad",
        "steps": [ {
            "type": "INPUT",
            "elements": [
                { "label": "A", "value": true },
                { "label": "B", "value": true }
            ],
            "operators": ["NAND"]
        } ]
    }"#;
    let result = RawProgram::from_json(json).unwrap().into_program();

    assert!(matches!(
        result,
        Err(ProgramConversionError::UnknownOperator { .. })
    ));
}

#[test]
fn test_full_pipeline_edit_export_save() {
    // Convert the legacy shape, keep editing it, export and persist.
    let program = RawProgram::from_json(LEGACY_PROGRAM_JSON)
        .unwrap()
        .into_program()
        .unwrap();
    let mut editor = SequenceEditor::from_program(program);

    let delay = editor.add_step(StepKind::Instruction(InstructionKind::Delay), None);
    editor.set_time_unit(delay, TimeUnit::Sec);

    let notes = NotesFormatter::format_program(editor.program());
    assert!(notes.contains("Step 1: INPUT"));
    assert!(notes.contains("50ms"));
    assert!(notes.contains("50sec"));

    let variables = format_variables(editor.program());
    assert!(variables.contains("PROGRAM PLC_PRG"));
    assert!(variables.contains("Clamp_Rev AT Y1 : BOOL"));

    let mut store = MemoryRecipeStore::new();
    store.save("legacy-clamp", editor.program()).unwrap();
    let loaded = store.load("legacy-clamp").unwrap().expect("saved");
    assert_eq!(&loaded, editor.program());
}

#[test]
fn test_recipe_survives_byte_level_transport() {
    let program = RawProgram::from_json(LEGACY_PROGRAM_JSON)
        .unwrap()
        .into_program()
        .unwrap();

    let mut book = RecipeBook::default();
    book.recipes.insert("legacy".to_string(), program.clone());
    let decoded = RecipeBook::from_bytes(&book.to_bytes().unwrap()).unwrap();

    // Exports from the decoded copy match the original byte for byte.
    let original = &book.recipes["legacy"];
    let restored = &decoded.recipes["legacy"];
    assert_eq!(
        NotesFormatter::format_program(original),
        NotesFormatter::format_program(restored)
    );
    assert_eq!(format_variables(original), format_variables(restored));
}
