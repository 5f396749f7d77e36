//! Unit tests for core ladderspec functionality.
mod common;
use ladderspec::error::{ProgramConversionError, StoreError};
use ladderspec::prelude::*;
use std::str::FromStr;

#[test]
fn test_element_value_display() {
    assert_eq!(format!("{}", ElementValue::Number(42.0)), "42");
    assert_eq!(format!("{}", ElementValue::Number(2.5)), "2.5");
    assert_eq!(format!("{}", ElementValue::Bool(true)), "true");
    assert_eq!(format!("{}", ElementValue::Text("Fwd".to_string())), "Fwd");
}

#[test]
fn test_instruction_kind_display() {
    assert_eq!(format!("{}", InstructionKind::Input), "INPUT");
    assert_eq!(format!("{}", InstructionKind::LoopStart), "LOOP START");
    assert_eq!(format!("{}", StepKind::Group), "GROUP");
    assert_eq!(
        format!("{}", StepKind::Instruction(InstructionKind::Delay)),
        "DELAY"
    );
}

#[test]
fn test_instruction_kind_parsing() {
    assert_eq!(
        InstructionKind::from_str("LOOP START"),
        Ok(InstructionKind::LoopStart)
    );
    // Underscore spelling from one of the historical schemas.
    assert_eq!(
        InstructionKind::from_str("LOOP_START"),
        Ok(InstructionKind::LoopStart)
    );
    assert_eq!(InstructionKind::from_str("output"), Ok(InstructionKind::Output));
    assert!(InstructionKind::from_str("CONTACT").is_err());

    assert_eq!(StepKind::from_str("group"), Ok(StepKind::Group));
}

#[test]
fn test_logical_operator_parsing() {
    assert_eq!(LogicalOperator::from_str("XOR"), Ok(LogicalOperator::Xor));
    assert_eq!(LogicalOperator::from_str("and"), Ok(LogicalOperator::And));
    assert!(LogicalOperator::from_str("NAND").is_err());
}

#[test]
fn test_element_render_with_unit() {
    let element = Element::with_unit("Delay", ElementValue::Number(50.0), TimeUnit::Ms);
    assert_eq!(element.render(), "Delay:50ms");

    let plain = Element::new("Clamp", ElementValue::Bool(false));
    assert_eq!(plain.render(), "Clamp:false");
}

#[test]
fn test_time_unit_display() {
    assert_eq!(format!("{}", TimeUnit::Ms), "ms");
    assert_eq!(format!("{}", TimeUnit::Sec), "sec");
    assert_eq!(format!("{}", TimeUnit::Min), "min");
}

#[test]
fn test_error_display() {
    let err = ProgramConversionError::UnknownInstructionKind {
        step_id: "step-7".to_string(),
        kind: "CONTACT".to_string(),
    };
    assert!(err.to_string().contains("step-7"));
    assert!(err.to_string().contains("CONTACT"));

    let store_err = StoreError::Decode("bad header".to_string());
    assert!(store_err.to_string().contains("bad header"));
}

#[test]
fn test_ui_flags_exclusive_toggle() {
    let mut flags = UiFlags::new();
    let a = uuid::Uuid::new_v4();
    let b = uuid::Uuid::new_v4();

    flags.toggle(a);
    assert!(flags.is_open(a));

    // Opening another id closes the first.
    flags.toggle(b);
    assert!(flags.is_open(b));
    assert!(!flags.is_open(a));

    // Toggling the open id closes it.
    flags.toggle(b);
    assert!(!flags.is_open(b));

    flags.toggle(a);
    flags.close_all();
    assert!(!flags.is_open(a));
}

#[test]
fn test_step_accessors() {
    let step = Step::instruction(
        InstructionKind::Input,
        vec![Element::new("A", ElementValue::Bool(true))],
    );
    assert!(!step.is_group());
    assert_eq!(step.kind(), Some(InstructionKind::Input));
    assert_eq!(step.elements().len(), 1);
    assert!(step.children().is_empty());

    let group = Step::group("G");
    assert!(group.is_group());
    assert_eq!(group.kind(), None);
    assert!(group.elements().is_empty());
}
