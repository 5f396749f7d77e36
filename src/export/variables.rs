//! The structured "variable dump" export: the tree flattened into
//! fixed-size parallel arrays and rendered as a pseudo-CODESYS text block.

use crate::io::IoPoint;
use crate::program::Program;
use crate::step::{
    self, ElementValue, InstructionKind, LogicalOperator, Step, StepBody, TimeUnit,
};
use itertools::Itertools;
use std::fmt::Write;

/// Upper bound on exported steps; steps past this index are dropped.
pub const MAX_STEPS: usize = 100;
/// Upper bound on exported elements per step.
pub const MAX_ELEMENTS_PER_STEP: usize = 5;

/// Numeric code written into the instruction-kind array.
pub fn kind_code(kind: InstructionKind) -> i32 {
    match kind {
        InstructionKind::Input => 1,
        InstructionKind::Output => 2,
        InstructionKind::Delay => 3,
        InstructionKind::Program => 4,
        InstructionKind::LoopStart => 5,
        InstructionKind::LoopEnd => 6,
        InstructionKind::Analog => 7,
        InstructionKind::Feedback => 8,
    }
}

/// The flattened program: groups inlined and discarded, contiguous 1-based
/// indices, parallel arrays capped at [`MAX_STEPS`] steps and
/// [`MAX_ELEMENTS_PER_STEP`] elements per step.
///
/// Per-element arrays are indexed by `step_index * MAX_ELEMENTS_PER_STEP +
/// element_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDump {
    /// Steps included after the cap.
    pub step_count: usize,
    /// Steps beyond [`MAX_STEPS`] that were dropped.
    pub truncated_steps: usize,
    pub kind_codes: Vec<i32>,
    /// 1 when the step's leading connector is OR, 0 otherwise.
    pub and_or_flags: Vec<i32>,
    pub input_counts: Vec<i32>,
    pub output_counts: Vec<i32>,
    /// Delay magnitudes normalized to milliseconds; 0 for non-delay steps.
    pub delay_ms: Vec<i64>,
    /// Loop repeat counts; 0 for non-loop steps.
    pub loop_counts: Vec<i64>,
    pub input_addresses: Vec<String>,
    pub input_values: Vec<String>,
    pub output_addresses: Vec<String>,
    pub output_values: Vec<String>,
}

impl VariableDump {
    /// Flattens the program into the parallel-array form. Pure: identical
    /// programs produce identical dumps.
    pub fn from_program(program: &Program) -> Self {
        let flat = step::flatten(&program.steps);
        let truncated_steps = flat.len().saturating_sub(MAX_STEPS);
        let included = &flat[..flat.len().min(MAX_STEPS)];

        let mut dump = Self {
            step_count: included.len(),
            truncated_steps,
            kind_codes: Vec::with_capacity(included.len()),
            and_or_flags: Vec::with_capacity(included.len()),
            input_counts: Vec::with_capacity(included.len()),
            output_counts: Vec::with_capacity(included.len()),
            delay_ms: Vec::with_capacity(included.len()),
            loop_counts: Vec::with_capacity(included.len()),
            input_addresses: Vec::new(),
            input_values: Vec::new(),
            output_addresses: Vec::new(),
            output_values: Vec::new(),
        };

        for step in included {
            dump.push_step(step, &program.io_list);
        }
        dump
    }

    fn push_step(&mut self, step: &Step, io_list: &[IoPoint]) {
        let StepBody::Instruction {
            kind,
            elements,
            operators,
            repeat,
        } = &step.body
        else {
            // flatten() only yields instruction steps.
            return;
        };

        self.kind_codes.push(kind_code(*kind));
        self.and_or_flags.push(match operators.first() {
            Some(LogicalOperator::Or) => 1,
            _ => 0,
        });

        let capped = &elements[..elements.len().min(MAX_ELEMENTS_PER_STEP)];
        let is_input = matches!(kind, InstructionKind::Input);
        let is_output = matches!(kind, InstructionKind::Output);
        self.input_counts
            .push(if is_input { capped.len() as i32 } else { 0 });
        self.output_counts
            .push(if is_output { capped.len() as i32 } else { 0 });

        self.delay_ms.push(match kind {
            InstructionKind::Delay => elements
                .first()
                .map(|e| delay_to_ms(&e.value, e.unit))
                .unwrap_or(0),
            _ => 0,
        });
        self.loop_counts.push(match kind {
            k if k.is_loop_boundary() => repeat.map(i64::from).unwrap_or(0),
            _ => 0,
        });

        // Per-element slots: fill the step's stride, padding unused slots
        // so the (step * stride + element) indexing stays aligned.
        for slot in 0..MAX_ELEMENTS_PER_STEP {
            let element = capped.get(slot);
            let (address, value) = match element {
                Some(e) => (resolve_address(e.io_ref, &e.label, io_list), render_value(&e.value)),
                None => (String::new(), String::new()),
            };
            if is_input {
                self.input_addresses.push(address);
                self.input_values.push(value);
                self.output_addresses.push(String::new());
                self.output_values.push(String::new());
            } else if is_output {
                self.input_addresses.push(String::new());
                self.input_values.push(String::new());
                self.output_addresses.push(address);
                self.output_values.push(value);
            } else {
                self.input_addresses.push(String::new());
                self.input_values.push(String::new());
                self.output_addresses.push(String::new());
                self.output_values.push(String::new());
            }
        }
    }

    /// Renders the dump as a pseudo-CODESYS program text: the I/O list as a
    /// `VAR_GLOBAL` block, then the parallel arrays as `VAR` declarations.
    pub fn render(&self, io_list: &[IoPoint]) -> String {
        let mut output = String::from("PROGRAM PLC_PRG\n");
        output.push_str("VAR_GLOBAL\n");
        output.push_str(&super::io_list::format_var_global(io_list));
        output.push_str("END_VAR\n\n");

        if self.truncated_steps > 0 {
            writeln!(
                &mut output,
                "(* {} step(s) beyond the {}-step limit were dropped *)",
                self.truncated_steps, MAX_STEPS
            )
            .unwrap();
        }

        output.push_str("VAR\n");
        output.push_str("  iStep : INT := 1;\n");
        writeln!(&mut output, "  iStepCount : INT := {};", self.step_count).unwrap();
        output.push_str(&render_int_array("iStepType", MAX_STEPS, &self.kind_codes));
        output.push_str(&render_int_array("xAndOr", MAX_STEPS, &self.and_or_flags));
        output.push_str(&render_int_array("iInCount", MAX_STEPS, &self.input_counts));
        output.push_str(&render_int_array("iOutCount", MAX_STEPS, &self.output_counts));
        output.push_str(&render_int_array("iDelayMs", MAX_STEPS, &self.delay_ms));
        output.push_str(&render_int_array("iLoopCount", MAX_STEPS, &self.loop_counts));

        let slots = MAX_STEPS * MAX_ELEMENTS_PER_STEP;
        output.push_str(&render_string_array("sInAddr", slots, &self.input_addresses));
        output.push_str(&render_string_array("sInVal", slots, &self.input_values));
        output.push_str(&render_string_array("sOutAddr", slots, &self.output_addresses));
        output.push_str(&render_string_array("sOutVal", slots, &self.output_values));
        output.push_str("END_VAR\n");
        output
    }
}

/// Convenience: flatten and render in one call against the program's own
/// I/O list.
pub fn format_variables(program: &Program) -> String {
    VariableDump::from_program(program).render(&program.io_list)
}

fn delay_to_ms(value: &ElementValue, unit: Option<TimeUnit>) -> i64 {
    let magnitude = match value {
        ElementValue::Number(n) => *n,
        ElementValue::Bool(_) | ElementValue::Text(_) => 0.0,
    };
    let factor = match unit.unwrap_or(TimeUnit::Ms) {
        TimeUnit::Ms => 1.0,
        TimeUnit::Sec => 1_000.0,
        TimeUnit::Min => 60_000.0,
    };
    (magnitude * factor) as i64
}

fn resolve_address(io_ref: Option<uuid::Uuid>, label: &str, io_list: &[IoPoint]) -> String {
    io_ref
        .and_then(|id| io_list.iter().find(|p| p.id == id))
        .map(|p| p.address.clone())
        .unwrap_or_else(|| label.to_string())
}

fn render_value(value: &ElementValue) -> String {
    match value {
        ElementValue::Bool(true) => "TRUE".to_string(),
        ElementValue::Bool(false) => "FALSE".to_string(),
        ElementValue::Number(_) => value.to_string(),
        // Quoting happens at array-rendering time.
        ElementValue::Text(s) => s.clone(),
    }
}

fn render_int_array<T: std::fmt::Display>(name: &str, size: usize, values: &[T]) -> String {
    format!(
        "  {} : ARRAY[1..{}] OF INT := [{}];\n",
        name,
        size,
        values.iter().join(", ")
    )
}

fn render_string_array(name: &str, size: usize, values: &[String]) -> String {
    format!(
        "  {} : ARRAY[1..{}] OF STRING := [{}];\n",
        name,
        size,
        values.iter().map(|v| format!("'{}'", v)).join(", ")
    )
}
