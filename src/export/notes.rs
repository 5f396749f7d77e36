use crate::program::Program;
use crate::step::{Step, StepBody};
use std::fmt::Write;

/// Formats a program as the human-readable "notes" text form.
pub struct NotesFormatter;

impl NotesFormatter {
    /// Renders every step in pre-order: display number, kind, and each
    /// element as `label:value[unit]` with the logical connector between
    /// pairs. Group steps emit their name and recurse one indentation
    /// level deeper.
    pub fn format_program(program: &Program) -> String {
        Self::format_steps(&program.steps)
    }

    pub fn format_steps(steps: &[Step]) -> String {
        let mut output = String::new();
        crate::step::for_each(steps, &mut |step, depth| {
            let indent = "    ".repeat(depth);
            let marker = if depth > 0 { "- " } else { "" };
            writeln!(
                &mut output,
                "{}{}{}",
                indent,
                marker,
                Self::format_line(step)
            )
            .unwrap();
        });
        output
    }

    fn format_line(step: &Step) -> String {
        match &step.body {
            StepBody::Group { name, .. } => format!("Step {}: {}", step.number, name),
            StepBody::Instruction {
                kind,
                elements,
                operators,
                repeat,
            } => {
                let mut line = format!("Step {}: {}", step.number, kind);
                if !elements.is_empty() {
                    line.push_str(" - ");
                    for (i, element) in elements.iter().enumerate() {
                        if i > 0 {
                            let connector = operators
                                .get(i - 1)
                                .map(|op| op.to_string())
                                .unwrap_or_else(|| "AND".to_string());
                            line.push_str(&format!(" {} ", connector));
                        }
                        line.push_str(&element.render());
                    }
                }
                if let Some(count) = repeat {
                    line.push_str(&format!(" (repeat {})", count));
                }
                line
            }
        }
    }
}
