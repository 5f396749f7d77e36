//! The step sequence controller: owns the canonical step tree and exposes
//! every structural operation over it.
//!
//! All mutations are synchronous and total. An unknown id leaves the tree
//! untouched; a successful mutation renumbers the whole tree, refreshes the
//! program's modified timestamp and notifies registered observers.

mod defaults;
mod presentation;

pub use defaults::{default_element, default_step, NEW_ELEMENT_LABEL};
pub use presentation::UiFlags;

use crate::io::IoPoint;
use crate::program::Program;
use crate::step::{
    self, Element, ElementId, ElementValue, InstructionKind, LogicalOperator, Step, StepBody,
    StepId, StepKind, TimeUnit,
};
use chrono::Utc;

/// Hook for external collaborators (persistence, export previews) that want
/// to react to every change of the program.
pub trait ChangeObserver {
    fn program_changed(&mut self, program: &Program);
}

pub struct SequenceEditor {
    program: Program,
    observers: Vec<Box<dyn ChangeObserver>>,
}

pub struct EditorBuilder {
    program: Program,
    observers: Vec<Box<dyn ChangeObserver>>,
}

impl EditorBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            program: Program::new(name),
            observers: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.program.description = Some(description.to_string());
        self
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.program.steps = steps;
        self
    }

    pub fn with_io_list(mut self, io_list: Vec<IoPoint>) -> Self {
        self.program.io_list = io_list;
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn ChangeObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn build(self) -> SequenceEditor {
        let mut editor = SequenceEditor {
            program: self.program,
            observers: self.observers,
        };
        step::renumber(&mut editor.program.steps);
        editor.program.total_steps = step::count(&editor.program.steps);
        editor
    }
}

impl SequenceEditor {
    pub fn builder(name: &str) -> EditorBuilder {
        EditorBuilder::new(name)
    }

    pub fn new(name: &str) -> Self {
        Self::builder(name).build()
    }

    /// Wraps an existing program, renumbering its steps on entry.
    pub fn from_program(mut program: Program) -> Self {
        step::renumber(&mut program.steps);
        program.total_steps = step::count(&program.steps);
        Self {
            program,
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn ChangeObserver>) {
        self.observers.push(observer);
    }

    pub fn steps(&self) -> &[Step] {
        &self.program.steps
    }

    pub fn io_list(&self) -> &[IoPoint] {
        &self.program.io_list
    }

    /// The current program aggregate.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Consumes the editor, yielding the program for saving or export.
    pub fn into_program(self) -> Program {
        self.program
    }

    /// Renumbers, refreshes bookkeeping and notifies observers. Called
    /// after every successful mutation.
    fn touch(&mut self) {
        step::renumber(&mut self.program.steps);
        self.program.total_steps = step::count(&self.program.steps);
        self.program.modified = Utc::now();
        for observer in &mut self.observers {
            observer.program_changed(&self.program);
        }
    }

    // --- Structural operations ---

    /// Appends a new step of the given kind with its default element set.
    /// When `parent` names an existing group step the new step lands in
    /// that group's child sequence; any other parent appends at top level.
    pub fn add_step(&mut self, kind: StepKind, parent: Option<StepId>) -> StepId {
        let new_step = default_step(kind);
        let new_id = new_step.id;

        let target_group = parent
            .filter(|pid| step::find(&self.program.steps, *pid).is_some_and(|s| s.is_group()));

        match target_group {
            Some(pid) => {
                step::update(&mut self.program.steps, pid, |group| {
                    if let StepBody::Group { children, .. } = &mut group.body {
                        children.push(new_step);
                    }
                });
            }
            None => self.program.steps.push(new_step),
        }
        self.touch();
        new_id
    }

    /// Appends an empty group step at top level.
    pub fn add_group(&mut self) -> StepId {
        self.add_step(StepKind::Group, None)
    }

    /// Inserts a default OUTPUT step right after the given top-level step.
    /// Unknown ids are a no-op.
    pub fn add_step_after(&mut self, id: StepId) -> Option<StepId> {
        let index = self.program.steps.iter().position(|s| s.id == id)?;
        let new_step = default_step(StepKind::Instruction(InstructionKind::Output));
        let new_id = new_step.id;
        self.program.steps.insert(index + 1, new_step);
        self.touch();
        Some(new_id)
    }

    /// Removes the step with the given id wherever it occurs. Removing a
    /// group discards all of its children.
    pub fn remove_step(&mut self, id: StepId) {
        if step::remove(&mut self.program.steps, id) {
            self.touch();
        }
    }

    /// Changes an instruction step's kind. Existing elements persist even
    /// when they no longer match the new kind; group steps are untouched.
    pub fn update_step_type(&mut self, id: StepId, new_kind: InstructionKind) {
        let mut changed = false;
        step::update(&mut self.program.steps, id, |s| {
            if let StepBody::Instruction { kind, .. } = &mut s.body {
                *kind = new_kind;
                changed = true;
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Grows or shrinks a conditional step's element list to exactly `n`
    /// entries, keeping the connector list at `n - 1` in lock-step. New
    /// elements are freshly labeled booleans, new connectors default to AND.
    pub fn set_element_count(&mut self, id: StepId, n: usize) {
        let mut changed = false;
        step::update(&mut self.program.steps, id, |s| {
            if let StepBody::Instruction {
                kind,
                elements,
                operators,
                ..
            } = &mut s.body
            {
                if !kind.is_conditional() {
                    return;
                }
                while elements.len() < n {
                    elements.push(default_element());
                    if elements.len() > 1 {
                        operators.push(LogicalOperator::And);
                    }
                }
                elements.truncate(n);
                operators.truncate(n.saturating_sub(1));
                changed = true;
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Replaces one element's value.
    pub fn set_element_value(&mut self, id: StepId, element_id: ElementId, value: ElementValue) {
        let mut changed = false;
        step::update(&mut self.program.steps, id, |s| {
            if let StepBody::Instruction { elements, .. } = &mut s.body {
                if let Some(element) = elements.iter_mut().find(|e| e.id == element_id) {
                    element.value = value;
                    changed = true;
                }
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Flips a boolean element's value; non-boolean values are untouched.
    pub fn toggle_element_value(&mut self, id: StepId, element_id: ElementId) {
        let mut changed = false;
        step::update(&mut self.program.steps, id, |s| {
            if let StepBody::Instruction { elements, .. } = &mut s.body {
                if let Some(element) = elements.iter_mut().find(|e| e.id == element_id) {
                    if let ElementValue::Bool(b) = &mut element.value {
                        *b = !*b;
                        changed = true;
                    }
                }
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Sets one element's display label by position.
    pub fn set_element_label(&mut self, id: StepId, element_index: usize, label: &str) {
        let mut changed = false;
        step::update(&mut self.program.steps, id, |s| {
            if let StepBody::Instruction { elements, .. } = &mut s.body {
                if let Some(element) = elements.get_mut(element_index) {
                    element.label = label.to_string();
                    changed = true;
                }
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Sets the time unit of a delay step's magnitude element.
    pub fn set_time_unit(&mut self, id: StepId, unit: TimeUnit) {
        let mut changed = false;
        step::update(&mut self.program.steps, id, |s| {
            if let StepBody::Instruction {
                kind: InstructionKind::Delay,
                elements,
                ..
            } = &mut s.body
            {
                if let Some(element) = elements.first_mut() {
                    element.unit = Some(unit);
                    changed = true;
                }
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Replaces one inter-element connector. Out-of-range indices are a
    /// no-op.
    pub fn set_operator(&mut self, id: StepId, connector_index: usize, operator: LogicalOperator) {
        let mut changed = false;
        step::update(&mut self.program.steps, id, |s| {
            if let StepBody::Instruction { operators, .. } = &mut s.body {
                if let Some(slot) = operators.get_mut(connector_index) {
                    *slot = operator;
                    changed = true;
                }
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Sets the repeat count of a loop-boundary step, clamped non-negative.
    pub fn set_repeat_count(&mut self, id: StepId, count: i64) {
        let clamped = count.max(0) as u32;
        let mut changed = false;
        step::update(&mut self.program.steps, id, |s| {
            if let StepBody::Instruction { kind, repeat, .. } = &mut s.body {
                if kind.is_loop_boundary() {
                    *repeat = Some(clamped);
                    changed = true;
                }
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Binds an element to an I/O point: the element takes the point's
    /// label and keeps a reference to it for display.
    pub fn bind_element_to_io_point(&mut self, id: StepId, element_index: usize, point: &IoPoint) {
        let mut changed = false;
        step::update(&mut self.program.steps, id, |s| {
            if let StepBody::Instruction { elements, .. } = &mut s.body {
                if let Some(element) = elements.get_mut(element_index) {
                    element.label = point.label.clone();
                    element.io_ref = Some(point.id);
                    changed = true;
                }
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Sets a group step's display name.
    pub fn rename_group(&mut self, id: StepId, name: &str) {
        let mut changed = false;
        step::update(&mut self.program.steps, id, |s| {
            if let StepBody::Group { name: group_name, .. } = &mut s.body {
                *group_name = name.to_string();
                changed = true;
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Appends a default OUTPUT step to a group's child sequence. Unknown
    /// or non-group ids are a no-op.
    pub fn add_step_to_group(&mut self, group_id: StepId) -> Option<StepId> {
        if !step::find(&self.program.steps, group_id).is_some_and(|s| s.is_group()) {
            return None;
        }
        Some(self.add_step(
            StepKind::Instruction(InstructionKind::Output),
            Some(group_id),
        ))
    }

    /// Removes a step from a specific group's child sequence.
    pub fn remove_step_from_group(&mut self, group_id: StepId, step_id: StepId) {
        let mut changed = false;
        step::update(&mut self.program.steps, group_id, |group| {
            if let StepBody::Group { children, .. } = &mut group.body {
                if let Some(pos) = children.iter().position(|s| s.id == step_id) {
                    children.remove(pos);
                    changed = true;
                }
            }
        });
        if changed {
            self.touch();
        }
    }

    /// Replaces the working I/O point list.
    pub fn set_io_list(&mut self, io_list: Vec<IoPoint>) {
        self.program.io_list = io_list;
        self.touch();
    }

    /// Renames the program itself.
    pub fn set_name(&mut self, name: &str) {
        self.program.name = name.to_string();
        self.touch();
    }

    /// Finds an element's id by step id and position, a convenience for
    /// callers that track elements positionally.
    pub fn element_id_at(&self, id: StepId, element_index: usize) -> Option<ElementId> {
        step::find(&self.program.steps, id)
            .and_then(|s| s.elements().get(element_index))
            .map(|e: &Element| e.id)
    }

    /// Writes both export artifacts for the current program under `tmp/`.
    #[cfg(feature = "debug-tools")]
    pub fn write_debug_artifacts(&self) -> std::io::Result<()> {
        let name = Self::sanitize_filename(&self.program.name);
        std::fs::create_dir_all("tmp")?;
        std::fs::write(
            format!("tmp/{}_notes.txt", name),
            crate::export::NotesFormatter::format_program(&self.program),
        )?;
        std::fs::write(
            format!("tmp/{}_variables.txt", name),
            crate::export::format_variables(&self.program),
        )?;
        Ok(())
    }

    #[cfg(feature = "debug-tools")]
    fn sanitize_filename(name: &str) -> String {
        name.chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect()
    }
}
