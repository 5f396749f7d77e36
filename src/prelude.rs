//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! ladderspec crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use ladderspec::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a legacy-format program and convert it
//! let program_json = std::fs::read_to_string("path/to/program.json")?;
//! let program = RawProgram::from_json(&program_json)?.into_program()?;
//!
//! // Edit and export
//! let mut editor = SequenceEditor::from_program(program);
//! editor.add_step(StepKind::Instruction(InstructionKind::Delay), None);
//! println!("{}", NotesFormatter::format_program(editor.program()));
//! # Ok(())
//! # }
//! ```

// Editing
pub use crate::editor::{ChangeObserver, EditorBuilder, SequenceEditor, UiFlags};

// Domain model
pub use crate::io::{IoDataType, IoDirection, IoPoint, IoPointId};
pub use crate::program::{IntoProgram, Program};
pub use crate::step::{
    Element, ElementId, ElementValue, InstructionKind, LogicalOperator, Step, StepBody, StepId,
    StepKind, TimeUnit,
};

// Conversion from the legacy JSON shape
pub use crate::ui::RawProgram;

// Export
pub use crate::export::{
    format_io_as_text, format_variables, NotesFormatter, VariableDump, MAX_ELEMENTS_PER_STEP,
    MAX_STEPS,
};

// Persistence
pub use crate::program::{FileRecipeStore, MemoryRecipeStore, RecipeBook, RecipeStore};

// Error types
pub use crate::error::{ProgramConversionError, StoreError};

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
