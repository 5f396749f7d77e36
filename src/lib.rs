//! # Ladderspec - Step-Sequence Editor and Export Engine
//!
//! **Ladderspec** is the domain core of a ladder-logic intake editor: a
//! linear sequence of PLC-style instruction steps (inputs, outputs, delays,
//! loops, groups) that can be assembled, edited and exported as plain text
//! or as a pseudo-CODESYS variable dump. It is a *specification* editor,
//! not a runtime: nothing here executes against live I/O.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical `Program`
//! model. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your own program format (e.g. the legacy
//!     browser-editor JSON) into your own Rust structs.
//! 2.  **Convert to the Canonical Model**: Implement the `IntoProgram`
//!     trait for your structs, or use the bundled `ui::RawProgram` for the
//!     legacy JSON shape.
//! 3.  **Edit**: Wrap the program in a `SequenceEditor` and apply
//!     structural operations; the editor renumbers the tree and notifies
//!     observers after every change.
//! 4.  **Export / Save**: Render the program with the `export` formatters,
//!     or persist it by name through a `RecipeStore`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ladderspec::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 3. Assemble a program through the editor.
//!     let mut editor = SequenceEditor::builder("Clamp cycle").build();
//!     editor.add_step(StepKind::Instruction(InstructionKind::Output), None);
//!     let delay = editor.add_step(StepKind::Instruction(InstructionKind::Delay), None);
//!     editor.set_time_unit(delay, TimeUnit::Ms);
//!
//!     // Nested groups behave like any other step.
//!     let group = editor.add_group();
//!     editor.add_step(StepKind::Instruction(InstructionKind::Input), Some(group));
//!
//!     // 4. Export both text artifacts.
//!     let notes = NotesFormatter::format_program(editor.program());
//!     let variables = format_variables(editor.program());
//!     println!("{notes}");
//!     println!("{variables}");
//!
//!     // ...and save the result under a recipe name.
//!     let mut store = FileRecipeStore::open("recipes.bin")?;
//!     store.save("clamp-cycle", editor.program())?;
//!
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod export;
pub mod io;
pub mod prelude;
pub mod program;
pub mod step;
pub mod ui;
