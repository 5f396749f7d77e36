use super::definition::Program;
use crate::error::ProgramConversionError;

/// A trait for custom data models that can be converted into a canonical
/// `Program`.
///
/// This is the primary extension point for making the editor
/// format-agnostic. By implementing this trait on your own structs, you
/// provide a translation layer that lets the editor and the exporters work
/// with whatever wire or storage format your host application uses.
///
/// The crate ships one implementation: [`crate::ui::RawProgram`], covering
/// the legacy browser-editor JSON shape.
pub trait IntoProgram {
    /// Consumes the object and converts it into a canonical program.
    fn into_program(self) -> Result<Program, ProgramConversionError>;
}
