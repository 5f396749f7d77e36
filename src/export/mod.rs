//! Plain-text export of a program.
//!
//! Both forms are pure functions of the program (and its I/O list): no side
//! effects, byte-identical output for identical input.

pub mod io_list;
pub mod notes;
pub mod variables;

pub use io_list::*;
pub use notes::*;
pub use variables::*;
