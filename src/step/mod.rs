pub mod element;
pub mod node;
pub mod visit;

pub use element::*;
pub use node::*;
pub use visit::*;
