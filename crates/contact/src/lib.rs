mod binding;
mod controller;
mod hook;
pub mod memory;
mod overlay;
mod surface;
mod transport;
mod validate;

pub use binding::*;
pub use controller::*;
pub use hook::*;
pub use memory::{MemoryDocument, MemoryField, MemoryForm};
pub use overlay::*;
pub use surface::*;
pub use transport::*;
pub use validate::*;

pub use vkit_shared::contact::{FieldRole, SubmissionRecord};
