mod submit;
mod validate;

pub use submit::*;
pub use validate::*;
