pub mod issue;
pub mod label;

pub use issue::*;
pub use label::*;
