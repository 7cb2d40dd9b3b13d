pub mod contact;
mod error;

pub use contact::{Inquiry, ProjectType};
pub use error::*;
