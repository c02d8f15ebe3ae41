pub mod contact;
pub mod submission;

pub use contact::ContactFields;
pub use submission::{Fields, Submission};
