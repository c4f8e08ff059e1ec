pub mod alumni;

pub use alumni::{Alumni, AlumniChanges, AlumniCheck, AlumniValidationError, NewAlumni};
