//! Form domain layer
//!
//! Typed membership records, their validation rules and the engine that
//! drives each form from editing to submission.

mod controller;
mod empresa;
mod engine;
mod field;
mod options;
mod schema;
mod sindico;

pub use controller::FormController;
pub use empresa::EmpresaForm;
pub use engine::{FormEngine, SubmissionState};
pub use field::{FieldValue, FormField};
pub use sindico::SindicoForm;

#[cfg(test)]
pub use field::Mask;
