//! sokha-core
//!
//! Pure domain types and route conventions for the questionnaire flow.
//! No I/O — this is the shared vocabulary of the Sokha system.

pub mod error;
pub mod models;
pub mod routes;

pub use error::CoreError;
pub use models::answer::AnswerValue;
pub use models::identity::SessionIdentity;
pub use models::kind::QuestionnaireKind;
pub use models::locale::Locale;
pub use routes::Route;
