//! sokha-flow
//!
//! The questionnaire flow engine: a client-driven, server-confirmed state
//! machine that walks a respondent through an ordered sequence of sections.
//! The client renders and collects; the server is authoritative over flow
//! order — every "next section" decision arrives as a redirect instruction,
//! so branching can change server-side without a client deploy.

pub mod backend;
pub mod context;
pub mod error;
pub mod events;
pub mod form;
pub mod navigator;
pub mod page;
pub mod rules;
pub mod session;
pub mod submit;

pub use backend::{Backend, BackendError, SubmitOutcome};
pub use context::AppContext;
pub use error::FlowError;
pub use form::FormState;
pub use navigator::{Navigation, TerminalPage};
pub use page::PageData;
pub use rules::{EffectMap, FieldEffects};
pub use session::{ActiveSection, PageApplied, SessionFlow, StepOutcome};
