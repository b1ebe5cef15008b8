use sokha_core::{AnswerValue, QuestionnaireKind, Route, SessionIdentity};
use sokha_schema::fields::SectionDescriptor;
use sokha_schema::{Questionnaire, questionnaire_for};

use crate::backend::Backend;
use crate::error::FlowError;
use crate::events::FlowEvent;
use crate::form::FormState;
use crate::navigator::{self, Navigation, TerminalPage};
use crate::page::PageData;
use crate::rules::{self, EffectMap};
use crate::submit;

/// A redirect chain longer than this has stopped converging. Legitimate
/// chains are at most two hops (legacy alias, then uuid canonicalization).
const MAX_REDIRECT_HOPS: usize = 8;

/// The section currently rendered, with its live form state and effects.
#[derive(Debug, Clone)]
pub struct ActiveSection {
    pub identity: SessionIdentity,
    pub descriptor: SectionDescriptor,
    pub page: PageData,
    pub form: FormState,
    pub effects: EffectMap,
}

/// Where a navigation cycle ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// A section is loaded; see [`SessionFlow::active`].
    Section,
    /// The identity had no real site token; the flow hands off to the
    /// site-selection picker, which lives outside this engine.
    SiteSelection(Route),
    /// Terminal thank page — render only, nothing further to fetch.
    Thank(SessionIdentity),
    /// The server named a section this build cannot render.
    NotFound(SessionIdentity),
    /// The response belonged to a superseded navigation and was discarded.
    Superseded,
}

/// Outcome of applying a fetched page to the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageApplied {
    Applied,
    /// Late response from a superseded navigation; state untouched.
    Stale,
    UnknownSection,
}

/// One respondent's walk through a questionnaire.
///
/// Operations are sequential request/response cycles guarded by an
/// in-flight flag (which also drives the loading skeleton) and a
/// monotonically increasing navigation epoch: a response that arrives after
/// its navigation was superseded is discarded, never applied.
pub struct SessionFlow {
    questionnaire: Box<dyn Questionnaire>,
    epoch: u64,
    in_flight: bool,
    active: Option<ActiveSection>,
}

impl SessionFlow {
    pub fn new(kind: QuestionnaireKind) -> Self {
        Self {
            questionnaire: questionnaire_for(kind),
            epoch: 0,
            in_flight: false,
            active: None,
        }
    }

    pub fn kind(&self) -> QuestionnaireKind {
        self.questionnaire.kind()
    }

    pub fn questionnaire(&self) -> &dyn Questionnaire {
        self.questionnaire.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn active(&self) -> Option<&ActiveSection> {
        self.active.as_ref()
    }

    /// Start a navigation, superseding any outstanding fetch. Returns the
    /// epoch that a matching [`Self::apply_page`] must present.
    pub fn begin(&mut self) -> u64 {
        self.epoch += 1;
        self.in_flight = true;
        self.epoch
    }

    /// Record that the fetch for `epoch` failed. The current section (if
    /// any) stays rendered — a fetch failure is inline and non-fatal, and
    /// form state for a never-fetched section is by definition empty.
    pub fn fail_fetch(&mut self, epoch: u64) {
        if epoch == self.epoch {
            self.in_flight = false;
        }
    }

    /// Apply a fetched page. Stale responses (superseded epoch) are
    /// discarded without touching any state. Form state for the new section
    /// starts empty — previously submitted answers live on the server and
    /// are not redisplayed.
    pub fn apply_page(
        &mut self,
        epoch: u64,
        identity: SessionIdentity,
        page: PageData,
    ) -> PageApplied {
        if epoch != self.epoch {
            return PageApplied::Stale;
        }
        self.in_flight = false;

        let Some(descriptor) = self.questionnaire.section(&page.section_id) else {
            return PageApplied::UnknownSection;
        };
        let descriptor = descriptor.clone();

        let mut form = FormState::for_section(&descriptor);
        // Normalize dependent-field state before the first render.
        let effects = rules::evaluate(&descriptor, &mut form);

        self.active = Some(ActiveSection {
            identity,
            descriptor,
            page,
            form,
            effects,
        });
        PageApplied::Applied
    }

    /// Run a full navigation cycle from `start`: follow canonicalizing
    /// redirects, fetch, reconcile the server-minted session id, and load
    /// the resulting section.
    pub fn navigate(
        &mut self,
        backend: &dyn Backend,
        start: SessionIdentity,
    ) -> Result<StepOutcome, FlowError> {
        let mut identity = start;
        let mut hops = 0usize;

        loop {
            let epoch;
            let fetched = match navigator::plan(&identity, self.questionnaire.as_ref()) {
                Navigation::Redirect(route) => {
                    // The site-selection picker is not part of the flow;
                    // following its redirect here would only re-plan it.
                    if route.identity().has_placeholder_token() {
                        self.active = None;
                        return Ok(StepOutcome::SiteSelection(route));
                    }
                    hops += 1;
                    if hops > MAX_REDIRECT_HOPS {
                        return Err(FlowError::RedirectLoop(route.path()));
                    }
                    FlowEvent::new("redirect_followed", &identity, route.path()).emit();
                    identity = route.identity();
                    continue;
                }
                Navigation::Terminal(TerminalPage::Thank) => {
                    self.active = None;
                    return Ok(StepOutcome::Thank(identity));
                }
                Navigation::Terminal(TerminalPage::NotFound) => {
                    self.active = None;
                    return Ok(StepOutcome::NotFound(identity));
                }
                Navigation::FetchEntry => {
                    epoch = self.begin();
                    backend.fetch_entry(identity.kind, &identity.token, identity.locale)
                }
                Navigation::FetchSection {
                    session_id,
                    section_index,
                } => {
                    epoch = self.begin();
                    backend.fetch_section(
                        identity.kind,
                        &identity.token,
                        identity.locale,
                        &session_id,
                        &section_index,
                    )
                }
            };

            let page = match fetched {
                Ok(page) => page,
                Err(err) => {
                    self.fail_fetch(epoch);
                    return Err(err.into());
                }
            };

            if let Some(route) = navigator::reconcile(&identity, &page) {
                self.fail_fetch(epoch);
                hops += 1;
                if hops > MAX_REDIRECT_HOPS {
                    return Err(FlowError::RedirectLoop(route.path()));
                }
                FlowEvent::new("session_canonicalized", &identity, route.path()).emit();
                identity = route.identity();
                continue;
            }

            let section_id = page.section_id.clone();
            return match self.apply_page(epoch, identity.clone(), page) {
                PageApplied::Applied => {
                    FlowEvent::new("section_fetched", &identity, section_id).emit();
                    Ok(StepOutcome::Section)
                }
                PageApplied::UnknownSection => Ok(StepOutcome::NotFound(identity)),
                PageApplied::Stale => Ok(StepOutcome::Superseded),
            };
        }
    }

    /// Record an answer and recompute field effects.
    pub fn set_answer(
        &mut self,
        name: &str,
        value: impl Into<AnswerValue>,
    ) -> Result<(), FlowError> {
        let active = self.active.as_mut().ok_or(FlowError::NoActiveSection)?;
        active.form.set(name, value)?;
        active.effects = rules::evaluate(&active.descriptor, &mut active.form);
        Ok(())
    }

    /// Toggle a checkbox-group option and recompute field effects.
    pub fn set_checked(
        &mut self,
        group: &str,
        option_value: &str,
        checked: bool,
    ) -> Result<(), FlowError> {
        let active = self.active.as_mut().ok_or(FlowError::NoActiveSection)?;
        active.form.set_checked(group, option_value, checked)?;
        active.effects = rules::evaluate(&active.descriptor, &mut active.form);
        Ok(())
    }

    /// Submit the active section. On failure the form state is untouched so
    /// the respondent can correct and resubmit.
    pub fn submit_active(&mut self, backend: &dyn Backend) -> Result<Route, FlowError> {
        let active = self.active.as_ref().ok_or(FlowError::NoActiveSection)?;
        let target = submit::target_section(&active.identity, self.questionnaire.as_ref());

        match submit::submit(
            backend,
            &active.identity,
            self.questionnaire.as_ref(),
            &active.form,
        ) {
            Ok(route) => {
                FlowEvent::new("submission_accepted", &active.identity, target.as_str())
                    .with_details(serde_json::json!({ "redirect": route.path() }))
                    .emit();
                Ok(route)
            }
            Err(err) => {
                FlowEvent::new("submission_rejected", &active.identity, target.as_str()).emit();
                Err(err)
            }
        }
    }
}
