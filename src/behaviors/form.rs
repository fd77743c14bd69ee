//! Audit request form: validation and simulated submission.
//!
//! There is no transport. A valid request puts the submit control into a
//! "Sending..." state, and after a fixed delay the form is cleared and a
//! confirmation is announced. Failed validation announces the problem and
//! changes nothing else, so the visitor can correct and resubmit.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlFormElement, Window};

use crate::behaviors::buttons;
use crate::config::FormConfig;
use crate::consts::SENDING_LABEL;
use crate::dom::{self, ListenOptions, Listener, Node, live_region};
use crate::error::{SiteError, report};
use crate::schedule::{Scheduler, TaskSlot};

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// `local@domain.tld`-shaped check; not an RFC 5322 parser.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    match &*EMAIL_RE {
        Ok(re) => re.is_match(email),
        Err(_) => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Field values read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditRequest {
    pub name: String,
    pub practice: String,
    pub email: String,
    pub website: Option<String>,
}

impl AuditRequest {
    /// # Errors
    ///
    /// Returns the first failing rule: required fields, then email shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.practice.is_empty() || self.email.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// The page-facing side of the form.
pub trait FormSurface {
    type Control: Node + Clone + 'static;

    fn submit_control(&self) -> Option<Self::Control>;
    fn read(&self) -> AuditRequest;
    fn reset(&self);
    /// Tell the visitor something, blocking until acknowledged.
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No submit control, or a submission is already in flight.
    Ignored,
    Rejected(ValidationError),
    Sending,
}

pub struct FormController<S> {
    surface: Rc<S>,
    scheduler: Rc<dyn Scheduler>,
    delay_ms: u32,
    messages: FormConfig,
    pending: TaskSlot,
}

impl<S: FormSurface + 'static> FormController<S> {
    /// Texts shown to the visitor come from `messages`.
    #[must_use]
    pub fn new(surface: Rc<S>, scheduler: Rc<dyn Scheduler>, delay_ms: u32, messages: FormConfig) -> Self {
        Self { surface, scheduler, delay_ms, messages, pending: TaskSlot::new() }
    }

    fn rejection_message(&self, err: &ValidationError) -> &str {
        match err {
            ValidationError::MissingFields => &self.messages.missing_fields_message,
            ValidationError::InvalidEmail => &self.messages.invalid_email_message,
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(control) = self.surface.submit_control() else {
            log::debug!("audit form has no submit control");
            return SubmitOutcome::Ignored;
        };
        if control.is_disabled() {
            return SubmitOutcome::Ignored;
        }

        let request = self.surface.read();
        if let Err(err) = request.validate() {
            log::debug!("audit request rejected: {err}");
            self.surface.notify(self.rejection_message(&err));
            return SubmitOutcome::Rejected(err);
        }

        let original = control.text();
        control.set_text(SENDING_LABEL);
        report(control.set_disabled(true));
        log::info!("audit request accepted for {}", request.practice);

        let surface = Rc::clone(&self.surface);
        let message = self.messages.success_message.clone();
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                surface.notify(&message);
                surface.reset();
                control.set_text(&original);
                report(control.set_disabled(false));
            }),
        );
        self.pending.replace(handle);
        SubmitOutcome::Sending
    }
}

/// Take the submit control away from the `.btn` loading-state manager.
///
/// The controller alone drives that control's label and disabled state.
/// Returns `false` when there is no control or it was already claimed.
///
/// # Errors
///
/// Propagates DOM mutation failures.
pub fn reserve_submit_control<S: FormSurface>(surface: &S) -> Result<bool, SiteError> {
    match surface.submit_control() {
        Some(control) => buttons::claim(&control),
        None => Ok(false),
    }
}

/// The live `<form>` element.
pub struct AuditForm {
    window: Window,
    document: Document,
    form: HtmlFormElement,
}

impl AuditForm {
    fn field(data: &FormData, name: &str) -> Option<String> {
        data.get(name).as_string()
    }
}

impl FormSurface for AuditForm {
    type Control = Element;

    fn submit_control(&self) -> Option<Element> {
        dom::query_in(&self.form, r#"button[type="submit"]"#)
    }

    fn read(&self) -> AuditRequest {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return AuditRequest::default();
        };
        AuditRequest {
            name: Self::field(&data, "name").unwrap_or_default(),
            practice: Self::field(&data, "practice").unwrap_or_default(),
            email: Self::field(&data, "email").unwrap_or_default(),
            website: Self::field(&data, "website").filter(|w| !w.is_empty()),
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn notify(&self, message: &str) {
        report(live_region::announce(&self.document, message));
        if let Err(err) = self.window.alert_with_message(message) {
            log::debug!("{}", SiteError::dom("alert", &err));
        }
    }
}

/// Take over submission of the configured form, if the page has it.
///
/// Must run before [`buttons::mount`] so the submit control is already
/// reserved when the button manager walks `.btn`.
///
/// # Errors
///
/// Fails if the submit listener cannot be registered.
pub fn mount(
    window: &Window,
    document: &Document,
    scheduler: Rc<dyn Scheduler>,
    delay_ms: u32,
    config: &FormConfig,
) -> Result<Option<Listener>, SiteError> {
    let Some(form) = document.get_element_by_id(&config.id) else {
        return Ok(None);
    };
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        log::warn!("#{} is not a form", config.id);
        return Ok(None);
    };

    let surface = Rc::new(AuditForm { window: window.clone(), document: document.clone(), form: form.clone() });
    if report(reserve_submit_control(surface.as_ref())) == Some(true) {
        log::debug!("#{} submit control reserved for the form", config.id);
    }
    let controller = Rc::new(RefCell::new(FormController::new(surface, scheduler, delay_ms, config.clone())));
    dom::listen(&form, "submit", ListenOptions::default(), move |event| {
        event.prevent_default();
        controller.borrow_mut().submit();
    })
    .map(Some)
}
