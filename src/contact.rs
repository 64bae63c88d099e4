use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::hooks::sleep_ms;
use crate::notification::{notify, use_notifications, NotificationKind};
use crate::submission::{submit_contact, SubmitOutcome, SubmitPhase, SubmitterHandle};
use crate::validation::{
    validate_field, validate_form, ContactForm, FieldSpec, FieldValidation, FormValidation, InputKind,
    CONTACT_FIELDS,
};

const SUCCESS_MESSAGE: &str = "Thank you for reaching out! I will get back to you soon.";

/// Inline error text per field name. At most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }

    pub fn record(&mut self, field: &'static str, result: FieldValidation) {
        match result.message {
            Some(message) if !result.is_valid => {
                self.messages.insert(field, message);
            }
            _ => {
                self.messages.remove(field);
            }
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.messages.remove(field);
    }

    /// Replaces every checked field's state with the outcome of a full pass.
    pub fn apply(&mut self, validation: &FormValidation) {
        for (field, result) in &validation.results {
            self.record(field, FieldValidation::from(result));
        }
    }
}

/// Everything the contact section renders: values, inline errors and the
/// button phase. Each handler is one step on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFlow {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
}

impl ContactFlow {
    pub fn input(&mut self, spec: &FieldSpec, value: String) {
        self.form.set(spec.name, value);
        self.errors.clear(spec.name);
    }

    pub fn blur(&mut self, spec: &FieldSpec) {
        let result = validate_field(spec, self.form.value(spec.name));
        self.errors.record(spec.name, FieldValidation::from(&result));
    }

    /// Runs the full pass and, when it is clean, moves to `Sending` and hands
    /// back the snapshot to deliver. Ignored while a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.phase.is_disabled() {
            return None;
        }
        let validation = validate_form(&CONTACT_FIELDS, &self.form);
        self.errors.apply(&validation);
        if !validation.is_valid() {
            return None;
        }
        self.phase = SubmitPhase::Sending;
        Some(self.form.clone())
    }

    /// Applies the delivery outcome and returns the notification to raise.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> Option<(NotificationKind, String)> {
        match outcome {
            SubmitOutcome::Delivered => {
                self.phase = SubmitPhase::Sent;
                self.form.reset();
                self.errors = FieldErrors::default();
                Some((NotificationKind::Success, SUCCESS_MESSAGE.to_string()))
            }
            SubmitOutcome::Invalid(validation) => {
                self.errors.apply(&validation);
                self.phase = SubmitPhase::Idle;
                None
            }
            SubmitOutcome::Failed(err) => {
                self.phase = SubmitPhase::Idle;
                Some((NotificationKind::Error, err.to_string()))
            }
        }
    }

    /// Returns the button to its idle state after the success hold.
    pub fn settle(&mut self) {
        if self.phase == SubmitPhase::Sent {
            self.phase = SubmitPhase::Idle;
        }
    }
}

/// Starts a submission from the current flow state. The delivery runs in a
/// task on the calling scope; `announce` receives the notification to show.
pub fn start_submission(
    mut flow: Signal<ContactFlow>,
    submitter: SubmitterHandle,
    reset_ms: u32,
    mut announce: impl FnMut(NotificationKind, String) + 'static,
) {
    let Some(snapshot) = flow.write().begin_submit() else {
        return;
    };
    spawn(async move {
        let outcome = submit_contact(&CONTACT_FIELDS, &snapshot, submitter.0.as_ref()).await;
        let delivered = outcome == SubmitOutcome::Delivered;
        let notice = flow.write().finish(outcome);
        if let Some((kind, message)) = notice {
            announce(kind, message);
        }
        if delivered {
            tracing::info!("contact: message delivered");
            sleep_ms(reset_ms).await;
            flow.write().settle();
        }
    });
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<SiteConfig>();
    let submitter = use_context::<SubmitterHandle>();
    let notifications = use_notifications();
    let mut flow = use_signal(ContactFlow::default);
    let reset_ms = config.timings.submit_reset_ms;
    let dismiss_ms = config.timings.notification_ms;

    let current = flow();
    let rows: Vec<(FieldSpec, String, &'static str, Option<String>)> = CONTACT_FIELDS
        .iter()
        .map(|spec| {
            let error = current.errors.get(spec.name).map(str::to_string);
            let group = if error.is_some() { "form-group error" } else { "form-group" };
            (*spec, current.form.value(spec.name).to_string(), group, error)
        })
        .collect();
    let button_phase = current.phase;

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "container",
                h2 { class: "section-title", "Get In Touch" }
                form {
                    id: "contact-form",
                    class: "contact-form",
                    novalidate: true,
                    onsubmit: move |event| {
                        event.prevent_default();
                        start_submission(flow, submitter.clone(), reset_ms, move |kind, message| {
                            notify(notifications, kind, message, dismiss_ms)
                        });
                    },
                    for (spec, value, group, error) in rows {
                        div { key: "{spec.name}", class: group,
                            label { r#for: spec.name, "{spec.label}" }
                            if spec.kind == InputKind::TextArea {
                                textarea {
                                    id: spec.name,
                                    name: spec.name,
                                    rows: "5",
                                    value: "{value}",
                                    oninput: move |event| flow.write().input(&spec, event.value()),
                                    onblur: move |_| flow.write().blur(&spec),
                                }
                            } else {
                                input {
                                    id: spec.name,
                                    name: spec.name,
                                    r#type: spec.kind.html_type(),
                                    value: "{value}",
                                    oninput: move |event| flow.write().input(&spec, event.value()),
                                    onblur: move |_| flow.write().blur(&spec),
                                }
                            }
                            if let Some(message) = error {
                                div { class: "error-message",
                                    i { class: "fas fa-exclamation-circle" }
                                    " {message}"
                                }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: button_phase.css_class(),
                        disabled: button_phase.is_disabled(),
                        i { class: button_phase.icon() }
                        " {button_phase.label()}"
                    }
                }
            }
        }
    }
}
