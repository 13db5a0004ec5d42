//! Multi-step form with per-step validation
//!
//! Moving forward runs the current step's validator; a non-empty error list blocks
//! the move and is shown inline. On the last step a passing validator finishes the
//! wizard instead. A step may also close a separate finish gate (for example a
//! consent checkbox) that disables Finish regardless of validation.
//!
//! Changing step always clears errors and reopens the finish gate.
//!
//! ```ignore
//! let wizard = FormWizard::new(&runtime)
//!     .step(WizardStep::new("Account").validate(|d| required(d, "email", "Email is required.")))
//!     .step(WizardStep::new("Review"))
//!     .on_finish(|data| println!("{data:?}"));
//! ```

use serde_json::{Map, Value};
use showcase_core::{ShowcaseRuntime, State};
use showcase_layout::prelude::*;
use std::sync::Arc;

/// Accumulated field values
pub type FormData = Map<String, Value>;

type ValidateFn = Arc<dyn Fn(&FormData) -> Vec<String> + Send + Sync>;
type RenderFn = Arc<dyn Fn(&StepContext<'_>) -> Node + Send + Sync>;
type FinishFn = Arc<dyn Fn(&FormData) + Send + Sync>;

/// What a step's body is rendered from
pub struct StepContext<'a> {
    pub data: &'a FormData,
    pub can_finish: bool,
}

/// One page of the wizard
#[derive(Clone)]
pub struct WizardStep {
    title: String,
    validate: Option<ValidateFn>,
    render: Option<RenderFn>,
}

impl WizardStep {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            validate: None,
            render: None,
        }
    }

    pub fn validate(
        mut self,
        f: impl Fn(&FormData) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Arc::new(f));
        self
    }

    pub fn render(mut self, f: impl Fn(&StepContext<'_>) -> Node + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn errors_for(&self, data: &FormData) -> Vec<String> {
        self.validate.as_ref().map(|f| f(data)).unwrap_or_default()
    }
}

impl std::fmt::Debug for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardStep")
            .field("title", &self.title)
            .field("validates", &self.validate.is_some())
            .finish()
    }
}

/// Result of pressing Next/Finish
#[derive(Clone, Debug, PartialEq)]
pub enum WizardOutcome {
    /// Moved to the given step
    Advanced(usize),
    /// Validation failed; the errors are now displayed
    Blocked(Vec<String>),
    /// The last step passed and the finish callback ran with this data
    Finished(FormData),
    /// Finish is disabled by the step's gate; nothing happened
    FinishLocked,
    /// The wizard has no steps
    Empty,
}

/// Position of a step relative to the current one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

/// Stateful wizard
#[derive(Clone)]
pub struct FormWizard {
    steps: Vec<WizardStep>,
    data: State<FormData>,
    step: State<usize>,
    errors: State<Vec<String>>,
    can_finish: State<bool>,
    on_finish: Option<FinishFn>,
}

impl FormWizard {
    pub fn new(runtime: &ShowcaseRuntime) -> Self {
        Self::with_data(runtime, FormData::new())
    }

    pub fn with_data(runtime: &ShowcaseRuntime, initial: FormData) -> Self {
        Self {
            steps: Vec::new(),
            data: runtime.use_state(initial),
            step: runtime.use_state(0),
            errors: runtime.use_state(Vec::new()),
            can_finish: runtime.use_state(true),
            on_finish: None,
        }
    }

    pub fn step(mut self, step: WizardStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn on_finish(mut self, f: impl Fn(&FormData) + Send + Sync + 'static) -> Self {
        self.on_finish = Some(Arc::new(f));
        self
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step_index(&self) -> usize {
        self.step.get()
    }

    pub fn is_first(&self) -> bool {
        self.step_index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.step_index() + 1 == self.step_count()
    }

    pub fn current_title(&self) -> Option<&str> {
        self.steps.get(self.step_index()).map(WizardStep::title)
    }

    pub fn data(&self) -> FormData {
        self.data.get()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.get()
    }

    pub fn can_finish(&self) -> bool {
        self.can_finish.get()
    }

    pub fn status_of(&self, index: usize) -> StepStatus {
        let current = self.step_index();
        match index.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Complete,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Merge `patch` into the form data
    pub fn update(&self, patch: FormData) {
        self.data.update_rebuild(|mut data| {
            data.extend(patch);
            data
        });
    }

    pub fn set_field(&self, key: impl Into<String>, value: impl Into<Value>) {
        let mut patch = FormData::new();
        patch.insert(key.into(), value.into());
        self.update(patch);
    }

    /// Open or close the finish gate for the current step
    pub fn set_can_finish(&self, can_finish: bool) {
        self.can_finish.set_rebuild(can_finish);
    }

    /// Move by `delta` steps. Out-of-range moves are ignored.
    fn go(&self, delta: isize) -> bool {
        let next = self.step_index() as isize + delta;
        if next < 0 || next as usize >= self.step_count() {
            return false;
        }
        tracing::debug!(from = self.step_index(), to = next, "wizard step");
        self.step.set_rebuild(next as usize);
        self.errors.set_rebuild(Vec::new());
        self.can_finish.set_rebuild(true);
        true
    }

    /// Next/Finish
    pub fn on_next(&self) -> WizardOutcome {
        let Some(step) = self.steps.get(self.step_index()) else {
            return WizardOutcome::Empty;
        };
        if self.is_last() && !self.can_finish() {
            return WizardOutcome::FinishLocked;
        }

        let data = self.data();
        let errors = step.errors_for(&data);
        if !errors.is_empty() {
            tracing::debug!(step = step.title(), count = errors.len(), "wizard step blocked");
            self.errors.set_rebuild(errors.clone());
            return WizardOutcome::Blocked(errors);
        }

        if self.is_last() {
            tracing::debug!("wizard finished");
            if let Some(on_finish) = &self.on_finish {
                on_finish(&data);
            }
            WizardOutcome::Finished(data)
        } else {
            self.go(1);
            WizardOutcome::Advanced(self.step_index())
        }
    }

    /// Back. Returns false on the first step.
    pub fn on_prev(&self) -> bool {
        self.go(-1)
    }

    pub fn render(&self) -> Node {
        let current = self.step_index();
        let count = self.step_count();
        let data = self.data();
        let can_finish = self.can_finish();
        let errors = self.errors();

        let progress = ol()
            .class("flex items-center gap-3 mb-6")
            .aria("label", "Progress")
            .children(self.steps.iter().enumerate().map(|(i, s)| {
                let status = self.status_of(i);
                let (dot, label) = match status {
                    StepStatus::Current => ("bg-primary text-white", "text-text font-medium"),
                    StepStatus::Complete => ("bg-secondary text-white", "text-text/70"),
                    StepStatus::Upcoming => ("bg-gray-200 text-text/70", "text-text/70"),
                };
                li().class("flex items-center gap-2")
                    .child(
                        div()
                            .class("h-8 w-8 rounded-full grid place-items-center text-sm font-semibold")
                            .class(dot)
                            .when(status == StepStatus::Current, |d| d.aria("current", "step"))
                            .text((i + 1).to_string()),
                    )
                    .child(span().class("text-sm").class(label).text(s.title.clone()))
                    .when(i + 1 != count, |l| {
                        l.child(span().class("mx-1 text-text/30").text("—"))
                    })
            }));

        let body = self
            .steps
            .get(current)
            .and_then(|s| s.render.as_ref())
            .map(|render| {
                render(&StepContext {
                    data: &data,
                    can_finish,
                })
            });

        let is_first = self.is_first();
        let is_last = self.is_last();

        div()
            .class("ocean-surface p-6")
            .child(progress)
            .child(
                div()
                    .class("rounded-xl border border-black/5 bg-white p-5")
                    .child(body),
            )
            .when(!errors.is_empty(), |d| {
                d.child(
                    div()
                        .role("alert")
                        .class("mt-4 rounded-xl border border-red-200 bg-red-50 text-red-800 px-4 py-3")
                        .child(
                            ul().class("list-disc pl-5 space-y-1 text-sm")
                                .children(errors.iter().map(|e| li().text(e.clone()))),
                        ),
                )
            })
            .child(
                div()
                    .class("mt-6 flex items-center justify-between")
                    .child(
                        el("button")
                            .kind("button")
                            .class("px-4 py-2 rounded-xl bg-gray-200 text-text/80 hover:bg-gray-300 disabled:opacity-50 disabled:cursor-not-allowed transition")
                            .data("action", "wizard-back")
                            .when(is_first, |b| b.flag("disabled"))
                            .text("Back"),
                    )
                    .child(
                        el("button")
                            .kind("button")
                            .class("px-4 py-2 rounded-xl bg-primary text-white hover:bg-blue-600 transition disabled:opacity-50 disabled:cursor-not-allowed")
                            .data("action", "wizard-next")
                            .when(is_last && !can_finish, |b| b.flag("disabled"))
                            .text(if is_last { "Finish" } else { "Next" }),
                    ),
            )
            .build()
    }
}

impl std::fmt::Debug for FormWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormWizard")
            .field("steps", &self.steps)
            .field("step", &self.step.try_get())
            .finish()
    }
}

/// Read a field as text, exactly as entered. Missing, null and `false` read as empty.
pub fn field_text(data: &FormData, key: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | Some(Value::Bool(false)) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Whether a field holds a truthy value
pub fn field_truthy(data: &FormData, key: &str) -> bool {
    match data.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn wizard(rt: &ShowcaseRuntime, finished: Arc<AtomicUsize>) -> FormWizard {
        FormWizard::new(rt)
            .step(WizardStep::new("Name").validate(|d| {
                if field_truthy(d, "name") {
                    vec![]
                } else {
                    vec!["Name is required.".to_string()]
                }
            }))
            .step(WizardStep::new("Confirm").validate(|d| {
                if field_truthy(d, "agree") {
                    vec![]
                } else {
                    vec!["Agree first.".to_string()]
                }
            }))
            .on_finish(move |_| {
                finished.fetch_add(1, Ordering::SeqCst);
            })
    }

    #[test]
    fn test_blocked_step_keeps_index_and_shows_errors() {
        let rt = ShowcaseRuntime::new();
        let w = wizard(&rt, Arc::new(AtomicUsize::new(0)));
        assert_eq!(
            w.on_next(),
            WizardOutcome::Blocked(vec!["Name is required.".to_string()])
        );
        assert_eq!(w.step_index(), 0);
        assert_eq!(w.errors().len(), 1);

        w.set_field("name", "Ada");
        assert_eq!(w.on_next(), WizardOutcome::Advanced(1));
        assert!(w.errors().is_empty());
    }

    #[test]
    fn test_last_step_finishes_exactly_once() {
        let rt = ShowcaseRuntime::new();
        let finished = Arc::new(AtomicUsize::new(0));
        let w = wizard(&rt, finished.clone());
        w.set_field("name", "Ada");
        w.on_next();

        assert!(matches!(w.on_next(), WizardOutcome::Blocked(_)));
        assert_eq!(w.step_index(), 1);
        assert_eq!(finished.load(Ordering::SeqCst), 0);

        w.set_field("agree", true);
        let outcome = w.on_next();
        assert_eq!(finished.load(Ordering::SeqCst), 1);
        match outcome {
            WizardOutcome::Finished(data) => {
                assert_eq!(data.get("name"), Some(&json!("Ada")));
                assert_eq!(data.get("agree"), Some(&json!(true)));
            }
            other => panic!("expected finish, got {other:?}"),
        }
        assert_eq!(w.step_index(), 1);
    }

    #[test]
    fn test_finish_gate_and_reset_on_step_change() {
        let rt = ShowcaseRuntime::new();
        let finished = Arc::new(AtomicUsize::new(0));
        let w = wizard(&rt, finished.clone());
        w.set_field("name", "Ada");
        w.on_next();

        w.set_can_finish(false);
        w.set_field("agree", true);
        assert_eq!(w.on_next(), WizardOutcome::FinishLocked);
        assert_eq!(finished.load(Ordering::SeqCst), 0);

        let root = w.render().into_element().unwrap();
        let finish = root.find_by_attr("data-action", "wizard-next").unwrap();
        assert_eq!(finish.text_content(), "Finish");
        assert!(finish.has_attr("disabled"));

        assert!(w.on_prev());
        assert!(w.can_finish());
        assert!(!w.on_prev());
    }

    #[test]
    fn test_progress_statuses() {
        let rt = ShowcaseRuntime::new();
        let w = wizard(&rt, Arc::new(AtomicUsize::new(0)));
        w.set_field("name", "Ada");
        w.on_next();
        assert_eq!(w.status_of(0), StepStatus::Complete);
        assert_eq!(w.status_of(1), StepStatus::Current);

        let root = w.render().into_element().unwrap();
        let current = root.find_by_attr("aria-current", "step").unwrap();
        assert_eq!(current.text_content(), "2");
        assert!(root
            .find_by_attr("data-action", "wizard-back")
            .is_some_and(|b| !b.has_attr("disabled")));
    }

    #[test]
    fn test_field_helpers() {
        let mut data = FormData::new();
        data.insert("a".into(), json!(""));
        data.insert("b".into(), json!("x"));
        data.insert("c".into(), json!(false));
        assert!(!field_truthy(&data, "a"));
        assert!(field_truthy(&data, "b"));
        assert!(!field_truthy(&data, "c"));
        assert!(!field_truthy(&data, "missing"));
        assert_eq!(field_text(&data, "b"), "x");
        assert_eq!(field_text(&data, "c"), "");

        data.insert("d".into(), json!("  two words  "));
        data.insert("e".into(), json!(42));
        assert_eq!(field_text(&data, "d"), "  two words  ");
        assert_eq!(field_text(&data, "e"), "42");
    }
}
