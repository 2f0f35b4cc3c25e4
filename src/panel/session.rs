//! The reporter session: inbound event handling, link clicks, and the
//! editor prompt lifecycle.

use crate::config::{PreferredOpener, ReporterConfig};
use crate::editor_picker::{
    EditorPrompt, OpenTarget, OpenerDecision, ValidationError, resolve_opener,
};
use crate::events::{
    InboundEvent, OpenRequest, OutboundEvent, Runnables, RunnerHost, Suite, Test, TestError,
    UserEditorState,
};
use crate::stack_trace::{StackFrame, parse_stack_vec};

use super::render;
use super::types::PanelView;

/// What happened in response to a link click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An open request was emitted with the confirmed opener.
    Opened,
    /// No opener is confirmed yet; the editor prompt was opened.
    PromptOpened,
}

/// The error currently shown in the panel.
struct ActiveError {
    test_id: String,
    err: TestError,
    frames: Vec<StackFrame>,
}

/// Reporter state for one run.
///
/// Owns the host seam, reacts to inbound events, and produces
/// [`PanelView`]s. The preferred opener is explicit session state: seeded
/// from config, consulted on every click, and written exactly once per
/// prompt confirmation.
pub struct ReporterSession<H: RunnerHost> {
    host: H,
    config: ReporterConfig,
    runnables: Option<Runnables>,
    active: Option<ActiveError>,
    stack_visible: bool,
    preferred_opener: Option<PreferredOpener>,
    prompt: Option<EditorPrompt>,
}

impl<H: RunnerHost> ReporterSession<H> {
    /// Create a session over a host seam and configuration.
    pub fn new(host: H, config: ReporterConfig) -> Self {
        let preferred_opener = config.preferred_opener.clone();
        Self {
            host,
            config,
            runnables: None,
            active: None,
            stack_visible: false,
            preferred_opener,
            prompt: None,
        }
    }

    /// The host seam this session emits through.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// React to an inbound runner event.
    pub fn handle(&mut self, event: InboundEvent) {
        match event {
            InboundEvent::RunnablesReady(runnables) => {
                log::debug!("runnables ready: {} root suites", runnables.suites.len());
                self.runnables = Some(runnables);
                self.active = None;
                self.prompt = None;
                self.stack_visible = false;
            }
            InboundEvent::ReporterStart(_) => self.activate_first_error(),
        }
    }

    /// Build panel state for the first failed test in the runnables tree.
    fn activate_first_error(&mut self) {
        let Some(runnables) = &self.runnables else {
            log::warn!("reporter started before runnables were ready");
            return;
        };
        let Some(test) = first_test_with_err(&runnables.suites, &runnables.tests) else {
            log::debug!("reporter started with no failing test");
            self.active = None;
            return;
        };
        let Some(err) = test.err.clone() else {
            return;
        };
        let frames = parse_stack_vec(&err.stack, &self.config.project_root);
        log::debug!(
            "error '{}' on test {}: {} stack frames",
            err.name,
            test.id,
            frames.len()
        );
        self.active = Some(ActiveError {
            test_id: test.id.clone(),
            err,
            frames,
        });
    }

    /// The rendered panel, or `None` while no error is active.
    pub fn view(&self) -> Option<PanelView> {
        let active = self.active.as_ref()?;
        Some(PanelView {
            error_name: active.err.name.clone(),
            message: render::render_message(&active.err.message),
            docs_url: active.err.docs_url.clone(),
            stack_visible: self.stack_visible,
            stack_lines: render::render_stack_lines(&active.frames, &self.config.stack),
            code_frame: active
                .err
                .code_frame
                .as_ref()
                .map(render::render_code_frame),
        })
    }

    /// The parsed frames of the active error.
    pub fn frames(&self) -> &[StackFrame] {
        self.active.as_ref().map(|a| a.frames.as_slice()).unwrap_or(&[])
    }

    /// Flip stack trace visibility; returns the new state.
    pub fn toggle_stack(&mut self) -> bool {
        self.stack_visible = !self.stack_visible;
        self.stack_visible
    }

    /// Click the file link of a stack frame (by frame index).
    ///
    /// Returns `None` when there is no active error, the index is out of
    /// range, or the frame is an annotation without a location.
    pub fn click_stack_link(&mut self, frame_index: usize) -> Option<ClickOutcome> {
        let active = self.active.as_ref()?;
        let frame = active.frames.get(frame_index)?;
        let (file, line, column) = frame.location()?;
        let target = OpenTarget {
            file: file.to_string(),
            line,
            column,
        };
        Some(self.open_target(target))
    }

    /// Click the file link of the code frame.
    pub fn click_code_frame_link(&mut self) -> Option<ClickOutcome> {
        let active = self.active.as_ref()?;
        let code_frame = active.err.code_frame.as_ref()?;
        let target = OpenTarget {
            file: code_frame.absolute_file.clone(),
            line: code_frame.line,
            column: code_frame.column,
        };
        Some(self.open_target(target))
    }

    /// Open a location with the confirmed opener, or prompt for one.
    fn open_target(&mut self, target: OpenTarget) -> ClickOutcome {
        let state = match &self.preferred_opener {
            Some(opener) => UserEditorState::Preferred(opener.clone()),
            None => self.host.user_editor(),
        };
        match resolve_opener(state) {
            OpenerDecision::Immediate(opener) => {
                self.host.emit(OutboundEvent::OpenFile(OpenRequest {
                    where_: opener,
                    file: target.file,
                    line: target.line,
                    column: target.column,
                }));
                ClickOutcome::Opened
            }
            OpenerDecision::PromptUser(editors) => {
                log::debug!("no preferred opener; prompting over {} editors", editors.len());
                self.prompt = Some(EditorPrompt::new(editors, target));
                ClickOutcome::PromptOpened
            }
        }
    }

    /// The open editor prompt, if any.
    pub fn prompt(&self) -> Option<&EditorPrompt> {
        self.prompt.as_ref()
    }

    /// Select an editor option in the prompt. Returns false when no prompt
    /// is open or the id is unknown.
    pub fn select_editor(&mut self, id: &str) -> bool {
        self.prompt.as_mut().is_some_and(|p| p.select(id))
    }

    /// Update the free-text path of the "Other" entry.
    pub fn set_other_path(&mut self, path: &str) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.set_other_path(path);
        }
    }

    /// Submit the prompt. On success, emits `set:user:editor` followed by
    /// `open:file`, caches the opener, and closes the prompt. On failure the
    /// prompt stays open showing the validation message.
    pub fn submit_prompt(&mut self) -> Result<(), ValidationError> {
        let Some(prompt) = self.prompt.as_mut() else {
            return Ok(());
        };
        let submission = prompt.submit()?;
        let target = prompt.target().clone();
        self.host
            .emit(OutboundEvent::SetUserEditor(submission.option));
        self.host.emit(OutboundEvent::OpenFile(OpenRequest {
            where_: submission.opener.clone(),
            file: target.file,
            line: target.line,
            column: target.column,
        }));
        log::info!("preferred opener confirmed: {:?}", submission.opener);
        self.preferred_opener = Some(submission.opener);
        self.prompt = None;
        Ok(())
    }

    /// Print the active error to the host console. Returns false when no
    /// error is active.
    pub fn print_to_console(&self) -> bool {
        let Some(active) = &self.active else {
            return false;
        };
        self.host.emit(OutboundEvent::ConsoleError {
            command_id: active.err.command_id.clone(),
            test_id: active.test_id.clone(),
        });
        true
    }
}

/// Depth-first search for the first test carrying an error. A suite's own
/// tests are checked before its nested suites.
fn first_test_with_err<'a>(suites: &'a [Suite], tests: &'a [Test]) -> Option<&'a Test> {
    if let Some(test) = tests.iter().find(|t| t.err.is_some()) {
        return Some(test);
    }
    for suite in suites {
        if let Some(test) = first_test_with_err(&suite.suites, &suite.tests) {
            return Some(test);
        }
    }
    None
}
