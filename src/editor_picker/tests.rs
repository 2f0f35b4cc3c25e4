//! Tests for opener resolution and the editor prompt state machine.

use crate::config::{PreferredOpener, default_available_editors};
use crate::events::UserEditorState;

use super::prompt::EditorPrompt;
use super::resolve_opener;
use super::types::{OpenTarget, OpenerDecision, ValidationError};

fn target() -> OpenTarget {
    OpenTarget {
        file: "/me/dev/my/app.js".to_string(),
        line: 2,
        column: 7,
    }
}

fn open_prompt() -> EditorPrompt {
    EditorPrompt::new(default_available_editors(), target())
}

// -- resolve_opener --

#[test]
fn test_resolve_with_preferred_opener_is_immediate() {
    let opener = PreferredOpener::Custom {
        path: "/usr/local/bin/subl".to_string(),
    };
    let decision = resolve_opener(UserEditorState::Preferred(opener.clone()));
    assert_eq!(decision, OpenerDecision::Immediate(opener));
}

#[test]
fn test_resolve_without_preferred_opener_prompts() {
    let editors = default_available_editors();
    let decision = resolve_opener(UserEditorState::Available(editors.clone()));
    assert_eq!(decision, OpenerDecision::PromptUser(editors));
}

// -- Prompt initial state --

#[test]
fn test_new_prompt_shows_no_error() {
    let prompt = open_prompt();
    assert_eq!(prompt.validation_error(), None);
    assert_eq!(prompt.selected(), None);
    assert_eq!(prompt.other_path(), "");
    assert_eq!(prompt.editors().len(), 6);
}

#[test]
fn test_prompt_keeps_target() {
    let prompt = open_prompt();
    assert_eq!(prompt.target(), &target());
}

// -- Validation --

#[test]
fn test_submit_without_selection_fails() {
    let mut prompt = open_prompt();
    let err = prompt.submit().unwrap_err();
    assert_eq!(err, ValidationError::SelectionRequired);
    assert_eq!(err.to_string(), "Please select a preference");
    assert_eq!(prompt.validation_error(), Some(err));
}

#[test]
fn test_submit_other_without_path_fails() {
    let mut prompt = open_prompt();
    assert!(prompt.select("other"));
    let err = prompt.submit().unwrap_err();
    assert_eq!(err, ValidationError::PathRequired);
    assert_eq!(err.to_string(), "Please enter the path to your editor");
    assert_eq!(prompt.validation_error(), Some(err));
}

#[test]
fn test_selection_change_clears_error() {
    let mut prompt = open_prompt();
    prompt.select("other");
    prompt.submit().unwrap_err();
    assert!(prompt.validation_error().is_some());

    prompt.select("atom");
    assert_eq!(prompt.validation_error(), None);
}

#[test]
fn test_typing_path_does_not_clear_error() {
    let mut prompt = open_prompt();
    prompt.select("other");
    prompt.submit().unwrap_err();

    prompt.set_other_path("/path/to/editor");
    assert_eq!(prompt.validation_error(), Some(ValidationError::PathRequired));
}

#[test]
fn test_select_unknown_id_is_rejected() {
    let mut prompt = open_prompt();
    assert!(!prompt.select("emacs"));
    assert_eq!(prompt.selected(), None);
}

// -- Submission --

#[test]
fn test_submit_concrete_editor_yields_editor_opener() {
    let mut prompt = open_prompt();
    assert!(prompt.select("vscode"));
    let submission = prompt.submit().expect("valid submission");

    assert_eq!(submission.option.id, "vscode");
    assert_eq!(submission.option.name, "Visual Studio Code");
    assert!(!submission.option.is_other);
    assert_eq!(
        submission.opener,
        PreferredOpener::Editor(submission.option.clone())
    );
    assert_eq!(prompt.validation_error(), None);
}

#[test]
fn test_submit_other_with_path_yields_custom_opener() {
    let mut prompt = open_prompt();
    prompt.select("other");
    prompt.set_other_path("/path/to/editor");
    let submission = prompt.submit().expect("valid submission");

    assert!(submission.option.is_other);
    assert_eq!(
        submission.opener,
        PreferredOpener::Custom {
            path: "/path/to/editor".to_string()
        }
    );
}

#[test]
fn test_other_path_is_trimmed() {
    let mut prompt = open_prompt();
    prompt.select("other");
    prompt.set_other_path("  /path/to/editor  ");
    let submission = prompt.submit().expect("valid submission");
    assert_eq!(
        submission.opener,
        PreferredOpener::Custom {
            path: "/path/to/editor".to_string()
        }
    );
}

#[test]
fn test_whitespace_only_path_fails() {
    let mut prompt = open_prompt();
    prompt.select("other");
    prompt.set_other_path("   ");
    assert_eq!(prompt.submit().unwrap_err(), ValidationError::PathRequired);
}

#[test]
fn test_resubmit_after_fix_succeeds() {
    let mut prompt = open_prompt();
    prompt.submit().unwrap_err();
    prompt.select("vim");
    let submission = prompt.submit().expect("valid submission");
    assert_eq!(submission.option.id, "vim");
    assert_eq!(prompt.validation_error(), None);
}

#[test]
fn test_failed_submit_emits_nothing_by_itself() {
    // Submission is pure state: the session is responsible for emitting
    // events only on Ok, so an Err carries everything the caller needs.
    let mut prompt = open_prompt();
    let first = prompt.submit();
    let second = prompt.submit();
    assert_eq!(first, second);
}

// -- Catalog sanity --

#[test]
fn test_single_other_option_in_catalog() {
    let editors = default_available_editors();
    assert_eq!(editors.iter().filter(|e| e.is_other).count(), 1);
}

#[test]
fn test_other_option_has_empty_opener_id() {
    let editors = default_available_editors();
    let other = editors.iter().find(|e| e.is_other).unwrap();
    assert_eq!(other.opener_id, "");
}
