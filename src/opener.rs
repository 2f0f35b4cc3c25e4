//! Launching the chosen editor for an open request.
//
// # Error Handling Convention
//
// Public functions in this module return `Result<(), String>` (simple string
// errors for UI display) rather than a typed error. New helper functions
// added to this module should follow the same `Result<T, String>` pattern so
// callers can surface the error message directly to the user without
// conversion.

use std::path::Path;

use crate::config::PreferredOpener;
use crate::events::OpenRequest;

/// Command template for a catalog opener. `{file}`, `{line}`, and `{col}`
/// placeholders are substituted per token.
fn command_template(opener_id: &str) -> Option<&'static str> {
    match opener_id {
        "atom" => Some("atom {file}:{line}:{col}"),
        "vim" => Some("vim +{line} {file}"),
        "sublime" => Some("subl {file}:{line}:{col}"),
        "vscode" => Some("code --goto {file}:{line}:{col}"),
        // "computer" and unknown ids use the system opener.
        _ => None,
    }
}

/// Expand an editor command template into program + arguments.
///
/// The template is tokenized with shell-word splitting BEFORE substitution
/// so that the file path occupies exactly one argument regardless of its
/// content (preventing argument injection via paths containing spaces or
/// shell metacharacters). A template without a `{file}` placeholder gets
/// the file appended as a final argument.
pub fn expand_editor_command(
    template: &str,
    file: &str,
    line: u32,
    column: u32,
) -> Result<Vec<String>, String> {
    let tokens = shell_words::split(template)
        .map_err(|e| format!("Failed to parse editor command: {}", e))?;
    if tokens.is_empty() {
        return Err("Editor command is empty".to_string());
    }
    let mut parts: Vec<String> = tokens
        .into_iter()
        .map(|token| {
            token
                .replace("{file}", file)
                .replace("{line}", &line.to_string())
                .replace("{col}", &column.to_string())
        })
        .collect();
    if !template.contains("{file}") {
        parts.push(file.to_string());
    }
    Ok(parts)
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> String {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return path.replacen('~', &home.to_string_lossy(), 1);
    }
    path.to_string()
}

/// Open the request's file in its chosen editor.
///
/// Catalog openers map to known command templates; a custom opener's path is
/// used as the template itself (the file is appended when it carries no
/// placeholder). When no template applies, the system default opener is
/// used.
pub fn open_request(request: &OpenRequest) -> Result<(), String> {
    let file = expand_home(&request.file);
    if !Path::new(&file).exists() {
        return Err(format!("Path not found: {}", file));
    }

    let template = match &request.where_ {
        PreferredOpener::Custom { path } => Some(path.clone()),
        PreferredOpener::Editor(option) => {
            command_template(&option.opener_id).map(str::to_string)
        }
    };

    match template {
        Some(template) => {
            let parts = expand_editor_command(&template, &file, request.line, request.column)?;
            log::debug!("Launching editor: {:?}", parts);
            std::process::Command::new(&parts[0])
                .args(&parts[1..])
                .spawn()
                .map(|_| ())
                .map_err(|e| format!("Failed to launch editor '{}': {}", parts[0], e))
        }
        None => {
            log::debug!("Opening with system default: {}", file);
            open::that(&file).map_err(|e| format!("Failed to open file: {}", e))
        }
    }
}
