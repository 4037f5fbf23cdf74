use crate::host::{Editor, MarkdownView, Workspace};
use crate::registry::{Command, CommandAction};

use super::SampleModal;

pub const PRINT_GREETING: &str = "print-greeting-to-console";
pub const OPEN_MODAL_SIMPLE: &str = "open-sample-modal-simple";
pub const SAMPLE_EDITOR_COMMAND: &str = "sample-editor-command";
pub const OPEN_MODAL_COMPLEX: &str = "open-sample-modal-complex";

pub const EDITOR_REPLACEMENT: &str = "Sample Editor Command";

pub fn sample_commands() -> Vec<Command> {
    vec![
        Command {
            id: PRINT_GREETING,
            name: "Sample Plugin: Print greeting to console",
            action: CommandAction::Callback(print_greeting),
        },
        Command {
            id: OPEN_MODAL_SIMPLE,
            name: "Open sample modal (simple)",
            action: CommandAction::Callback(open_modal),
        },
        Command {
            id: SAMPLE_EDITOR_COMMAND,
            name: "Sample editor command",
            action: CommandAction::Editor(replace_selection),
        },
        Command {
            id: OPEN_MODAL_COMPLEX,
            name: "Open sample modal (complex)",
            action: CommandAction::Check(open_modal_if_markdown_view),
        },
    ]
}

fn print_greeting(_workspace: &mut dyn Workspace) {
    log::info!("Hey, you!");
}

fn open_modal(workspace: &mut dyn Workspace) {
    workspace.open_modal(Box::new(SampleModal));
}

fn replace_selection(editor: &mut dyn Editor, _view: &MarkdownView) {
    log::info!("{}", editor.selection());
    editor.replace_selection(EDITOR_REPLACEMENT);
}

/// Only applies while a Markdown view is active.
fn open_modal_if_markdown_view(workspace: &mut dyn Workspace, checking: bool) -> bool {
    if workspace.active_markdown_view().is_none() {
        return false;
    }
    if !checking {
        workspace.open_modal(Box::new(SampleModal));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommandOutcome;
    use crate::tests::FakeWorkspace;
    use pretty_assertions::assert_eq;

    fn command(id: &str) -> Command {
        sample_commands()
            .into_iter()
            .find(|c| c.id == id)
            .unwrap()
    }

    #[test]
    fn greeting_always_available() {
        let mut workspace = FakeWorkspace::default();
        let greet = command(PRINT_GREETING);

        assert!(greet.is_available(&mut workspace));
        assert_eq!(greet.run(&mut workspace), CommandOutcome::Ran);
        assert!(workspace.modals.is_empty());
    }

    #[test]
    fn simple_modal_opens_without_view() {
        let mut workspace = FakeWorkspace::default();

        command(OPEN_MODAL_SIMPLE).run(&mut workspace);

        assert_eq!(workspace.modals, vec!["Woah!".to_string()]);
    }

    #[test]
    fn editor_command_replaces_selection() {
        let mut workspace = FakeWorkspace::with_editor("hello world", 6..11);

        let outcome = command(SAMPLE_EDITOR_COMMAND).run(&mut workspace);

        assert_eq!(outcome, CommandOutcome::Ran);
        assert_eq!(workspace.editor_text(), Some("hello Sample Editor Command"));
    }

    #[test]
    fn editor_command_without_editor_is_not_applicable() {
        let mut workspace = FakeWorkspace::default();
        let edit = command(SAMPLE_EDITOR_COMMAND);

        assert!(!edit.is_available(&mut workspace));
        assert_eq!(edit.run(&mut workspace), CommandOutcome::NotApplicable);
    }

    #[test]
    fn complex_modal_unavailable_without_markdown_view() {
        let mut workspace = FakeWorkspace::default();
        let complex = command(OPEN_MODAL_COMPLEX);

        assert!(!complex.is_available(&mut workspace));
        assert_eq!(complex.run(&mut workspace), CommandOutcome::NotApplicable);
        assert!(workspace.modals.is_empty());
    }

    #[test]
    fn complex_modal_checking_does_not_open() {
        let mut workspace = FakeWorkspace::with_editor("", 0..0);
        let complex = command(OPEN_MODAL_COMPLEX);

        assert!(complex.is_available(&mut workspace));
        assert!(workspace.modals.is_empty());

        assert_eq!(complex.run(&mut workspace), CommandOutcome::Ran);
        assert_eq!(workspace.modals, vec!["Woah!".to_string()]);
    }
}
