//! Registration records a plugin hands to its host.
//!
//! Handlers are plain `fn` pointers. Anything a handler needs at call time
//! comes in through its arguments, never from captured state.

use std::time::Duration;

use relative_path::RelativePathBuf;
use vault_sample_config::Settings;

use crate::dom::Element;
use crate::host::{Editor, FileRef, MarkdownView, MouseEvent, Workspace};

#[derive(Clone, Copy)]
pub enum CommandAction {
    /// Runs anywhere.
    Callback(fn(&mut dyn Workspace)),
    /// Runs against the focused editor; unavailable without one.
    Editor(fn(&mut dyn Editor, &MarkdownView)),
    /// Called with `true` to ask whether the command applies, and with
    /// `false` to run it.
    Check(fn(&mut dyn Workspace, bool) -> bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Ran,
    NotApplicable,
}

#[derive(Clone)]
pub struct Command {
    pub id: &'static str,
    pub name: &'static str,
    pub action: CommandAction,
}

impl Command {
    pub fn is_available(&self, workspace: &mut dyn Workspace) -> bool {
        match self.action {
            CommandAction::Callback(_) => true,
            CommandAction::Editor(_) => workspace.active_editor().is_some(),
            CommandAction::Check(check) => check(workspace, true),
        }
    }

    pub fn run(&self, workspace: &mut dyn Workspace) -> CommandOutcome {
        match self.action {
            CommandAction::Callback(callback) => {
                callback(workspace);
                CommandOutcome::Ran
            }
            CommandAction::Editor(callback) => match workspace.active_editor() {
                Some(active) => {
                    callback(active.editor, active.view);
                    CommandOutcome::Ran
                }
                None => CommandOutcome::NotApplicable,
            },
            CommandAction::Check(check) => {
                if check(workspace, false) {
                    CommandOutcome::Ran
                } else {
                    CommandOutcome::NotApplicable
                }
            }
        }
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.action {
            CommandAction::Callback(_) => "callback",
            CommandAction::Editor(_) => "editor",
            CommandAction::Check(_) => "check",
        };
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("action", &kind)
            .finish()
    }
}

pub struct RibbonIcon {
    pub icon: &'static str,
    pub title: &'static str,
    pub class: Option<&'static str>,
    pub on_click: fn(&mut dyn Workspace, &MouseEvent),
}

impl RibbonIcon {
    /// The ribbon button as the host draws it, carrying the extra class.
    pub fn element(&self) -> Element {
        let mut el = Element::new("div");
        el.add_class("side-dock-ribbon-action");
        el.add_class(format!("lucide-{}", self.icon));
        if let Some(class) = self.class {
            el.add_class(class);
        }
        el.set_text(self.title);
        el
    }

    pub fn click(&self, workspace: &mut dyn Workspace, event: &MouseEvent) {
        (self.on_click)(workspace, event);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarItem {
    pub element: Element,
}

/// What a menu item acts on, captured when the menu is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTarget {
    pub file: Option<FileRef>,
}

pub struct MenuItem {
    pub title: String,
    pub icon: Option<String>,
    pub target: MenuTarget,
    pub on_click: fn(&mut dyn Workspace, &MenuTarget),
}

impl MenuItem {
    pub fn new(title: impl Into<String>, on_click: fn(&mut dyn Workspace, &MenuTarget)) -> Self {
        Self {
            title: title.into(),
            icon: None,
            target: MenuTarget::default(),
            on_click,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_target(mut self, target: MenuTarget) -> Self {
        self.target = target;
        self
    }

    pub fn click(&self, workspace: &mut dyn Workspace) {
        (self.on_click)(workspace, &self.target);
    }
}

/// A context menu being built by the host.
#[derive(Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub enum EventSubscription {
    FileMenu(fn(&mut Menu, &FileRef)),
    EditorMenu(fn(&mut Menu, &MarkdownView)),
    VaultCreate(fn(&FileRef)),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomTarget {
    Document,
    Window,
}

pub struct DomEventListener {
    pub target: DomTarget,
    pub event: &'static str,
    pub handler: fn(&MouseEvent),
}

pub struct Interval {
    pub every: Duration,
    pub handler: fn(),
}

/// Context for a single code block invocation.
#[derive(Debug, Clone, Default)]
pub struct ProcessorContext {
    pub source_path: Option<RelativePathBuf>,
}

/// Renders the body of a fenced code block into the host's output element.
pub trait CodeBlockProcessor: Send + Sync {
    fn process(&self, source: &str, el: &mut Element, ctx: &ProcessorContext);
}

/// A single editable control in a settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingControl {
    Text {
        key: &'static str,
        name: &'static str,
        description: &'static str,
        placeholder: &'static str,
        value: String,
    },
}

impl SettingControl {
    pub fn key(&self) -> &'static str {
        match self {
            SettingControl::Text { key, .. } => *key,
        }
    }
}

pub trait SettingTab: Send + Sync {
    fn display(&self, settings: &Settings) -> Vec<SettingControl>;
}

/// Everything a plugin registered during `start`.
#[derive(Default)]
pub struct Registry {
    commands: Vec<Command>,
    ribbon_icons: Vec<RibbonIcon>,
    status_bar_items: Vec<StatusBarItem>,
    subscriptions: Vec<EventSubscription>,
    dom_listeners: Vec<DomEventListener>,
    intervals: Vec<Interval>,
    code_block_processors: Vec<(String, Box<dyn CodeBlockProcessor>)>,
    setting_tabs: Vec<Box<dyn SettingTab>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let commands: Vec<_> = self.commands.iter().map(|c| c.id).collect();
        let languages: Vec<_> = self.code_block_languages().collect();
        f.debug_struct("Registry")
            .field("commands", &commands)
            .field("code_block_languages", &languages)
            .field("ribbon_icons", &self.ribbon_icons.len())
            .field("intervals", &self.intervals.len())
            .finish_non_exhaustive()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands are unique by id; a second registration of an id is ignored.
    pub fn add_command(&mut self, command: Command) {
        if self.command(command.id).is_some() {
            log::warn!("Command {} is already registered", command.id);
            return;
        }
        self.commands.push(command);
    }

    pub fn add_ribbon_icon(&mut self, icon: RibbonIcon) {
        self.ribbon_icons.push(icon);
    }

    pub fn add_status_bar_item(&mut self, item: StatusBarItem) {
        self.status_bar_items.push(item);
    }

    pub fn register_event(&mut self, subscription: EventSubscription) {
        self.subscriptions.push(subscription);
    }

    pub fn register_dom_event(&mut self, listener: DomEventListener) {
        self.dom_listeners.push(listener);
    }

    pub fn register_interval(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// Language tags are matched case-insensitively; a later registration
    /// for the same tag replaces the earlier one.
    pub fn register_code_block_processor(
        &mut self,
        language: &str,
        processor: Box<dyn CodeBlockProcessor>,
    ) {
        let language = language.to_ascii_lowercase();
        self.code_block_processors.retain(|(lang, _)| *lang != language);
        self.code_block_processors.push((language, processor));
    }

    pub fn add_setting_tab(&mut self, tab: Box<dyn SettingTab>) {
        self.setting_tabs.push(tab);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn command(&self, id: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn ribbon_icons(&self) -> &[RibbonIcon] {
        &self.ribbon_icons
    }

    pub fn status_bar_items(&self) -> &[StatusBarItem] {
        &self.status_bar_items
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn setting_tabs(&self) -> &[Box<dyn SettingTab>] {
        &self.setting_tabs
    }

    pub fn processor_for(&self, language: &str) -> Option<&dyn CodeBlockProcessor> {
        self.code_block_processors
            .iter()
            .find(|(lang, _)| lang.eq_ignore_ascii_case(language))
            .map(|(_, processor)| processor.as_ref())
    }

    pub fn code_block_languages(&self) -> impl Iterator<Item = &str> {
        self.code_block_processors
            .iter()
            .map(|(lang, _)| lang.as_str())
    }

    /// Build the context menu for a file by running every file-menu subscriber.
    pub fn file_menu(&self, file: &FileRef) -> Menu {
        let mut menu = Menu::new();
        for subscription in &self.subscriptions {
            if let EventSubscription::FileMenu(handler) = subscription {
                handler(&mut menu, file);
            }
        }
        menu
    }

    pub fn editor_menu(&self, view: &MarkdownView) -> Menu {
        let mut menu = Menu::new();
        for subscription in &self.subscriptions {
            if let EventSubscription::EditorMenu(handler) = subscription {
                handler(&mut menu, view);
            }
        }
        menu
    }

    /// Notify subscribers that a file was created; returns how many ran.
    pub fn notify_created(&self, file: &FileRef) -> usize {
        let mut notified = 0;
        for subscription in &self.subscriptions {
            if let EventSubscription::VaultCreate(handler) = subscription {
                handler(file);
                notified += 1;
            }
        }
        notified
    }

    /// Deliver a DOM event to matching listeners; returns how many ran.
    pub fn dispatch_dom_event(&self, target: DomTarget, event: &str, data: &MouseEvent) -> usize {
        let mut delivered = 0;
        for listener in &self.dom_listeners {
            if listener.target == target && listener.event == event {
                (listener.handler)(data);
                delivered += 1;
            }
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::FakeWorkspace;

    fn noop(_: &mut dyn Workspace) {}

    fn never(_: &mut dyn Workspace, _: bool) -> bool {
        false
    }

    struct Echo;

    impl CodeBlockProcessor for Echo {
        fn process(&self, source: &str, el: &mut Element, _ctx: &ProcessorContext) {
            el.set_text(source);
        }
    }

    fn noop_click(_: &mut dyn Workspace, _: &MouseEvent) {}

    #[test]
    fn debug_lists_command_ids_and_languages() {
        let mut registry = Registry::new();
        registry.add_command(Command {
            id: "say-hi",
            name: "Say hi",
            action: CommandAction::Callback(noop),
        });
        registry.register_code_block_processor("Echo", Box::new(Echo));

        let debug = format!("{registry:?}");

        assert!(debug.contains(r#"commands: ["say-hi"]"#), "{debug}");
        assert!(debug.contains(r#"code_block_languages: ["echo"]"#), "{debug}");
    }

    #[test]
    fn ribbon_element_carries_extra_class() {
        let icon = RibbonIcon {
            icon: "dice",
            title: "Roll",
            class: Some("roller"),
            on_click: noop_click,
        };

        insta::assert_snapshot!(
            icon.element().to_html(),
            @r#"<div class="side-dock-ribbon-action lucide-dice roller">Roll</div>"#
        );
    }

    #[test]
    fn ribbon_element_without_extra_class() {
        let icon = RibbonIcon {
            icon: "dice",
            title: "Roll",
            class: None,
            on_click: noop_click,
        };

        assert_eq!(icon.element().classes(), ["side-dock-ribbon-action", "lucide-dice"]);
    }

    #[test]
    fn duplicate_command_ids_keep_first() {
        let mut registry = Registry::new();
        registry.add_command(Command {
            id: "x",
            name: "first",
            action: CommandAction::Callback(noop),
        });
        registry.add_command(Command {
            id: "x",
            name: "second",
            action: CommandAction::Callback(noop),
        });

        assert_eq!(registry.commands().len(), 1);
        assert_eq!(registry.command("x").unwrap().name, "first");
    }

    #[test]
    fn check_command_false_is_not_applicable() {
        let mut workspace = FakeWorkspace::default();
        let command = Command {
            id: "never",
            name: "Never",
            action: CommandAction::Check(never),
        };

        assert!(!command.is_available(&mut workspace));
        assert_eq!(command.run(&mut workspace), CommandOutcome::NotApplicable);
    }

    #[test]
    fn processor_lookup_ignores_case() {
        let mut registry = Registry::new();
        registry.register_code_block_processor("CSV", Box::new(Echo));

        assert!(registry.processor_for("csv").is_some());
        assert!(registry.processor_for("Csv").is_some());
        assert!(registry.processor_for("tsv").is_none());
        assert_eq!(registry.code_block_languages().collect::<Vec<_>>(), vec!["csv"]);
    }

    #[test]
    fn later_processor_replaces_earlier() {
        let mut registry = Registry::new();
        registry.register_code_block_processor("csv", Box::new(crate::CsvBlockProcessor));
        registry.register_code_block_processor("csv", Box::new(Echo));

        let mut el = Element::new("div");
        registry
            .processor_for("csv")
            .unwrap()
            .process("a,b", &mut el, &ProcessorContext::default());

        assert_eq!(el.text(), Some("a,b"));
        assert_eq!(registry.code_block_languages().count(), 1);
    }

    #[test]
    fn dom_events_match_target_and_name() {
        fn ignore(_: &MouseEvent) {}

        let mut registry = Registry::new();
        registry.register_dom_event(DomEventListener {
            target: DomTarget::Document,
            event: "click",
            handler: ignore,
        });

        let event = MouseEvent::default();
        assert_eq!(registry.dispatch_dom_event(DomTarget::Document, "click", &event), 1);
        assert_eq!(registry.dispatch_dom_event(DomTarget::Window, "click", &event), 0);
        assert_eq!(registry.dispatch_dom_event(DomTarget::Document, "keydown", &event), 0);
    }
}
