use std::time::Duration;

use crate::host::{FileRef, MarkdownView, MouseEvent, Workspace};
use crate::registry::{
    DomEventListener, DomTarget, EventSubscription, Interval, Menu, MenuItem, MenuTarget,
};

pub const PRINT_PATH_TITLE: &str = "Print file path 👈";
pub const HEARTBEAT_PERIOD: Duration = Duration::from_secs(5 * 60);

pub fn sample_subscriptions() -> Vec<EventSubscription> {
    vec![
        EventSubscription::FileMenu(add_file_menu_item),
        EventSubscription::EditorMenu(add_editor_menu_item),
        EventSubscription::VaultCreate(log_created),
    ]
}

pub fn document_click_listener() -> DomEventListener {
    DomEventListener {
        target: DomTarget::Document,
        event: "click",
        handler: log_click,
    }
}

pub fn heartbeat_interval() -> Interval {
    Interval {
        every: HEARTBEAT_PERIOD,
        handler: log_heartbeat,
    }
}

fn add_file_menu_item(menu: &mut Menu, file: &FileRef) {
    menu.add_item(print_path_item(MenuTarget {
        file: Some(file.clone()),
    }));
}

fn add_editor_menu_item(menu: &mut Menu, view: &MarkdownView) {
    menu.add_item(print_path_item(MenuTarget {
        file: view.file.clone(),
    }));
}

fn print_path_item(target: MenuTarget) -> MenuItem {
    MenuItem::new(PRINT_PATH_TITLE, notice_file_path)
        .with_icon("document")
        .with_target(target)
}

fn notice_file_path(workspace: &mut dyn Workspace, target: &MenuTarget) {
    if let Some(file) = &target.file {
        workspace.notice(file.path.as_str());
    }
}

fn log_created(file: &FileRef) {
    log::info!("a new file has entered the arena");
    log::debug!("created {}", file.path);
}

fn log_click(event: &MouseEvent) {
    log::info!("click {event:?}");
}

fn log_heartbeat() {
    log::info!("setInterval");
}
