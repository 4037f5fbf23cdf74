use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use relative_path::RelativePathBuf;
use vault_sample_config::{DataStore, FileStore};
use vault_sample_plugin::{
    CommandOutcome, DomTarget, FileRef, Lifecycle, MouseEvent, Registry, SamplePlugin,
    SettingControl, plugin::settings_tab::MY_SETTING_KEY,
};

mod host;
mod render;

use host::{BufferEditor, HeadlessHost};

#[derive(Parser)]
#[command(name = "vault-sample-cli")]
#[command(about = "Run the sample plugin against a headless host")]
struct Cli {
    /// Plugin data directory (defaults to ~/.config/vault-sample/plugins/sample-plugin)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Render the registered code blocks of a note as HTML
    Render { note: PathBuf },
    /// List registered commands
    Commands,
    /// Run a command by id
    Run {
        id: String,
        /// Text loaded into the editor and selected
        #[arg(long)]
        selection: Option<String>,
        /// Vault path of the active file
        #[arg(long)]
        file: Option<String>,
    },
    /// Show the file menu for a vault path and click its items
    FileMenu { path: String },
    /// Fire the vault create event for a path
    Create { path: String },
    /// Show the settings panel
    Settings,
    /// Change "Setting #1" and persist it
    Set { value: String },
    /// Let time pass on the host clock and fire the intervals that came due
    Tick { seconds: u64 },
    /// Send a click to the document
    Click {
        #[arg(long, default_value_t = 0.0)]
        x: f64,
        #[arg(long, default_value_t = 0.0)]
        y: f64,
    },
    /// Draw the ribbon icons and status bar, then click each icon
    Ribbon,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = match &cli.data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::in_default_dir(),
    };
    log::debug!("Plugin data: {}", store.location());

    let mut host = HeadlessHost::with_store(store);
    let mut plugin = SamplePlugin::new();
    let registry = plugin.start(&mut host)?;

    let result = dispatch(cli.command, &mut plugin, &registry, &mut host);

    plugin.stop();
    drop(registry);
    result
}

fn dispatch<S: DataStore>(
    command: CliCommand,
    plugin: &mut SamplePlugin,
    registry: &Registry,
    host: &mut HeadlessHost<S>,
) -> Result<()> {
    match command {
        CliCommand::Render { note } => {
            let markdown = fs::read_to_string(&note)
                .with_context(|| format!("Failed to read {}", note.display()))?;
            let source_path = note
                .file_name()
                .map(|name| RelativePathBuf::from(name.to_string_lossy().into_owned()));
            for block in render::render_note(registry, &markdown, source_path) {
                println!("{block}");
            }
        }
        CliCommand::Commands => {
            for command in registry.commands() {
                let marker = if command.is_available(host) { " " } else { "-" };
                println!("{marker} {:<28} {}", command.id, command.name);
            }
        }
        CliCommand::Run {
            id,
            selection,
            file,
        } => {
            let Some(command) = registry.command(&id) else {
                bail!("No command registered with id {id}");
            };
            if selection.is_some() || file.is_some() {
                host.open_view(
                    file.as_deref().map(FileRef::from),
                    BufferEditor::selecting_all(selection.unwrap_or_default()),
                );
            }
            if command.run(host) == CommandOutcome::NotApplicable {
                bail!("Command {id} is not applicable here");
            }
            print_workspace(host);
        }
        CliCommand::FileMenu { path } => {
            let menu = registry.file_menu(&FileRef::from(path.as_str()));
            for item in menu.items() {
                println!("[{}] {}", item.icon.as_deref().unwrap_or(""), item.title);
                item.click(host);
            }
            print_workspace(host);
        }
        CliCommand::Create { path } => {
            let notified = registry.notify_created(&FileRef::from(path.as_str()));
            println!("{notified} subscriber(s) notified");
        }
        CliCommand::Settings => {
            for tab in registry.setting_tabs() {
                for control in tab.display(plugin.settings()) {
                    print_control(&control);
                }
            }
        }
        CliCommand::Set { value } => {
            plugin.change_setting(MY_SETTING_KEY, value, host.store_mut())?;
            println!("Saved to {}", host.store_mut().location());
        }
        CliCommand::Tick { seconds } => {
            let fired = host.advance(registry, Duration::from_secs(seconds));
            println!("{fired} interval handler(s) fired");
        }
        CliCommand::Click { x, y } => {
            let event = MouseEvent {
                client_x: x,
                client_y: y,
                button: 0,
            };
            let delivered = registry.dispatch_dom_event(DomTarget::Document, "click", &event);
            println!("{delivered} listener(s) received the click");
        }
        CliCommand::Ribbon => {
            for icon in registry.ribbon_icons() {
                println!("{}", icon.element().to_html());
                icon.click(host, &MouseEvent::default());
            }
            for item in registry.status_bar_items() {
                println!("{}", item.element.to_html());
            }
            print_workspace(host);
        }
    }
    Ok(())
}

fn print_workspace<S: DataStore>(host: &HeadlessHost<S>) {
    for notice in host.notices() {
        println!("notice: {notice}");
    }
    for modal in host.modal_contents() {
        println!("modal: {modal}");
    }
    if let Some(editor) = host.editor() {
        println!("editor: {}", editor.text());
    }
}

fn print_control(control: &SettingControl) {
    match control {
        SettingControl::Text {
            name,
            description,
            placeholder,
            value,
            ..
        } => {
            let shown = if value.is_empty() { *placeholder } else { value.as_str() };
            println!("{name} ({description}): {shown}");
        }
    }
}
