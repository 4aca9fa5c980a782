//! Command-line front end for gherkin-pad.
//!
//! Usage:
//!   gherkin-pad [--store `<path>`]               - Browse saved scenarios in a TUI
//!   gherkin-pad list                            - Print id and title of every scenario
//!   gherkin-pad import `<path>`                   - Import a .feature/.txt file or a directory of them
//!   gherkin-pad export [`<path>`]                 - Write all scenarios to one file
//!   gherkin-pad steps                           - Print the distinct step lines
//!   gherkin-pad show `<id>` [--html]              - Print one scenario
//!   gherkin-pad init                            - Write a default config file
mod styling;

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gherkin_pad_config::Config;
use gherkin_pad_engine::{JsonFileStore, RecordId, Workbench, io, render_html};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

struct App {
    workbench: Workbench<JsonFileStore>,
    export_path: PathBuf,
    list_state: ListState,
    show_steps: bool,
    pending_delete: Option<RecordId>,
    status: Option<String>,
}

impl App {
    fn new(workbench: Workbench<JsonFileStore>, export_path: PathBuf) -> Self {
        let mut app = Self {
            workbench,
            export_path,
            list_state: ListState::default(),
            show_steps: false,
            pending_delete: None,
            status: None,
        };

        // Select first scenario if available
        if !app.workbench.records().is_empty() {
            app.list_state.select(Some(0));
        }

        app
    }

    fn selected_id(&self) -> Option<RecordId> {
        let index = self.list_state.selected()?;
        self.workbench.records().get(index).map(|r| r.id)
    }

    fn next(&mut self) {
        let len = self.workbench.records().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        let len = self.workbench.records().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn request_delete(&mut self) {
        if let Some(id) = self.selected_id() {
            self.pending_delete = Some(id);
            self.status = Some("Delete this scenario? y: yes | any other key: no".to_string());
        }
    }

    fn confirm_delete(&mut self, id: RecordId) {
        self.status = Some(match self.workbench.delete(id) {
            Ok(outcome) => format!("Deleted \"{}\"", outcome.removed.title),
            Err(e) => format!("Error: {e}"),
        });

        let len = self.workbench.records().len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    fn export(&mut self) {
        self.status = Some(match self.workbench.export_to(&self.export_path) {
            Ok(count) => format!(
                "Exported {count} scenario(s) to {}",
                self.export_path.display()
            ),
            Err(e) => format!("Error: {e}"),
        });
    }
}

fn cli() -> Command {
    Command::new("gherkin-pad")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write, store and manage Given/When/Then test scenarios")
        .arg(
            Arg::new("store")
                .long("store")
                .short('s')
                .value_name("PATH")
                .global(true)
                .help("Scenario store file (defaults to the configured store_path)"),
        )
        .subcommand(Command::new("list").about("Print id and title of every saved scenario"))
        .subcommand(
            Command::new("import")
                .about("Import scenarios from a .feature/.txt file or a directory of them")
                .arg(Arg::new("path").required(true).index(1)),
        )
        .subcommand(
            Command::new("export")
                .about("Write all scenarios to a single file")
                .arg(Arg::new("path").index(1)),
        )
        .subcommand(Command::new("steps").about("Print the distinct step lines of all scenarios"))
        .subcommand(
            Command::new("show")
                .about("Print one scenario")
                .arg(Arg::new("id").required(true).index(1))
                .arg(
                    Arg::new("html")
                        .long("html")
                        .action(ArgAction::SetTrue)
                        .help("Print highlighted HTML instead of plain text"),
                ),
        )
        .subcommand(Command::new("init").about("Write a default config file if none exists"))
}

fn main() -> Result<()> {
    // Logs go to stderr; keep them quiet by default so the TUI stays readable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();

    if matches.subcommand_name() == Some("init") {
        return handle_init();
    }

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let store_path = matches
        .get_one::<String>("store")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.store_path.clone());
    log::info!("Using scenario store {}", store_path.display());

    let store = JsonFileStore::open(&store_path)
        .with_context(|| format!("Failed to open scenario store {}", store_path.display()))?;
    let mut workbench = Workbench::new(store).with_fallback_title(config.fallback_title.clone());

    match matches.subcommand() {
        Some(("list", _)) => handle_list(&workbench),
        Some(("import", sub)) => handle_import(&mut workbench, sub),
        Some(("export", sub)) => handle_export(&workbench, sub, &config),
        Some(("steps", _)) => {
            for step in workbench.steps() {
                println!("{step}");
            }
            Ok(())
        }
        Some(("show", sub)) => handle_show(&workbench, sub),
        _ => run_browser(workbench, PathBuf::from(&config.export_file_name)),
    }
}

fn handle_init() -> Result<()> {
    let config_path = Config::config_path();
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }
    Config::default()
        .save()
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn handle_list(workbench: &Workbench<JsonFileStore>) -> Result<()> {
    for record in workbench.records() {
        println!("{}\t{}", record.id, record.title);
    }
    Ok(())
}

fn handle_import(workbench: &mut Workbench<JsonFileStore>, sub: &ArgMatches) -> Result<()> {
    let path = PathBuf::from(sub.get_one::<String>("path").context("missing path")?);

    let files = if path.is_dir() {
        io::scan_scenario_files(&path)?
    } else {
        vec![path]
    };

    let total = workbench.import_files(&files)?;
    println!("Imported {total} scenario(s) from {} file(s)", files.len());
    Ok(())
}

fn handle_export(
    workbench: &Workbench<JsonFileStore>,
    sub: &ArgMatches,
    config: &Config,
) -> Result<()> {
    let path = sub
        .get_one::<String>("path")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.export_file_name));
    let count = workbench.export_to(&path)?;
    println!("Exported {count} scenario(s) to {}", path.display());
    Ok(())
}

fn handle_show(workbench: &Workbench<JsonFileStore>, sub: &ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("id").context("missing id")?;
    let id: RecordId = raw
        .parse()
        .with_context(|| format!("Invalid scenario id '{raw}'"))?;
    let Some(record) = workbench.record(id) else {
        bail!("No scenario with id {id}");
    };

    if sub.get_flag("html") {
        println!("{}", render_html(&record.content));
    } else {
        println!("{}", record.content);
    }
    Ok(())
}

fn run_browser(workbench: Workbench<JsonFileStore>, export_path: PathBuf) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(workbench, export_path);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(id) = app.pending_delete.take() {
            if key.code == KeyCode::Char('y') {
                app.confirm_delete(id);
            } else {
                app.status = None;
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Down | KeyCode::Char('j') => app.next(),
            KeyCode::Up | KeyCode::Char('k') => app.previous(),
            KeyCode::Char('d') => app.request_delete(),
            KeyCode::Char('s') => app.show_steps = !app.show_steps,
            KeyCode::Char('e') => app.export(),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Scenario list panel
    let items: Vec<ListItem> = app
        .workbench
        .records()
        .iter()
        .map(|record| ListItem::new(Line::from(record.title.clone())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Saved Scenarios"),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    // Preview panel
    let (title, content) = if app.show_steps {
        let steps: Vec<Line> = app.workbench.steps().into_iter().map(Line::from).collect();
        ("Steps", steps)
    } else {
        let selected = app
            .list_state
            .selected()
            .and_then(|i| app.workbench.records().get(i));
        match selected {
            Some(record) => ("Preview", styling::document_lines(&record.content)),
            None if app.workbench.records().is_empty() => (
                "Preview",
                vec![Line::from("No saved scenarios yet. Import some with `gherkin-pad import`.")],
            ),
            None => ("Preview", vec![Line::from("Select a scenario to view it")]),
        }
    };

    let preview = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(preview, chunks[1]);

    // Status or help line
    let bottom = match &app.status {
        Some(status) => Line::from(Span::raw(status.clone())),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k: Previous | "),
            Span::raw("↓/j: Next | "),
            Span::raw("d: Delete | s: Steps | e: Export"),
        ]),
    };

    f.render_widget(Paragraph::new(vec![bottom]), rows[1]);
}
