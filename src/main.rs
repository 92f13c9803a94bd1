mod apps;
mod audio;
mod gui;
mod logger;
mod notifications;
mod wifi;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;

use apps::{Demo, SkeletonApp, TodoApp, WalletApp};
use notifications::Notifications;

const USAGE: &str = "usage: pocket-demos [todo|skeleton|wallet] [--confirm] [--log FILE]";

struct Options {
    demo: String,
    confirm_on_add: bool,
    log_file: Option<PathBuf>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        demo: String::from("todo"),
        confirm_on_add: false,
        log_file: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--confirm" => options.confirm_on_add = true,
            "--log" => match args.next() {
                Some(path) => options.log_file = Some(PathBuf::from(path)),
                None => return Err(String::from("--log requires a file path")),
            },
            name if !name.starts_with('-') => options.demo = name.to_string(),
            other => return Err(format!("unknown option: {other}")),
        }
    }

    Ok(options)
}

fn main() -> io::Result<()> {
    // Parse CLI arguments
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    if let Some(path) = &options.log_file {
        logger::init(path)?;
    }

    let demo = match options.demo.as_str() {
        "todo" => Demo::Todo(TodoApp::new(options.confirm_on_add)),
        "skeleton" => Demo::Skeleton(SkeletonApp::new(Notifications::new())),
        "wallet" => Demo::Wallet(WalletApp::new(Notifications::new())),
        other => {
            eprintln!("unknown demo: {other}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("pocket-demos"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the selected demo
    let result = run(&mut terminal, demo);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut demo: Demo) -> io::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| demo.render(frame))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    demo.handle_key(key);
                }
            }
        }

        if demo.exited() {
            break;
        }
    }

    Ok(())
}
