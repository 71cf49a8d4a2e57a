use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dreamforge::app::{App, AppInput};
use dreamforge::utils::persistence;
use dreamforge::{Category, ErrorLog, TICK_INTERVAL_MS};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Parsed command line.
struct CliArgs {
    category: Option<Category>,
    seed: Option<u64>,
}

fn print_help() {
    println!("DreamForge - educational mini-game hub\n");
    println!("Usage: dreamforge [options]\n");
    println!("Options:");
    println!("  --category <id>  Start straight into a game (colorhop, math, language, logic)");
    println!("  --seed <n>       Fix all random choices");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        category: None,
        seed: None,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("dreamforge {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--category" | "-c" => match iter.next().map(|s| s.parse::<Category>()) {
                Some(Ok(category)) => cli.category = Some(category),
                Some(Err(e)) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
                None => {
                    eprintln!("--category needs a value");
                    std::process::exit(1);
                }
            },
            "--seed" => match iter.next().and_then(|s| s.parse::<u64>().ok()) {
                Some(seed) => cli.seed = Some(seed),
                None => {
                    eprintln!("--seed needs a number");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'dreamforge --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    cli
}

/// Log to ~/.dreamforge/dreamforge.log; the terminal belongs to the UI.
fn init_logging() -> io::Result<()> {
    let path = persistence::data_path("dreamforge.log")?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn map_key(code: KeyCode) -> AppInput {
    match code {
        KeyCode::Up => AppInput::Up,
        KeyCode::Down => AppInput::Down,
        KeyCode::Left => AppInput::Left,
        KeyCode::Right => AppInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => AppInput::Select,
        KeyCode::Char(c @ '1'..='9') => AppInput::Digit(c as usize - '1' as usize),
        KeyCode::Esc => AppInput::Back,
        KeyCode::F(2) => AppInput::ToggleErrors,
        KeyCode::Char('c') | KeyCode::Char('C') => AppInput::ClearErrors,
        KeyCode::Char('x') | KeyCode::Char('X') => AppInput::ExportErrors,
        KeyCode::Char('q') | KeyCode::Char('Q') => AppInput::Quit,
        _ => AppInput::Other,
    }
}

/// Restore the terminal and log the panic before the default hook prints it.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        tracing::error!("panic: {}", info);
        default_hook(info);
    }));
}

fn main() -> io::Result<()> {
    let cli = parse_args();

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled ({})", e);
    }
    install_panic_hook();
    tracing::info!("DreamForge v{} starting", env!("CARGO_PKG_VERSION"));

    let error_log = ErrorLog::new().shared();
    let mut app = App::new(error_log, cli.seed);
    if let Some(category) = cli.category {
        app.open_game(category);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    tracing::info!("DreamForge shutting down");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        let mut failed = false;

        // Draw and input failures are logged to the error panel; the loop keeps
        // going unless they repeat.
        if let Err(e) = terminal.draw(|frame| dreamforge::ui::draw(frame, app)) {
            failed = true;
            if !app.report_io_failure("draw", &e) {
                return Err(e);
            }
        }

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        match read_input(timeout) {
            Ok(Some(input)) => app.process_input(input),
            Ok(None) => {}
            Err(e) => {
                failed = true;
                if !app.report_io_failure("read_input", &e) {
                    return Err(e);
                }
            }
        }

        if !failed {
            app.clear_io_failures();
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_interval {
            app.tick(elapsed);
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Wait up to `timeout` for a key press.
fn read_input(timeout: Duration) -> io::Result<Option<AppInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(map_key(key.code))),
        _ => Ok(None),
    }
}
