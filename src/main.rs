use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyglider::core::constants::{CONFIG_FILE, LOG_FILE, STORE_FILE};
use skyglider::core::{GameConfig, GameSession};
use skyglider::input::{map_event, HostAction};
use skyglider::player::{load_player_name, save_player_name};
use skyglider::scores::{load_best_scores, JsonFileStore};
use skyglider::utils::persistence::{data_path, load_json_or_default};
use skyglider::{build_info, logging, ui};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Default)]
struct CliOptions {
    name: Option<String>,
    seed: Option<u64>,
    show_scores: bool,
}

fn print_help() {
    println!("Skyglider - glide through the pipes\n");
    println!("Usage: skyglider [options] [command]\n");
    println!("Commands:");
    println!("  scores         Show best scores and exit");
    println!("\nOptions:");
    println!("  --name <NAME>  Set and remember the player name");
    println!("  --seed <N>     Fixed seed for the pipe layout");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
    println!("\nControls: Space/Up/Enter/W or left click to jump, Q/Esc to quit.");
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'skyglider --help' for usage.");
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--name" => match iter.next() {
                Some(name) => options.name = Some(name.clone()),
                None => fail("--name needs a value"),
            },
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => options.seed = Some(seed),
                _ => fail("--seed needs a non-negative integer"),
            },
            "scores" => options.show_scores = true,
            other => fail(&format!("Unknown argument: {}", other)),
        }
    }

    options
}

fn load_config() -> io::Result<GameConfig> {
    let mut config: GameConfig = load_json_or_default(&data_path(CONFIG_FILE)?);
    let fixed = config.validate();
    if !fixed.is_empty() {
        log::warn!("Config values out of range, using safe values for: {:?}", fixed);
    }
    Ok(config)
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn run(terminal: &mut Tui, session: &mut GameSession<JsonFileStore, StdRng>) -> io::Result<()> {
    let config = session.config().clone();
    session.start(Instant::now());

    loop {
        let ran = session.run_frame(Instant::now(), |state| {
            terminal
                .draw(|f| ui::draw_ui(f, state, &config))
                .map(|_| ())
        })?;
        if let Some(result) = ran {
            for event in &result.events {
                log::debug!("{:?}", event);
            }
        }

        // Wait for input until the next frame is due, then drain the queue so
        // a burst of key repeats never delays a frame.
        let mut timeout = session.time_until_next_frame(Instant::now());
        while event::poll(timeout)? {
            match map_event(&event::read()?) {
                HostAction::Action => {
                    session.handle_input(Instant::now());
                }
                HostAction::Quit => return Ok(()),
                HostAction::Ignore => {}
            }
            timeout = Duration::ZERO;
        }
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args);

    if let Err(e) = logging::init_file_logger(&data_path(LOG_FILE)?) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!("{} starting", build_info::version_line());

    let config = load_config()?;
    let mut store = JsonFileStore::open(data_path(STORE_FILE)?);

    if let Some(name) = &options.name {
        match save_player_name(&mut store, name) {
            Ok(saved) => log::info!("Player name set to {}", saved),
            Err(e) => fail(&format!("Invalid name: {}", e)),
        }
    }

    if options.show_scores {
        let player = load_player_name(&store);
        let best = load_best_scores(&store, &player);
        println!("All-time best: {}", best.global);
        println!("{}'s best: {}", player, best.player);
        return Ok(());
    }

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::new(config, store, rng);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut session);
    restore_terminal(&mut terminal)?;

    log::info!(
        "Exiting after {} runs (best {})",
        session.state().runs,
        session.state().best.player
    );
    result
}
