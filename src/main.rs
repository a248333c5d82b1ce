use clap::Parser;
use lounge::application::timer::TICK_INTERVAL;
use lounge::application::{
    init, ConfigService, JournalComposer, JournalService, MoodService, TimerControl, TimerSession,
};
use lounge::cli::{
    format_journal_entry, format_journal_list, format_mood_choices, format_mood_history,
    format_mood_stats, format_presets, format_timer_line, Cli, Commands, JournalCommand,
    MoodCommand, TimerCommand, TimerRunArgs,
};
use lounge::domain::prompts::pick_prompt;
use lounge::domain::timer::{format_clock, validate_custom_minutes};
use lounge::domain::{Mood, TimerPreset, TimerStatus};
use lounge::error::{LoungeError, Result};
use lounge::infrastructure::{
    cue_for, CompletionCue, Config, FileSystemRepository, LoungeRepository,
};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => {
            init::init(&path)?;
            println!("Initialized lounge at {}", path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("default_minutes = {}", config.default_minutes);
                println!("sound = {}", config.sound);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: lounge config [--list | <key> [<value>]]");
                println!("Valid keys: default_minutes, sound, created");
            }
            Ok(())
        }
        Some(Commands::Journal(command)) => run_journal(command),
        Some(Commands::Mood(command)) => run_mood(command),
        Some(Commands::Timer(command)) => run_timer(command),
        None => {
            println!("lounge - Terminal relaxation companion");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn run_journal(command: JournalCommand) -> Result<()> {
    if let JournalCommand::Prompt = command {
        println!("{}", pick_prompt(&mut rand::thread_rng(), None));
        return Ok(());
    }

    let repo = FileSystemRepository::discover()?;
    let mut composer = JournalComposer::new(JournalService::new(repo.slots()));

    match command {
        JournalCommand::Add { text } => {
            composer.set_draft(&text.join(" "));
            let entry = composer.save()?.ok_or(LoungeError::EmptyContent)?;
            println!("Saved entry {}", entry.id);
        }
        JournalCommand::Edit { id, text } => {
            composer.begin_edit(id)?;
            composer.set_draft(&text.join(" "));
            let entry = composer.save()?.ok_or(LoungeError::EmptyContent)?;
            println!("Updated entry {}", entry.id);
        }
        JournalCommand::Rm { id } => {
            if composer.delete(id)? {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with id {}", id);
            }
        }
        JournalCommand::List { limit } => {
            let entries = composer.service().entries();
            let shown = limit.map_or(entries.len(), |n| n.min(entries.len()));
            println!("{}", format_journal_list(&entries[..shown]));
        }
        JournalCommand::Show { id } => {
            let entry = composer
                .service()
                .get(id)
                .ok_or(LoungeError::RecordNotFound(id))?;
            print!("{}", format_journal_entry(entry));
        }
        JournalCommand::Prompt => {}
    }
    Ok(())
}

fn run_mood(command: MoodCommand) -> Result<()> {
    if let MoodCommand::ListMoods = command {
        print!("{}", format_mood_choices());
        return Ok(());
    }

    let repo = FileSystemRepository::discover()?;
    let mut moods = MoodService::new(repo.slots());

    match command {
        MoodCommand::Log { mood, note } => {
            let mood: Mood = mood.parse().map_err(LoungeError::InvalidMood)?;
            let entry = moods.log(mood, note.as_deref())?;
            println!("Logged {} {}", entry.mood.icon(), entry.mood.label());
        }
        MoodCommand::History { limit } => {
            print!("{}", format_mood_history(moods.history(limit)));
        }
        MoodCommand::Stats => {
            println!("{}", format_mood_stats(&moods.stats()));
        }
        MoodCommand::ListMoods => {}
    }
    Ok(())
}

fn run_timer(command: TimerCommand) -> Result<()> {
    match command {
        TimerCommand::Presets => {
            print!("{}", format_presets());
            Ok(())
        }
        TimerCommand::Run(args) => run_countdown(args),
    }
}

/// Timer settings come from the lounge config when there is one
fn timer_config() -> Result<Config> {
    match FileSystemRepository::discover() {
        Ok(repo) => repo.load_config(),
        Err(LoungeError::NotLoungeDirectory(_)) => Ok(Config::default()),
        Err(e) => Err(e),
    }
}

fn countdown_seconds(args: &TimerRunArgs, config: &Config) -> Result<u32> {
    if let Some(seconds) = args.seconds {
        return Ok(seconds);
    }
    if let Some(slug) = &args.preset {
        let preset: TimerPreset = slug.parse().map_err(LoungeError::Config)?;
        return Ok(preset.seconds());
    }
    let minutes = validate_custom_minutes(args.minutes.unwrap_or(config.default_minutes))?;
    Ok(minutes * 60)
}

fn run_countdown(args: TimerRunArgs) -> Result<()> {
    let config = timer_config()?;
    let total = countdown_seconds(&args, &config)?;
    let interval = args
        .tick_ms
        .map_or(TICK_INTERVAL, |ms| Duration::from_millis(ms.max(1)));
    let session = TimerSession::new(total, interval, cue_for(config.sound && !args.mute));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let status = runtime.block_on(countdown(session));
    // A stdin read may still be pending; don't wait for it
    runtime.shutdown_background();

    if status == TimerStatus::Complete {
        println!("Time to rest more! Take your time, there's no rush to get back to reality.");
    }
    Ok(())
}

async fn countdown<C: CompletionCue>(mut session: TimerSession<C>) -> TimerStatus {
    let (sender, mut controls) = mpsc::unbounded_channel();
    tokio::spawn(read_controls(sender));

    println!("p = pause/resume, r = reset, q = quit");
    println!("{}", format_timer_line(session.timer()));
    session.start();

    let mut stdout = std::io::stdout();
    let status = session
        .run_with_controls(&mut controls, |timer, control| {
            let clock = format_clock(timer.remaining_seconds());
            let notice = match control {
                None => None,
                Some(TimerControl::Toggle) if timer.is_running() => Some("Resumed".to_string()),
                Some(TimerControl::Toggle) => Some(format!("Paused at {}", clock)),
                Some(TimerControl::Reset) => Some(format!("Reset to {}", clock)),
                Some(TimerControl::Quit) => Some(format!("Stopped at {}", clock)),
            };
            if let Some(notice) = notice {
                let _ = writeln!(stdout);
                let _ = writeln!(stdout, "{}", notice);
            }
            let _ = write!(stdout, "\r{}", format_timer_line(timer));
            let _ = stdout.flush();
        })
        .await;
    println!();
    status
}

/// Forward control lines typed on stdin until it closes
async fn read_controls(sender: mpsc::UnboundedSender<TimerControl>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<TimerControl>() {
            Ok(control) => {
                if sender.send(control).is_err() {
                    break;
                }
            }
            Err(message) => eprintln!("{}", message),
        }
    }
}
