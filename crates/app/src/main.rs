use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use quiz_core::model::{Leaderboard, QuestionBank};
use services::{AppServices, Clock, QuizLoopService, ScoreboardUpdate};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Streak length at which the play loop starts cheering.
const STREAK_CALLOUT: usize = 3;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { source: &'static str, raw: String },
    InvalidDbUrl { raw: String },
    InvalidBank { path: PathBuf, reason: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { source, raw } => write!(f, "invalid {source} value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidBank { path, reason } => {
                write!(f, "cannot load --bank {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_seed(source: &'static str, raw: String) -> Result<u64, ArgsError> {
    match raw.trim().parse() {
        Ok(seed) => Ok(seed),
        Err(_) => Err(ArgsError::InvalidSeed { source, raw }),
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- play        [--db <sqlite_url>] [--seed <u64>] [--bank <file.json>] [--verbose]");
    eprintln!("  cargo run -p app -- leaderboard [--db <sqlite_url>] [--verbose]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:market.sqlite3");
    eprintln!("  --bank built-in market instinct questions");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MARKET_DB_URL, MARKET_SEED, MARKET_BANK, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Leaderboard,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "play" => Some(Self::Play),
            "leaderboard" => Some(Self::Leaderboard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    db_url: String,
    seed: Option<u64>,
    bank: Option<PathBuf>,
    verbose: bool,
}

impl Args {
    fn defaults() -> Result<Self, ArgsError> {
        Ok(Self {
            db_url: std::env::var("MARKET_DB_URL")
                .ok()
                .map_or_else(|| normalize_sqlite_url("sqlite:market.sqlite3".into()), normalize_sqlite_url),
            seed: std::env::var("MARKET_SEED")
                .ok()
                .map(|raw| parse_seed("MARKET_SEED", raw))
                .transpose()?,
            bank: std::env::var_os("MARKET_BANK").map(PathBuf::from),
            verbose: false,
        })
    }

    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with(Self::defaults()?, args)
    }

    fn parse_with(
        mut parsed: Self,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    parsed.db_url = normalize_sqlite_url(value);
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    parsed.seed = Some(parse_seed("--seed", value)?);
                }
                "--bank" => {
                    parsed.bank = Some(PathBuf::from(require_value(args, "--bank")?));
                }
                "--verbose" | "-v" => parsed.verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn load_bank(&self) -> Result<QuestionBank, ArgsError> {
        let Some(path) = &self.bank else {
            return Ok(QuestionBank::market_instinct());
        };
        let invalid = |reason: String| ArgsError::InvalidBank {
            path: path.clone(),
            reason,
        };
        let raw = std::fs::read_to_string(path).map_err(|err| invalid(err.to_string()))?;
        QuestionBank::from_json(&raw).map_err(|err| invalid(err.to_string()))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads `y`/`n` style answers. `None` for anything else.
fn parse_swipe(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "t" => Some(true),
        "n" | "no" | "false" | "f" => Some(false),
        _ => None,
    }
}

async fn play(quiz: &QuizLoopService, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = match seed {
        Some(seed) => quiz.start_session_seeded(seed),
        None => quiz.start_session(),
    };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    println!("Swipe instinctively: yes or no. An empty line lets the clock run out.");

    let mut current = session.next_question();
    let mut finished: Option<ScoreboardUpdate> = None;
    while let Some(question) = current {
        let progress = session.progress();
        println!();
        println!("[{}/{}] {}", progress.answered + 1, progress.total, question.text());
        print!("> ");
        stdout.flush()?;

        let result = match lines.next_line().await? {
            None => quiz.timeout(&mut session).await?,
            Some(line) if line.trim().is_empty() => quiz.timeout(&mut session).await?,
            Some(line) => {
                let Some(swipe) = parse_swipe(&line) else {
                    println!("Answer y or n.");
                    current = Some(question);
                    continue;
                };
                quiz.answer(&mut session, swipe).await?
            }
        };

        if result.entry.correct {
            let streak = session.current_streak();
            if streak >= STREAK_CALLOUT {
                println!("Correct. Streak {streak}, locked in.");
            } else {
                println!("Correct.");
            }
        } else {
            println!("Wrong.");
        }

        current = result.next;
        finished = result.finished;
    }

    let score = session.score();
    let breakdown = score.difficulty_breakdown;
    println!();
    println!("You {}", if score.passed() { "Passed" } else { "Failed" });
    println!("Score: {}%", score.percentage);
    println!("Weighted: {}/{}", score.weighted_score, score.possible_score);
    println!("Max streak: {}", score.max_streak);
    println!(
        "Served: easy {}, medium {}, hard {}",
        breakdown.easy, breakdown.medium, breakdown.hard
    );
    if let Some(update) = finished {
        println!("Best score: {}%", update.best_score);
        match update.rank {
            Some(rank) => println!("Leaderboard rank: #{rank}"),
            None => println!("Not in the top {}", quiz_core::model::LEADERBOARD_SIZE),
        }
    }
    Ok(())
}

fn print_leaderboard(board: &Leaderboard, best: u32) {
    if board.is_empty() {
        println!("No scores yet.");
        return;
    }
    println!("{:>3}  {:>6}  {:<9}  date", "#", "score", "avg diff");
    for (idx, entry) in board.entries().iter().enumerate() {
        let label = entry.difficulty_average.map_or("", |label| label.as_str());
        println!(
            "{:>3}  {:>5}%  {:<9}  {}",
            idx + 1,
            entry.score,
            label,
            entry.date.format("%Y-%m-%d %H:%M")
        );
    }
    println!("Best score: {best}%");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: play when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Play,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with('-') => Command::Play,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    let skip = usize::from(argv.first().is_some_and(|first| !first.starts_with('-')));
    let mut iter = argv.into_iter().skip(skip);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing(parsed.verbose);

    let bank = parsed.load_bank()?;
    tracing::debug!(questions = bank.len(), db = %parsed.db_url, "starting");

    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::System, bank).await?;

    match cmd {
        Command::Play => play(&services.quiz_loop(), parsed.seed).await,
        Command::Leaderboard => {
            let scoreboard = services.scoreboard();
            let board = scoreboard.leaderboard().await?;
            let best = scoreboard.best_score().await?;
            print_leaderboard(&board, best);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Args {
        Args {
            db_url: "sqlite::memory:".into(),
            seed: None,
            bank: None,
            verbose: false,
        }
    }

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse_with(base(), &mut iter)
    }

    #[test]
    fn parses_flags() {
        let parsed = parse(&["--seed", "42", "--bank", "bank.json", "-v", "--db", "sqlite::memory:"])
            .unwrap();
        assert_eq!(parsed.seed, Some(42));
        assert_eq!(parsed.bank, Some(PathBuf::from("bank.json")));
        assert!(parsed.verbose);
        assert_eq!(parsed.db_url, "sqlite::memory:");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse(&["--seed", "many"]),
            Err(ArgsError::InvalidSeed { .. })
        ));
        assert!(matches!(
            parse(&["--db"]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(parse(&["--db", "  "]), Err(ArgsError::InvalidDbUrl { .. })));
        assert!(matches!(parse(&["--wat"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn seeds_from_flag_and_env_are_validated_alike() {
        assert_eq!(parse_seed("MARKET_SEED", " 17 ".into()).unwrap(), 17);
        let err = parse_seed("MARKET_SEED", "soon".into()).unwrap_err();
        assert!(matches!(
            err,
            ArgsError::InvalidSeed { source: "MARKET_SEED", .. }
        ));
        assert_eq!(err.to_string(), "invalid MARKET_SEED value: soon");
        assert!(matches!(
            parse(&["--seed", "soon"]),
            Err(ArgsError::InvalidSeed { source: "--seed", .. })
        ));
    }

    #[test]
    fn normalizes_relative_sqlite_paths() {
        let url = normalize_sqlite_url("sqlite:scores.sqlite3".into());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("scores.sqlite3"));
        assert_eq!(
            normalize_sqlite_url("sqlite://already/abs.db".into()),
            "sqlite://already/abs.db"
        );
    }

    #[test]
    fn swipes_accept_common_spellings() {
        assert_eq!(parse_swipe("Y"), Some(true));
        assert_eq!(parse_swipe(" no "), Some(false));
        assert_eq!(parse_swipe("maybe"), None);
    }

    #[test]
    fn missing_bank_file_is_reported() {
        let args = Args {
            bank: Some(PathBuf::from("/definitely/not/here.json")),
            ..base()
        };
        assert!(matches!(args.load_bank(), Err(ArgsError::InvalidBank { .. })));
        assert_eq!(base().load_bank().unwrap().len(), 100);
    }
}
