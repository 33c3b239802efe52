//! Carousel CLI
//!
//! Usage:
//!   carousel --text "newsletter text"          # Segment text
//!   carousel --file newsletter.txt             # Segment a file
//!   cat newsletter.txt | carousel              # Segment stdin
//!   carousel --file n.txt --rules-only --json  # Rules only, JSON output
//!   carousel --serve                           # HTTP API server

use clap::Parser;
use colored::{Color, Colorize};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use carousel::config::{prefer_ai_from_env, AiConfig};
use carousel::core::{run_server, AiSegmenter, AppState, Orchestrator};
use carousel::types::{ParseOutcome, SlideRecord, SlideType, Strategy};
use carousel::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "carousel",
    version = VERSION,
    about = "Turn newsletter text into carousel slides",
    long_about = "Carousel splits newsletter text into typed carousel slides\n\
                  (hook, problem, solution, benefit, social-proof, cta, content).\n\n\
                  The AI path asks a chat-completion service (OpenRouter) to segment\n\
                  the text; when it is unavailable the rule-based segmenter is used.\n\n\
                  Environment:\n  \
                  OPENROUTER_API_KEY   completion service key (AI path)\n  \
                  CAROUSEL_MODEL       model identifier\n  \
                  CAROUSEL_ENDPOINT    completion endpoint URL\n  \
                  CAROUSEL_RULES_ONLY  set to 1 to disable the AI path"
)]
struct Args {
    /// Newsletter text
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Read newsletter text from a file (stdin when neither --text nor --file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Skip the AI path
    #[arg(long)]
    rules_only: bool,

    /// Completion service key (overrides OPENROUTER_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Model identifier (overrides CAROUSEL_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Completion endpoint URL (overrides CAROUSEL_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let prefer_ai = !args.rules_only && prefer_ai_from_env();
    let orchestrator = build_orchestrator(&args, prefer_ai);

    if args.serve {
        run_serve(&args, AppState::new(orchestrator, prefer_ai)).await;
    } else {
        run_single(&args, &orchestrator, prefer_ai).await;
    }
}

/// AI path attached only when preferred; a missing key still falls back cleanly
fn build_orchestrator(args: &Args, prefer_ai: bool) -> Orchestrator {
    if !prefer_ai {
        log::debug!("AI path disabled");
        return Orchestrator::rules_only();
    }

    let mut config = AiConfig::from_env();
    if let Some(ref key) = args.api_key {
        config.api_key = Some(key.clone());
    }
    if let Some(ref model) = args.model {
        config = config.with_model(model);
    }
    if let Some(ref endpoint) = args.endpoint {
        config = config.with_endpoint(endpoint);
    }

    if !config.has_credential() {
        log::warn!("No completion service key configured; slides will come from the rule-based segmenter");
    }
    Orchestrator::with_ai(AiSegmenter::new(config))
}

/// Segment one input and print it
async fn run_single(args: &Args, orchestrator: &Orchestrator, prefer_ai: bool) {
    let content = match read_input(args) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(1);
        }
    };

    if content.trim().is_empty() {
        eprintln!("{} content is required", "error:".red().bold());
        process::exit(1);
    }

    let outcome = orchestrator.parse(&content, prefer_ai).await;

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                process::exit(1);
            }
        }
    } else {
        print_outcome(&outcome);
    }
}

fn read_input(args: &Args) -> io::Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }
    if let Some(ref path) = args.file {
        return std::fs::read_to_string(path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Color per slide type
fn type_color(slide_type: SlideType) -> Color {
    match slide_type {
        SlideType::Hook => Color::Magenta,
        SlideType::Problem => Color::Red,
        SlideType::Solution => Color::Green,
        SlideType::Benefit => Color::Cyan,
        SlideType::SocialProof => Color::Blue,
        SlideType::Cta => Color::Yellow,
        SlideType::Content => Color::White,
    }
}

fn print_outcome(outcome: &ParseOutcome) {
    let strategy = match outcome.strategy {
        Strategy::Ai => "AI".green().bold(),
        Strategy::Rules => "RULES".yellow().bold(),
    };
    match outcome.fallback_reason {
        Some(ref reason) => println!("{} slides via {} (fallback: {})", outcome.len(), strategy, reason.dimmed()),
        None => println!("{} slides via {}", outcome.len(), strategy),
    }
    println!();

    let total = outcome.len();
    for slide in &outcome.slides {
        print_slide(slide, total);
    }
}

fn print_slide(slide: &SlideRecord, total: usize) {
    let color = type_color(slide.slide_type);
    println!(
        "{} {} {}",
        format!("[{}/{}]", slide.order + 1, total).dimmed(),
        slide.slide_type.label().to_uppercase().color(color).bold(),
        slide.headline.bold()
    );

    if let Some(sub) = slide.subheadline.as_deref().filter(|s| !s.is_empty()) {
        println!("      {}", sub);
    }
    if let Some(body) = slide.body.as_deref().filter(|s| !s.is_empty()) {
        println!("      {}", body.italic());
    }
    for bullet in slide.bullet_points.iter().flatten() {
        println!("      {} {}", "•".color(color), bullet);
    }
    if let Some(ref cta) = slide.cta_text {
        println!("      {}", format!("[ {} ]", cta).color(color).bold());
    }
    println!(
        "      {}",
        format!("{} / {}", slide.gradient, slide.animation).dimmed()
    );
    println!();
}

/// Run HTTP API server
async fn run_serve(args: &Args, state: AppState) {
    log::info!("Carousel v{} API server", VERSION);
    if let Err(e) = run_server(&args.addr, state).await {
        eprintln!("Server error: {}", e);
        process::exit(1);
    }
}
