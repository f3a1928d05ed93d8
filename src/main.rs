//! Unburden - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;
use unburden::{
    cli::{Args, Commands, Verbosity},
    config::API_KEY_ENV,
    Affirmation, Config, ContentGenerator, ContentSource, ConversationTurn, Generated,
    MoodAction, QuickWin, TimeOfDay,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbosity());

    let config = load_config(&args)?;

    match &args.command {
        Commands::Config => show_config(&args, &config)?,
        Commands::Chat { message } => {
            let generator = build_generator(&config)?;
            match message {
                Some(message) => run_single_chat(&args, &generator, message).await?,
                None => run_chat_session(&args, &generator).await?,
            }
        }
        Commands::Mood { action } => {
            let generator = build_generator(&config)?;
            run_mood(&args, &generator, *action).await;
        }
        Commands::QuickWins { count, time_of_day } => {
            let generator = build_generator(&config)?;
            run_quick_wins(&args, &generator, *count, *time_of_day).await?;
        }
        Commands::PersonalizedWins { mood, completed } => {
            let generator = build_generator(&config)?;
            let wins = generator
                .generate_personalized_quick_wins(mood, completed)
                .await?;
            print_quick_wins(&args, &wins);
        }
        Commands::Affirmation { premium } => {
            let generator = build_generator(&config)?;
            let affirmation = generator.generate_affirmation(*premium).await;
            print_affirmation(&args, &affirmation);
        }
    }

    Ok(())
}

fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    if let Some(model) = &args.model {
        config.upstream.model = model.clone();
    }

    Ok(config)
}

fn build_generator(config: &Config) -> Result<ContentGenerator> {
    ContentGenerator::from_config(config).context("Failed to initialize content generator")
}

fn source_hint(args: &Args, source: ContentSource) {
    if source == ContentSource::Fallback && args.verbosity().show_source() {
        eprintln!(
            "{}",
            "(the companion is offline right now, showing saved content)".dimmed()
        );
    }
}

async fn run_single_chat(args: &Args, generator: &ContentGenerator, message: &str) -> Result<()> {
    let reply = generator.generate_chat_reply(message, &[]).await?;
    print_reply(args, &reply);
    Ok(())
}

/// Interactive chat; history lives only for the session
async fn run_chat_session(args: &Args, generator: &ContentGenerator) -> Result<()> {
    println!("{}", "Unburden - I'm here to listen.".bright_magenta().bold());
    println!("{}", "Type a message, or /exit to leave.\n".dimmed());

    let mut history: Vec<ConversationTurn> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let message = line.trim();

        match message {
            "" => continue,
            "/exit" | "/quit" => break,
            _ => {}
        }

        let reply = generator.generate_chat_reply(message, &history).await?;
        print_reply(args, &reply);

        history.push(ConversationTurn::user(message));
        history.push(ConversationTurn::companion(reply.into_content()));
    }

    println!("{}", "Take care of yourself. 💜".bright_magenta());
    Ok(())
}

fn print_reply(args: &Args, reply: &Generated<String>) {
    println!("{} {}\n", "unburden>".bright_magenta().bold(), reply.content);
    source_hint(args, reply.source);
}

async fn run_mood(args: &Args, generator: &ContentGenerator, action: MoodAction) {
    let reply = generator.generate_mood_response(action, &[]).await;
    print_reply(args, &reply);
}

async fn run_quick_wins(
    args: &Args,
    generator: &ContentGenerator,
    count: usize,
    time_of_day: TimeOfDay,
) -> Result<()> {
    let wins = generator.generate_quick_wins(count, time_of_day).await?;
    print_quick_wins(args, &wins);
    Ok(())
}

fn print_quick_wins(args: &Args, wins: &Generated<Vec<QuickWin>>) {
    println!("{}", "Quick wins".bright_cyan().bold());
    for win in &wins.content {
        println!("  {} {} {}", "○".cyan(), win.text, format!("[{}]", win.category).dimmed());
        if matches!(args.verbosity(), Verbosity::VeryVerbose) {
            println!("    {}", win.id.dimmed());
        }
    }
    println!();
    source_hint(args, wins.source);
}

fn print_affirmation(args: &Args, affirmation: &Generated<Affirmation>) {
    let content = &affirmation.content;
    println!("{}", format!("\"{}\"", content.text).bright_yellow());
    match &content.author {
        Some(author) => println!("  {} {} ({})", "-".dimmed(), author, content.kind),
        None => println!("  {}", format!("({})", content.kind).dimmed()),
    }
    println!();
    source_hint(args, affirmation.source);
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    println!("{}", "Unburden Configuration".bright_magenta().bold());
    println!("  File: {}", path.display());
    println!();

    println!("Upstream:");
    println!("  Base URL: {}", config.upstream.base_url);
    println!("  Model:    {}", config.upstream.model);
    println!("  Timeout:  {}s", config.upstream.request_timeout_secs);
    let key_status = if config.api_key().is_some() {
        "configured".green()
    } else {
        format!("missing (set {} or upstream.api_key)", API_KEY_ENV).red()
    };
    println!("  API key:  {}", key_status);
    println!();

    println!("Retry:");
    println!("  Max retries: {}", config.retry.max_retries);
    println!("  Base delay:  {}ms", config.retry.base_delay_ms);
    println!("  Jitter:      {}", if config.retry.jitter { "enabled" } else { "disabled" });
    println!();

    println!("History:");
    println!("  Capacity: {}", config.history.capacity);
    println!();

    println!("Verbosity: {}", args.verbosity().as_str());

    Ok(())
}
