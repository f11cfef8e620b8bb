use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use deepcut::startup::{run, run_emergence, DiscoverRequest};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let args = cli().get_matches();
    if let Err(e) = dispatch(&args).await {
        eprintln!("\x1b[1m\x1b[31mError: {:#}\x1b[0m", e);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("deepcut")
        .about("🎵 Find undiscovered artists related to the ones you already love 🎵")
        .arg(
            Arg::new("real")
                .long("real")
                .action(ArgAction::SetTrue)
                .help("Use the real Spotify API (needs SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET)"),
        )
        .arg(
            Arg::new("max-followers")
                .long("max-followers")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .help("Only keep artists with fewer followers than this"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Maximum number of artists to show"),
        )
        .arg(
            Arg::new("emerging")
                .long("emerging")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with_all(["artist", "real", "max-followers", "limit"])
                .help("Rank the artists of a weekly-metrics JSON file by emergence score"),
        )
        .arg(
            Arg::new("artist")
                .num_args(1..)
                .value_name("ARTIST")
                .help("Seed artist name, or a Spotify artist URI/URL"),
        )
}

async fn dispatch(args: &ArgMatches) -> Result<()> {
    if let Some(fixture) = args.get_one::<PathBuf>("emerging") {
        return run_emergence(fixture);
    }

    let seed = match args.get_many::<String>("artist") {
        Some(tokens) => tokens.map(String::as_str).collect::<Vec<_>>().join(" "),
        None => prompt_artist_name()?,
    };
    let seed = seed.trim().to_string();

    if seed.is_empty() {
        println!("\x1b[31mPlease provide an artist name\x1b[0m");
        std::process::exit(1);
    }

    run(DiscoverRequest {
        seed,
        force_remote: args.get_flag("real"),
        max_followers: args.get_one::<u64>("max-followers").copied(),
        limit: args.get_one::<usize>("limit").copied(),
    })
    .await
}

fn prompt_artist_name() -> io::Result<String> {
    print!("Enter an artist name: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
