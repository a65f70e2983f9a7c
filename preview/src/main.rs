use anyhow::Result;
use atomkit::TOKENS;
use atomkit_preview::render::{self, OutputFormat};
use atomkit_preview::simulate::{self, ActivateOptions};
use atomkit_preview::stories;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atomkit-preview")]
#[command(about = "Render and exercise atomkit component stories")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render stories from a TOML story file
    Render {
        file: PathBuf,

        /// Render only this story
        #[arg(long, short)]
        story: Option<String>,

        #[arg(long, short, value_enum, default_value = "html")]
        format: OutputFormat,
    },
    /// Simulate user activations on a story's button
    Activate {
        file: PathBuf,

        #[arg(long, short)]
        story: String,

        /// Accessible name of the button to activate
        #[arg(long, short)]
        name: Option<String>,

        #[arg(long, default_value = "1")]
        times: u32,
    },
    /// Print the design token palette as JSON
    Tokens,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Render { file, story, format } => {
            let book = stories::load_stories(&file)?;
            let selected: Vec<_> = match &story {
                Some(name) => vec![book.find(name)?],
                None => book.stories.iter().collect(),
            };
            println!("{}", render::render_stories(&selected, format)?);
        }
        Commands::Activate { file, story, name, times } => {
            let book = stories::load_stories(&file)?;
            let story = book.find(&story)?;
            let report = simulate::run_activations(story, &ActivateOptions { name, times })?;
            println!(
                "{}: {} activation(s) on {:?}, {} delivered, callback invoked {} time(s)",
                story.name(),
                times,
                report.target,
                report.delivered,
                report.invocations
            );
        }
        Commands::Tokens => {
            println!("{}", serde_json::to_string_pretty(&TOKENS)?);
        }
    }
    Ok(())
}
