use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use fakelobby::{
    AssetLoader, AssetSource, ConsoleNotifier, DirShareTarget, LobbySession, LobbyTemplate,
    ShareTarget,
};

#[derive(Parser, Debug)]
#[command(name = "fakelobby", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a lobby screenshot as a PNG.
    Generate(GenerateArgs),
    /// Print the default template configuration as JSON.
    Template,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Avatar image (JPEG, PNG, ...).
    #[arg(long)]
    avatar: PathBuf,

    /// Display name; blank uses the template default.
    #[arg(long, default_value = "")]
    name: String,

    /// Directory the downloadable PNG is written to.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Also share the result by dropping `ml-lobby.png` into this directory.
    #[arg(long)]
    share_dir: Option<PathBuf>,

    /// Template configuration JSON (defaults to the stock template).
    #[arg(long)]
    template: Option<PathBuf>,

    /// Override the background source (URL or path).
    #[arg(long)]
    background: Option<String>,

    /// Override the frame overlay source (URL or path).
    #[arg(long)]
    frame: Option<String>,

    /// Override the font source (URL or path).
    #[arg(long)]
    font: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args).await,
        Command::Template => cmd_template(),
    }
}

fn cmd_template() -> anyhow::Result<()> {
    println!("{}", LobbyTemplate::default().to_json_pretty()?);
    Ok(())
}

async fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut template = match &args.template {
        Some(path) => LobbyTemplate::from_path(path)
            .with_context(|| format!("load template '{}'", path.display()))?,
        None => LobbyTemplate::default(),
    };
    if let Some(src) = &args.background {
        template.sources.background = AssetSource::parse(src);
    }
    if let Some(src) = &args.frame {
        template.sources.frame = AssetSource::parse(src);
    }
    if let Some(src) = &args.font {
        template.sources.font = AssetSource::parse(src);
    }

    let mut session = LobbySession::new(template, ConsoleNotifier);
    session.welcome();

    let loader = AssetLoader::new()?;
    session.load_assets(&loader).await?;
    session.stage_avatar_from_path(&args.avatar).await?;
    session.generate(&args.name)?;

    let file = session.download()?;
    let path = file.save_into(&args.out)?;
    eprintln!("wrote {}", path.display());

    let mut dir_target = args.share_dir.map(DirShareTarget::new);
    session.share(dir_target.as_mut().map(|t| t as &mut dyn ShareTarget))?;
    if let Some(shared) = dir_target.and_then(|t| t.last_path) {
        eprintln!("shared {}", shared.display());
    }
    Ok(())
}
