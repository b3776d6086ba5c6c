// Headless surface over the command layer: list the library, inspect a
// mod, and launch it, with the same semantics the desktop UI gets.

use argh::FromArgs;

use mrdoom::api;
use mrdoom::core::error::LauncherResult;
use mrdoom::core::launch;
use mrdoom::core::paths::ConfigPaths;
use mrdoom::core::state::AppState;
use mrdoom::core::storage;

#[derive(FromArgs)]
/// MRDoom — mod launcher backend for Doom source ports.
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Versions(VersionsCmd),
    Mods(ModsCmd),
    Show(ShowCmd),
    Launch(LaunchCmd),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "versions")]
/// List the seeded base-game profiles.
struct VersionsCmd {}

#[derive(FromArgs)]
#[argh(subcommand, name = "mods")]
/// List installed mods.
struct ModsCmd {
    /// only mods targeting this Doom version id
    #[argh(option)]
    version: Option<String>,
    /// only mods whose title contains this text
    #[argh(option)]
    search: Option<String>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "show")]
/// Show one mod with its file list.
struct ShowCmd {
    /// mod id
    #[argh(positional)]
    id: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "launch")]
/// Launch a mod through the configured engine.
struct LaunchCmd {
    /// mod id
    #[argh(positional)]
    id: String,
    /// print the command line instead of spawning the engine
    #[argh(switch)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    mrdoom::init_tracing();

    let args: Args = argh::from_env();
    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> LauncherResult<()> {
    let paths = ConfigPaths::default_location();
    storage::init(&paths).await?;
    let state = AppState::new(paths);

    match args.command {
        Command::Versions(_) => {
            for version in api::list_versions(&state).await? {
                println!("{:<10} {:<22} {}", version.slug, version.name, version.args);
            }
        }
        Command::Mods(cmd) => {
            let query = api::ModQuery {
                version: cmd.version,
                search: cmd.search,
            };
            for record in api::list_mods(&state, query).await? {
                println!("{:<38} {}", record.id, record.title);
            }
        }
        Command::Show(cmd) => {
            let response = api::get_mod(&state, &cmd.id).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Launch(cmd) => {
            if cmd.dry_run {
                let (executable, argv) = launch::assemble(&state, &cmd.id).await?;
                println!("{} {}", executable.display(), argv.join(" "));
            } else {
                let response = api::launch_mod(&state, &cmd.id).await;
                if response.success {
                    println!("launched");
                } else {
                    eprintln!("launch failed: {}", response.message.unwrap_or_default());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
