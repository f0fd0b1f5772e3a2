use clap::Parser;
use moodmix::application::{
    init::init, list_entries, mood_stats, ConfigService, CreateEntryService, DeleteEntryService,
    ShowEntryService,
};
use moodmix::cli::{format_entry, format_timeline, format_trend, Cli, Commands};
use moodmix::domain::{Draft, GradientPalette};
use moodmix::error::MoodmixError;
use moodmix::infrastructure::{resolve_owner, FileSystemRepository};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodmix=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodmixError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::New { title, content }) => {
            let repo = FileSystemRepository::discover()?;
            let owner = resolve_owner(&repo)?;
            let service = CreateEntryService::new(repo);

            let content = match content {
                Some(c) => c,
                None => service.compose_in_editor()?,
            };

            let entry = service.execute(&owner, Draft::new(title, content))?;
            print!("{}", format_entry(&entry.view(&GradientPalette::builtin())));
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let owner = resolve_owner(&repo)?;
            let entries = list_entries(&repo, &owner, limit)?;
            println!("{}", format_timeline(&entries, &GradientPalette::builtin()).trim_end());
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let repo = FileSystemRepository::discover()?;
            let owner = resolve_owner(&repo)?;
            let service = ShowEntryService::new(repo);
            let entry = service.execute(&owner, id.as_deref())?;
            print!("{}", format_entry(&entry.view(service.palette())));
            Ok(())
        }
        Some(Commands::Delete { id, force }) => {
            let repo = FileSystemRepository::discover()?;
            let owner = resolve_owner(&repo)?;
            DeleteEntryService::new(repo).delete(&owner, &id, force)?;
            println!("Deleted entry {}", id);
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            if !yes {
                println!("This deletes all of your entries. Re-run with --yes to confirm.");
                return Ok(());
            }
            let repo = FileSystemRepository::discover()?;
            let owner = resolve_owner(&repo)?;
            let removal = DeleteEntryService::new(repo).clear(&owner)?;
            println!("Deleted {} entries", removal.removed);
            if !removal.skipped.is_empty() {
                println!(
                    "Skipped {} unreadable entries with no recoverable owner:",
                    removal.skipped.len()
                );
                for id in &removal.skipped {
                    println!("  {}", id);
                }
                println!("Remove one with: moodmix delete --force <id>");
            }
            Ok(())
        }
        Some(Commands::Stats) => {
            let repo = FileSystemRepository::discover()?;
            let owner = resolve_owner(&repo)?;
            let points = mood_stats(&repo, &owner)?;
            println!("{}", format_trend(&points).trim_end());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("playlist_length = {}", config.playlist_length);
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodmix config [--list | <key> [<value>]]");
                println!("Valid keys: playlist_length, editor, created");
                Ok(())
            }
        }
        None => {
            println!("moodmix - Terminal mood journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
