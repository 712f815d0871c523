use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use inventario::cli::{
    handle_add, handle_audit_command, handle_backup_command, handle_delete, handle_export_command,
    handle_info, handle_list, handle_search, handle_update, BackupCommands, ExportFormat,
};
use inventario::config::paths::{InventoryPaths, FILE_ENV_VAR};
use inventario::config::settings::Settings;
use inventario::models::{ProductInput, ProductPatch};
use inventario::shell::Shell;
use inventario::storage::Storage;

#[derive(Parser)]
#[command(
    name = "inventario",
    version,
    about = "Small product inventory kept in a comma-delimited text file",
    long_about = "inventario manages a list of products (name, price, units, size) \
                  stored one per line in a plain text file. Run it without a \
                  subcommand for the interactive menu."
)]
struct Cli {
    /// Inventory file (defaults to inventario.txt next to the executable)
    #[arg(long, short, env = FILE_ENV_VAR, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu
    Shell,

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Append a product
    Add {
        /// Product name
        name: String,
        /// Price, e.g. "8 USD"
        price: String,
        /// Units, e.g. "20 unidades"
        units: String,
        /// Size
        #[arg(default_value = "")]
        size: String,
    },

    /// Search by id or name fragment
    Search {
        /// Digits search by id, anything else by name
        term: String,
    },

    /// Overwrite fields of a product
    Update {
        /// Product id
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        units: Option<String>,
        #[arg(long)]
        size: Option<String>,
    },

    /// Delete a product and renumber the rest
    #[command(alias = "rm")]
    Delete {
        /// Product id
        id: String,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show size and modification time of the inventory file
    Info,

    /// Export the inventory to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Output format
        #[arg(short = 'F', long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        write_defaults: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = InventoryPaths::new(cli.file)?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), &settings);

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            let mut shell = Shell::new(
                &storage,
                settings.date_format.clone(),
                stdin.lock(),
                io::stdout(),
            );
            shell.run()?;
        }
        Some(Commands::List) => handle_list(&storage)?,
        Some(Commands::Add {
            name,
            price,
            units,
            size,
        }) => handle_add(
            &storage,
            ProductInput {
                name,
                price,
                units,
                size,
            },
        )?,
        Some(Commands::Search { term }) => handle_search(&storage, &term)?,
        Some(Commands::Update {
            id,
            name,
            price,
            units,
            size,
        }) => handle_update(
            &storage,
            &id,
            ProductPatch {
                name,
                price,
                units,
                size,
            },
        )?,
        Some(Commands::Delete { id }) => handle_delete(&storage, &id)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&storage, cmd)?,
        Some(Commands::Info) => handle_info(&storage, &settings.date_format)?,
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => handle_export_command(&storage, &output, format, pretty)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Config { write_defaults }) => {
            if write_defaults {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
                println!();
            }
            println!("inventario Configuration");
            println!("========================");
            println!("Inventory file: {}", paths.data_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit enabled: {}", settings.audit_enabled);
            println!("  Date format:   {}", settings.date_format);
        }
    }

    Ok(())
}
