//! Backup CLI commands

use clap::Subcommand;

use crate::backup::BackupManager;
use crate::display::{self, messages};
use crate::error::InventoryResult;
use crate::services::InventoryService;
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Copy the inventory file to a timestamped sibling
    Create,

    /// List existing backups, newest first
    List,
}

/// Handle a backup command
pub fn handle_backup_command(storage: &Storage, cmd: BackupCommands) -> InventoryResult<()> {
    match cmd {
        BackupCommands::Create => {
            let service = InventoryService::new(storage);
            match service.backup()? {
                Some(path) => println!("Copia creada en: {}", path.display()),
                None => println!("{}", messages::NOTHING_TO_BACK_UP),
            }
        }

        BackupCommands::List => {
            let manager = BackupManager::new(storage.paths().data_file());
            println!("{}", display::format_backup_list(&manager.list_backups()?));
        }
    }

    Ok(())
}
