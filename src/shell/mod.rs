//! Interactive menu shell
//!
//! A blocking read-eval loop over any `BufRead`/`Write` pair. Each menu option
//! reloads the inventory from disk before acting, so the shell never works on
//! stale data of its own, but nothing guards against another process editing
//! the file between a read and the following write.
//!
//! End of input ends the session the same way as option `0`.

pub mod menu;
pub mod prompt;

pub use menu::{MenuChoice, ModifyChoice};
pub use prompt::Prompter;

use std::io::{BufRead, Write};

use crate::display::{self, messages};
use crate::error::InventoryResult;
use crate::models::ProductInput;
use crate::services::{parse_id, InventoryService};
use crate::storage::Storage;

/// Whether the shell keeps running after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive inventory shell
pub struct Shell<'a, R, W> {
    service: InventoryService<'a>,
    date_format: String,
    io: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell reading from `input` and writing to `output`
    pub fn new(storage: &'a Storage, date_format: impl Into<String>, input: R, output: W) -> Self {
        Self {
            service: InventoryService::new(storage),
            date_format: date_format.into(),
            io: Prompter::new(input, output),
        }
    }

    /// Run until the user picks `0` or input runs out
    ///
    /// I/O failures on the backing file end the session with an error.
    pub fn run(&mut self) -> InventoryResult<()> {
        loop {
            self.io.say(menu::MAIN_MENU)?;
            let Some(choice) = self.io.prompt_trimmed("Seleccione una opción: ")? else {
                return Ok(());
            };

            let flow = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Load) => self.load()?,
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::Modify) => self.modify()?,
                Some(MenuChoice::Delete) => self.delete()?,
                Some(MenuChoice::Backup) => self.backup()?,
                Some(MenuChoice::Info) => self.info()?,
                Some(MenuChoice::Exit) => {
                    self.io.say("Saliendo...")?;
                    Flow::Quit
                }
                None => {
                    self.io.say("Opción no válida. Intente de nuevo.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Consume the shell, returning the output stream
    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    fn load(&mut self) -> InventoryResult<Flow> {
        self.io.say("Cargando inventario...")?;
        let products = self.service.list()?;
        self.io.say("\nInventario inicial:")?;
        self.io.say(display::format_product_list(&products))?;
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> InventoryResult<Flow> {
        self.io.say("Agregando producto (append)...")?;

        let Some(name) = self.io.prompt_trimmed("Nombre: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(price) = self.io.prompt_trimmed("Precio: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(units) = self.io.prompt_trimmed("Unidades: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(size) = self.io.prompt_trimmed("Talla: ")? else {
            return Ok(Flow::Quit);
        };

        self.service.add(ProductInput {
            name,
            price,
            units,
            size,
        })?;
        self.io.say(messages::PRODUCT_ADDED)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> InventoryResult<Flow> {
        let Some(term) = self
            .io
            .prompt("Ingrese ID o parte del nombre para buscar: ")?
        else {
            return Ok(Flow::Quit);
        };

        let results = self.service.search(&term)?;
        self.io.say(display::format_search_results(&results))?;
        Ok(Flow::Continue)
    }

    fn modify(&mut self) -> InventoryResult<Flow> {
        let Some(input) = self.io.prompt_trimmed("ID del producto a modificar: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(id) = parse_id(&input) else {
            self.io.say(messages::INVALID_ID)?;
            return Ok(Flow::Continue);
        };

        loop {
            let Some(product) = self.service.find(id)? else {
                self.io.say(messages::PRODUCT_NOT_FOUND)?;
                return Ok(Flow::Continue);
            };

            self.io
                .say(format!("Modificando el siguiente producto: {}", product))?;
            self.io.say(menu::MODIFY_MENU)?;

            let Some(choice) = self.io.prompt_trimmed("Seleccione una opción: ")? else {
                return Ok(Flow::Quit);
            };

            match ModifyChoice::parse(&choice) {
                Some(ModifyChoice::Field(field)) => {
                    let (prompt, confirmation) = menu::field_messages(field);
                    let Some(value) = self.io.prompt_trimmed(prompt)? else {
                        return Ok(Flow::Quit);
                    };

                    if self.service.update_field(id, field, &value)?.is_some() {
                        self.io.say(confirmation)?;
                    }
                    // A vanished product is reported by the next iteration
                }
                Some(ModifyChoice::Done) => {
                    self.io.say("Saliendo de la modificación.")?;
                    return Ok(Flow::Continue);
                }
                None => self.io.say(messages::INVALID_OPTION)?,
            }
        }
    }

    fn delete(&mut self) -> InventoryResult<Flow> {
        let Some(input) = self.io.prompt_trimmed("ID del producto a eliminar: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(id) = parse_id(&input) else {
            self.io.say(messages::INVALID_ID)?;
            return Ok(Flow::Continue);
        };

        match self.service.delete(id)? {
            Some(_) => self.io.say(messages::PRODUCT_DELETED)?,
            None => self.io.say(messages::PRODUCT_NOT_FOUND)?,
        }
        Ok(Flow::Continue)
    }

    fn backup(&mut self) -> InventoryResult<Flow> {
        self.io.say("Creando copia de seguridad...")?;
        match self.service.backup()? {
            Some(path) => self.io.say(format!("Copia creada en: {}", path.display()))?,
            None => self.io.say(messages::NOTHING_TO_BACK_UP)?,
        }
        Ok(Flow::Continue)
    }

    fn info(&mut self) -> InventoryResult<Flow> {
        match self.service.file_info()? {
            Some(info) => self
                .io
                .say(display::format_file_info(&info, &self.date_format)?)?,
            None => self.io.say(messages::FILE_NOT_FOUND)?,
        }
        Ok(Flow::Continue)
    }
}
