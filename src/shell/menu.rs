//! Menu choices for the interactive shell

use crate::models::ProductField;

/// Main menu text
pub const MAIN_MENU: &str = "\n--- Menú ---\n\
1. Cargar inventario\n\
2. Agregar producto (append)\n\
3. Buscar producto (por ID o nombre)\n\
4. Modificar producto (por ID)\n\
5. Eliminar producto (por ID)\n\
6. Hacer backup\n\
7. Mostrar info del archivo\n\
0. Salir";

/// Field sub-menu text shown while modifying a product
pub const MODIFY_MENU: &str = "elija que caracteristica cambiar\n\
1. nombre\n\
2. precio\n\
3. unidades\n\
4. talla\n\
5. salir";

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Add,
    Search,
    Modify,
    Delete,
    Backup,
    Info,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection; anything but `0`-`7` is `None`
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Load),
            "2" => Some(Self::Add),
            "3" => Some(Self::Search),
            "4" => Some(Self::Modify),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Backup),
            "7" => Some(Self::Info),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// An entry of the modify sub-menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifyChoice {
    Field(ProductField),
    Done,
}

impl ModifyChoice {
    /// Parse a sub-menu selection; anything but `1`-`5` is `None`
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Field(ProductField::Name)),
            "2" => Some(Self::Field(ProductField::Price)),
            "3" => Some(Self::Field(ProductField::Units)),
            "4" => Some(Self::Field(ProductField::Size)),
            "5" => Some(Self::Done),
            _ => None,
        }
    }
}

/// Prompt and confirmation shown when editing a field
pub fn field_messages(field: ProductField) -> (&'static str, &'static str) {
    match field {
        ProductField::Name => ("Nuevo nombre: ", "Nombre modificado y guardado."),
        ProductField::Price => ("Nuevo precio: ", "Precio modificado y guardado."),
        ProductField::Units => ("Nuevas unidades: ", "Unidades modificadas y guardadas."),
        ProductField::Size => ("Nueva talla: ", "Talla modificada y guardada."),
    }
}
