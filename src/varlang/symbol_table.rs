use std::collections::HashMap;

use crate::varlang::token::Position;
use crate::util::compiler_log::StageLogger;

// What the table knows about a declared variable
#[derive (Debug, Clone, PartialEq, Eq)]
pub struct SymbolTableEntry {
    pub position: Position,
    pub is_initialized: bool,
    pub is_used: bool
}

// The fields that can be flipped on after the declaration
#[derive (Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolTableEntryField {
    Initialized,
    Used
}

/// The declared names of one compilation run.
///
/// There is a single flat scope; a name can be declared once.
#[derive (Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolTableEntry>
}

impl SymbolTable {
    // Constructor for a new symbol table
    pub fn new() -> Self {
        return SymbolTable {
            entries: HashMap::new()
        };
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    // Adds a new identifier, returning false if it was already declared
    pub fn new_identifier(&mut self, id: String, position: Position) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }

        self.entries.insert(id, SymbolTableEntry {
            position,
            is_initialized: false,
            is_used: false
        });
        return true;
    }

    pub fn get_identifier(&self, id: &str) -> Option<&SymbolTableEntry> {
        return self.entries.get(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        return self.entries.contains_key(id);
    }

    // Returns false if the identifier does not exist
    pub fn set_entry_field(&mut self, id: &str, field: SymbolTableEntryField) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) => {
                match field {
                    SymbolTableEntryField::Initialized => entry.is_initialized = true,
                    SymbolTableEntryField::Used => entry.is_used = true
                }
                return true;
            },
            None => return false
        }
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    // Declared names in alphabetical order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        return names;
    }

    // Logs a warning for every variable that was declared and then never touched
    pub fn mass_warnings(&self, logger: &StageLogger) -> usize {
        let mut num_warnings: usize = 0;

        for name in self.names().iter() {
            if let Some(entry) = self.entries.get(name) {
                if !entry.is_initialized && !entry.is_used {
                    logger.warning(format!("Variable [ {} ] declared at {:?} is never assigned or used", name, entry.position));
                    num_warnings += 1;
                } else if !entry.is_used {
                    logger.debug(format_args!("Variable [ {} ] declared at {:?} is assigned but never used", name, entry.position));
                }
            }
        }

        return num_warnings;
    }
}
