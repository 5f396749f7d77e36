use super::definition::Program;
use crate::error::StoreError;
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Save/load of whole programs keyed by a user-supplied recipe name.
///
/// Unknown names load as `None`; only transport failures are errors.
pub trait RecipeStore {
    /// Names of every saved recipe, sorted for stable listing.
    fn names(&self) -> Vec<String>;

    fn load(&self, name: &str) -> Result<Option<Program>, StoreError>;

    fn save(&mut self, name: &str, program: &Program) -> Result<(), StoreError>;

    /// Removes a saved recipe. Removing an unknown name is a no-op.
    fn remove(&mut self, name: &str) -> Result<(), StoreError>;
}

/// The serialized shape of a whole recipe collection.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RecipeBook {
    pub recipes: AHashMap<String, Program>,
}

impl RecipeBook {
    /// Serializes the collection using the bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        encode_to_vec(self, standard()).map_err(|e| StoreError::Encode(e.to_string()))
    }

    /// Deserializes a collection from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        decode_from_slice(bytes, standard())
            .map(|(book, _)| book) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

/// A `RecipeStore` backed by a single file holding the whole name-to-program
/// map. The file is rewritten on every save, which is fine at the scale of
/// hand-assembled recipes.
pub struct FileRecipeStore {
    path: PathBuf,
    book: RecipeBook,
}

impl FileRecipeStore {
    /// Opens the store at `path`, reading the existing recipe book if the
    /// file is present and starting empty otherwise.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let book = if path.exists() {
            let mut file = fs::File::open(&path).map_err(|e| StoreError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes).map_err(|e| StoreError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
            RecipeBook::from_bytes(&bytes)?
        } else {
            RecipeBook::default()
        };
        Ok(Self { path, book })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let bytes = self.book.to_bytes()?;
        let mut file = fs::File::create(&self.path).map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;
        file.write_all(&bytes).map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

impl RecipeStore for FileRecipeStore {
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.book.recipes.keys().cloned().collect();
        names.sort();
        names
    }

    fn load(&self, name: &str) -> Result<Option<Program>, StoreError> {
        Ok(self.book.recipes.get(name).cloned())
    }

    fn save(&mut self, name: &str, program: &Program) -> Result<(), StoreError> {
        self.book
            .recipes
            .insert(name.to_string(), program.clone());
        self.flush()
    }

    fn remove(&mut self, name: &str) -> Result<(), StoreError> {
        if self.book.recipes.remove(name).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// An in-memory `RecipeStore` for hosts that bring their own key-value
/// transport and for tests.
#[derive(Default)]
pub struct MemoryRecipeStore {
    book: RecipeBook,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecipeStore for MemoryRecipeStore {
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.book.recipes.keys().cloned().collect();
        names.sort();
        names
    }

    fn load(&self, name: &str) -> Result<Option<Program>, StoreError> {
        Ok(self.book.recipes.get(name).cloned())
    }

    fn save(&mut self, name: &str, program: &Program) -> Result<(), StoreError> {
        self.book
            .recipes
            .insert(name.to_string(), program.clone());
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<(), StoreError> {
        self.book.recipes.remove(name);
        Ok(())
    }
}
