use std::collections::HashSet;

use log::{debug, info, warn};

use crate::error::{ForkifyError, Result};
use crate::model::LikedRecipe;
use crate::storage::KeyValueStorage;

/// Storage key holding the JSON array of liked recipes
pub const LIKES_STORAGE_KEY: &str = "likes";

/// Liked recipes, mirrored to durable storage
///
/// Every mutation serializes the whole collection and writes it under
/// [`LIKES_STORAGE_KEY`] before returning. A write that fails leaves the
/// in-memory collection unchanged.
pub struct LikedRecipesStore {
    likes: Vec<LikedRecipe>,
    storage: Box<dyn KeyValueStorage>,
}

impl LikedRecipesStore {
    /// Create an empty store; call [`read_storage`](Self::read_storage) to restore
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            likes: Vec::new(),
            storage,
        }
    }

    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> Result<LikedRecipe> {
        let like = LikedRecipe {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            img: img.into(),
        };
        if self.is_liked(&like.id) {
            return Err(ForkifyError::InvalidArgument(format!(
                "recipe '{}' is already liked",
                like.id
            )));
        }

        self.likes.push(like.clone());
        if let Err(e) = self.persist() {
            self.likes.pop();
            return Err(e);
        }
        debug!("Liked recipe {}", like.id);
        Ok(like)
    }

    pub fn delete_like(&mut self, id: &str) -> Result<LikedRecipe> {
        let index = self
            .likes
            .iter()
            .position(|like| like.id == id)
            .ok_or_else(|| ForkifyError::NotFound(id.to_string()))?;

        let removed = self.likes.remove(index);
        if let Err(e) = self.persist() {
            self.likes.insert(index, removed);
            return Err(e);
        }
        debug!("Unliked recipe {}", id);
        Ok(removed)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[LikedRecipe] {
        &self.likes
    }

    /// Replace the in-memory collection with the persisted one
    ///
    /// A missing, unreadable or malformed payload yields an empty collection.
    pub fn read_storage(&mut self) {
        self.likes = match self.storage.get(LIKES_STORAGE_KEY) {
            Ok(Some(payload)) => decode_likes(&payload).unwrap_or_else(|e| {
                warn!("Ignoring stored likes: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(
                    "Could not read likes from {} storage: {}",
                    self.storage.storage_name(),
                    e
                );
                Vec::new()
            }
        };
        info!("Restored {} liked recipes", self.likes.len());
    }

    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.likes)?;
        self.storage.set(LIKES_STORAGE_KEY, &payload)
    }
}

fn decode_likes(payload: &str) -> Result<Vec<LikedRecipe>> {
    let decoded: Vec<LikedRecipe> = serde_json::from_str(payload)
        .map_err(|e| ForkifyError::StorageCorrupt(e.to_string()))?;

    let mut seen = HashSet::new();
    Ok(decoded
        .into_iter()
        .filter(|like| seen.insert(like.id.clone()))
        .collect())
}
