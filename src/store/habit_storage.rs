use std::{
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Result;
use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};
use tracing::{debug, warn};

use super::entities::HabitEntity;

/// Name of the single blob the whole collection lives in.
const STORE_FILE: &str = "habits.json";

/// Interface for abstracting persistence of the habit collection.
pub trait HabitStorage {
    /// Reads the stored collection. Absent, unreadable and corrupt payloads
    /// all come back as `None`; the caller decides how to seed.
    fn load(&self) -> impl Future<Output = Option<Vec<HabitEntity>>> + Send;

    /// Serializes and stores the whole collection.
    fn save(&self, habits: &[HabitEntity]) -> impl Future<Output = Result<()>> + Send;

    /// Removes the stored collection entirely.
    fn clear(&self) -> impl Future<Output = Result<()>> + Send;
}

/// The main realization of [HabitStorage]: one JSON file under the
/// application directory.
pub struct JsonHabitStorage {
    store_path: PathBuf,
}

impl JsonHabitStorage {
    pub fn new(app_dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&app_dir)?;

        Ok(Self {
            store_path: app_dir.join(STORE_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    async fn read_store(&self) -> Result<Vec<u8>, std::io::Error> {
        debug!("Reading habits from {:?}", self.store_path);
        let mut file = File::open(&self.store_path).await?;
        file.lock_shared()?;
        let mut contents = Vec::new();
        let result = file.read_to_end(&mut contents).await;
        file.unlock_async().await?;
        result?;
        Ok(contents)
    }

    async fn write_payload(file: &mut File, payload: &[u8]) -> Result<()> {
        // Truncate only once the exclusive lock is held.
        file.set_len(0).await?;
        file.write_all(payload).await?;
        file.flush().await?;
        Ok(())
    }
}

impl HabitStorage for JsonHabitStorage {
    async fn load(&self) -> Option<Vec<HabitEntity>> {
        let contents = match self.read_store().await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read habit store {:?}: {e}", self.store_path);
                return None;
            }
        };

        match serde_json::from_slice(&contents) {
            Ok(habits) => Some(habits),
            Err(e) => {
                warn!("Stored habits at {:?} are corrupt: {e}", self.store_path);
                None
            }
        }
    }

    async fn save(&self, habits: &[HabitEntity]) -> Result<()> {
        let payload = serde_json::to_vec(habits)?;
        debug!("Writing {} habits to {:?}", habits.len(), self.store_path);

        let mut file = File::options()
            .write(true)
            .create(true)
            .read(true)
            .truncate(false)
            .open(&self.store_path)
            .await?;

        file.lock_exclusive()?;
        let result = Self::write_payload(&mut file, &payload).await;
        file.unlock_async().await?;
        result
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.store_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
