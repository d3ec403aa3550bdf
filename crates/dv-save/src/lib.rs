//! dv-save: Save/restore system for delve
//!
//! Snapshots are JSON documents holding a versioned header and the full
//! session state. The fog-of-war set is derived, so it is rebuilt on load
//! rather than stored.

use std::fs::File;
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dv_core::GameState;

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file not found: {0}")]
    NotFound(PathBuf),

    #[error("Incompatible save version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("Invalid save file header")]
    InvalidHeader,
}

/// Save file header for versioning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveHeader {
    /// Magic identifier
    pub magic: String,
    /// Save format version
    pub version: u32,
    /// Seed the dungeon was generated from
    pub seed: u64,
    /// Turn count at save time
    pub turns: u64,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
}

impl SaveHeader {
    const MAGIC: &'static str = "DLVS";

    pub fn new(state: &GameState) -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: SAVE_VERSION,
            seed: state.seed,
            turns: state.turns(),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != Self::MAGIC {
            return Err(SaveError::InvalidHeader);
        }
        if self.version != SAVE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

/// Complete save file structure
#[derive(Serialize, Deserialize)]
pub struct SaveFile {
    pub header: SaveHeader,
    pub state: GameState,
}

#[derive(Serialize)]
struct SaveFileRef<'a> {
    header: SaveHeader,
    state: &'a GameState,
}

#[derive(Deserialize)]
struct HeaderOnly {
    header: SaveHeader,
}

fn parse_header(json: &str) -> Result<SaveHeader, SaveError> {
    let HeaderOnly { header } =
        serde_json::from_str(json).map_err(|_| SaveError::InvalidHeader)?;
    header.validate()?;
    Ok(header)
}

/// Serialize a session to a JSON snapshot
pub fn to_snapshot_string(state: &GameState) -> Result<String, SaveError> {
    let file = SaveFileRef {
        header: SaveHeader::new(state),
        state,
    };
    Ok(serde_json::to_string(&file)?)
}

/// Restore a session from a JSON snapshot
///
/// The header is checked before the state is decoded, and the visibility
/// set is rebuilt from the restored rooms and player position.
pub fn from_snapshot_str(json: &str) -> Result<GameState, SaveError> {
    parse_header(json)?;
    let SaveFile { mut state, .. } = serde_json::from_str(json)?;
    state.refresh_visibility();
    Ok(state)
}

fn read_to_string(path: &Path) -> Result<String, SaveError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SaveError::NotFound(path.to_path_buf()),
        _ => SaveError::Io(e),
    })
}

/// Save game state to a file
pub fn save_game(state: &GameState, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let file = SaveFileRef {
        header: SaveHeader::new(state),
        state,
    };

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &file)?;
    tracing::info!(path = %path.display(), turns = state.turns(), "game saved");
    Ok(())
}

/// Load game state from a file
pub fn load_game(path: impl AsRef<Path>) -> Result<GameState, SaveError> {
    let path = path.as_ref();
    let json = read_to_string(path)?;
    let state = from_snapshot_str(&json)?;
    tracing::info!(path = %path.display(), turns = state.turns(), "game loaded");
    Ok(state)
}

/// Load only the header from a save file
pub fn load_header(path: impl AsRef<Path>) -> Result<SaveHeader, SaveError> {
    let json = read_to_string(path.as_ref())?;
    parse_header(&json)
}

/// Get the default save path for a seed
pub fn default_save_path(seed: u64) -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("delve");
    path.push("saves");
    std::fs::create_dir_all(&path).ok();
    path.push(format!("{seed}.json"));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_core::DungeonConfig;

    fn state() -> GameState {
        GameState::generate(DungeonConfig::default(), 31).unwrap()
    }

    #[test]
    fn test_header_validation() {
        let header = SaveHeader::new(&state());
        assert!(header.validate().is_ok());
        assert_eq!(header.seed, 31);

        let mut bad_header = header.clone();
        bad_header.magic = "XXXX".to_string();
        assert!(matches!(
            bad_header.validate(),
            Err(SaveError::InvalidHeader)
        ));

        let mut old_header = header;
        old_header.version = 999;
        assert!(matches!(
            old_header.validate(),
            Err(SaveError::IncompatibleVersion { found: 999, .. })
        ));
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(matches!(
            from_snapshot_str("not json"),
            Err(SaveError::InvalidHeader)
        ));
        assert!(matches!(
            from_snapshot_str(r#"{"state": {}}"#),
            Err(SaveError::InvalidHeader)
        ));
    }

    #[test]
    fn test_snapshot_rejects_wrong_version() {
        let json = to_snapshot_string(&state()).unwrap();
        let json = json.replacen(
            &format!("\"version\":{SAVE_VERSION}"),
            "\"version\":99",
            1,
        );
        assert!(matches!(
            from_snapshot_str(&json),
            Err(SaveError::IncompatibleVersion { .. })
        ));
    }

    #[test]
    fn test_load_nonexistent() {
        let result = load_game("/nonexistent/path/save.json");
        assert!(matches!(result, Err(SaveError::NotFound(_))));
    }
}
