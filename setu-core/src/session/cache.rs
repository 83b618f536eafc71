//! File-backed session persistence
//!
//! One JSON entry under a fixed name: written on login, removed on logout,
//! read once at startup to restore the previous session.

use std::path::{Path, PathBuf};

use shared::AppResult;
use shared::models::User;

/// Fixed file name for the persisted session entry
const CURRENT_SESSION_FILE: &str = "current_user.json";

/// Persisted-session store
pub struct SessionCache {
    file_path: PathBuf,
}

impl SessionCache {
    /// Cache rooted at `dir`; nothing is touched until the first save
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            file_path: dir.as_ref().join(CURRENT_SESSION_FILE),
        }
    }

    /// Save the current session (called after a successful login)
    pub fn save_current(&self, user: &User) -> AppResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(user)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(user_id = %user.id, "Current session saved");
        Ok(())
    }

    /// Load the persisted session, if any
    pub fn load_current(&self) -> AppResult<Option<User>> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.file_path)?;
        let user: User = serde_json::from_str(&content)?;
        tracing::info!(user_id = %user.id, "Loaded cached session");
        Ok(Some(user))
    }

    /// Remove the persisted session entry (called on logout)
    pub fn clear_current(&self) -> AppResult<()> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Current session cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::profile_for_role;
    use shared::models::UserRole;

    #[test]
    fn test_save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SessionCache::new(dir.path());
        let user = profile_for_role(UserRole::Officer);

        assert!(cache.load_current().unwrap().is_none());

        cache.save_current(&user).unwrap();
        let loaded = cache.load_current().unwrap().unwrap();
        assert_eq!(loaded, user);

        cache.clear_current().unwrap();
        assert!(cache.load_current().unwrap().is_none());
    }

    #[test]
    fn test_clear_without_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SessionCache::new(dir.path());
        assert!(cache.clear_current().is_ok());
    }

    #[test]
    fn test_corrupt_cache_surfaces_json_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CURRENT_SESSION_FILE), "not json").unwrap();

        let cache = SessionCache::new(dir.path());
        assert!(cache.load_current().is_err());
    }
}
