//! Session management - 登录会话
//!
//! Zero-or-one authenticated user for the lifetime of the process, restored
//! across launches via the file-backed [`SessionCache`].
//!
//! This is deliberately stub authentication: the role selected on the login
//! form resolves a canned profile, and credentials are only shape-checked.
//! A real deployment must replace [`SessionManager::login`] with
//! verification against an identity store while keeping the same response
//! shape, so callers are unaffected.

mod cache;

pub use cache::SessionCache;

use std::path::Path;
use std::time::Duration;

use shared::models::{User, UserRole};

use crate::utils::validation::validate_login;

/// Simulated network latency for the login round trip
const LOGIN_LATENCY: Duration = Duration::from_millis(800);

/// Login response
#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

/// Holds the current authenticated user and the session cache
pub struct SessionManager {
    current: Option<User>,
    cache: SessionCache,
}

impl SessionManager {
    /// Create a manager with no active session
    pub fn new(cache_dir: impl AsRef<Path>) -> Self {
        Self {
            current: None,
            cache: SessionCache::new(cache_dir),
        }
    }

    /// Create a manager, restoring any session cached by a previous launch
    pub fn restore(cache_dir: impl AsRef<Path>) -> Self {
        let cache = SessionCache::new(cache_dir);
        let current = match cache.load_current() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to restore cached session: {}", e);
                None
            }
        };
        Self { current, cache }
    }

    /// Simulated login
    ///
    /// Credentials of plausible shape are accepted and the canned profile
    /// for `role` becomes the session user. A failed login never creates a
    /// partial session.
    pub async fn login(&mut self, email: &str, password: &str, role: UserRole) -> LoginResponse {
        tokio::time::sleep(LOGIN_LATENCY).await;

        if let Err(e) = validate_login(email, password) {
            return LoginResponse {
                success: false,
                user: None,
                error: Some(e.to_string()),
            };
        }

        let user = profile_for_role(role);
        if let Err(e) = self.cache.save_current(&user) {
            // The in-memory session still stands when the cache write fails
            tracing::warn!("Failed to persist session: {}", e);
        }
        tracing::info!(user_id = %user.id, role = %role, "User logged in");
        self.current = Some(user.clone());

        LoginResponse {
            success: true,
            user: Some(user),
            error: None,
        }
    }

    /// Clear the current user and the persisted session entry
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = %user.id, "User logged out");
        }
        if let Err(e) = self.cache.clear_current() {
            tracing::warn!("Failed to clear cached session: {}", e);
        }
    }

    /// Current authenticated user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

/// Fixed role → profile table (demo dataset)
pub fn profile_for_role(role: UserRole) -> User {
    match role {
        UserRole::Employee => User {
            id: "emp-001".to_string(),
            name: "Rajesh Kumar".to_string(),
            email: "rajesh.kumar@nagarsetu.gov.in".to_string(),
            role: UserRole::Employee,
            department: "Public Works".to_string(),
            designation: "Junior Engineer".to_string(),
            employee_id: "NMC-2024-0542".to_string(),
            avatar: None,
            join_date: "2022-03-15".to_string(),
            phone: "+91 98765 43210".to_string(),
        },
        UserRole::Officer => User {
            id: "off-001".to_string(),
            name: "Dr. Priya Sharma".to_string(),
            email: "priya.sharma@nagarsetu.gov.in".to_string(),
            role: UserRole::Officer,
            department: "Public Works".to_string(),
            designation: "Executive Engineer".to_string(),
            employee_id: "NMC-2018-0128".to_string(),
            avatar: None,
            join_date: "2018-06-01".to_string(),
            phone: "+91 98765 12345".to_string(),
        },
        UserRole::Admin => User {
            id: "adm-001".to_string(),
            name: "Amit Verma".to_string(),
            email: "amit.verma@nagarsetu.gov.in".to_string(),
            role: UserRole::Admin,
            department: "Administration".to_string(),
            designation: "Municipal Commissioner".to_string(),
            employee_id: "NMC-2015-0001".to_string(),
            avatar: None,
            join_date: "2015-01-01".to_string(),
            phone: "+91 98765 00001".to_string(),
        },
        UserRole::Citizen => User {
            id: "cit-001".to_string(),
            name: "Sunita Devi".to_string(),
            email: "sunita@example.com".to_string(),
            role: UserRole::Citizen,
            department: "N/A".to_string(),
            designation: "Citizen".to_string(),
            employee_id: "N/A".to_string(),
            avatar: None,
            join_date: "N/A".to_string(),
            phone: "+91 98765 67890".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> tempfile::TempDir {
        tempfile::tempdir().expect("tempdir")
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_resolves_profile_by_role() {
        let dir = temp_dir();
        let mut session = SessionManager::new(dir.path());

        let response = session.login("a@b.com", "1234", UserRole::Admin).await;

        assert!(response.success);
        let user = response.user.unwrap();
        assert_eq!(user.id, "adm-001");
        assert_eq!(user.role, UserRole::Admin);
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().unwrap().name, "Amit Verma");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_rejects_short_password() {
        let dir = temp_dir();
        let mut session = SessionManager::new(dir.path());

        let response = session.login("a@b.com", "123", UserRole::Admin).await;

        assert!(!response.success);
        assert!(response.user.is_none());
        assert!(response.error.is_some());
        assert!(!session.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_rejects_empty_email() {
        let dir = temp_dir();
        let mut session = SessionManager::new(dir.path());

        let response = session.login("", "longenough", UserRole::Employee).await;

        assert!(!response.success);
        assert!(!session.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_credentials_do_not_pick_the_profile() {
        // Any plausible credentials work; only the role matters
        let dir = temp_dir();
        let mut session = SessionManager::new(dir.path());

        let response = session
            .login("whoever@example.com", "hunter2", UserRole::Officer)
            .await;

        assert_eq!(response.user.unwrap().id, "off-001");
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_clears_session_and_cache() {
        let dir = temp_dir();
        let mut session = SessionManager::new(dir.path());
        session.login("a@b.com", "1234", UserRole::Employee).await;

        session.logout();

        assert!(!session.is_authenticated());
        let restored = SessionManager::restore(dir.path());
        assert!(!restored.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_round_trip() {
        let dir = temp_dir();
        let mut session = SessionManager::new(dir.path());
        session.login("a@b.com", "1234", UserRole::Employee).await;

        let restored = SessionManager::restore(dir.path());

        assert!(restored.is_authenticated());
        assert_eq!(restored.current_user().unwrap().id, "emp-001");
    }

    #[test]
    fn test_restore_with_no_cache_is_unauthenticated() {
        let dir = temp_dir();
        let session = SessionManager::restore(dir.path());
        assert!(!session.is_authenticated());
    }
}
