//! Credential Service
//!
//! Static username/password/token table, fixed for the life of the process.

use relay_core::domain::credential::Credential;

/// Resolves logins to tokens and tokens back to usernames
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Vec<Credential>,
}

impl Authenticator {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// Returns the user's token when the password matches
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&str> {
        self.credentials
            .iter()
            .find(|c| c.username == username)
            .filter(|c| c.password == password)
            .map(|c| c.token.as_str())
    }

    /// Returns the username that owns `token`
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.credentials
            .iter()
            .find(|c| c.token == token)
            .map(|c| c.username.as_str())
    }

    pub fn user_count(&self) -> usize {
        self.credentials.len()
    }
}

/// Development users used when no credentials file is configured
pub fn default_credentials() -> Vec<Credential> {
    vec![
        Credential::new("user1", "pass1", "token_user1_abc123"),
        Credential::new("user2", "pass2", "token_user2_xyz789"),
        Credential::new("admin", "admin123", "token_admin_secure456"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate() {
        let auth = Authenticator::new(default_credentials());

        assert_eq!(auth.authenticate("user1", "pass1"), Some("token_user1_abc123"));
        assert_eq!(auth.authenticate("user1", "pass2"), None);
        assert_eq!(auth.authenticate("nobody", "pass1"), None);
    }

    #[test]
    fn test_resolve() {
        let auth = Authenticator::new(default_credentials());

        assert_eq!(auth.resolve("token_admin_secure456"), Some("admin"));
        assert_eq!(auth.resolve("token_unknown"), None);
        assert_eq!(auth.resolve(""), None);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let auth = Authenticator::new(vec![
            Credential::new("dup", "a", "t1"),
            Credential::new("dup", "b", "t2"),
        ]);

        assert_eq!(auth.authenticate("dup", "a"), Some("t1"));
        assert_eq!(auth.authenticate("dup", "b"), None);
        assert_eq!(auth.resolve("t2"), Some("dup"));
        assert_eq!(auth.user_count(), 2);
    }
}
