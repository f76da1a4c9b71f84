//! Local accounts stored as `username:hash` lines.
//!
//! Passwords are hashed with a random per-user salt and SHA-256; the stored
//! hash field is `salt$hexdigest`.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use rand::Rng;
use sha2::{Digest, Sha256};

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;
pub const PASSWORD_MIN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInResult {
    Success,
    UsernameTaken,
    InvalidUsername,
    InvalidPassword,
    /// The account was valid but could not be written to disk.
    StorageFailed,
}

impl SignInResult {
    pub fn message(self) -> &'static str {
        match self {
            SignInResult::Success => "Account created",
            SignInResult::UsernameTaken => "Username already taken",
            SignInResult::InvalidUsername => "Username must be 3-20 letters or digits",
            SignInResult::InvalidPassword => "Password must be 8+ letters or digits",
            SignInResult::StorageFailed => "Could not save account",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogInResult {
    Success,
    UserNotFound,
    IncorrectPassword,
}

impl LogInResult {
    pub fn message(self) -> &'static str {
        match self {
            LogInResult::Success => "Logged in",
            LogInResult::UserNotFound => "User not found",
            LogInResult::IncorrectPassword => "Incorrect password",
        }
    }
}

pub fn is_valid_username(username: &str) -> bool {
    (USERNAME_MIN..=USERNAME_MAX).contains(&username.len())
        && username.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn is_valid_password(password: &str) -> bool {
    password.len() >= PASSWORD_MIN && password.chars().all(|c| c.is_ascii_alphanumeric())
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Salt and hash `password` into the stored `salt$hexdigest` form.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::thread_rng().gen();
    let salt: String = salt.iter().map(|b| format!("{:02x}", b)).collect();
    format!("{}${}", salt, digest(&salt, password))
}

/// Check `password` against a stored `salt$hexdigest`.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, expected)) => digest(salt, password) == expected,
        None => false,
    }
}

#[derive(Clone, Debug)]
pub struct Authorization {
    path: PathBuf,
    users: HashMap<String, String>,
}

impl Authorization {
    /// Load the credential file at `path`. A missing file means no accounts
    /// yet; malformed lines are ignored.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut users = HashMap::new();
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                for line in text.lines() {
                    if let Some((name, hash)) = line.split_once(':') {
                        if !name.is_empty() && !hash.is_empty() {
                            users.insert(name.to_string(), hash.to_string());
                        }
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("could not read {}: {}", path.display(), e),
        }
        log::debug!("{} accounts loaded from {}", users.len(), path.display());
        Self { path, users }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn user_exists(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Register a new account.
    pub fn sign_in(&mut self, username: &str, password: &str) -> SignInResult {
        if self.user_exists(username) {
            return SignInResult::UsernameTaken;
        }
        if !is_valid_username(username) {
            return SignInResult::InvalidUsername;
        }
        if !is_valid_password(password) {
            return SignInResult::InvalidPassword;
        }

        let hash = hash_password(password);
        if let Err(e) = self.save_user(username, &hash) {
            log::error!("failed to save account {}: {}", username, e);
            return SignInResult::StorageFailed;
        }
        self.users.insert(username.to_string(), hash);
        log::info!("registered {}", username);
        SignInResult::Success
    }

    pub fn log_in(&self, username: &str, password: &str) -> LogInResult {
        match self.users.get(username) {
            None => LogInResult::UserNotFound,
            Some(stored) if verify_password(password, stored) => LogInResult::Success,
            Some(_) => LogInResult::IncorrectPassword,
        }
    }

    fn save_user(&self, username: &str, hash: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}:{}", username, hash)
    }
}
