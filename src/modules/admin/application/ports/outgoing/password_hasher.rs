use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Stored admin hash is not a PHC string")]
    MalformedHash,

    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Hashing task panicked or was cancelled")]
    TaskFailed,
}

/// Hashing runs off the async executor; implementations block a worker thread.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a wrong password, `Err` only when the check itself cannot run.
    async fn verify_password(&self, candidate: &str, stored_hash: &str) -> Result<bool, HashError>;
}
