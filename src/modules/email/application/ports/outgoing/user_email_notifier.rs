use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    SendingFailed(String),
}

/// Account-related mail. The token is the one-time verification token
/// stored on the user row.
#[async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;
}
