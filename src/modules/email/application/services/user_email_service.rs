use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::email::application::ports::outgoing::{
    EmailSender, UserEmailNotificationError, UserEmailNotifier,
};

/// Builds account emails on top of a raw [`EmailSender`].
pub struct UserEmailService {
    sender: Arc<dyn EmailSender>,
    app_url: String,
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender>, app_url: String) -> Self {
        Self { sender, app_url }
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let link = format!(
            "{}/verify-email?token={}&email={}",
            self.app_url, token, email
        );
        let body = format!(
            r#"
            <p>Hi {username},</p>
            <p>Welcome to Forumverse! To finish setting up your account,
            verify your email address:</p>
            <p><a href="{link}">Verify your email</a></p>
            <p>This link is valid for 1 hour. If it expires, request a new
            one from the login page.</p>
            "#,
        );

        self.sender
            .send_email(email, "Verify your email", &body)
            .await
            .map_err(UserEmailNotificationError::SendingFailed)
    }
}
