//! Check command handler
//!
//! Validates configuration and every configured sender without sending.

use crate::config::Settings;
use crate::error::AppResult;
use crate::notifications::{Channel, Sender, SenderFactory};

/// Handler for the check command
pub struct CheckCommandHandler {
    config: Settings,
}

impl CheckCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validate settings, then each channel's sender
    ///
    /// # Returns
    /// `(channel, provider)` for every sender that passed
    pub async fn execute(&self) -> AppResult<Vec<(&'static str, &'static str)>> {
        self.config.validate()?;

        let factory = SenderFactory::new(&self.config.notifications);

        Ok(vec![
            check(&*factory.email()?).await?,
            check(&*factory.sms()?).await?,
            check(&*factory.push()?).await?,
        ])
    }
}

async fn check<C: Channel>(sender: &dyn Sender<C>) -> AppResult<(&'static str, &'static str)> {
    sender.validate_config().await?;
    tracing::debug!(channel = C::NAME, provider = sender.name(), "sender configuration valid");
    Ok((C::NAME, sender.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_check_defaults() {
        let report = CheckCommandHandler::new(Settings::default())
            .execute()
            .await
            .unwrap();
        assert_eq!(
            report,
            vec![("email", "console"), ("sms", "console"), ("push", "console")]
        );
    }

    #[tokio::test]
    async fn test_check_fails_on_incomplete_bark_config() {
        let mut settings = Settings::default();
        settings.notifications.push.provider = "bark".to_string();
        settings.notifications.push.server_url = "https://bark.example.com".to_string();

        let result = CheckCommandHandler::new(settings).execute().await;
        assert!(matches!(
            result,
            Err(AppError::Validation { ref field, .. }) if field == "notifications.push.device_key"
        ));
    }

    #[tokio::test]
    async fn test_check_fails_on_invalid_settings() {
        let mut settings = Settings::default();
        settings.logger.level = "noisy".to_string();

        let result = CheckCommandHandler::new(settings).execute().await;
        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }
}
