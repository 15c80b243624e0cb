use log::{error, info};
use thiserror::Error;

use crate::api::{ApiError, SubscriberRecord, SubscriberStore};
use crate::booking::pipeline::{FormEffects, LoadingGuard};
use crate::booking::validation::is_valid_email;
use crate::components::notification::NotificationKind;
use crate::config;

pub const SUBSCRIBED_MESSAGE: &str = "Successfully subscribed to newsletter! 🎉";
pub const SUBSCRIBE_FAILED_MESSAGE: &str = "Failed to subscribe. Please try again.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

#[derive(Debug, Error)]
pub enum NewsletterError {
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("could not store subscriber: {0}")]
    Store(#[from] ApiError),
}

/// Trims and checks the address typed into the footer form.
pub fn normalize_email(input: &str) -> Result<String, NewsletterError> {
    let email = input.trim();
    if is_valid_email(email) {
        Ok(email.to_string())
    } else {
        Err(NewsletterError::InvalidEmail(email.to_string()))
    }
}

/// Adds one subscriber record. The caller clears the input on `Ok`.
pub async fn subscribe<S, E>(store: &S, effects: &E, input: &str) -> Result<(), NewsletterError>
where
    S: SubscriberStore,
    E: FormEffects + ?Sized,
{
    let email = match normalize_email(input) {
        Ok(email) => email,
        Err(err) => {
            effects.notify(INVALID_EMAIL_MESSAGE, NotificationKind::Error);
            return Err(err);
        }
    };

    let record = SubscriberRecord {
        email,
        source: config::NEWSLETTER_SOURCE.to_string(),
    };
    let result = {
        let _loading = LoadingGuard::new(effects);
        store.add_subscriber(&record).await
    };

    match result {
        Ok(()) => {
            info!("Newsletter subscription stored");
            effects.notify(SUBSCRIBED_MESSAGE, NotificationKind::Success);
            Ok(())
        }
        Err(err) => {
            error!("Error subscribing: {}", err);
            effects.notify(SUBSCRIBE_FAILED_MESSAGE, NotificationKind::Error);
            Err(err.into())
        }
    }
}
