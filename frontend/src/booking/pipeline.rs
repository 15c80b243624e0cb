use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use log::{error, info, warn};
use thiserror::Error;

use super::form::{ConfirmationRequest, FieldRecord};
use super::session::BookingSession;
use super::validation::{validate_step, ValidationError};
use crate::api::{ApiError, BookingApi};
use crate::components::notification::NotificationKind;

pub const BOOKED_MESSAGE: &str =
    "Consultation booked successfully! 🎉 Check your email for confirmation.";
pub const BOOKING_FAILED_MESSAGE: &str =
    "Failed to book consultation. Please try again or contact us directly.";

pub type DetachedTask = Pin<Box<dyn Future<Output = ()>>>;

/// UI side effects of a form flow.
pub trait FormEffects {
    fn set_loading(&self, loading: bool);
    fn notify(&self, message: &str, kind: NotificationKind);
    fn focus_field(&self, name: &str);
}

pub trait BookingEffects: FormEffects {
    fn close_modal(&self);
    /// Runs a task that nobody awaits.
    fn spawn_detached(&self, task: DetachedTask);
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("booking request failed: {0}")]
    Transport(#[from] ApiError),
}

/// Keeps the submit control in its loading state until dropped.
pub struct LoadingGuard<'a, E: FormEffects + ?Sized> {
    effects: &'a E,
}

impl<'a, E: FormEffects + ?Sized> LoadingGuard<'a, E> {
    pub fn new(effects: &'a E) -> Self {
        effects.set_loading(true);
        Self { effects }
    }
}

impl<E: FormEffects + ?Sized> Drop for LoadingGuard<'_, E> {
    fn drop(&mut self) {
        self.effects.set_loading(false);
    }
}

/// Focus the offending field and tell the user what is wrong.
pub fn surface_validation_error<E: FormEffects + ?Sized>(effects: &E, err: &ValidationError) {
    effects.focus_field(err.field());
    effects.notify(err.user_message(), NotificationKind::Error);
}

/// Validates the active step, posts the whole record and reports the outcome.
/// On success the modal is closed and a confirmation email is requested in
/// the background; on failure the modal and its values are left untouched.
pub async fn submit<A, E>(
    api: Rc<A>,
    effects: &E,
    session: &BookingSession,
) -> Result<(), SubmitError>
where
    A: BookingApi + 'static,
    E: BookingEffects + ?Sized,
{
    if let Err(err) = validate_step(session.form(), session.wizard().current_step(), session.record()) {
        surface_validation_error(effects, &err);
        return Err(err.into());
    }

    let payload: FieldRecord = session.record().clone();
    let response = {
        let _loading = LoadingGuard::new(effects);
        api.create_consultation(&payload).await
    };

    match response {
        Ok(_) => {
            info!("Consultation booked");
            effects.notify(BOOKED_MESSAGE, NotificationKind::Success);
            effects.close_modal();

            let confirmation = payload.confirmation_subset();
            effects.spawn_detached(Box::pin(async move {
                send_confirmation(api.as_ref(), &confirmation).await;
            }));
            Ok(())
        }
        Err(err) => {
            error!("Error booking consultation: {}", err);
            effects.notify(BOOKING_FAILED_MESSAGE, NotificationKind::Error);
            Err(err.into())
        }
    }
}

/// Best effort: failures are logged and dropped.
pub async fn send_confirmation<A: BookingApi>(api: &A, request: &ConfirmationRequest) {
    if let Err(err) = api.send_confirmation(request).await {
        warn!("Error sending confirmation email: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Effect {
        Loading(bool),
        Notify(String, NotificationKind),
        Focus(String),
        Close,
        Spawn,
    }

    #[derive(Default)]
    struct RecordingEffects {
        log: RefCell<Vec<Effect>>,
        tasks: RefCell<Vec<DetachedTask>>,
    }

    impl RecordingEffects {
        fn effects(&self) -> Vec<Effect> {
            self.log.borrow().clone()
        }

        async fn run_detached(&self) {
            let tasks: Vec<DetachedTask> = self.tasks.borrow_mut().drain(..).collect();
            for task in tasks {
                task.await;
            }
        }
    }

    impl FormEffects for RecordingEffects {
        fn set_loading(&self, loading: bool) {
            self.log.borrow_mut().push(Effect::Loading(loading));
        }
        fn notify(&self, message: &str, kind: NotificationKind) {
            self.log.borrow_mut().push(Effect::Notify(message.to_string(), kind));
        }
        fn focus_field(&self, name: &str) {
            self.log.borrow_mut().push(Effect::Focus(name.to_string()));
        }
    }

    impl BookingEffects for RecordingEffects {
        fn close_modal(&self) {
            self.log.borrow_mut().push(Effect::Close);
        }
        fn spawn_detached(&self, task: DetachedTask) {
            self.log.borrow_mut().push(Effect::Spawn);
            self.tasks.borrow_mut().push(task);
        }
    }

    struct FakeApi {
        booking_status: Option<u16>,
        confirmation_fails: bool,
        bookings: RefCell<Vec<FieldRecord>>,
        confirmations: RefCell<Vec<ConfirmationRequest>>,
        confirmation_attempts: Cell<usize>,
    }

    impl FakeApi {
        fn accepting() -> Self {
            Self {
                booking_status: None,
                confirmation_fails: false,
                bookings: RefCell::default(),
                confirmations: RefCell::default(),
                confirmation_attempts: Cell::new(0),
            }
        }

        fn rejecting(status: u16) -> Self {
            Self {
                booking_status: Some(status),
                ..Self::accepting()
            }
        }
    }

    impl BookingApi for FakeApi {
        async fn create_consultation(
            &self,
            payload: &FieldRecord,
        ) -> Result<serde_json::Value, ApiError> {
            self.bookings.borrow_mut().push(payload.clone());
            match self.booking_status {
                Some(status) => Err(ApiError::Status(status)),
                None => Ok(json!({ "id": 1 })),
            }
        }

        async fn send_confirmation(&self, request: &ConfirmationRequest) -> Result<(), ApiError> {
            self.confirmation_attempts.set(self.confirmation_attempts.get() + 1);
            if self.confirmation_fails {
                return Err(ApiError::Network("connection reset".to_string()));
            }
            self.confirmations.borrow_mut().push(request.clone());
            Ok(())
        }
    }

    fn session_on_last_step() -> BookingSession {
        let mut session = BookingSession::default();
        session.open();
        for (name, value) in [
            ("full_name", "Jane Doe"),
            ("email", "jane@corp.io"),
            ("phone", "+1 (555) 123-4567"),
            ("company", "Corp"),
        ] {
            session.set_field(name, value);
        }
        session.advance().unwrap();
        for (name, value) in [
            ("project_type", "ai_ml"),
            ("budget", "25k-50k"),
            ("timeline", "1-3_months"),
            ("message", "Need a model."),
        ] {
            session.set_field(name, value);
        }
        session.advance().unwrap();
        session.set_field("preferred_date", "2026-11-02");
        session.set_field("preferred_time", "14:00");
        session
    }

    #[tokio::test]
    async fn success_notifies_closes_then_requests_confirmation() {
        let api = Rc::new(FakeApi::accepting());
        let effects = RecordingEffects::default();
        let session = session_on_last_step();

        submit(api.clone(), &effects, &session).await.unwrap();

        assert_eq!(
            effects.effects(),
            vec![
                Effect::Loading(true),
                Effect::Loading(false),
                Effect::Notify(BOOKED_MESSAGE.to_string(), NotificationKind::Success),
                Effect::Close,
                Effect::Spawn,
            ]
        );
        assert_eq!(api.confirmation_attempts.get(), 0);

        effects.run_detached().await;
        assert_eq!(
            *api.confirmations.borrow(),
            vec![ConfirmationRequest {
                email: "jane@corp.io".to_string(),
                full_name: "Jane Doe".to_string(),
                date: "2026-11-02".to_string(),
                time: "14:00".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn posts_every_field_entered_across_steps() {
        let api = Rc::new(FakeApi::accepting());
        let effects = RecordingEffects::default();
        let mut session = session_on_last_step();
        session.retreat();
        session.retreat();
        session.advance().unwrap();
        session.advance().unwrap();

        submit(api.clone(), &effects, &session).await.unwrap();

        let bookings = api.bookings.borrow();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0], *session.record());
        assert_eq!(bookings[0].value("company"), "Corp");
        assert_eq!(bookings[0].value("message"), "Need a model.");
        assert_eq!(bookings[0].value("timezone"), "IST");
    }

    #[tokio::test]
    async fn rejected_booking_keeps_modal_open() {
        let api = Rc::new(FakeApi::rejecting(400));
        let effects = RecordingEffects::default();
        let session = session_on_last_step();
        let before = session.record().clone();

        let err = submit(api.clone(), &effects, &session).await.unwrap_err();

        assert!(matches!(err, SubmitError::Transport(ApiError::Status(400))));
        assert_eq!(
            effects.effects(),
            vec![
                Effect::Loading(true),
                Effect::Loading(false),
                Effect::Notify(BOOKING_FAILED_MESSAGE.to_string(), NotificationKind::Error),
            ]
        );
        assert!(session.is_open());
        assert_eq!(*session.record(), before);
        assert_eq!(api.confirmation_attempts.get(), 0);
    }

    #[tokio::test]
    async fn invalid_step_never_reaches_the_network() {
        let api = Rc::new(FakeApi::accepting());
        let effects = RecordingEffects::default();
        let mut session = session_on_last_step();
        session.set_field("preferred_time", " ");

        let err = submit(api.clone(), &effects, &session).await.unwrap_err();

        assert!(matches!(err, SubmitError::Validation(ValidationError::MissingField { .. })));
        assert!(api.bookings.borrow().is_empty());
        assert_eq!(
            effects.effects(),
            vec![
                Effect::Focus("preferred_time".to_string()),
                Effect::Notify(
                    "Please fill in all required fields".to_string(),
                    NotificationKind::Error
                ),
            ]
        );
    }

    #[tokio::test]
    async fn failed_confirmation_is_swallowed() {
        let api = Rc::new(FakeApi {
            confirmation_fails: true,
            ..FakeApi::accepting()
        });
        let effects = RecordingEffects::default();
        let session = session_on_last_step();

        assert!(submit(api.clone(), &effects, &session).await.is_ok());
        effects.run_detached().await;

        assert_eq!(api.confirmation_attempts.get(), 1);
        assert!(api.confirmations.borrow().is_empty());
        let notifications = effects
            .effects()
            .into_iter()
            .filter(|e| matches!(e, Effect::Notify(..)))
            .count();
        assert_eq!(notifications, 1);
    }

    #[test]
    fn loading_guard_restores_on_drop() {
        let effects = RecordingEffects::default();
        {
            let _guard = LoadingGuard::new(&effects);
            assert_eq!(effects.effects(), vec![Effect::Loading(true)]);
        }
        assert_eq!(effects.effects(), vec![Effect::Loading(true), Effect::Loading(false)]);
    }
}
