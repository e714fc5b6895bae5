//! Session context
//!
//! The signed-in coach is held by a single context object that is passed to whoever needs it.
//! Parts of the application that depend on the coach profile register a callback and are
//! notified explicitly when it changes. Storage adapters get a [`SessionHandle`] to read the
//! credential of the current session.

use std::{cell::RefCell, rc::Rc};

use fitcoach_domain::{
    Coach, CoachID, CoachService, DeleteError, ReadError, Session, SessionService, Token,
    UpdateError,
};
use log::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(Coach),
    ProfileChanged(Coach),
    SignedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Callback = Box<dyn FnMut(&SessionEvent)>;

/// Read access to the session of a [`SessionContext`].
///
/// All clones observe the same session. Only the context changes it.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle(Rc<RefCell<Option<Session>>>);

impl SessionHandle {
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.0.borrow().clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<Token> {
        self.0.borrow().as_ref().map(|s| s.token.clone())
    }

    fn replace(&self, session: Option<Session>) -> Option<Session> {
        self.0.replace(session)
    }
}

#[derive(Default)]
pub struct SessionContext {
    session: SessionHandle,
    subscribers: Vec<(Subscription, Callback)>,
    next_subscription: u64,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        let context = Self::default();
        context.session.replace(Some(session));
        context
    }

    /// Returns a handle that follows every later change of the session.
    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        self.session.clone()
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session.session()
    }

    #[must_use]
    pub fn token(&self) -> Option<Token> {
        self.session.token()
    }

    #[must_use]
    pub fn coach(&self) -> Option<Coach> {
        self.session.0.borrow().as_ref().map(|s| s.coach.clone())
    }

    #[must_use]
    pub fn coach_id(&self) -> Option<CoachID> {
        self.session.0.borrow().as_ref().map(|s| s.coach.id)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&SessionEvent) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((subscription, Box::new(callback)));
        subscription
    }

    /// Returns `false` if the subscription was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let len = self.subscribers.len();
        self.subscribers.retain(|(s, _)| *s != subscription);
        self.subscribers.len() != len
    }

    pub fn sign_in(&mut self, session: Session) {
        info!("signed in as coach {}", session.coach.id);
        let coach = session.coach.clone();
        self.session.replace(Some(session));
        self.notify(&SessionEvent::SignedIn(coach));
    }

    /// Replaces the profile of the signed-in coach. Profiles of other coaches are ignored.
    pub fn update_profile(&mut self, coach: Coach) -> bool {
        {
            let mut session = self.session.0.borrow_mut();
            let Some(session) = session
                .as_mut()
                .filter(|session| session.coach.id == coach.id)
            else {
                debug!("ignoring profile update of coach {}", coach.id);
                return false;
            };
            session.coach = coach.clone();
        }
        self.notify(&SessionEvent::ProfileChanged(coach));
        true
    }

    pub fn sign_out(&mut self) -> Option<Session> {
        let session = self.session.replace(None);
        if session.is_some() {
            self.notify(&SessionEvent::SignedOut);
        }
        session
    }

    pub async fn login<S: SessionService>(
        &mut self,
        service: &S,
        email: &str,
        password: &str,
    ) -> Result<Coach, ReadError> {
        let session = service.login(email, password).await?;
        let coach = session.coach.clone();
        self.sign_in(session);
        Ok(coach)
    }

    pub async fn logout<S: SessionService>(&mut self, service: &S) -> Result<(), DeleteError> {
        service.logout().await?;
        self.sign_out();
        Ok(())
    }

    pub async fn save_profile<S: CoachService>(
        &mut self,
        service: &S,
        coach: Coach,
    ) -> Result<Coach, UpdateError> {
        let coach = service.replace_coach(coach).await?;
        self.update_profile(coach.clone());
        Ok(coach)
    }

    fn notify(&mut self, event: &SessionEvent) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }
}
