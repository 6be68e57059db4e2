use std::rc::Rc;

use tasker_shared::Session;
use yew::{Reducible, UseReducerHandle};

#[derive(Clone, PartialEq)]
pub struct SessionStore {
    pub session: Session,
}

pub enum SessionAction {
    LoginSucceeded { token: String },
    RestoreConfirmed,
    RestoreFailed,
    LoggedOut,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let session = self.session.clone();
        let next = match action {
            SessionAction::LoginSucceeded { token } => session.login_succeeded(token),
            SessionAction::RestoreConfirmed => session.restore_confirmed(),
            SessionAction::RestoreFailed => session.restore_failed(),
            SessionAction::LoggedOut => session.logged_out(),
        };
        Rc::new(SessionStore { session: next })
    }
}

pub type SessionHandle = UseReducerHandle<SessionStore>;
