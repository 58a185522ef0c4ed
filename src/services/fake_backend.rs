// Backend en memoria para tests: respuestas encoladas por tabla,
// opcionalmente diferidas con un oneshot para controlar el orden.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;
use crate::error::FetchError;
use crate::models::{AuthEvent, Query, Session, User};
use crate::services::backend::{AuthCallback, Backend};
use crate::state::{Subscribers, Subscription};

pub type Rows = Result<Vec<Value>, FetchError>;

enum Reply {
    Ready(Rows),
    Deferred(oneshot::Receiver<Rows>),
}

pub struct FakeBackend {
    replies: RefCell<HashMap<&'static str, VecDeque<Reply>>>,
    pub queries: RefCell<Vec<Query>>,
    pub upserts: RefCell<Vec<(String, Value)>>,
    pub deletes: RefCell<Vec<(String, String)>>,
    pub write_error: RefCell<Option<FetchError>>,
    pub session: RefCell<Result<Option<Session>, FetchError>>,
    pub user: RefCell<Result<Option<User>, FetchError>>,
    pub get_user_calls: RefCell<usize>,
    listeners: Subscribers<(AuthEvent, Option<Session>)>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(HashMap::new()),
            queries: RefCell::new(Vec::new()),
            upserts: RefCell::new(Vec::new()),
            deletes: RefCell::new(Vec::new()),
            write_error: RefCell::new(None),
            session: RefCell::new(Ok(None)),
            user: RefCell::new(Ok(None)),
            get_user_calls: RefCell::new(0),
            listeners: Subscribers::new(),
        }
    }

    pub fn reply(&self, table: &'static str, rows: Rows) {
        self.replies
            .borrow_mut()
            .entry(table)
            .or_default()
            .push_back(Reply::Ready(rows));
    }

    /// La respuesta llega cuando el test envía por el `Sender`
    pub fn defer(&self, table: &'static str) -> oneshot::Sender<Rows> {
        let (tx, rx) = oneshot::channel();
        self.replies
            .borrow_mut()
            .entry(table)
            .or_default()
            .push_back(Reply::Deferred(rx));
        tx
    }

    pub fn emit(&self, event: AuthEvent, session: Option<Session>) {
        self.listeners.notify(&(event, session));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn session_for(user_id: &str) -> Session {
        Session {
            access_token: format!("token-{}", user_id),
            refresh_token: Some("refresh".into()),
            expires_at: None,
            user: User {
                id: user_id.to_string(),
                email: Some(format!("{}@pordasi.id", user_id)),
            },
        }
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, FetchError> {
        self.queries.borrow_mut().push(query.clone());
        let reply = self
            .replies
            .borrow_mut()
            .get_mut(query.table)
            .and_then(VecDeque::pop_front);

        match reply {
            None => Ok(Vec::new()),
            Some(Reply::Ready(rows)) => rows,
            Some(Reply::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Network("request dropped".into()))),
        }
    }

    async fn upsert(&self, table: &str, row: Value) -> Result<(), FetchError> {
        if let Some(error) = self.write_error.borrow().clone() {
            return Err(error);
        }
        self.upserts.borrow_mut().push((table.to_string(), row));
        Ok(())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), FetchError> {
        if let Some(error) = self.write_error.borrow().clone() {
            return Err(error);
        }
        self.deletes.borrow_mut().push((table.to_string(), id.to_string()));
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, FetchError> {
        self.session.borrow().clone()
    }

    async fn get_user(&self) -> Result<Option<User>, FetchError> {
        *self.get_user_calls.borrow_mut() += 1;
        self.user.borrow().clone()
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, FetchError> {
        if password != "secret" {
            return Err(FetchError::Backend("Invalid login credentials".into()));
        }
        let session = Self::session_for(email);
        *self.session.borrow_mut() = Ok(Some(session.clone()));
        self.emit(AuthEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), FetchError> {
        *self.session.borrow_mut() = Ok(None);
        self.emit(AuthEvent::SignedOut, None);
        Ok(())
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Subscription {
        self.listeners
            .subscribe(move |payload: &(AuthEvent, Option<Session>)| callback(payload.0, payload.1.clone()))
    }
}
