use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::{Backend, HealthProbe};
use crate::models::{NewUser, Paginator, Role, User};
use crate::query::{Direction, Query};
use crate::ApiError;

/// A backend operation as recorded by [`MemoryBackend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Authenticate,
    Register,
    EndSession,
    CurrentUser,
    Find(String),
}

#[derive(Debug)]
struct Account {
    user: User,
    password: String,
}

#[derive(Debug, Default)]
struct State {
    accounts: Vec<Account>,
    session: Option<String>,
    collections: HashMap<String, Vec<Value>>,
    online: bool,
    unreachable: bool,
    calls: Vec<Call>,
    next_id: u64,
}

/// In-memory Backend for testing.
///
/// Clones share state, so a test can keep a handle while the code under test
/// owns another one.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

/// Two handles are equal when they share state.
impl PartialEq for MemoryBackend {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Add an account that can sign in with `password`.
    pub fn add_user(&self, user: User, password: &str) {
        self.lock().accounts.push(Account {
            user,
            password: password.to_string(),
        });
    }

    /// Pretend a session for `user_id` already exists.
    pub fn resume_session(&self, user_id: &str) {
        self.lock().session = Some(user_id.to_string());
    }

    pub fn has_session(&self) -> bool {
        self.lock().session.is_some()
    }

    /// Store a raw record in a collection.
    pub fn insert(&self, entity: &str, record: Value) {
        self.lock()
            .collections
            .entry(entity.to_string())
            .or_default()
            .push(record);
    }

    pub fn set_online(&self, online: bool) {
        self.lock().online = online;
    }

    /// Make every call fail as if the network were down.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.lock().unreachable = unreachable;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn find_calls(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Find(_)))
            .count()
    }

    /// Record `call` and fail if the backend is unreachable.
    fn enter(&self, call: Call) -> Result<MutexGuard<'_, State>, ApiError> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.unreachable {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(state)
    }
}

impl Backend for MemoryBackend {
    async fn authenticate(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let mut state = self.enter(Call::Authenticate)?;
        let id = state
            .accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| a.user.id.clone())
            .ok_or_else(|| ApiError::Http {
                status: 401,
                message: Some("Invalid credentials".to_string()),
            })?;
        state.session = Some(id);
        Ok(())
    }

    async fn register(&self, new_user: &NewUser) -> Result<(), ApiError> {
        let mut state = self.enter(Call::Register)?;
        if state.accounts.iter().any(|a| a.user.email == new_user.email) {
            return Err(ApiError::Http {
                status: 409,
                message: Some("Email already in use".to_string()),
            });
        }
        state.next_id += 1;
        let id = format!("u{}", state.next_id);
        state.accounts.push(Account {
            user: User {
                id,
                name: new_user.name.clone(),
                email: new_user.email.clone(),
                role: new_user.role,
            },
            password: new_user.password.clone(),
        });
        Ok(())
    }

    async fn end_session(&self) -> Result<(), ApiError> {
        let mut state = self.enter(Call::EndSession)?;
        state.session = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        let state = self.enter(Call::CurrentUser)?;
        let id = state.session.as_deref().ok_or(ApiError::NoSession)?;
        state
            .accounts
            .iter()
            .find(|a| a.user.id == id)
            .map(|a| a.user.clone())
            .ok_or(ApiError::Http {
                status: 401,
                message: Some("Unauthorized".to_string()),
            })
    }

    async fn find<T: DeserializeOwned>(&self, entity: &str, query: &Query) -> Result<Paginator<T>, ApiError> {
        let state = self.enter(Call::Find(entity.to_string()))?;
        let mut records: Vec<Value> = state
            .collections
            .get(entity)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|record| {
                query
                    .filters
                    .iter()
                    .all(|(field, value)| record.get(field).and_then(key_of).as_deref() == Some(value.as_str()))
            })
            .collect();

        for record in &mut records {
            for relation in &query.relations {
                expand(&state.collections, record, relation);
            }
        }

        if let Some((field, direction)) = &query.order {
            records.sort_by(|a, b| {
                let ordering = compare(a.get(field), b.get(field));
                match direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }

        let data = records
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Paginator::single_page(data))
    }
}

impl HealthProbe for MemoryBackend {
    async fn is_online(&self) -> bool {
        let state = self.lock();
        state.online && !state.unreachable
    }
}

/// Comparable key of a field: scalars as text, relations by their id.
fn key_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => map.get("id").and_then(key_of),
        _ => None,
    }
}

/// Replace the id stored under `relation` with the referenced record.
fn expand(collections: &HashMap<String, Vec<Value>>, record: &mut Value, relation: &str) {
    let Some(slot) = record.get_mut(relation) else {
        return;
    };
    let Some(id) = key_of(slot) else {
        return;
    };
    *slot = collections
        .get(relation)
        .and_then(|rows| rows.iter().find(|row| row.get("id").and_then(key_of).as_deref() == Some(id.as_str())))
        .cloned()
        .unwrap_or(Value::Null);
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or_default(), y.as_f64().unwrap_or_default());
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Customer fixture used across the workspace's tests.
pub fn customer(id: &str, email: &str) -> User {
    User {
        id: id.to_string(),
        name: "Test Customer".to_string(),
        email: email.to_string(),
        role: Role::Customer,
    }
}
