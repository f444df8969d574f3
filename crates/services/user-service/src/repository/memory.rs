//! In-memory user store.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::{DomainError, DomainResult, NewUser, User, UserRepository, USER_ENTITY};

struct State {
    users: HashMap<String, User>,
    next_id: i32,
}

impl State {
    fn empty() -> Self {
        Self {
            users: HashMap::new(),
            next_id: 1,
        }
    }
}

/// User store held in process memory.
///
/// Ids start at 1 and are never handed out twice, even after a delete.
/// The existence check and the insert happen under one write lock, so
/// concurrent creates for the same email cannot both succeed.
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::empty()),
        }
    }

    /// Drop every record and restart id assignment at 1.
    pub async fn clear(&self) {
        *self.state.write().await = State::empty();
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self.state.read().await.users.get(email).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> DomainResult<User> {
        new_user.ensure_complete()?;

        let mut guard = self.state.write().await;
        let state = &mut *guard;

        match state.users.entry(new_user.email.clone()) {
            Entry::Occupied(_) => Err(DomainError::conflict(USER_ENTITY)),
            Entry::Vacant(slot) => {
                let user = User::new(state.next_id, new_user);
                state.next_id += 1;
                tracing::debug!(user_id = user.id, email = %user.email, "User stored in memory");
                Ok(slot.insert(user).clone())
            }
        }
    }

    async fn get_all_users(&self) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self.state.read().await.users.values().cloned().collect();
        users.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(users)
    }

    async fn delete_user(&self, email: &str) -> DomainResult<bool> {
        Ok(self.state.write().await.users.remove(email).is_some())
    }
}
