use super::{ApiError, User, UserService};
use std::sync::{Mutex, MutexGuard};

/// In-memory `UserService` for controller and shell tests.
#[derive(Debug, Default)]
pub(crate) struct FakeService {
    state: Mutex<FakeState>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeState {
    pub users: Vec<User>,
    pub next_id: i64,
    pub fail_with: Option<u16>,
    pub calls: Vec<String>,
}

impl FakeService {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().filter_map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(FakeState {
                users,
                next_id,
                ..FakeState::default()
            }),
        }
    }

    /// Make every following call fail with the given HTTP status.
    pub(crate) fn fail_with(&self, status: u16) {
        self.state().fail_with = Some(status);
    }

    pub(crate) fn recover(&self) {
        self.state().fail_with = None;
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub(crate) fn stored(&self) -> Vec<User> {
        self.state().users.clone()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn begin(&self, call: String) -> Result<MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.state();
        state.calls.push(call);
        match state.fail_with {
            Some(status) => Err(ApiError::Http {
                status,
                body: "fake failure".to_string(),
            }),
            None => Ok(state),
        }
    }
}

pub(crate) fn user(id: i64, name: &str) -> User {
    User {
        id: Some(id),
        display_name: Some(name.to_string()),
        login_name: Some(name.to_lowercase()),
        password: Some(format!("{}-pw", name.to_lowercase())),
        role_id: Some(1),
    }
}

impl UserService for FakeService {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let state = self.begin("list".to_string())?;
        Ok(state.users.clone())
    }

    async fn search_users_by_name(&self, name: &str) -> Result<Vec<User>, ApiError> {
        let state = self.begin(format!("search {name}"))?;
        let needle = name.to_lowercase();
        Ok(state
            .users
            .iter()
            .filter(|u| u.display_name().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let mut state = self.begin(format!("delete {id}"))?;
        let before = state.users.len();
        state.users.retain(|u| u.id != Some(id));
        if state.users.len() == before {
            return Err(ApiError::Http {
                status: 404,
                body: "not found".to_string(),
            });
        }
        Ok(())
    }

    async fn update_user(&self, id: i64, user: &User) -> Result<(), ApiError> {
        let mut state = self.begin(format!("update {id}"))?;
        let stored = state
            .users
            .iter_mut()
            .find(|u| u.id == Some(id))
            .ok_or_else(|| ApiError::Http {
                status: 404,
                body: "not found".to_string(),
            })?;
        *stored = User {
            id: Some(id),
            ..user.clone()
        };
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<User, ApiError> {
        let mut state = self.begin("create".to_string())?;
        let created = User {
            id: Some(state.next_id),
            ..user.clone()
        };
        state.next_id += 1;
        state.users.push(created.clone());
        Ok(created)
    }
}
