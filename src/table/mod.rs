//! User table controller.
//!
//! Owns the user list loaded once from the remote service, derives the
//! filtered and paginated view, and mediates create/update/delete. Local state
//! is patched only after the remote call succeeds, so a failed call leaves the
//! list exactly as it was. Every failure is logged and returned to the caller.

pub mod draft;
pub mod error;
pub mod view;

pub use self::draft::{Dialog, DraftField};
pub use self::error::TableError;
pub use self::view::{Page, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

use crate::api::{User, UserService};
use tracing::{debug, error, info, warn};

pub struct UserTable<S> {
    service: S,
    users: Vec<User>,
    search_term: String,
    page_index: usize,
    page_size: usize,
    dialog: Dialog,
    draft: User,
}

impl<S: UserService> UserTable<S> {
    #[must_use]
    pub fn new(service: S) -> Self {
        Self::with_page_size(service, DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn with_page_size(service: S, page_size: usize) -> Self {
        Self {
            service,
            users: Vec::new(),
            search_term: String::new(),
            page_index: 0,
            page_size: page_size.max(1),
            dialog: Dialog::Closed,
            draft: User::blank(),
        }
    }

    /// Fetch the full user list. On failure the list is emptied and the
    /// error returned.
    ///
    /// # Errors
    /// Returns `TableError::Api` if the list call fails or cannot be decoded.
    pub async fn load(&mut self) -> Result<usize, TableError> {
        match self.service.list_users().await {
            Ok(users) => {
                debug!("loaded {} users", users.len());
                self.users = users;
                self.clamp();
                Ok(self.users.len())
            }
            Err(e) => {
                error!("Failed to load users: {}", e);
                self.users.clear();
                self.clamp();
                Err(e.into())
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.clamp();
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
        self.clamp();
    }

    pub fn next_page(&mut self) {
        let page_count = self.page().page_count();
        if self.page_index + 1 < page_count {
            self.set_page(self.page_index + 1);
        }
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page_index.saturating_sub(1));
    }

    /// Change the page size and go back to the first page. Zero is treated as one.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    /// Records matching the current search term, in list order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&User> {
        view::filter(&self.users, &self.search_term)
    }

    /// The page slice for the current page index and size.
    #[must_use]
    pub fn page(&self) -> Page<'_> {
        Page::slice(&self.filtered(), self.page_index, self.page_size)
    }

    /// Start a new user with an empty draft.
    pub fn open_add(&mut self) {
        self.draft = User::blank();
        self.dialog = Dialog::Adding;
    }

    /// Copy the user with `id` into the draft for editing.
    ///
    /// # Errors
    /// Returns `TableError::UnknownUser` if no loaded user has that id.
    pub fn open_edit(&mut self, id: i64) -> Result<(), TableError> {
        let user = self
            .users
            .iter()
            .find(|u| u.id == Some(id))
            .ok_or(TableError::UnknownUser(id))?;

        self.draft = user.clone();
        self.dialog = Dialog::Editing;

        Ok(())
    }

    /// Close the dialog and discard the draft.
    pub fn cancel(&mut self) {
        self.dialog = Dialog::Closed;
        self.draft = User::blank();
    }

    /// Merge one field into the draft.
    ///
    /// # Errors
    /// Returns `TableError::DialogClosed` if no dialog is open, or
    /// `TableError::InvalidField` if the value does not fit the field.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<(), TableError> {
        if !self.dialog.is_open() {
            return Err(TableError::DialogClosed);
        }
        field.apply(&mut self.draft, value)
    }

    /// Persist the draft: update in edit mode, create otherwise.
    ///
    /// On success the dialog closes and the saved record is returned. On
    /// failure the dialog stays open with the draft intact.
    ///
    /// # Errors
    /// Returns `TableError::DialogClosed` without an open dialog, and
    /// `TableError::Api` if the remote call fails.
    pub async fn save(&mut self) -> Result<User, TableError> {
        let saved = match self.dialog {
            Dialog::Closed => return Err(TableError::DialogClosed),
            Dialog::Editing => {
                let id = self.draft.id.ok_or(TableError::MissingId)?;

                if let Err(e) = self.service.update_user(id, &self.draft).await {
                    error!("Failed to update user {}: {}", id, e);
                    return Err(e.into());
                }

                let saved = self.draft.clone();
                if let Some(existing) = self.users.iter_mut().find(|u| u.id == Some(id)) {
                    *existing = saved.clone();
                }
                info!("updated user {}", id);

                saved
            }
            Dialog::Adding => {
                let created = match self.service.create_user(&self.draft).await {
                    Ok(created) => created,
                    Err(e) => {
                        error!("Failed to create user: {}", e);
                        return Err(e.into());
                    }
                };

                if created.id.is_some() && self.users.iter().any(|u| u.id == created.id) {
                    warn!("replacing stale local record with id {:?}", created.id);
                    self.users.retain(|u| u.id != created.id);
                }
                self.users.push(created.clone());
                info!("created user {:?}", created.id);

                created
            }
        };

        self.cancel();
        self.clamp();

        Ok(saved)
    }

    /// Delete the user remotely, then drop it from the local list.
    ///
    /// # Errors
    /// Returns `TableError::Api` if the remote call fails; the local list is
    /// left unchanged.
    pub async fn delete(&mut self, id: i64) -> Result<(), TableError> {
        if let Err(e) = self.service.delete_user(id).await {
            error!("Failed to delete user {}: {}", id, e);
            return Err(e.into());
        }

        self.users.retain(|u| u.id != Some(id));
        self.clamp();
        info!("deleted user {}", id);

        Ok(())
    }

    fn clamp(&mut self) {
        let total = self.filtered().len();
        self.page_index = view::clamp_page_index(self.page_index, self.page_size, total);
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn dialog(&self) -> Dialog {
        self.dialog
    }

    #[must_use]
    pub const fn draft(&self) -> &User {
        &self.draft
    }

    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }
}
