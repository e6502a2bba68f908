//! Signal wrapper and network glue for the list core
//!
//! [`ListVm`] owns the three reactive pieces of a CRUD screen and performs
//! the asynchronous REST calls the pure state machine only describes. It is
//! `Copy` (signals are arena handles), so closures in views capture it by
//! value.
//!
//! Failure policy: a failed `load()` keeps the stale collection visible, a
//! failed save reopens the form with the entered data, a failed delete
//! returns to the list. Every failure is logged and surfaced as an error
//! toast; nothing is retried automatically and nothing panics.

use contracts::domain::common::Resource;
use contracts::shared::validation::{FieldErrors, Validate};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::notify::NotificationService;

use super::controller::{FormMode, ListController, ListState};
use super::pagination::{self, PageState};
use super::store::CollectionStore;

pub struct ListVm<T: Send + Sync + 'static> {
    pub collection: RwSignal<CollectionStore<T>>,
    pub pager: RwSignal<PageState>,
    pub controller: RwSignal<ListController<T>>,
    notify: NotificationService,
}

impl<T: Send + Sync + 'static> Clone for ListVm<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListVm<T> {}

impl<T> ListVm<T>
where
    T: Resource
        + Validate
        + Clone
        + Default
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static,
{
    /// Create the screen state. Expects a [`NotificationService`] in context.
    pub fn new(page_size: usize) -> Self {
        Self {
            collection: RwSignal::new(CollectionStore::new()),
            pager: RwSignal::new(PageState::new(page_size)),
            controller: RwSignal::new(ListController::new()),
            notify: expect_context::<NotificationService>(),
        }
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn filtered(&self) -> Vec<T> {
        self.collection.with(|c| c.filtered_view())
    }

    pub fn page_items(&self) -> Vec<T> {
        let view = self.filtered();
        pagination::page_window(&view, self.pager.get())
    }

    pub fn page_count(&self) -> usize {
        let total = self.collection.with(|c| c.filtered_len());
        pagination::page_count(total, self.pager.get().page_size())
    }

    pub fn current_page(&self) -> usize {
        self.pager.get().current_page()
    }

    pub fn search_term(&self) -> String {
        self.collection.with(|c| c.search_term().to_string())
    }

    pub fn is_busy(&self) -> bool {
        self.controller.with(|c| c.is_busy())
    }

    pub fn form_open(&self) -> bool {
        self.controller.with(|c| {
            matches!(c.state(), ListState::Form { .. } | ListState::Saving { .. })
        })
    }

    pub fn form_mode(&self) -> Option<FormMode> {
        self.controller.with(|c| match c.state() {
            ListState::Form { mode, .. } | ListState::Saving { mode, .. } => Some(*mode),
            _ => None,
        })
    }

    /// The record currently authored in the form dialog.
    pub fn form_record(&self) -> Option<T> {
        self.controller.with(|c| match c.state() {
            ListState::Form { record, .. } | ListState::Saving { record, .. } => {
                Some(record.clone())
            }
            _ => None,
        })
    }

    pub fn form_errors(&self) -> FieldErrors {
        self.controller.with(|c| match c.state() {
            ListState::Form { errors, .. } => errors.clone(),
            _ => FieldErrors::new(),
        })
    }

    pub fn form_error(&self, field: &'static str) -> Option<String> {
        self.controller.with(|c| match c.state() {
            ListState::Form { errors, .. } => errors.get(field).map(str::to_string),
            _ => None,
        })
    }

    pub fn details_record(&self) -> Option<T> {
        self.controller.with(|c| match c.state() {
            ListState::Details { record } => Some(record.clone()),
            _ => None,
        })
    }

    /// The record awaiting delete confirmation.
    pub fn delete_candidate(&self) -> Option<T> {
        self.controller.with(|c| match c.state() {
            ListState::Deleting {
                record,
                in_flight: false,
            } => Some(record.clone()),
            _ => None,
        })
    }

    // ------------------------------------------------------------------
    // List operations
    // ------------------------------------------------------------------

    /// Fetch the whole collection. On success the held records are replaced
    /// atomically and the current page is clamped to the new page count; on
    /// failure the previous records stay on screen.
    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::fetch_all::<T>().await {
                Ok(records) => {
                    vm.collection.update(|c| c.replace(records));
                    vm.clamp_page();
                }
                Err(e) => {
                    log::error!("loading {} failed: {e}", T::collection_name());
                    vm.notify
                        .error(format!("Could not load {}", T::list_name().to_lowercase()));
                }
            }
        });
    }

    pub fn set_search_term(&self, term: String) {
        self.collection.update(|c| c.set_search_term(term));
        self.clamp_page();
    }

    pub fn go_to_page(&self, page: usize) {
        self.pager.update(|p| p.go_to(page));
    }

    fn clamp_page(&self) {
        let total = self.collection.with(|c| c.filtered_len());
        self.pager.update(|p| p.clamp_to(total));
    }

    // ------------------------------------------------------------------
    // CRUD operations
    // ------------------------------------------------------------------

    pub fn start_create(&self) {
        self.controller.update(|c| c.start_create(T::default()));
    }

    pub fn start_edit(&self, record: T) {
        self.controller.update(|c| c.start_edit(record));
    }

    pub fn open_details(&self, record: T) {
        self.controller.update(|c| c.open_details(record));
    }

    pub fn close_dialog(&self) {
        self.controller.update(|c| c.close());
    }

    pub fn update_record(&self, f: impl FnOnce(&mut T)) {
        self.controller.update(|c| c.update_record(f));
    }

    /// Validate and submit the form. Validation errors keep the form open
    /// and never reach the network; a successful mutation closes the form,
    /// notifies, and refetches the collection wholesale.
    pub fn save(&self) {
        let Some((mode, record)) = self
            .controller
            .try_update(|c| c.begin_save())
            .flatten()
        else {
            return;
        };

        let vm = *self;
        spawn_local(async move {
            let result = match (mode, record.id()) {
                (FormMode::Edit, Some(id)) => api::update(id, &record).await.map(|_| ()),
                _ => api::create(&record).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    vm.controller.update(|c| c.save_succeeded());
                    vm.notify
                        .success(format!("{} saved", T::element_name()));
                    vm.load();
                }
                Err(e) => {
                    log::error!("saving {} failed: {e}", T::collection_name());
                    vm.controller.update(|c| c.save_failed());
                    vm.notify
                        .error(format!("Could not save the {}", T::element_name().to_lowercase()));
                }
            }
        });
    }

    pub fn request_delete(&self, record: T) {
        self.controller.update(|c| c.request_delete(record));
    }

    pub fn cancel_delete(&self) {
        self.controller.update(|c| c.cancel_delete());
    }

    /// Issue the confirmed delete, then refetch. A record that never made it
    /// to the server is simply dropped client-side.
    pub fn confirm_delete(&self) {
        let Some(record) = self.controller.try_update(|c| c.confirm_delete()).flatten() else {
            return;
        };
        let vm = *self;
        spawn_local(async move {
            let Some(id) = record.id() else {
                vm.controller.update(|c| c.delete_finished());
                return;
            };
            match api::delete_one::<T>(id).await {
                Ok(()) => {
                    vm.controller.update(|c| c.delete_finished());
                    vm.notify
                        .success(format!("{} deleted", T::element_name()));
                    vm.load();
                }
                Err(e) => {
                    log::error!("deleting {} {id} failed: {e}", T::collection_name());
                    vm.controller.update(|c| c.delete_finished());
                    vm.notify
                        .error(format!("Could not delete the {}", T::element_name().to_lowercase()));
                }
            }
        });
    }
}
