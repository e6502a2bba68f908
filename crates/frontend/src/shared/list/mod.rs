//! Generic client-side list management
//!
//! Every screen in the dashboard is the same loop: fetch the full collection,
//! filter it by a substring, slice the current page, and run create/edit/
//! delete through a modal form with a wholesale refetch after each mutation.
//! This module implements that loop once:
//!
//! - [`store::CollectionStore`] — the fetched records plus the search filter
//! - [`pagination`] — page arithmetic over the filtered view
//! - [`controller::ListController`] — the form/details/delete state machine
//! - [`vm::ListVm`] — Leptos signals and network glue binding it together
//!
//! The first three are plain data with no signal or browser dependency, so
//! they are unit-tested on the host target.

pub mod controller;
pub mod pagination;
pub mod store;
pub mod vm;

pub use controller::{FormMode, ListController, ListState};
pub use pagination::PageState;
pub use store::{CollectionStore, Searchable};
pub use vm::ListVm;
