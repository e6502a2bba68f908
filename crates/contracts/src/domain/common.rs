//! Shared traits for REST-backed records
//!
//! Every record the dashboard manages is an opaque row owned by the backend;
//! the client only needs its collection path, its identity key and the one
//! field lists filter on.

/// A record persisted by the REST backend under `/api/<collection>`.
pub trait Resource {
    /// Path segment of the REST collection (e.g. "suppliers").
    fn collection_name() -> &'static str;

    /// Singular UI label (e.g. "Supplier").
    fn element_name() -> &'static str;

    /// Plural UI label (e.g. "Suppliers").
    fn list_name() -> &'static str;

    /// Identity key. `None` for a record that has not been created yet.
    fn id(&self) -> Option<i64>;

    /// The designated field list screens filter on (substring,
    /// case-insensitive).
    fn search_text(&self) -> &str;
}
