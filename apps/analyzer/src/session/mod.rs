// Per-browser session state: the form-submission guard and the in-memory store.

pub mod form;
pub mod handlers;
pub mod store;

pub use form::{FormError, SessionStatus};
pub use store::SessionStore;
