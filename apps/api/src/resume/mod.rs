// Resume form core: the validation engine plus the state and export plumbing
// that surround it. The engine (validation + markup) is pure; drafts and the
// store are the only mutable parts.

pub mod dates;
pub mod draft;
pub mod export;
pub mod handlers;
pub mod markup;
pub mod store;
pub mod validation;
