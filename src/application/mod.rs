// Dashboard app state (owned session + widget state)
pub mod app;

// Table export
pub mod export;

// Session ownership: append + recompute-on-read snapshot
pub mod session;
