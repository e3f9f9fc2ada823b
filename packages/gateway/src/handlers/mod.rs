pub mod classify;
pub mod editor;
pub mod status;
