mod classify;
mod cors;
mod pages;
