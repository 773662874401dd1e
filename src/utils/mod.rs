pub mod debounce;
pub mod sampling;
