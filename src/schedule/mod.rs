pub mod debounce;

pub use debounce::{Debouncer, TaskHandle};
