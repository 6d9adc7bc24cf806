use parking_lot::RwLock;
use std::sync::Arc;

// Un seul écrivain (le poller), plusieurs lecteurs HTTP concurrents.
pub type Shared<T> = Arc<RwLock<T>>;

pub fn new_state<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}
