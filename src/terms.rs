pub use fixed_map::Key as Term;
pub use fixed_map::Key;
use fixed_map::Map as FixedMap;

use crate::membership::Triangular;

/// The term table of one linguistic variable: each named fuzzy set mapped to
/// its membership function.
#[derive(Default)]
pub struct Terms<K: Term>(pub(crate) FixedMap<K, Triangular>);

impl<K: Term> Terms<K> {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    pub fn insert(&mut self, key: K, membership: Triangular) {
        self.0.insert(key, membership);
    }
}
