pub mod catalog;
pub mod deep_link;
pub mod history;
pub mod random;
pub mod selector;
pub mod stats;

pub use catalog::{Collections, InMemoryCatalog};
pub use history::ShuffleHistory;
pub use random::{OsRandom, RandomSource, SeededRandom};
pub use selector::{SelectorError, ShuffleSelector};
pub use stats::{Recap, ShuffleStats};
