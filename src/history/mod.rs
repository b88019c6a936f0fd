mod history;
mod in_memory;

pub use history::History;
pub use in_memory::InMemoryHistory;
