pub mod event;
pub mod memory;

pub use event::EventOperation;
pub use memory::MemoryEventOperation;
