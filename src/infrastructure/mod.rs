pub mod clock;
pub mod console;
pub mod in_memory;
