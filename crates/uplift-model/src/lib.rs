pub mod completion;
pub mod progress;
pub mod result;
