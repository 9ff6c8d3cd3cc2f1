pub mod console;
pub mod git;
pub mod zammad;
