pub mod demo;
pub mod roster;
pub mod shell;
