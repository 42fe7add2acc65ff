// client/src/ui/mod.rs
pub mod cards;
pub mod hand;
pub mod prompt;
pub mod shared;
pub mod table;
pub mod theme;
pub(crate) mod ws;
