pub mod assembler;
pub mod catalog;
pub mod models;
pub mod numeric;
pub mod ranked_stats;
pub mod roster;
