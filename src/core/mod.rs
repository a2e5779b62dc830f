pub mod add;
pub mod calculator;
pub mod edit;
pub mod logic;
