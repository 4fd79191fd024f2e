pub mod tags;
pub mod trade;

pub use tags::{Direction, Mood, Session, Setup, SetupQuality};
pub use trade::Trade;
