mod stats;

pub use stats::StatCards;
