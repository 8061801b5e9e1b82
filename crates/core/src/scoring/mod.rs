//! CRM scoring - fixed-weight single-layer perceptron.

mod scorer;

pub use scorer::CrmScorer;
