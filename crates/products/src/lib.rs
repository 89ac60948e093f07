//! Products domain module: make-vs-buy sourcing strategy.
//!
//! Records which capabilities are developed in-house and which components are
//! bought from suppliers. Pure reference data plus the investment roll-up.

pub mod strategy;

pub use strategy::{
    parse_investment_millions, sourcing_strategy, total_make_investment, BuyDecision, MakeDecision,
    MakePriority, SourcingStrategy,
};
