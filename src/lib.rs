// lib.rs

//! Integer calculator that records every operation it performs as a
//! `"a op b = result"` entry in a pluggable [`History`].

pub mod calculator;
pub mod config;
pub mod error;
pub mod history;
pub mod operation;

pub use calculator::Calculator;
pub use config::{CalculatorConfig, OverflowPolicy};
pub use error::{CalcError, CalcResult, ConfigError};
pub use history::{History, InMemoryHistory};
pub use operation::Operation;
