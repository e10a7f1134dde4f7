// Library interface for vitalrs modules
// This allows the binary and integration tests to access the core functionality

#[cfg(feature = "charts")]
pub mod chart;
pub mod config;
pub mod cycles;
pub mod display;
pub mod error;
pub mod export;
pub mod group;
pub mod logging;
pub mod models;
pub mod recommendations;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use models::*;
pub use cycles::{compute_biorhythms, compute_biorhythms_as_of, BiorhythmData};
pub use group::{
    compute_group, compute_group_as_of, generate_group_recommendations, GroupBiorhythmData,
    PersonBiorhythm,
};
pub use state::{classify_state, BiorhythmState, CycleBand, CycleState, Trend};
pub use error::{Result, VitalError};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use store::PeopleStore;
