//! Metrics and Scoring for Prime Coherence
//!
//! Pure functions that measure a [`Circuit`](coherence_ir::Circuit): layer
//! depth, gate counts, and a handful of heuristic quality scores. Backend
//! profiles override the scoring parameters field by field.
//!
//! # Metrics
//!
//! | Metric | Function | Range |
//! |--------|----------|-------|
//! | Depth | [`compute_depth`] | `0..` |
//! | Gate counts | [`gate_counts`] | per kind |
//! | Fidelity | [`estimated_fidelity`] | `[0, 1]` |
//! | E1 | [`e1`] | `(0, 1]` |
//! | Energy | [`energy`] | `0..` |
//! | QES | [`qes`] | `(0, 1]` |
//! | SWAP estimate | [`estimate_swaps`] | `0..` |
//!
//! # Example
//!
//! ```rust
//! use coherence_ir::Circuit;
//! use coherence_metrics::{Alert, BackendProfile, compute_all};
//!
//! let circuit = Circuit::bell().unwrap();
//! let profile = BackendProfile::from_yaml_str("two_qubit_error: 0.02").unwrap();
//!
//! let (metrics, alerts) = compute_all(&circuit, Some(&profile));
//! assert_eq!(metrics.depth, 2);
//! assert_eq!(alerts, vec![Alert::NoIssues]);
//! ```

mod alerts;
mod depth;
mod error;
mod profile;
mod report;
mod scores;

pub use alerts::{Alert, MAX_DEPTH, MAX_TWO_QUBIT_GATES, MIN_FIDELITY, MIN_QES, make_alerts};
pub use depth::compute_depth;
pub use error::{ProfileError, ProfileResult};
pub use profile::{BackendProfile, EnergyParams, FidelityParams};
pub use report::{CircuitMetrics, compute_all};
pub use scores::{e1, energy, estimate_swaps, estimated_fidelity, gate_counts, qes};
