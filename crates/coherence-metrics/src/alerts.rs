//! Threshold alerts over a computed metrics bundle.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::report::CircuitMetrics;

/// Depth above which a circuit is flagged.
pub const MAX_DEPTH: usize = 100;
/// Fidelity below which a circuit is flagged.
pub const MIN_FIDELITY: f64 = 0.8;
/// QES below which a circuit is flagged.
pub const MIN_QES: f64 = 0.5;
/// `cx` count above which a circuit is flagged.
pub const MAX_TWO_QUBIT_GATES: usize = 50;

/// A human-readable warning about a circuit.
///
/// Serializes as its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Alert {
    /// Depth exceeds [`MAX_DEPTH`].
    HighDepth,
    /// Fidelity is under [`MIN_FIDELITY`].
    LowFidelity,
    /// QES is under [`MIN_QES`].
    LowQes,
    /// More than [`MAX_TWO_QUBIT_GATES`] `cx` gates.
    ManyTwoQubitGates,
    /// None of the thresholds were crossed.
    NoIssues,
}

impl Alert {
    /// Message shown to users.
    pub fn message(self) -> &'static str {
        match self {
            Alert::HighDepth => "Circuit depth is very high (>100)",
            Alert::LowFidelity => "Estimated fidelity is low (<80%)",
            Alert::LowQes => "Quantum efficiency score is low (<0.5)",
            Alert::ManyTwoQubitGates => "Many two-qubit gates detected (>50)",
            Alert::NoIssues => "No significant issues detected",
        }
    }

    /// Whether this alert reports a problem.
    pub fn is_issue(self) -> bool {
        self != Alert::NoIssues
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Alert {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Alerts for a metrics bundle, in a fixed order.
///
/// Never empty: when no threshold is crossed the single entry is
/// [`Alert::NoIssues`].
pub fn make_alerts(metrics: &CircuitMetrics) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if metrics.depth > MAX_DEPTH {
        alerts.push(Alert::HighDepth);
    }
    if metrics.fidelity < MIN_FIDELITY {
        alerts.push(Alert::LowFidelity);
    }
    if metrics.qes < MIN_QES {
        alerts.push(Alert::LowQes);
    }
    if metrics.gate_counts.get("cx").copied().unwrap_or(0) > MAX_TWO_QUBIT_GATES {
        alerts.push(Alert::ManyTwoQubitGates);
    }

    if alerts.is_empty() {
        alerts.push(Alert::NoIssues);
    }
    alerts
}
