//! Prime Coherence Circuit Intermediate Representation
//!
//! The canonical circuit model every input format converts into and every
//! output target is generated from. A [`Circuit`] is a qubit count plus an
//! ordered list of [`Gate`]s; the order is both program order and scheduling
//! order.
//!
//! # Invariants
//!
//! - every gate operand lies in `[0, num_qubits)`;
//! - `h`, `cx` and `rz` carry exactly their arity of qubits and parameters;
//! - the gate list may be empty.
//!
//! All constructors enforce these, so downstream crates never re-check them.
//!
//! # Example
//!
//! ```rust
//! use coherence_ir::{Circuit, Gate, QubitId};
//!
//! let mut circuit = Circuit::with_qubits(2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_gates(), 2);
//! assert_eq!(circuit.gates()[0], Gate::H(QubitId(0)));
//!
//! // Out-of-range operands are rejected.
//! assert!(circuit.h(QubitId(2)).is_err());
//! ```
//!
//! # Wire shape
//!
//! `Circuit` serializes to the neutral JSON document
//! `{"num_qubits": 2, "gates": [{"name": "h", "qubits": [0], "params": []}]}`
//! and validates on deserialization.
//!
//! | Gate | Qubits | Params | Description |
//! |------|--------|--------|-------------|
//! | `h` | 1 | 0 | Hadamard gate |
//! | `cx` | 2 | 0 | CNOT, control first |
//! | `rz` | 1 | 1 | Z rotation, angle in radians |
//! | other | any | any | Opaque, carried verbatim |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod wire;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, OpaqueGate};
pub use qubit::QubitId;
pub use wire::{CircuitRecord, GateRecord};
