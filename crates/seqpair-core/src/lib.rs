//! Sequence-pair representation and simulated-annealing rectangle
//! floorplanner core: evaluators, move generation and the SA drivers.

pub mod energy;
pub mod error;
pub mod eval;
pub mod layout;
pub mod move_gen;
pub mod net;
pub mod options;
pub mod sa;
pub mod scratch;
pub mod seqpair;

pub use energy::{AlphaEnergy, EnergyFunction};
pub use error::{Error, Result};
pub use eval::Method;
pub use layout::{FormatPolicy, Layout};
pub use move_gen::{ChangeDistribution, Move, MoveGenerator, MoveKind, UniformChangeDistribution};
pub use net::Net;
pub use options::Options;
pub use sa::{parallel, sequenced, Report};
pub use scratch::Scratch;
pub use seqpair::{match_permutation, SequencePair};
