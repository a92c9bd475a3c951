//! # lml-laws
//!
//! Law representation for LML: the `Law` trait, declarative predicate
//! specifications, and `LawSet` compilation with load-time validation.
//!
//! A law is a pure, total predicate over a candidate plus its supporting
//! material. Laws are either declared as data (`LawSpec` with a
//! `PredicateSpec`, loadable from YAML) and compiled, or written by hand
//! against the `Law` trait. Either way, `LawSet` construction is the single
//! moment of validation: malformed declarations, duplicate ids, reserved
//! ids, and non-total predicates are all rejected here, before any
//! candidate is processed.
//!
//! Every `LawSet` carries a content-derived [`LawSetVersion`]
//! (`lml_types::LawSetVersion`): verdicts and path certificates are bound
//! to the exact law set they were formed under.

pub mod context;
pub mod error;
pub mod law;
pub mod set;
pub mod spec;

pub use context::{Reference, SupportContext};
pub use error::LawSetError;
pub use law::Law;
pub use set::LawSet;
pub use spec::{CompiledLaw, LawSpec, PredicateSpec};
