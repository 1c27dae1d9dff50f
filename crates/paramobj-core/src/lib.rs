//! paramobj-core - Parameter object synthesis engine
//!
//! This crate turns the introspected shape of one function (a [`Signature`])
//! into the definition of an immutable "parameter object" type: one field per
//! parameter, an all-args constructor, accessors, and a codec to and from the
//! generic string-keyed [`Arguments`](https://docs.rs/paramobj) container.
//!
//! The pieces, leaves first:
//! - [`ParameterDescriptor`] / [`ParameterCollection`] - per-parameter code
//!   fragments and order-preserving batch operations over them
//! - [`resolve`] - maps a signature plus a [`NamingPolicy`] to the
//!   [`TypeIdentifier`] of the generated type
//! - [`TypeBuilder`] - assembles a complete [`GeneratedType`] definition
//! - [`container`] - the fragments shared by every generated codec
//!
//! Host integration lives around the engine: the `#[parameter_object]`
//! attribute macro (in `paramobj-macros`) for inline expansion, and the
//! [`Extractor`] + [`Processor`] pair for offline generation from build
//! scripts. Every synthesis is a pure function of its inputs; nothing is
//! retained across calls.

mod builder;
pub mod container;
mod descriptor;
mod error;
mod extractor;
mod processor;
mod resolver;
mod signature;
mod sink;

pub use builder::{GeneratedField, GeneratedType, TypeBuilder};
pub use descriptor::{ParameterCollection, ParameterDescriptor};
pub use error::{SynthesisError, SynthesisResult};
pub use extractor::{Extractor, ExtractorConfig};
pub use processor::{Processor, Reporter, SynthesisRequest, TracingReporter};
pub use resolver::{TypeIdentifier, resolve};
pub use signature::{NamingPolicy, Parameter, Signature};
pub use sink::{FsSink, GeneratedUnit, MemorySink, Sink};
