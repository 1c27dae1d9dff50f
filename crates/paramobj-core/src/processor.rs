//! Batch driver: one synthesis per request, collaborators injected, failures
//! reported per signature and never fatal to the batch.

use crate::builder::TypeBuilder;
use crate::descriptor::ParameterCollection;
use crate::error::SynthesisError;
use crate::resolver;
use crate::signature::{NamingPolicy, Signature};
use crate::sink::Sink;

/// One unit of work: a signature plus the naming policy attached to it.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub signature: Signature,
    pub policy: NamingPolicy,
}

impl SynthesisRequest {
    pub fn new(signature: Signature, policy: NamingPolicy) -> Self {
        Self { signature, policy }
    }
}

/// Receives per-signature synthesis failures.
pub trait Reporter {
    fn report(&mut self, error: &SynthesisError);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, error: &SynthesisError) {
        (**self).report(error)
    }
}

/// Default reporter: logs failures through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, error: &SynthesisError) {
        tracing::error!(%error, "parameter object synthesis failed");
    }
}

/// Drives synthesis for a batch of requests.
///
/// Holds no state between batches beyond its injected collaborators; every
/// request is processed independently, so an external driver may shard a
/// batch across threads with separate processors and no locking.
#[derive(Debug)]
pub struct Processor<S, R> {
    sink: S,
    reporter: R,
}

impl<S: Sink, R: Reporter> Processor<S, R> {
    pub fn new(sink: S, reporter: R) -> Self {
        Self { sink, reporter }
    }

    /// Synthesize and write one unit per request, in order. Returns the
    /// number of units written; failed requests are reported and skipped.
    pub fn process(&mut self, requests: &[SynthesisRequest]) -> usize {
        let mut written = 0;
        for request in requests {
            let identifier = resolver::resolve(&request.signature, &request.policy);
            let collection = ParameterCollection::from_signature(&request.signature);
            let generated = match TypeBuilder::new(identifier.clone(), collection).build() {
                Ok(generated) => generated,
                Err(error) => {
                    self.reporter.report(&error);
                    continue;
                }
            };
            let source = generated.render();
            match self.sink.write(identifier.package(), identifier.name(), &source) {
                Ok(()) => {
                    tracing::debug!(
                        package = identifier.package(),
                        name = identifier.name(),
                        fields = generated.fields().len(),
                        "generated parameter object"
                    );
                    written += 1;
                }
                Err(source) => {
                    self.reporter.report(&SynthesisError::Write {
                        type_name: identifier.name().to_string(),
                        source,
                    });
                }
            }
        }
        written
    }

    /// Consume the processor and hand back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
