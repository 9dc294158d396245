#![cfg(feature = "std")]
//! The resolution chain: overrides, then each probe in [`Source::PROBES`] order

#[cfg(feature = "logging")]
use log;

use crate::{Endian, Overrides, ResolveError, Source, Target};

/// An orientation together with the step which supplied it
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Host orientation
    pub endian: Endian,
    /// Which step answered
    pub source: Source,
}

/// Result of a successful run of the chain
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Orientation known
    Resolved(Resolution),
    /// Nothing answered and portable mode tolerates that
    Portable,
}

/// Verdict of one step, kept for diagnostics
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Step {
    /// The step
    pub source: Source,
    /// `None` when inconclusive
    pub verdict: Option<Endian>,
}

/// Runs the resolution chain against a [`Target`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolver {
    portable: bool,
    trace: Vec<Step>,
}

impl Resolver {
    /// New resolver with portable mode off
    pub fn new() -> Self {
        Self::default()
    }

    /// Tolerate failure to detect
    pub fn portable(mut self, portable: bool) -> Self {
        self.portable = portable;
        self
    }

    /// Every step attempted by the last call to [`Resolver::resolve`], in order
    pub fn trace(&self) -> &[Step] {
        &self.trace
    }

    fn record(&mut self, source: Source, verdict: Option<Endian>) {
        #[cfg(feature = "logging")]
        log::trace!("probe {source}: {verdict:?}");
        self.trace.push(Step { source, verdict });
    }

    /// Determine the orientation of `target`.
    ///
    /// Overrides are never replaced by detection. Otherwise the first conclusive
    /// probe wins and later probes are not attempted.
    pub fn resolve(&mut self, target: &Target) -> Result<Outcome, ResolveError> {
        self.trace.clear();

        let overrides = Overrides::parse(
            target.little_override.as_deref(),
            target.big_override.as_deref(),
        )?;
        if let Some(endian) = overrides.normalize()? {
            self.record(Source::Override, Some(endian));
            #[cfg(feature = "logging")]
            log::debug!("endianness forced to {endian}");
            return Ok(Outcome::Resolved(Resolution {
                endian,
                source: Source::Override,
            }));
        }

        for source in Source::PROBES {
            let verdict = target.probe(source);
            self.record(source, verdict);
            if let Some(endian) = verdict {
                #[cfg(feature = "logging")]
                log::debug!("endianness {endian} from {source}");
                return Ok(Outcome::Resolved(Resolution { endian, source }));
            }
        }

        if self.portable {
            #[cfg(feature = "logging")]
            log::debug!("endianness undetermined, using portable conversions");
            Ok(Outcome::Portable)
        } else {
            Err(ResolveError::Undetermined {
                target: target.triple.clone(),
            })
        }
    }
}
