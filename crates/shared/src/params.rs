use crate::config;

// ---------------------------------------------------------------------------
// Link parameters (inputs)
// ---------------------------------------------------------------------------

/// Measured or assumed characteristics of the radio link and the publisher.
///
/// Constructed once per invocation, validated, then consumed by
/// [`TuningParams::derive`]. Never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkParams {
    /// Publish rate (Hz).
    pub rate_hz: f64,
    /// Payload size of one sample (bytes).
    pub payload_bytes: u64,
    /// Usable link throughput (bytes/sec).
    pub throughput_bps: f64,
    /// Fraction of the link this flow may occupy, in (0, 1].
    /// Validated but not yet consumed by the formulas; reserved for a future
    /// link-budget term. Do not remove.
    pub utilization: f64,
}

impl Default for LinkParams {
    fn default() -> Self {
        Self {
            rate_hz: config::DEFAULT_RATE_HZ,
            payload_bytes: config::DEFAULT_PAYLOAD_BYTES,
            throughput_bps: config::DEFAULT_THROUGHPUT_BPS,
            utilization: config::DEFAULT_UTILIZATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("publish rate must be a positive number of Hz, got {0}")]
    Rate(f64),
    #[error("payload size must be a positive number of bytes, got {0}")]
    Payload(u64),
    #[error("link throughput must be a positive number of bytes/sec, got {0}")]
    Throughput(f64),
    #[error("link utilization must be in (0, 1], got {0}")]
    Utilization(f64),
}

impl LinkParams {
    /// Check every domain constraint. Rejects NaN/infinite values too, so the
    /// derivation below never divides by zero or produces nonsense.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.rate_hz.is_finite() || self.rate_hz <= 0.0 {
            return Err(ParamError::Rate(self.rate_hz));
        }
        if self.payload_bytes == 0 {
            return Err(ParamError::Payload(self.payload_bytes));
        }
        if !self.throughput_bps.is_finite() || self.throughput_bps <= 0.0 {
            return Err(ParamError::Throughput(self.throughput_bps));
        }
        if !self.utilization.is_finite() || self.utilization <= 0.0 || self.utilization > 1.0 {
            return Err(ParamError::Utilization(self.utilization));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tuning parameters (derived)
// ---------------------------------------------------------------------------

/// Derived tuning parameters consumed by the profile renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningParams {
    pub link: LinkParams,
    /// Writer heartbeat period (nanoseconds): half the publish interval, so a
    /// lost sample is retransmitted before the next one is produced.
    pub heartbeat_period_ns: u64,
    /// Bounded history size (samples): how many payloads the link can carry
    /// per second.
    pub history_depth: u64,
}

impl TuningParams {
    /// Validate the link parameters and derive the tuning values.
    /// Pure; no side effects.
    pub fn derive(link: LinkParams) -> Result<Self, ParamError> {
        link.validate()?;
        let heartbeat_period_ns =
            (config::NANOS_PER_SEC as f64 / (2.0 * link.rate_hz)).floor() as u64;
        let history_depth = (link.throughput_bps / link.payload_bytes as f64).floor() as u64;
        Ok(Self {
            link,
            heartbeat_period_ns,
            history_depth,
        })
    }

    /// Output file stem. Rate and throughput-in-millions are rounded to
    /// integers so the name is a deterministic function of the inputs.
    pub fn file_stem(&self, prefix: &str) -> String {
        format!(
            "{}_r{}_u{}_T{}",
            prefix,
            self.link.rate_hz.round() as u64,
            self.link.payload_bytes,
            (self.link.throughput_bps / 1e6).round() as u64,
        )
    }
}
