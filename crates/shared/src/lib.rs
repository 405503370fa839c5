//! Shared core of qosgen: link-parameter math and QoS profile rendering.

pub mod config;
pub mod params;
pub mod profile;
pub mod xml;

pub use params::{LinkParams, ParamError, TuningParams};
pub use profile::{publisher_document, subscriber_document, write_profiles, ProfileError};
