//! Builds the publisher- and subscriber-side QoS profile documents and
//! writes them to disk.
//!
//! Both documents share the transport descriptor and participant sections;
//! only the endpoint section differs. The writer gets a reliable KEEP_ALL
//! history with an aggressive heartbeat; the reader gets matching resource
//! limits and automatic liveliness, and deliberately no history policy node.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config;
use crate::params::TuningParams;
use crate::xml::Element;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// DDS sentinel for an unbounded duration.
const DURATION_INFINITY: &str = "DURATION_INFINITY";

/// Duration node with the nanosecond total split into sec/nanosec fields.
fn duration_ns(name: &'static str, total_ns: u64) -> Element {
    Element::new(name)
        .child(Element::leaf("sec", total_ns / config::NANOS_PER_SEC))
        .child(Element::leaf("nanosec", total_ns % config::NANOS_PER_SEC))
}

fn duration_infinite(name: &'static str) -> Element {
    Element::new(name).child(Element::leaf("sec", DURATION_INFINITY))
}

fn transport_descriptors() -> Element {
    Element::new("transport_descriptors").child(
        Element::new("transport_descriptor")
            .child(Element::leaf("transport_id", config::TRANSPORT_ID))
            .child(Element::leaf("type", "UDPv4"))
            .child(Element::leaf("maxMessageSize", config::MAX_MESSAGE_SIZE)),
    )
}

fn participant() -> Element {
    Element::new("participant")
        .attr("profile_name", config::PARTICIPANT_PROFILE)
        .child(
            Element::new("rtps")
                .child(
                    Element::new("userTransports")
                        .child(Element::leaf("transport_id", config::TRANSPORT_ID)),
                )
                .child(Element::leaf("useBuiltinTransports", false)),
        )
}

fn resource_limits(tuning: &TuningParams) -> Element {
    Element::new("resourceLimitsQos")
        .child(Element::leaf("max_samples", tuning.history_depth))
        .child(Element::leaf("max_instances", config::MAX_INSTANCES))
        .child(Element::leaf(
            "max_samples_per_instance",
            tuning.history_depth,
        ))
}

/// Render the publisher-side document.
pub fn publisher_document(tuning: &TuningParams) -> String {
    Element::new("profiles")
        .child(transport_descriptors())
        .child(participant())
        .child(
            Element::new("data_writer")
                .attr("profile_name", config::WRITER_PROFILE)
                .child(
                    Element::new("topic")
                        .child(Element::new("historyQos").child(Element::leaf("kind", "KEEP_ALL")))
                        .child(resource_limits(tuning)),
                )
                .child(
                    Element::new("qos")
                        .child(
                            Element::new("reliability")
                                .child(Element::leaf("kind", "RELIABLE"))
                                .child(duration_ns(
                                    "max_blocking_time",
                                    config::MAX_BLOCKING_TIME_SEC * config::NANOS_PER_SEC,
                                )),
                        )
                        .child(Element::leaf("disable_heartbeat_piggyback", true)),
                )
                .child(
                    Element::new("times")
                        .child(duration_ns("heartbeatPeriod", tuning.heartbeat_period_ns))
                        .child(duration_ns("initialHeartbeatDelay", 0))
                        .child(duration_ns("nackResponseDelay", 0))
                        .child(duration_ns("nackSupressionDuration", 0)),
                ),
        )
        .to_document()
}

/// Render the subscriber-side document. No history node here: the reader
/// keeps the middleware default and only mirrors the writer's resource
/// limits.
pub fn subscriber_document(tuning: &TuningParams) -> String {
    Element::new("profiles")
        .child(transport_descriptors())
        .child(participant())
        .child(
            Element::new("data_reader")
                .attr("profile_name", config::READER_PROFILE)
                .child(Element::new("topic").child(resource_limits(tuning)))
                .child(
                    Element::new("qos").child(
                        Element::new("liveliness")
                            .child(Element::leaf("kind", "AUTOMATIC"))
                            .child(duration_infinite("lease_duration"))
                            .child(duration_infinite("announcement_period")),
                    ),
                )
                .child(
                    Element::new("times")
                        .child(duration_ns("initialAcknackDelay", 0))
                        .child(duration_ns("heartbeatResponseDelay", 0)),
                ),
        )
        .to_document()
}

/// Render both documents and write them under `out_dir`.
///
/// Returns the publisher and subscriber paths. Existing files are
/// overwritten. The two writes are not atomic: the publisher file may exist
/// when the subscriber write fails.
pub fn write_profiles(
    tuning: &TuningParams,
    out_dir: &Path,
    prefix: &str,
) -> Result<(PathBuf, PathBuf), ProfileError> {
    let stem = tuning.file_stem(prefix);
    let pub_path = out_dir.join(format!("{stem}_pub.xml"));
    let sub_path = out_dir.join(format!("{stem}_sub.xml"));
    write_doc(&pub_path, &publisher_document(tuning))?;
    write_doc(&sub_path, &subscriber_document(tuning))?;
    Ok((pub_path, sub_path))
}

fn write_doc(path: &Path, doc: &str) -> Result<(), ProfileError> {
    tracing::debug!("writing {}", path.display());
    fs::write(path, doc).map_err(|source| ProfileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::LinkParams;

    fn tuning() -> TuningParams {
        TuningParams::derive(LinkParams {
            rate_hz: 30.0,
            payload_bytes: 330_000,
            throughput_bps: 90_000_000.0,
            utilization: 0.5,
        })
        .unwrap()
    }

    #[test]
    fn publisher_keeps_all_history() {
        let doc = publisher_document(&tuning());
        assert!(doc.contains("<kind>KEEP_ALL</kind>"));
        assert!(doc.contains("<kind>RELIABLE</kind>"));
        assert!(doc.contains("<disable_heartbeat_piggyback>true</disable_heartbeat_piggyback>"));
    }

    #[test]
    fn subscriber_has_no_history_policy() {
        let doc = subscriber_document(&tuning());
        assert!(!doc.contains("historyQos"));
        assert!(doc.contains("<kind>AUTOMATIC</kind>"));
        assert!(doc.contains("<sec>DURATION_INFINITY</sec>"));
    }

    #[test]
    fn both_documents_cap_message_size_at_1472() {
        for doc in [publisher_document(&tuning()), subscriber_document(&tuning())] {
            assert!(doc.contains("<maxMessageSize>1472</maxMessageSize>"));
            assert!(doc.contains("<transport_id>udp_transport</transport_id>"));
            assert!(doc.contains("<useBuiltinTransports>false</useBuiltinTransports>"));
        }
    }

    #[test]
    fn resource_limits_carry_the_history_depth() {
        let doc = publisher_document(&tuning());
        assert!(doc.contains("<max_samples>272</max_samples>"));
        assert!(doc.contains("<max_samples_per_instance>272</max_samples_per_instance>"));
        assert!(doc.contains("<max_instances>10</max_instances>"));
        // Reader mirrors the writer's limits.
        assert!(subscriber_document(&tuning()).contains("<max_samples>272</max_samples>"));
    }

    #[test]
    fn heartbeat_period_splits_sec_and_nanosec() {
        // 30 Hz: under a second.
        let doc = publisher_document(&tuning());
        assert!(doc.contains("<heartbeatPeriod>"));
        assert!(doc.contains("<nanosec>16666666</nanosec>"));

        // 0.4 Hz: 1.25e9 ns spills into the sec field.
        let slow = TuningParams::derive(LinkParams {
            rate_hz: 0.4,
            ..LinkParams::default()
        })
        .unwrap();
        let doc = publisher_document(&slow);
        assert!(doc.contains("<sec>1</sec>"));
        assert!(doc.contains("<nanosec>250000000</nanosec>"));
    }
}
