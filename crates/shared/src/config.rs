// All fixed tuning and profile constants in one place.
// Grouped by subsystem for clarity.

// ── Transport ────────────────────────────────────────────────────────────

/// Max RTPS message size (bytes). Fits inside a single UDP datagram on a
/// 1500-byte Ethernet/Wi-Fi MTU, so packets never hit IP fragmentation.
/// Fixed; never derived from link parameters.
pub const MAX_MESSAGE_SIZE: u32 = 1472;
/// Identifier of the user-defined UDPv4 transport; the participant disables
/// the builtin transports and references this one instead.
pub const TRANSPORT_ID: &str = "udp_transport";

// ── Resource limits ──────────────────────────────────────────────────────

/// Max distinct instances tracked by a writer/reader history.
pub const MAX_INSTANCES: u64 = 10;

// ── Reliability ──────────────────────────────────────────────────────────

/// Max time (seconds) a reliable writer may block when its history is full.
/// Deliberately huge: on a lossy link we prefer blocking over dropping.
pub const MAX_BLOCKING_TIME_SEC: u64 = 1000;

// ── Link parameter defaults ──────────────────────────────────────────────

/// Default publish rate (Hz).
pub const DEFAULT_RATE_HZ: f64 = 10.0;
/// Default sample payload size (bytes).
pub const DEFAULT_PAYLOAD_BYTES: u64 = 100_000;
/// Default usable link throughput (bytes/sec).
pub const DEFAULT_THROUGHPUT_BPS: f64 = 1e8;
/// Default link utilization fraction.
pub const DEFAULT_UTILIZATION: f64 = 0.5;

// ── Profile naming ───────────────────────────────────────────────────────

pub const PARTICIPANT_PROFILE: &str = "wireless_participant";
pub const WRITER_PROFILE: &str = "wireless_writer";
pub const READER_PROFILE: &str = "wireless_reader";
/// Default output file-name prefix.
pub const DEFAULT_PREFIX: &str = "profile";

// ── Misc ─────────────────────────────────────────────────────────────────

pub const NANOS_PER_SEC: u64 = 1_000_000_000;
