use std::fs;
use std::path::PathBuf;

use qosgen_shared::{publisher_document, subscriber_document, write_profiles};
use qosgen_shared::{LinkParams, ProfileError, TuningParams};

/// Fresh scratch directory, removed on drop.
struct Scratch(PathBuf);

impl Scratch {
    fn new(tag: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("qosgen-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        Scratch(dir)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn tuning() -> TuningParams {
    TuningParams::derive(LinkParams {
        rate_hz: 10.0,
        payload_bytes: 100_000,
        throughput_bps: 1e8,
        utilization: 0.5,
    })
    .unwrap()
}

#[test]
fn writes_both_profiles_with_deterministic_names() {
    let scratch = Scratch::new("names");
    let (pub_path, sub_path) = write_profiles(&tuning(), &scratch.0, "profile").unwrap();

    assert_eq!(
        pub_path.file_name().unwrap(),
        "profile_r10_u100000_T100_pub.xml"
    );
    assert_eq!(
        sub_path.file_name().unwrap(),
        "profile_r10_u100000_T100_sub.xml"
    );
    assert_eq!(fs::read_to_string(&pub_path).unwrap(), publisher_document(&tuning()));
    assert_eq!(fs::read_to_string(&sub_path).unwrap(), subscriber_document(&tuning()));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let scratch = Scratch::new("idempotent");
    let (pub_path, sub_path) = write_profiles(&tuning(), &scratch.0, "profile").unwrap();
    let first_pub = fs::read(&pub_path).unwrap();
    let first_sub = fs::read(&sub_path).unwrap();

    // Second run overwrites in place.
    let (pub_again, sub_again) = write_profiles(&tuning(), &scratch.0, "profile").unwrap();
    assert_eq!(pub_again, pub_path);
    assert_eq!(sub_again, sub_path);
    assert_eq!(fs::read(&pub_path).unwrap(), first_pub);
    assert_eq!(fs::read(&sub_path).unwrap(), first_sub);
}

#[test]
fn distinct_inputs_get_distinct_names() {
    let other = TuningParams::derive(LinkParams {
        rate_hz: 30.0,
        payload_bytes: 330_000,
        throughput_bps: 90_000_000.0,
        utilization: 0.5,
    })
    .unwrap();
    assert_ne!(tuning().file_stem("profile"), other.file_stem("profile"));
}

#[test]
fn unwritable_destination_names_the_failed_path() {
    let missing = std::env::temp_dir().join("qosgen-no-such-dir-here");
    let err = write_profiles(&tuning(), &missing, "profile").unwrap_err();
    match err {
        ProfileError::Write { path, .. } => {
            assert!(path.starts_with(&missing));
            assert!(path.to_string_lossy().ends_with("_pub.xml"));
        }
    }
}
