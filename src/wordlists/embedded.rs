//! Embedded dictionary sample
//!
//! Sample compiled into the binary at build time.

// Include generated sample from build script
include!(concat!(env!("OUT_DIR"), "/sample.rs"));
