//! Status Tool
//!
//! Runtime status information about the nutricalc service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Runtime status of the nutricalc service
#[derive(Debug, Clone, Serialize)]
pub struct NutricalcStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Backend information
    pub backend_configured: bool,
    pub backend_url: Option<String>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    backend_url: Option<String>,
}

impl StatusTracker {
    pub fn new(backend_url: Option<String>) -> Self {
        Self {
            start_time: Instant::now(),
            backend_url,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> NutricalcStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutricalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            backend_configured: self.backend_url.is_some(),
            backend_url: self.backend_url.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
