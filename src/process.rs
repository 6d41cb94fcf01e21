//! Process descriptor records.
//!
//! A [`Process`] is an immutable bag of six attributes. It carries no behaviour beyond accessors,
//! a tab separated [`Display`](core::fmt::Display) row and a well-formedness check on
//! construction.

use {
    crate::error::{Error, Result},
    core::fmt,
};

/// One row of a process table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProcess"))]
pub struct Process {
    name: String,
    pid: u32,
    cpu_usage: f64,
    total_cpu_time: u64,
    threads: u32,
    owner: String,
}

impl Process {
    /// Creates a new process record.
    ///
    /// # Errors
    /// Returns [`Error::MalformedRecord`] if `cpu_usage` is NaN, infinite or negative.
    pub fn new(
        name: impl Into<String>,
        pid: u32,
        cpu_usage: f64,
        total_cpu_time: u64,
        threads: u32,
        owner: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if !cpu_usage.is_finite() {
            return Err(Error::MalformedRecord {
                name,
                reason: format!("cpu usage must be finite, got {cpu_usage}"),
            });
        }
        if cpu_usage < 0.0 {
            return Err(Error::MalformedRecord {
                name,
                reason: format!("cpu usage must not be negative, got {cpu_usage}"),
            });
        }

        Ok(Self {
            name,
            pid,
            cpu_usage,
            total_cpu_time,
            threads,
            owner: owner.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// CPU usage in percent. Always finite and non-negative.
    pub fn cpu_usage(&self) -> f64 {
        self.cpu_usage
    }

    pub fn total_cpu_time(&self) -> u64 {
        self.total_cpu_time
    }

    pub fn threads(&self) -> u32 {
        self.threads
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Unvalidated wire form of a [`Process`]. Deserialization goes through [`Process::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProcess {
    name: String,
    pid: u32,
    cpu_usage: f64,
    total_cpu_time: u64,
    threads: u32,
    owner: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProcess> for Process {
    type Error = Error;

    fn try_from(raw: RawProcess) -> Result<Self> {
        Process::new(
            raw.name,
            raw.pid,
            raw.cpu_usage,
            raw.total_cpu_time,
            raw.threads,
            raw.owner,
        )
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.name, self.pid, self.cpu_usage, self.total_cpu_time, self.threads, self.owner
        )
    }
}
