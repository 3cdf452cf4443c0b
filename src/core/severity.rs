//! Severity definitions
//!
//! The numeric encoding is part of the public contract and never changes:
//! `DEBUG = 0 < INFO = 1 < WARN = 2 < ERROR = 3`.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    /// Also reachable through the `warning` entry points and the `WARNING` name
    #[serde(alias = "WARNING")]
    Warn = 2,
    Error = 3,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Decode a numeric rank, rejecting anything outside `0..=3`
    pub fn from_rank(rank: u8) -> Result<Self> {
        match rank {
            0 => Ok(Severity::Debug),
            1 => Ok(Severity::Info),
            2 => Ok(Severity::Warn),
            3 => Ok(Severity::Error),
            other => Err(LoggerError::invalid_argument(
                "level",
                format!("rank {} is out of range (expected 0..=3)", other),
            )),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Debug => Blue,
            Severity::Info => Green,
            Severity::Warn => Yellow,
            Severity::Error => Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            _ => Err(LoggerError::invalid_argument(
                "level",
                format!("unknown level name '{}'", s),
            )),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(rank: u8) -> Result<Self> {
        Severity::from_rank(rank)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity.rank()
    }
}
