//! Channel references and channel types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StepError;

/// Kind of sales channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    Website,
    Mobile,
    Pos,
}

impl ChannelType {
    pub const ALL: [ChannelType; 3] = [ChannelType::Website, ChannelType::Mobile, ChannelType::Pos];

    /// Value submitted by the type select box
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Website => "website",
            ChannelType::Mobile => "mobile",
            ChannelType::Pos => "pos",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChannelType::Website => "Website",
            ChannelType::Mobile => "Mobile",
            ChannelType::Pos => "Point of sale",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelType {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "website" => Ok(ChannelType::Website),
            "mobile" => Ok(ChannelType::Mobile),
            "pos" => Ok(ChannelType::Pos),
            other => Err(StepError::Assertion(format!(
                "unknown channel type \"{}\"",
                other
            ))),
        }
    }
}

/// A channel created by scenario setup, as seen through the admin screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: u64,
    pub code: String,
    pub name: String,
}
