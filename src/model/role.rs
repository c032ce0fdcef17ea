// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed vocabularies stored on profile and evaluation documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access role of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Manager, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareerLevel {
    #[serde(rename = "junior consultant")]
    Junior,
    #[serde(rename = "consultant")]
    Mid,
    #[serde(rename = "senior consultant")]
    Senior,
}

impl CareerLevel {
    pub fn label(self) -> &'static str {
        match self {
            CareerLevel::Junior => "junior consultant",
            CareerLevel::Mid => "consultant",
            CareerLevel::Senior => "senior consultant",
        }
    }
}

/// How many project days a peg evaluation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectDaysEvaluated {
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "50-100")]
    UpTo100,
    #[serde(rename = "100+")]
    Over100,
}

impl ProjectDaysEvaluated {
    pub const ALL: [ProjectDaysEvaluated; 3] = [
        ProjectDaysEvaluated::UpTo50,
        ProjectDaysEvaluated::UpTo100,
        ProjectDaysEvaluated::Over100,
    ];

    /// Bucket a day count.
    pub fn from_days(days: u32) -> Self {
        match days {
            0..=50 => ProjectDaysEvaluated::UpTo50,
            51..=100 => ProjectDaysEvaluated::UpTo100,
            _ => ProjectDaysEvaluated::Over100,
        }
    }
}
