// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! User-facing records: profiles, credentials forms, peg evaluations and
//! fixed vocabularies.

pub mod credentials;
pub mod peg;
pub mod profile;
pub mod role;

pub use credentials::{is_valid_email, CredentialsError, CredentialsForm};
pub use peg::{PegCriterion, PegEvaluation};
pub use profile::{is_valid_phone_number, ProfileError, ProfileForm, UserProfile};
pub use role::{CareerLevel, ProjectDaysEvaluated, Role};
