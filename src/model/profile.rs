// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! User profiles and the profile form.
//!
//! Saving the form is where keyword sets are written: the display name is
//! indexed and stored as `keywordsArrayOfDisplayName` next to the profile.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::keywords::generate_keywords_with;
use crate::matcher::StoredKeywords;
use crate::model::role::{CareerLevel, Role};
use crate::types::{CaseMode, KeywordOptions, KeywordSet};
use crate::verify::{InvariantError, ValidatedKeywordSet};

static PHONE_NR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+)?[0-9]*$").expect("phone pattern is valid"));

/// Validation failure of the profile form, first failing field only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Name is required")]
    NameRequired,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Valid Phone Number is required")]
    PhoneInvalid,
    #[error("Career level is required")]
    CareerLevelRequired,
    #[error("SU Detail is required")]
    SuRequired,
    #[error("Fiscal year is required")]
    FiscalYearRequired,
}

pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NR_REGEX.is_match(value)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub display_name: String,
    pub phone_number: String,
    pub career_level: Option<CareerLevel>,
    #[serde(rename = "SU")]
    pub su: String,
    pub fiscal_year: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.display_name.trim().is_empty() {
            return Err(ProfileError::NameRequired);
        }
        if self.phone_number.is_empty() {
            return Err(ProfileError::PhoneRequired);
        }
        if !is_valid_phone_number(&self.phone_number) {
            return Err(ProfileError::PhoneInvalid);
        }
        if self.career_level.is_none() {
            return Err(ProfileError::CareerLevelRequired);
        }
        if self.su.trim().is_empty() {
            return Err(ProfileError::SuRequired);
        }
        if self.fiscal_year.trim().is_empty() {
            return Err(ProfileError::FiscalYearRequired);
        }
        Ok(())
    }
}

/// A user document as stored in the `users` collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub career_level: Option<CareerLevel>,
    #[serde(default, rename = "SU")]
    pub su: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_profile_completed: bool,
    #[serde(default)]
    pub keywords_array_of_display_name: Option<KeywordSet>,
}

impl UserProfile {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Validate `form`, copy it onto the profile and index the display name.
    ///
    /// The profile is left untouched when validation fails.
    pub fn apply_form(
        &mut self,
        form: ProfileForm,
        options: &KeywordOptions,
    ) -> Result<(), ProfileError> {
        form.validate()?;

        self.keywords_array_of_display_name = generate_keywords_with(&form.display_name, options);
        self.display_name = Some(form.display_name);
        self.phone_number = Some(form.phone_number);
        self.career_level = form.career_level;
        self.su = Some(form.su);
        self.fiscal_year = Some(form.fiscal_year);
        self.is_profile_completed = true;
        Ok(())
    }

    /// Recompute the stored keyword set from the current display name.
    ///
    /// Returns `true` if the stored set changed.
    pub fn reindex(&mut self, options: &KeywordOptions) -> bool {
        let keywords = self
            .display_name
            .as_deref()
            .and_then(|name| generate_keywords_with(name, options));
        let changed = keywords != self.keywords_array_of_display_name;
        self.keywords_array_of_display_name = keywords;
        changed
    }

    /// The form pre-filled from a completed profile, for editing.
    pub fn profile_form(&self) -> Option<ProfileForm> {
        if !self.is_profile_completed {
            return None;
        }
        Some(ProfileForm {
            display_name: self.display_name.clone().unwrap_or_default(),
            phone_number: self.phone_number.clone().unwrap_or_default(),
            career_level: self.career_level,
            su: self.su.clone().unwrap_or_default(),
            fiscal_year: self.fiscal_year.clone().unwrap_or_default(),
        })
    }

    /// The stored keyword set tagged with the case mode its contents show.
    ///
    /// The document does not record how the set was written, so the mode is
    /// read off the set: a valid, fully lower-case set reads the same under
    /// both modes and is tagged insensitive, anything else sensitive.
    pub fn stored_keywords(&self) -> Option<StoredKeywords> {
        let keywords = self.keywords_array_of_display_name.clone()?;
        match ValidatedKeywordSet::new(keywords.clone(), CaseMode::Insensitive) {
            Ok(validated) => Some(validated.into()),
            Err(_) => Some(StoredKeywords::new(CaseMode::Sensitive, keywords)),
        }
    }

    /// Check the stored keyword set, if any, against its invariants.
    pub fn validated_keywords(
        &self,
        options: &KeywordOptions,
    ) -> Option<Result<ValidatedKeywordSet, InvariantError>> {
        self.keywords_array_of_display_name
            .clone()
            .map(|keywords| ValidatedKeywordSet::new(keywords, options.case))
    }
}
