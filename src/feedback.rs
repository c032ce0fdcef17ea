// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Feedback requests and feedbacks: list assembly and filtering.
//!
//! Records arrive already loaded from the store, with the users behind each
//! uid resolved into [`UserRef`]s. Everything here is ordering and filtering
//! over those in-memory lists.
//!
//! User filters test the typed text against the case-insensitive keyword set
//! of a display name, so "parg" finds "Larisa Pargea" and so does
//! "pargea la".

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::matcher::KeywordQuery;

/// Shown instead of the author's name on anonymous feedback.
pub const ANONYMOUS_DISPLAY_NAME: &str = "Anonymous Feedbacker";

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("rating {rating} for {category} is outside {}..={}", MIN_RATING, MAX_RATING)]
    RatingOutOfRange { category: &'static str, rating: u8 },
    #[error("feedback needs at least one rating")]
    NoRatings,
    #[error("feedback request {0} is already answered")]
    AlreadyAnswered(String),
}

/// A user as resolved from a uid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub doc_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl UserRef {
    pub fn new(doc_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            display_name: Some(display_name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub doc_id: String,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
    pub created_by: String,
    pub requested_on: String,
    pub answered_by: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub project_uid: Option<String>,
}

impl FeedbackRequest {
    /// Answer the request: mark it completed and produce the feedback document.
    pub fn answer(&mut self, ratings: Vec<Rating>, created_at: i64) -> Result<Feedback, FeedbackError> {
        if self.completed {
            return Err(FeedbackError::AlreadyAnswered(self.doc_id.clone()));
        }
        let feedback = Feedback {
            doc_id: None,
            created_at,
            anonym: false,
            project_uid: self.project_uid.clone().unwrap_or_default(),
            answered_by: self.answered_by.clone(),
            requested_on: Some(self.requested_on.clone()),
            ratings,
        };
        feedback.validate()?;
        self.completed = true;
        Ok(feedback)
    }
}

/// A request with both users resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFeedbackRequest {
    #[serde(flatten)]
    pub request: FeedbackRequest,
    pub answered_by_full: UserRef,
    pub requested_on_full: UserRef,
}

/// Status filter offered above the request list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RequestStatusFilter {
    #[default]
    All,
    NotAnsweredYet,
    Answered,
}

impl RequestStatusFilter {
    pub const ALL: [RequestStatusFilter; 3] = [
        RequestStatusFilter::All,
        RequestStatusFilter::NotAnsweredYet,
        RequestStatusFilter::Answered,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RequestStatusFilter::All => "All",
            RequestStatusFilter::NotAnsweredYet => "Not Answered Yet",
            RequestStatusFilter::Answered => "Answered",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|filter| filter.label() == label)
    }

    pub fn accepts(self, request: &FeedbackRequest) -> bool {
        match self {
            RequestStatusFilter::All => true,
            RequestStatusFilter::NotAnsweredYet => !request.completed,
            RequestStatusFilter::Answered => request.completed,
        }
    }

    pub fn apply(self, requests: &[ResolvedFeedbackRequest]) -> Vec<&ResolvedFeedbackRequest> {
        requests.iter().filter(|r| self.accepts(&r.request)).collect()
    }
}

/// Union of the requests created by the current user and the other requests
/// visible to them. First occurrence of a `docId` wins; order is preserved.
pub fn merge_requests(
    created_by_me: Vec<FeedbackRequest>,
    others: Vec<FeedbackRequest>,
) -> Vec<FeedbackRequest> {
    let mut seen = HashSet::new();
    created_by_me
        .into_iter()
        .chain(others)
        .filter(|request| seen.insert(request.doc_id.clone()))
        .collect()
}

/// Newest first, then open requests before completed ones.
///
/// The second sort is stable, so recency order holds within each group.
pub fn sort_requests(requests: &mut [ResolvedFeedbackRequest]) {
    requests.sort_by(|x, y| y.request.created_at.cmp(&x.request.created_at));
    requests.sort_by_key(|r| r.request.completed);
}

/// Requests where the typed text matches the answerer or the requestee.
pub fn filter_requests_by_user<'a>(
    requests: &'a [ResolvedFeedbackRequest],
    input: &str,
) -> Vec<&'a ResolvedFeedbackRequest> {
    filter_requests_by_query(requests, &KeywordQuery::insensitive(input))
}

pub fn filter_requests_by_query<'a>(
    requests: &'a [ResolvedFeedbackRequest],
    query: &KeywordQuery,
) -> Vec<&'a ResolvedFeedbackRequest> {
    requests
        .iter()
        .filter(|r| {
            query.matches_name(r.answered_by_full.display_name.as_deref())
                || query.matches_name(r.requested_on_full.display_name.as_deref())
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackCategory {
    TechnicalSkills,
    SoftSkills,
    CommunicationSkills,
    Teamwork,
    Other,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 5] = [
        FeedbackCategory::TechnicalSkills,
        FeedbackCategory::SoftSkills,
        FeedbackCategory::CommunicationSkills,
        FeedbackCategory::Teamwork,
        FeedbackCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeedbackCategory::TechnicalSkills => "Technical Skills",
            FeedbackCategory::SoftSkills => "Soft Skills",
            FeedbackCategory::CommunicationSkills => "Communication Skills",
            FeedbackCategory::Teamwork => "Teamwork",
            FeedbackCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub category: FeedbackCategory,
    pub rating: u8,
    #[serde(default)]
    pub details: Option<String>,
}

impl Rating {
    pub fn new(category: FeedbackCategory, rating: u8) -> Self {
        Self {
            category,
            rating,
            details: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(default)]
    pub doc_id: Option<String>,
    pub created_at: i64,
    #[serde(default)]
    pub anonym: bool,
    #[serde(default)]
    pub project_uid: String,
    pub answered_by: String,
    #[serde(default)]
    pub requested_on: Option<String>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

impl Feedback {
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if self.ratings.is_empty() {
            return Err(FeedbackError::NoRatings);
        }
        for rating in &self.ratings {
            if !(MIN_RATING..=MAX_RATING).contains(&rating.rating) {
                return Err(FeedbackError::RatingOutOfRange {
                    category: rating.category.label(),
                    rating: rating.rating,
                });
            }
        }
        Ok(())
    }
}

/// Feedback received by the current user, with the author resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedFeedback {
    #[serde(flatten)]
    pub feedback: Feedback,
    pub answered_by_full: UserRef,
}

impl ReceivedFeedback {
    /// Attach the author, masking the name when the feedback is anonymous.
    pub fn resolve(feedback: Feedback, mut answered_by: UserRef) -> Self {
        if feedback.anonym {
            answered_by.display_name = Some(ANONYMOUS_DISPLAY_NAME.to_string());
        }
        Self {
            feedback,
            answered_by_full: answered_by,
        }
    }
}

/// Feedback sent by the current user, with the recipient resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentFeedback {
    #[serde(flatten)]
    pub feedback: Feedback,
    pub requested_on_full: UserRef,
}

pub fn filter_received_by_user<'a>(
    received: &'a [ReceivedFeedback],
    input: &str,
) -> Vec<&'a ReceivedFeedback> {
    let query = KeywordQuery::insensitive(input);
    received
        .iter()
        .filter(|f| query.matches_name(f.answered_by_full.display_name.as_deref()))
        .collect()
}

pub fn filter_sent_by_user<'a>(sent: &'a [SentFeedback], input: &str) -> Vec<&'a SentFeedback> {
    let query = KeywordQuery::insensitive(input);
    sent.iter()
        .filter(|f| query.matches_name(f.requested_on_full.display_name.as_deref()))
        .collect()
}

/// Newest first, as the received and sent lists are shown.
pub fn sort_feedbacks_newest_first(feedbacks: &mut [Feedback]) {
    feedbacks.sort_by(|x, y| y.created_at.cmp(&x.created_at));
}
