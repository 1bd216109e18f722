//! GitHub event type enum as the single source of truth for event type strings.

use std::fmt;
use std::str::FromStr;

/// Event types from the GitHub activity feed that folio cares about.
///
/// The feed carries many more types; those parse to [`UnknownEventType`] and
/// are treated as non-contributing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GithubEventType {
    Push,
    Create,
    Issues,
    PullRequest,
    IssueComment,
    PullRequestReview,
}

impl fmt::Display for GithubEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Push => "PushEvent",
            Self::Create => "CreateEvent",
            Self::Issues => "IssuesEvent",
            Self::PullRequest => "PullRequestEvent",
            Self::IssueComment => "IssueCommentEvent",
            Self::PullRequestReview => "PullRequestReviewEvent",
        };
        write!(f, "{s}")
    }
}

impl FromStr for GithubEventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PushEvent" => Ok(Self::Push),
            "CreateEvent" => Ok(Self::Create),
            "IssuesEvent" => Ok(Self::Issues),
            "PullRequestEvent" => Ok(Self::PullRequest),
            "IssueCommentEvent" => Ok(Self::IssueComment),
            "PullRequestReviewEvent" => Ok(Self::PullRequestReview),
            _ => Err(UnknownEventType(s.to_string())),
        }
    }
}

/// Error type for unrecognized event type strings.
#[derive(Debug, Clone)]
pub struct UnknownEventType(String);

impl fmt::Display for UnknownEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event type: {}", self.0)
    }
}

impl std::error::Error for UnknownEventType {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_variants() {
        let variants = [
            GithubEventType::Push,
            GithubEventType::Create,
            GithubEventType::Issues,
            GithubEventType::PullRequest,
            GithubEventType::IssueComment,
            GithubEventType::PullRequestReview,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed: GithubEventType = s.parse().expect("should parse");
            assert_eq!(parsed, *variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn unknown_type_errors() {
        let err = "WatchEvent".parse::<GithubEventType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown event type: WatchEvent");
    }
}
