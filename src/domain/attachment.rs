use url::Url;

use super::activity::Attachment;

const AUDIO_CONTENT_TYPES: [&str; 2] = ["audio/wav", "application/octet-stream"];

/// Whether a declared MIME type is one the bot treats as a wav clip.
///
/// Parameters such as `; codecs=audio/pcm` are ignored and the comparison is
/// ASCII case-insensitive.
pub fn is_audio_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();

    AUDIO_CONTENT_TYPES
        .iter()
        .any(|audio| essence.eq_ignore_ascii_case(audio))
}

/// A remote resource the bot has to download before it can use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentDescriptor {
    pub content_url: String,
    pub declared_content_type: String,
    pub requires_bearer_auth: bool,
}

impl AttachmentDescriptor {
    /// Describes an inbound attachment, or `None` when it has no content URL.
    pub fn from_attachment(attachment: &Attachment, policy: &TrustedHostPolicy) -> Option<Self> {
        let content_url = attachment.content_url.as_deref()?;
        Some(Self {
            content_url: content_url.to_string(),
            declared_content_type: attachment.content_type.clone(),
            requires_bearer_auth: policy.requires_bearer_auth(content_url),
        })
    }
}

/// Decides which attachment hosts must be given the bot's bearer token.
///
/// A URL qualifies when its scheme is allowed and its host is one of the
/// trusted domains or a subdomain of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedHostPolicy {
    domains: Vec<String>,
    schemes: Vec<String>,
}

impl TrustedHostPolicy {
    pub fn new<D, S>(domains: D, schemes: S) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().trim().trim_start_matches('.').to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            schemes: schemes
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn requires_bearer_auth(&self, content_url: &str) -> bool {
        let Ok(url) = Url::parse(content_url) else {
            return false;
        };

        if !self.schemes.iter().any(|scheme| scheme == url.scheme()) {
            return false;
        }

        let Some(host) = url.host_str().map(str::to_lowercase) else {
            return false;
        };

        self.domains.iter().any(|domain| {
            host == *domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

impl Default for TrustedHostPolicy {
    fn default() -> Self {
        Self::new(["skype.com"], ["https"])
    }
}
