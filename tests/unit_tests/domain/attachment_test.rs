use speech_bot::domain::{Attachment, AttachmentDescriptor, TrustedHostPolicy, is_audio_content_type};

#[test]
fn given_wav_or_octet_stream_when_checking_content_type_then_it_is_audio() {
    assert!(is_audio_content_type("audio/wav"));
    assert!(is_audio_content_type("application/octet-stream"));
    assert!(is_audio_content_type("Audio/WAV; codecs=audio/pcm"));
}

#[test]
fn given_other_media_types_when_checking_content_type_then_it_is_not_audio() {
    assert!(!is_audio_content_type("audio/mpeg"));
    assert!(!is_audio_content_type("image/png"));
    assert!(!is_audio_content_type(""));
}

#[test]
fn given_default_policy_when_url_is_https_skype_subdomain_then_bearer_is_required() {
    let policy = TrustedHostPolicy::default();

    assert!(policy.requires_bearer_auth("https://apis.skype.com/v2/attachments/1/views/original"));
    assert!(policy.requires_bearer_auth("https://skype.com/file"));
}

#[test]
fn given_default_policy_when_scheme_is_plain_http_then_bearer_is_not_required() {
    let policy = TrustedHostPolicy::default();

    assert!(!policy.requires_bearer_auth("http://apis.skype.com/v2/attachments/1"));
}

#[test]
fn given_default_policy_when_host_only_ends_with_trusted_name_then_bearer_is_not_required() {
    let policy = TrustedHostPolicy::default();

    assert!(!policy.requires_bearer_auth("https://evilskype.com/file"));
    assert!(!policy.requires_bearer_auth("https://skype.com.example.org/file"));
}

#[test]
fn given_unparseable_url_when_checking_policy_then_bearer_is_not_required() {
    assert!(!TrustedHostPolicy::default().requires_bearer_auth("not a url"));
}

#[test]
fn given_custom_policy_when_fake_host_matches_then_bearer_is_required() {
    let policy = TrustedHostPolicy::new(["media.test", "127.0.0.1"], ["http", "https"]);

    assert!(policy.requires_bearer_auth("http://127.0.0.1:8080/audio.wav"));
    assert!(policy.requires_bearer_auth("https://cdn.MEDIA.test/audio.wav"));
    assert!(!policy.requires_bearer_auth("https://other.test/audio.wav"));
}

#[test]
fn given_attachment_with_url_when_describing_then_policy_decides_authentication() {
    let attachment = Attachment {
        content_type: "audio/wav".to_string(),
        content_url: Some("https://apis.skype.com/a.wav".to_string()),
        name: None,
    };

    let descriptor =
        AttachmentDescriptor::from_attachment(&attachment, &TrustedHostPolicy::default()).unwrap();

    assert_eq!(descriptor.content_url, "https://apis.skype.com/a.wav");
    assert_eq!(descriptor.declared_content_type, "audio/wav");
    assert!(descriptor.requires_bearer_auth);
}

#[test]
fn given_attachment_without_url_when_describing_then_returns_none() {
    let attachment = Attachment {
        content_type: "audio/wav".to_string(),
        content_url: None,
        name: Some("clip.wav".to_string()),
    };

    assert!(AttachmentDescriptor::from_attachment(&attachment, &TrustedHostPolicy::default()).is_none());
}
