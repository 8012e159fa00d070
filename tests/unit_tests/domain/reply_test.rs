use speech_bot::domain::{APOLOGY_TEXT, GREETING_TEXT, NO_AUDIO_TEXT, ReplyMessage};

#[test]
fn given_transcribed_text_when_formatting_reply_then_statistics_follow_the_echo() {
    let reply = ReplyMessage::transcription("Hello World");

    assert_eq!(
        reply.as_str(),
        "You said : Hello World.\n\nWord Count: 2\n\nCharacter Count: 10\n\nSpace Count: 1\n\nVowel Count: 3"
    );
}

#[test]
fn given_empty_transcription_when_formatting_reply_then_statistics_are_omitted() {
    assert_eq!(ReplyMessage::transcription("").as_str(), "You said : .");
}

#[test]
fn given_fixed_replies_when_created_then_texts_match_the_bot_script() {
    assert_eq!(ReplyMessage::greeting().as_str(), GREETING_TEXT);
    assert_eq!(ReplyMessage::no_audio().as_str(), NO_AUDIO_TEXT);
    assert_eq!(ReplyMessage::apology().as_str(), APOLOGY_TEXT);
    assert_eq!(APOLOGY_TEXT, "Oops! Something went wrong. Try again later.");
    assert!(NO_AUDIO_TEXT.starts_with("Did you upload an audio file?"));
    assert!(GREETING_TEXT.starts_with("Hi! I am SpeechToText Bot."));
}
