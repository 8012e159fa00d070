mod qna_maker_client;

pub use qna_maker_client::QnaMakerClient;
