#![allow(dead_code)]

use giftbot::GiftStore;
use reqwest::Client;
use teloxide::types::{CallbackQuery, Message};
use teloxide::Bot;
use wiremock::MockServer;

/// A bot pointed at a wiremock server instead of the real Bot API.
pub fn test_bot(server: &MockServer) -> Bot {
    let client = Client::builder().no_proxy().build().unwrap();
    Bot::with_client("TEST", client).set_api_url(reqwest::Url::parse(&server.uri()).unwrap())
}

pub fn temp_store() -> (GiftStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    (GiftStore::new(dir.path().join("gifts.json")), dir)
}

pub fn callback_query(user_id: u64, data: &str, message_id: i32) -> CallbackQuery {
    serde_json::from_str(&format!(
        r#"{{"id":"q1","from":{{"id":{user_id},"is_bot":false,"first_name":"U"}},"message":{{"message_id":{message_id},"date":0,"chat":{{"id":1,"type":"private"}}}},"chat_instance":"ci","data":"{data}"}}"#
    ))
    .unwrap()
}

pub fn text_message(user_id: u64, text: &str) -> Message {
    serde_json::from_str(&format!(
        r#"{{"message_id":1,"date":0,"chat":{{"id":1,"type":"private"}},"from":{{"id":{user_id},"is_bot":false,"first_name":"U"}},"text":{}}}"#,
        serde_json::to_string(text).unwrap()
    ))
    .unwrap()
}
