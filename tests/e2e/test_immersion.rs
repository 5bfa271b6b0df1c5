use crate::e2e::helpers;

use aretee_audio::domain::immersion::{ImmersionItem, WordTranslation};
use helpers::fakes::Reply;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_an_item_with_defaults(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/immersion/generate", &json!({}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let item: ImmersionItem = response.json().unwrap();
    assert_eq!(item.topic, "daily life");
    assert_eq!(item.difficulty_level, 5);
    assert_eq!(item.content_type, "dialogue");
    assert_eq!(item.language, "es");
    assert_eq!(item.region, None);
    assert_eq!(item.vocabulary.len(), 2);
    assert_eq!(
        item.audio_url,
        Some(format!("/audio/immersion_{}.mp3", item.id))
    );
    assert_eq!(ctx.tts.voices(), vec!["Mia".to_string()]);

    let body = response.body.as_ref().unwrap();
    assert!(body.get("audio_text").is_some());
    assert!(body.get("has_profanity").is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_regional_voice(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/immersion/generate",
            &json!({"content_type": "slang", "region": "Spain", "difficulty_level": 8}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(ctx.tts.voices(), vec!["Lucia".to_string()]);

    // Unknown region keeps the language default
    ctx.client
        .post(
            "/api/immersion/generate",
            &json!({"language": "pt", "region": "Angola"}),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    assert_eq!(ctx.tts.voices()[1], "Camila");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_item_when_synthesis_fails(ctx: &TestContext) {
    ctx.tts.set_failing(true);

    let response = ctx
        .client
        .post("/api/immersion/generate", &json!({"content_type": "news"}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["audio_url"], serde_json::Value::Null);

    let feed: Vec<ImmersionItem> = ctx
        .client
        .get("/api/immersion/feed")
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].audio_url, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_before_calling_generator(ctx: &TestContext) {
    for body in [
        json!({"content_type": "poetry"}),
        json!({"difficulty_level": 0}),
        json!({"difficulty_level": 11}),
    ] {
        ctx.client
            .post("/api/immersion/generate", &body)
            .await
            .unwrap()
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_code("validation_error");
    }

    assert_eq!(ctx.text.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_malformed_generator_output(ctx: &TestContext) {
    ctx.text
        .set_content(Reply::Text("Here you go: {\"text\": \"hola\"".to_string()));

    let response = ctx
        .client
        .post("/api/immersion/generate", &json!({}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_code("malformed_response");
    assert!(ctx.tts.voices().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clamp_batch_size(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/immersion/generate-batch?count=25", &json!({}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let items: Vec<ImmersionItem> = response.json().unwrap();
    assert_eq!(items.len(), 10);

    let empty = ctx
        .client
        .post("/api/immersion/generate-batch?count=0", &json!({}))
        .await
        .unwrap();
    empty.assert_status(StatusCode::OK);
    assert_eq!(empty.body, Some(json!([])));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_structured_error_for_bad_query(ctx: &TestContext) {
    for path in [
        "/api/immersion/generate-batch?count=-1",
        "/api/immersion/generate-batch?count=many",
    ] {
        ctx.client
            .post(path, &json!({}))
            .await
            .unwrap()
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_code("validation_error");
    }

    ctx.client
        .get("/api/immersion/feed?limit=-5")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_code("validation_error");

    assert_eq!(ctx.text.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_structured_error_for_wrong_field_type(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/immersion/translate", &json!({"word": 42}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_code("validation_error");
    assert_eq!(ctx.text.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_batch_to_five(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/immersion/generate-batch", &json!({"content_type": "overheard"}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Vec<ImmersionItem>>().unwrap().len(), 5);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_page_feed_newest_first(ctx: &TestContext) {
    for topic in ["food", "travel", "work"] {
        ctx.client
            .post("/api/immersion/generate", &json!({"topic": topic}))
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    let feed: Vec<ImmersionItem> = ctx
        .client
        .get("/api/immersion/feed?limit=2&offset=0")
        .await
        .unwrap()
        .json()
        .unwrap();
    let topics: Vec<&str> = feed.iter().map(|i| i.topic.as_str()).collect();
    assert_eq!(topics, vec!["work", "travel"]);

    let rest: Vec<ImmersionItem> = ctx
        .client
        .get("/api/immersion/feed?limit=2&offset=2")
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].topic, "food");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_translate_a_word(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/immersion/translate",
            &json!({"word": "mercado", "context": "Voy al mercado"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let translation: WordTranslation = response.json().unwrap();
    assert_eq!(translation.translation, "market");
    assert_eq!(translation.part_of_speech, "noun");

    // Second identical lookup is served from the cache
    ctx.client
        .post(
            "/api/immersion/translate",
            &json!({"word": "mercado", "context": "Voy al mercado"}),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    assert_eq!(ctx.text.calls(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_translation_word(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/immersion/translate", &json!({"word": ""}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_code("validation_error");
    assert_eq!(ctx.text.calls(), 0);
}
