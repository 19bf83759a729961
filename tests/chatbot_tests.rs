use chatbot_api::services::chatbot::{
    DelayRange, GENERIC_REPLIES, Intent, ReplyEngine, detect_intent, generate_reply,
};
use chatbot_api::services::validator::validate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn test_detect_intent() {
    assert_eq!(detect_intent("Olá!"), Intent::Greeting);
    assert_eq!(detect_intent("OI"), Intent::Greeting);
    assert_eq!(detect_intent("Como vai você?"), Intent::WellBeing);
    assert_eq!(detect_intent("Tchau!"), Intent::Farewell);
    assert_eq!(detect_intent("adeus"), Intent::Farewell);
    assert_eq!(detect_intent("Preciso de AJUDA"), Intent::Help);
    assert_eq!(detect_intent("Qual é o seu nome?"), Intent::Question);
    assert_eq!(detect_intent("Teste"), Intent::Unknown);
}

#[test]
fn test_priority_order_wins_over_specificity() {
    // "ajuda" and "tchau" both present: farewell is checked first.
    assert_eq!(detect_intent("tchau, obrigado pela ajuda"), Intent::Farewell);
    // "oi" is a substring of "noite".
    assert_eq!(detect_intent("boa noite, como vai?"), Intent::Greeting);
}

#[test]
fn test_greeting_reply() {
    let reply = generate_reply("Olá!", &mut rng());
    assert!(reply.contains("Olá"));
    assert!(reply.contains("😊"));
}

#[test]
fn test_well_being_reply() {
    let reply = generate_reply("Como vai você?", &mut rng());
    assert!(reply.to_lowercase().contains("bem"));
}

#[test]
fn test_farewell_reply() {
    let reply = generate_reply("Tchau!", &mut rng()).to_lowercase();
    assert!(reply.contains("logo") || reply.contains("prazer"));
}

#[test]
fn test_help_reply() {
    let reply = generate_reply("Preciso de ajuda", &mut rng());
    assert!(reply.to_lowercase().contains("ajuda"));
}

#[test]
fn test_question_reply_quotes_message() {
    let reply = generate_reply("Qual é o seu nome?", &mut rng());
    let lower = reply.to_lowercase();
    assert!(lower.contains("pergunta") || lower.contains("tópico"));
    assert!(reply.contains("\"Qual é o seu nome?\""));
}

#[test]
fn test_fallback_comes_from_pool() {
    let mut rng = rng();
    for _ in 0..50 {
        let reply = generate_reply("Teste", &mut rng);
        assert!(GENERIC_REPLIES.contains(&reply.as_str()));
    }
}

#[test]
fn test_fallback_is_deterministic_for_a_seed() {
    let a: Vec<String> = {
        let mut rng = rng();
        (0..10).map(|_| generate_reply("Teste", &mut rng)).collect()
    };
    let b: Vec<String> = {
        let mut rng = rng();
        (0..10).map(|_| generate_reply("Teste", &mut rng)).collect()
    };
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_respond_reports_elapsed_delay() {
    let engine = ReplyEngine::new(DelayRange::fixed(Duration::from_millis(30)));
    let msg = validate("Teste").unwrap();

    let result = engine.respond_with(&msg, &mut rng()).await;
    assert!(!result.reply.is_empty());
    assert!(result.elapsed >= Duration::from_millis(30));
}

#[tokio::test]
async fn test_respond_does_not_block_concurrent_calls() {
    let engine = ReplyEngine::new(DelayRange::fixed(Duration::from_millis(200)));
    let msg = validate("Olá").unwrap();

    let start = Instant::now();
    let (a, b, c) = tokio::join!(
        engine.respond(&msg),
        engine.respond(&msg),
        engine.respond(&msg)
    );
    let total = start.elapsed();

    assert!(a.elapsed >= Duration::from_millis(200));
    assert!(b.elapsed >= Duration::from_millis(200));
    assert!(c.elapsed >= Duration::from_millis(200));
    assert!(total < Duration::from_millis(500), "took {:?}", total);
}
