// src/services/chatbot.rs
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

use super::validator::CleanMessage;

pub const GENERIC_REPLIES: [&str; 8] = [
    "Interessante! Me conte mais sobre isso.",
    "Entendo o que você está dizendo.",
    "Isso é muito legal! Continue...",
    "Hmm, deixe-me pensar sobre isso...",
    "Ótima pergunta! Aqui está o que penso:",
    "Posso ajudar você com isso!",
    "Isso me lembra de algo importante.",
    "Vamos explorar essa ideia juntos!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    WellBeing,
    Farewell,
    Help,
    Question,
    Unknown,
}

/// Checked in order; the first category with a matching keyword wins.
const KEYWORDS: [(Intent, &[&str]); 4] = [
    (Intent::Greeting, &["olá", "oi"]),
    (Intent::WellBeing, &["como vai"]),
    (Intent::Farewell, &["tchau", "adeus"]),
    (Intent::Help, &["ajuda"]),
];

pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| msg_lower.contains(w)))
        .map(|(intent, _)| *intent)
        .unwrap_or_else(|| {
            if msg.contains('?') {
                Intent::Question
            } else {
                Intent::Unknown
            }
        })
}

pub fn generate_reply<R: Rng + ?Sized>(msg: &str, rng: &mut R) -> String {
    use Intent::*;

    match detect_intent(msg) {
        Greeting => "Olá! Como posso ajudar você hoje? 😊".to_string(),
        WellBeing => "Estou muito bem, obrigado por perguntar! E você, como está?".to_string(),
        Farewell => "Até logo! Foi um prazer conversar com você! 👋".to_string(),
        Help => "Claro! Estou aqui para ajudar. O que você precisa?".to_string(),
        Question => format!(
            "Boa pergunta! Sobre \"{}\", eu diria que é um tópico interessante para explorarmos.",
            msg
        ),
        Unknown => GENERIC_REPLIES[rng.random_range(0..GENERIC_REPLIES.len())].to_string(),
    }
}

/// Bounds of the simulated thinking time, half-open `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min: Duration,
    pub max: Duration,
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(500),
            max: Duration::from_millis(1500),
        }
    }
}

impl DelayRange {
    pub fn fixed(delay: Duration) -> Self {
        Self { min: delay, max: delay }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let secs = rng.random_range(self.min.as_secs_f64()..self.max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyResult {
    pub reply: String,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct ReplyEngine {
    delay: DelayRange,
}

impl ReplyEngine {
    pub fn new(delay: DelayRange) -> Self {
        Self { delay }
    }

    /// Pick the reply and the delay up front so no RNG is held across the await.
    pub fn draw<R: Rng + ?Sized>(&self, msg: &CleanMessage, rng: &mut R) -> (String, Duration) {
        let delay = self.delay.sample(rng);
        let reply = generate_reply(msg.as_str(), rng);
        debug!(?delay, reply_chars = reply.chars().count(), "reply drawn");
        (reply, delay)
    }

    pub async fn respond(&self, msg: &CleanMessage) -> ReplyResult {
        let start = Instant::now();
        let drawn = self.draw(msg, &mut rand::rng());
        think(start, drawn).await
    }

    pub async fn respond_with<R: Rng + ?Sized>(&self, msg: &CleanMessage, rng: &mut R) -> ReplyResult {
        let start = Instant::now();
        let drawn = self.draw(msg, rng);
        think(start, drawn).await
    }
}

async fn think(start: Instant, (reply, delay): (String, Duration)) -> ReplyResult {
    tokio::time::sleep(delay).await;
    ReplyResult { reply, elapsed: start.elapsed() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validator::validate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn greeting_outranks_question() {
        assert_eq!(detect_intent("Oi, tudo certo?"), Intent::Greeting);
    }

    #[test]
    fn fixed_delay_ignores_rng() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = DelayRange::fixed(Duration::from_millis(20));
        assert_eq!(range.sample(&mut rng), Duration::from_millis(20));
    }

    #[test]
    fn default_delay_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = DelayRange::default();
        for _ in 0..100 {
            let d = range.sample(&mut rng);
            assert!(d >= range.min && d < range.max, "{:?}", d);
        }
    }

    #[test]
    fn draw_logs_delay_at_debug() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let engine = ReplyEngine::new(DelayRange::fixed(Duration::from_millis(5)));
        let msg = validate("Teste").unwrap();
        tracing::subscriber::with_default(subscriber, || {
            let _ = engine.draw(&msg, &mut StdRng::seed_from_u64(1));
        });

        let out = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("DEBUG"), "{out}");
        assert!(out.contains("reply drawn"), "{out}");
        assert!(out.contains("5ms"), "{out}");
    }
}
