use serde_json::{json, Value};

/// Four speaker turns plus lines the parser must drop
pub const SCRIPT: &str = "\
Intro music fades in
LEARNER: So what exactly is photosynthesis?

EXPERT: It's how plants turn light into sugar.
[laughs]
LEARNER: Like a solar panel?
EXPERT:    Pretty much, but it stores the energy chemically.
";

/// Speaker turns in SCRIPT, in order, as (polly voice, text)
pub const SCRIPT_TURNS: [(&str, &str); 4] = [
    ("Joanna", "So what exactly is photosynthesis?"),
    ("Matthew", "It's how plants turn light into sugar."),
    ("Joanna", "Like a solar panel?"),
    ("Matthew", "Pretty much, but it stores the energy chemically."),
];

pub fn immersion_content_json() -> String {
    json!({
        "text": "A: ¿Vamos al mercado?\nB: Sí, necesito tomates.",
        "translation": "A: Shall we go to the market?\nB: Yes, I need tomatoes.",
        "vocabulary": [
            {"word": "mercado", "meaning": "market", "difficulty": 2},
            {"word": "necesito", "meaning": "I need", "difficulty": 3}
        ],
        "audio_text": "¿Vamos al mercado? Sí, necesito tomates.",
        "has_profanity": false
    })
    .to_string()
}

pub fn translation_json() -> String {
    format!(
        "```json\n{}\n```",
        json!({
            "word": "mercado",
            "translation": "market",
            "part_of_speech": "noun",
            "example": "Voy al mercado los sábados."
        })
    )
}

pub fn episode_request() -> Value {
    json!({
        "title": "Photosynthesis",
        "cards": [
            {"question": "What do plants produce?", "answer": "Glucose and oxygen"},
            {"question": "Where does it happen?", "answer": "In the chloroplasts"}
        ]
    })
}
