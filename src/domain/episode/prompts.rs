use super::model::Card;

pub const SCRIPT_MAX_TOKENS: u32 = 2048;

pub const SCRIPT_SYSTEM_PROMPT: &str = r#"Generate a 3-5 minute conversational podcast script about the following concepts. Two speakers: a curious learner (LEARNER) and a knowledgeable friend (EXPERT).

Style: Casual, engaging, like two friends at a coffee shop.
Include: Real-world examples, analogies, "aha" moments.
End with: A thought-provoking question for the listener.

Format your response as a script with speaker labels. Each line should start with either LEARNER: or EXPERT: followed by their dialogue. Do not include stage directions or sound effects.

Example format:
LEARNER: Hey, I've been trying to understand this concept...
EXPERT: Oh, that's a great one! Let me break it down for you...

Keep each speaker turn to 1-3 sentences for natural conversation flow. Aim for roughly 20-30 exchanges total."#;

/// User turn listing the episode title and every card as a concept bullet
pub fn script_user_prompt(title: &str, cards: &[Card]) -> String {
    let concepts = cards
        .iter()
        .map(|card| format!("- {}: {}", card.question, card.answer))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Episode title: {}\n\nConcepts to cover:\n{}", title, concepts)
}
