//! Curated static content used when the upstream model is unavailable

use crate::types::{AffirmationKind, Category, MoodAction};

/// Generic chat reply
pub const CHAT_FALLBACK: &str = "I hear you, and I want you to know that sharing your feelings takes real courage. I'm here to support you through whatever you're experiencing. 💜";

/// Chat reply when the upstream could not be reached
pub const CHAT_CONNECTION_FALLBACK: &str = "I'm having trouble connecting right now, but I want you to know that I'm here for you. Your feelings are valid and important. 💜";

/// Chat reply when the upstream answered without usable text
pub const CHAT_LISTENING_FALLBACK: &str = "I'm listening and I care about what you're going through. Sometimes I need a moment to find the right words, but please know that your feelings matter deeply to me.";

pub const MOOD_BETTER_FALLBACK: &str = "I'm so glad you're feeling better! 🌟 You've shown incredible strength and resilience today. Take care of yourself, and remember - I'm always here whenever you need support.";

pub const MOOD_DISTRACT_FALLBACK: &str = "Here's something beautiful to think about: Every small step you take toward healing matters, even when you can't see the progress. You're doing better than you know. ✨";

pub const MOOD_REFLECT_FALLBACK: &str = "Looking at our conversation, I see someone who had the courage to reach out and be honest about their feelings. That vulnerability is actually a sign of tremendous strength. 💜";

pub fn mood_fallback(action: MoodAction) -> &'static str {
    match action {
        MoodAction::Better => MOOD_BETTER_FALLBACK,
        MoodAction::Distract => MOOD_DISTRACT_FALLBACK,
        MoodAction::Reflect => MOOD_REFLECT_FALLBACK,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickWinEntry {
    pub text: &'static str,
    pub category: Category,
}

const fn win(text: &'static str, category: Category) -> QuickWinEntry {
    QuickWinEntry { text, category }
}

pub const QUICK_WINS: &[QuickWinEntry] = &[
    win("Take 5 deep breaths and notice how your body feels", Category::Mindful),
    win("Write down one thing you accomplished today", Category::Mental),
    win("Do 10 gentle stretches or jumping jacks", Category::Physical),
    win("Send a kind message to someone you care about", Category::Social),
    win("Doodle or sketch something that makes you smile", Category::Creative),
    win("Organize one small area of your space", Category::Mental),
    win("Step outside and notice three beautiful things", Category::Mindful),
    win("Listen to your favorite uplifting song", Category::Mental),
    win("Write a thank you note to yourself", Category::Mental),
    win("Dance to one song that makes you happy", Category::Physical),
    win("Call a friend or family member just to say hi", Category::Social),
    win("Take photos of things that bring you joy", Category::Creative),
    win("Practice gratitude by listing 3 good things", Category::Mindful),
    win("Do a 5-minute meditation or breathing exercise", Category::Mindful),
    win("Write down a positive affirmation about yourself", Category::Mental),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffirmationEntry {
    pub text: &'static str,
    pub kind: AffirmationKind,
    pub author: Option<&'static str>,
}

const fn affirmation(
    text: &'static str,
    kind: AffirmationKind,
    author: Option<&'static str>,
) -> AffirmationEntry {
    AffirmationEntry { text, kind, author }
}

pub const AFFIRMATIONS: &[AffirmationEntry] = &[
    affirmation(
        "You are braver than you believe, stronger than you seem, and more loved than you'll ever know.",
        AffirmationKind::Affirmation,
        Some("A.A. Milne"),
    ),
    affirmation(
        "Your present circumstances don't determine where you can go; they merely determine where you start.",
        AffirmationKind::Quote,
        Some("Nido Qubein"),
    ),
    affirmation("Progress, not perfection, is the goal.", AffirmationKind::Mantra, None),
    affirmation(
        "Every small step forward is a victory worth celebrating.",
        AffirmationKind::Affirmation,
        None,
    ),
    affirmation(
        "You have been assigned this mountain to show others it can be moved.",
        AffirmationKind::Proverb,
        Some("Mel Robbins"),
    ),
    affirmation(
        "Your resilience is your superpower, even when you don't feel strong.",
        AffirmationKind::Affirmation,
        None,
    ),
    affirmation(
        "Healing takes time, and asking for help is a courageous step.",
        AffirmationKind::Quote,
        Some("Mariska Hargitay"),
    ),
    affirmation(
        "You are worthy of love and belonging exactly as you are.",
        AffirmationKind::Affirmation,
        Some("Brené Brown"),
    ),
    affirmation("Sometimes the bravest thing you can do is rest.", AffirmationKind::Proverb, None),
    affirmation("I am enough, I have enough, I do enough.", AffirmationKind::Mantra, None),
    affirmation(
        "Your journey is unique, and every step forward matters.",
        AffirmationKind::Affirmation,
        None,
    ),
    affirmation(
        "In this moment, you have everything you need to take the next right step.",
        AffirmationKind::Mantra,
        None,
    ),
    affirmation("Growth begins at the end of your comfort zone.", AffirmationKind::Proverb, None),
    affirmation("You are not broken. You are breaking through.", AffirmationKind::Affirmation, None),
    affirmation(
        "Peace comes from within. Do not seek it without.",
        AffirmationKind::Quote,
        Some("Buddha"),
    ),
    affirmation("I choose courage over comfort.", AffirmationKind::Mantra, None),
    affirmation(
        "Your sensitivity is a strength, not a weakness.",
        AffirmationKind::Affirmation,
        None,
    ),
    affirmation(
        "What lies behind us and what lies before us are tiny matters compared to what lies within us.",
        AffirmationKind::Quote,
        Some("Ralph Waldo Emerson"),
    ),
    affirmation("I am learning to trust my own journey.", AffirmationKind::Mantra, None),
    affirmation(
        "You don't have to be perfect to be worthy of love.",
        AffirmationKind::Affirmation,
        None,
    ),
];
