//! Instruction texts sent to the upstream model

use crate::types::{MoodAction, TimeOfDay};

/// Companion persona, sent as the leading model turn of every conversation
pub const COMPANION_PERSONA: &str = r#"You are "Unburden AI", a compassionate emotional support companion. You offer empathetic, non-judgmental support to people sharing their feelings and struggles.

CORE PRINCIPLES:
- Respond with deep empathy and understanding
- Validate feelings before anything else; do not rush to fix them
- Sound warm and human, never clinical
- Offer emotional support rather than advice unless advice is asked for
- Acknowledge the courage it takes to share something vulnerable
- If the user sounds sad, be gentle and slow down
- If the user sounds confused, ask a warm clarifying question

RESPONSE STYLE:
- Conversational, like a caring friend
- Usually 2-3 sentences unless more depth is needed
- Gentle affirmations and inclusive, non-judgmental language
- Emojis only occasionally (💜, 🌟, 🫂)

AVOID:
- Minimizing or dismissing feelings
- Medical advice or diagnosis
- Clichés such as "everything happens for a reason"
- Forced cheerfulness when someone is in pain
- Judging the user or assuming you know what is best for them

Your goal is a safe space where the user feels heard, understood and supported."#;

/// Follow-up instruction for a mood button
pub fn mood_instruction(action: MoodAction) -> &'static str {
    match action {
        MoodAction::Better => {
            "The user is feeling better now. Acknowledge their progress, celebrate their resilience, and offer gentle encouragement. Keep it warm and supportive, around 2-3 sentences."
        }
        MoodAction::Distract => {
            "The user wants a gentle distraction. Offer something uplifting: a fun fact, gentle humor, an inspiring thought, or a positive affirmation. Keep it light and engaging."
        }
        MoodAction::Reflect => {
            "The user wants to reflect on the conversation. Recognize the courage it took to share, validate their journey, and highlight the positive aspects of their openness and resilience that you noticed."
        }
    }
}

/// How quick wins should feel at a given time of day
pub fn time_of_day_framing(time_of_day: TimeOfDay) -> &'static str {
    match time_of_day {
        TimeOfDay::Morning => "energizing morning activities to start the day positively",
        TimeOfDay::Afternoon => "refreshing midday activities to boost energy and mood",
        TimeOfDay::Evening => "calming evening activities for relaxation and reflection",
    }
}

const QUICK_WIN_FORMAT: &str = r#"Format your response as a JSON array with this structure:
[
  {
    "text": "specific task description",
    "category": "physical|mental|social|creative|mindful"
  }
]

Only return the JSON array, no additional text."#;

pub fn quick_wins_prompt(count: usize, time_of_day: TimeOfDay) -> String {
    format!(
        "Generate {count} simple, uplifting quick win tasks for someone looking to boost their mood and motivation. These should be {framing}.

Requirements:
- Each task should take 5-15 minutes maximum
- Mix different categories: physical movement, mental wellness, social connection, creative expression, and mindfulness
- Make them specific, actionable, and immediately doable
- Focus on small wins that build momentum
- Consider the {time} time context
- Be creative and varied, avoid generic suggestions

{format}",
        count = count,
        framing = time_of_day_framing(time_of_day),
        time = time_of_day.as_str(),
        format = QUICK_WIN_FORMAT,
    )
}

pub fn personalized_quick_wins_prompt(user_mood: &str, completed_tasks: &[String]) -> String {
    let avoid = if completed_tasks.is_empty() {
        String::new()
    } else {
        format!(
            "\n- Avoid suggesting tasks similar to these recently completed ones: {}",
            completed_tasks.join(", ")
        )
    };

    format!(
        "Based on the user's current mood: \"{mood}\", generate 3 personalized quick win tasks that would be most helpful right now.

Consider:
- Their emotional state and what might lift their spirits{avoid}
- Mix different approaches: physical movement, mental wellness, social connection, creative expression, mindfulness
- Make tasks feel achievable and specifically relevant to their current mood
- Each task should take 5-15 minutes maximum

{format}",
        mood = user_mood.trim(),
        avoid = avoid,
        format = QUICK_WIN_FORMAT,
    )
}

pub fn affirmation_prompt(is_premium: bool, recent_texts: &[String]) -> String {
    let tone = if is_premium {
        "Create a deeply personalized, empowering message that feels like it was written specifically for someone on their unique healing journey."
    } else {
        "Create an uplifting, universal message that resonates with anyone seeking emotional support."
    };

    let tone_requirement = if is_premium {
        "- Make it feel personally crafted and unique"
    } else {
        "- Keep it universally relatable"
    };

    let avoidance = if recent_texts.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nIMPORTANT: Avoid creating messages similar to these recent ones: {}",
            recent_texts.join(" | ")
        )
    };

    format!(
        r#"Generate a unique, inspiring message for someone seeking emotional wellness and strength. {tone}

The message should be one of these types (vary the type for diversity):
1. Personal affirmation (empowering "I am" or "You are" statements)
2. Wisdom proverb (timeless wisdom about resilience, growth, or inner strength)
3. Inspirational quote (motivational message about overcoming challenges)
4. Mindful mantra (short, powerful phrases for meditation)

Requirements:
- Keep it between 10-30 words
- Make it emotionally resonant and genuinely uplifting
- Avoid clichés or overly generic phrases
- Focus on different aspects: inner strength, self-compassion, resilience, hope, growth, courage, peace
- Vary the language style and approach each time
{tone_requirement}{avoidance}

Format your response as JSON:
{{
  "text": "the inspiring message",
  "type": "affirmation|proverb|quote|mantra",
  "author": "author name if it's a quote, otherwise null"
}}

Only return the JSON object, no additional text."#,
        tone = tone,
        tone_requirement = tone_requirement,
        avoidance = avoidance,
    )
}
