//! Built-in knowledge base preset.
//!
//! Provides the system-defined FAQ entries and fallback rules the assistant
//! ships with when no knowledge file is configured.

use super::model::{FallbackRule, KnowledgeBase, KnowledgeEntry};

/// Returned when no entry and no fallback rule matches the input.
pub const DEFAULT_ANSWER: &str = "That's an interesting question! While I don't have a specific answer for that, I'd be happy to discuss it in more detail. Feel free to use the contact form above or continue chatting!";

/// The bot message every fresh session opens with.
pub const GREETING: &str = "Hi! I'm your AI assistant. I can help answer questions about projects, technologies, or anything else you'd like to know. How can I help you today?";

/// Returns the built-in knowledge base.
///
/// Entry order matters: the matcher checks entries first, top to bottom,
/// then the fallback rules, top to bottom.
pub fn builtin() -> KnowledgeBase {
    KnowledgeBase {
        entries: builtin_entries(),
        fallbacks: builtin_fallbacks(),
        default_answer: DEFAULT_ANSWER.to_string(),
        greeting: GREETING.to_string(),
    }
}

fn builtin_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry {
            pattern: "What technologies do you specialize in?".to_string(),
            answer: "I specialize in modern web technologies including React, Next.js, TypeScript, Node.js, Python, and cloud platforms like AWS. I also have experience with AI/ML integration and mobile app development.".to_string(),
        },
        KnowledgeEntry {
            pattern: "How long does it take for you to complete a project?".to_string(),
            answer: "Project timelines vary depending on complexity and scope. Typically, small projects take 2-4 weeks, medium projects 1-3 months, and large enterprise applications 3-6 months. I'll provide a detailed timeline during our consultation.".to_string(),
        },
        KnowledgeEntry {
            pattern: "Do you work with international clients?".to_string(),
            answer: "Absolutely! I've worked with clients from all over the world including the US, Europe, Asia, and Australia. I adapt to different time zones and communication preferences.".to_string(),
        },
        KnowledgeEntry {
            pattern: "What's your development process like?".to_string(),
            answer: "I follow an agile development process with regular updates, code reviews, and testing. The process includes discovery, planning, development, testing, deployment, and maintenance phases.".to_string(),
        },
        KnowledgeEntry {
            pattern: "Do you provide ongoing support after project completion?".to_string(),
            answer: "Yes, I offer various support packages including bug fixes, feature updates, performance monitoring, and technical consultation. We can discuss specific support needs for your project.".to_string(),
        },
    ]
}

fn builtin_fallbacks() -> Vec<FallbackRule> {
    vec![
        FallbackRule {
            triggers: vec!["hello".to_string(), "hi".to_string()],
            answer: "Hello! I'm here to help you learn more about my services and experience. Feel free to ask me anything!".to_string(),
        },
        FallbackRule {
            triggers: vec!["project".to_string(), "work".to_string()],
            answer: "I'd love to discuss potential projects with you! You can also check out my portfolio section to see some of my recent work.".to_string(),
        },
        FallbackRule {
            triggers: vec!["contact".to_string(), "email".to_string()],
            answer: "You can reach me directly through the contact form above, or email me at contact@example.com. I typically respond within 24 hours!".to_string(),
        },
        FallbackRule {
            triggers: vec!["price".to_string(), "cost".to_string(), "rate".to_string()],
            answer: "Project costs depend on complexity, timeline, and specific requirements. I offer free consultations to discuss your needs and provide accurate quotes.".to_string(),
        },
    ]
}
