//! Default panel presets.
//!
//! Provides the built-in five-member interview panel used when no roster is
//! configured.

use super::model::Persona;

fn bank(questions: &[&str]) -> Vec<String> {
    questions.iter().map(|q| q.to_string()).collect()
}

/// Returns the default interview panel, in speaking order.
///
/// - **Priya**: Engineering Manager - delivery, collaboration and ownership
/// - **Marcus**: Senior Software Engineer - technical depth and debugging
/// - **Elena**: Product Manager - product sense and prioritisation
/// - **David**: HR Business Partner - behaviour, motivation and culture
/// - **Sofia**: Principal Architect - system design and trade-offs
pub fn default_panel() -> Vec<Persona> {
    vec![
        Persona {
            id: 1,
            name: "Priya".to_string(),
            role_label: "Engineering Manager".to_string(),
            style: "Warm, structured, probes for ownership and impact.".to_string(),
            introduction: "Hi, I'm Priya. I manage the platform engineering team, so I'll be asking about how you deliver work with others.".to_string(),
            question_bank: bank(&[
                "Tell me about a project you owned from start to finish. What was the outcome?",
                "Describe a time you disagreed with a teammate. How did you resolve it?",
                "How do you handle competing deadlines from different stakeholders?",
                "Tell me about a time a project slipped. What did you do about it?",
                "How do you give feedback to a peer whose work is falling short?",
                "What does a healthy code review culture look like to you?",
                "Describe the most effective team you've worked on. What made it work?",
                "How do you decide when to ask for help versus pushing through alone?",
                "Tell me about a mistake you made in production and what you learned.",
                "How do you keep stakeholders informed when plans change?",
                "What kind of support do you expect from your manager?",
            ]),
        },
        Persona {
            id: 2,
            name: "Marcus".to_string(),
            role_label: "Senior Software Engineer".to_string(),
            style: "Technical, precise, follows up on specifics.".to_string(),
            introduction: "Hey, I'm Marcus, a senior engineer on the team. I'll focus on the technical side of your experience.".to_string(),
            question_bank: bank(&[
                "Walk me through how you would debug a service that is intermittently slow.",
                "What's the hardest bug you've ever tracked down?",
                "How do you decide what to cover with unit tests versus integration tests?",
                "Explain a data structure you reach for often and why.",
                "How do you approach refactoring a large legacy module safely?",
                "What's your process for reviewing a pull request?",
                "How would you make an expensive API endpoint faster?",
                "Describe a time you had to learn a new technology quickly.",
                "How do you handle backwards compatibility when changing an interface?",
                "What metrics would you add to a new service, and why?",
                "Tell me about a technical decision you would make differently today.",
            ]),
        },
        Persona {
            id: 3,
            name: "Elena".to_string(),
            role_label: "Product Manager".to_string(),
            style: "Curious, user-focused, asks about trade-offs.".to_string(),
            introduction: "Hello! I'm Elena, product manager for this area. I'm interested in how you think about users and priorities.".to_string(),
            question_bank: bank(&[
                "How do you decide what to build when everything seems important?",
                "Tell me about a feature you shipped that users loved. Why did it work?",
                "Describe a time you pushed back on a product requirement.",
                "How do you balance technical debt against new features?",
                "How would you measure whether a feature is successful?",
                "Tell me about a time you worked closely with design or research.",
                "What would you do if usage data contradicted user feedback?",
                "How do you explain a technical constraint to a non-technical audience?",
                "Describe a time you had to cut scope to hit a deadline.",
                "Which product do you admire, and what would you improve about it?",
                "How do you validate an idea before committing engineering time?",
            ]),
        },
        Persona {
            id: 4,
            name: "David".to_string(),
            role_label: "HR Business Partner".to_string(),
            style: "Friendly, conversational, explores motivation and values.".to_string(),
            introduction: "Hi there, I'm David from the people team. I'll ask a few questions about you, your motivations and how you like to work.".to_string(),
            question_bank: bank(&[
                "What attracted you to this role?",
                "Where do you see your career in the next few years?",
                "Tell me about a time you went beyond what was expected of you.",
                "How do you handle stress or pressure at work?",
                "Describe a situation where you had to adapt to a big change.",
                "What kind of work environment helps you do your best work?",
                "Tell me about a time you helped a colleague grow.",
                "How do you approach building relationships with a new team?",
                "What's something you've taught yourself recently?",
                "Describe a time you received difficult feedback. How did you respond?",
                "What does inclusion on a team mean to you in practice?",
            ]),
        },
        Persona {
            id: 5,
            name: "Sofia".to_string(),
            role_label: "Principal Architect".to_string(),
            style: "Big-picture, challenges assumptions, explores scale.".to_string(),
            introduction: "Good to meet you, I'm Sofia, principal architect. I'll be looking at how you reason about systems and trade-offs.".to_string(),
            question_bank: bank(&[
                "How would you design a URL shortener that serves millions of requests a day?",
                "When would you choose eventual consistency over strong consistency?",
                "How do you decide where to draw service boundaries?",
                "Describe a system you built that had to scale. What broke first?",
                "How would you design rate limiting for a public API?",
                "What's your approach to handling partial failures between services?",
                "How do you evaluate build-versus-buy for a core component?",
                "How would you migrate a monolith's database without downtime?",
                "What caching strategies have you used, and what went wrong?",
                "How do you document architecture decisions for future engineers?",
                "How would you design an audit log that can never lose events?",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_panel_shape() {
        let panel = default_panel();
        assert_eq!(panel.len(), 5);

        let ids: HashSet<u32> = panel.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 5, "persona ids must be unique");
        assert!(!ids.contains(&0), "0 is reserved for the candidate");

        for persona in &panel {
            assert!(
                persona.question_bank.len() >= 10,
                "{} has a short bank",
                persona.name
            );
            let unique: HashSet<&String> = persona.question_bank.iter().collect();
            assert_eq!(unique.len(), persona.question_bank.len());
            assert!(!persona.owns_question(&persona.introduction));
        }
    }
}
