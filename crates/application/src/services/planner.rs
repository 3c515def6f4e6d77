//! Evidence planner
//!
//! Maps emotion tags to a persona and scripture hint through an ordered
//! first-match-wins rule table, plans web queries, and rates whether the
//! gathered evidence is sufficient.

use domain::{Citation, Persona, Plan, WebSnippet};
use tracing::debug;

/// One routing rule: trigger tags, persona, optional scripture hint
struct PersonaRule {
    triggers: &'static [&'static str],
    persona: Persona,
    work: Option<&'static str>,
}

/// Ordered rule table; the first rule whose triggers intersect the input
/// tags wins.
const PERSONA_RULES: &[PersonaRule] = &[
    PersonaRule {
        triggers: &["anxiety", "overthinking", "fear", "stress"],
        persona: Persona::Krishna,
        work: Some("Bhagavad Gita"),
    },
    PersonaRule {
        triggers: &["rational", "logic", "analysis", "question"],
        persona: Persona::Jiddu,
        work: None,
    },
    PersonaRule {
        triggers: &["breath", "meditation", "still", "yoga"],
        persona: Persona::Patanjali,
        work: Some("Yoga Sutra"),
    },
];

/// Result of the adequacy gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adequacy {
    /// Whether the current evidence is sufficient
    pub sufficient: bool,
    /// Human-readable reason
    pub reason: String,
}

/// Plans evidence sources and rates evidence sufficiency
///
/// All methods are pure; the rule table is small and static, so the
/// per-call cost is O(rules x tags).
#[derive(Debug, Clone, Copy, Default)]
pub struct EvidencePlanner;

impl EvidencePlanner {
    /// Create a planner
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Plan the evidence sources for a problem statement.
    ///
    /// Retrieval and generation are always planned; web search is reserved
    /// for explicit opt-in and excluded from the default plan.
    #[must_use]
    pub fn plan_sources(&self, _problem_text: &str, emotion_tags: &[String]) -> Plan {
        let tags: Vec<String> = emotion_tags.iter().map(|t| t.to_lowercase()).collect();

        let matched = PERSONA_RULES
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| tags.iter().any(|tag| tag == t)));

        let (persona, work) = matched
            .map_or((Persona::default(), None), |rule| (rule.persona, rule.work));

        debug!(persona = %persona, work = ?work, "Planned evidence sources");

        Plan::standard(persona, work.map(String::from))
    }

    /// Derive 1-2 web queries from the problem text and optional work hint
    #[must_use]
    pub fn plan_queries(&self, problem_text: &str, work_hint: Option<&str>) -> Vec<String> {
        work_hint.map_or_else(
            || {
                vec![
                    format!("Indian epic story that helps with: {problem_text}"),
                    format!("how to handle {problem_text} spiritual wisdom simple"),
                ]
            },
            |work| {
                vec![
                    format!("{work} story meaning for: {problem_text}"),
                    format!("{work} advice act without attachment simple explanation"),
                ]
            },
        )
    }

    /// Rate whether the evidence gathered so far is sufficient.
    ///
    /// Sufficiency is a binary gate: at least one grounded citation.
    #[must_use]
    pub fn adequacy_gate(
        &self,
        _problem_text: &str,
        citations: &[Citation],
        _web_snippets: &[WebSnippet],
    ) -> Adequacy {
        if citations.is_empty() {
            Adequacy {
                sufficient: false,
                reason: "No grounded citations; consider web search.".to_string(),
            }
        } else {
            Adequacy {
                sufficient: true,
                reason: "Retrieval had at least one grounded citation.".to_string(),
            }
        }
    }

    /// Resolve a chat persona from session context.
    ///
    /// Used when a client asks for automatic persona selection in a chat
    /// continuation: explicit style wins, then the last cited work, then
    /// the emotion tags.
    #[must_use]
    pub fn choose_persona(
        &self,
        emotion_tags: &[String],
        last_work: Option<&str>,
        guidance_style: Option<&str>,
    ) -> Persona {
        let tags: Vec<String> = emotion_tags.iter().map(|t| t.to_lowercase()).collect();
        let style = guidance_style.unwrap_or_default().to_lowercase();
        let work = last_work.unwrap_or_default().to_lowercase();

        if style == "rational" {
            return Persona::Jiddu;
        }
        if work.contains("gita") || work.contains("bhagavad") {
            return Persona::Krishna;
        }
        if style.contains("breath")
            || tags.iter().any(|t| t == "anxiety" || t == "overthinking")
        {
            return Persona::Patanjali;
        }
        Persona::Omniphilosopher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::EvidenceSource;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    mod plan_sources {
        use super::*;

        #[test]
        fn anxiety_maps_to_krishna() {
            let plan = EvidencePlanner::new().plan_sources("I worry a lot", &tags(&["anxiety"]));
            assert_eq!(plan.persona, Persona::Krishna);
            assert_eq!(plan.work_hint, Some("Bhagavad Gita".to_string()));
        }

        #[test]
        fn unmatched_tags_fall_back_to_default_persona() {
            let plan = EvidencePlanner::new().plan_sources("hello", &tags(&["joy"]));
            assert_eq!(plan.persona, Persona::Omniphilosopher);
            assert_eq!(plan.work_hint, None);
        }

        #[test]
        fn empty_tags_fall_back_to_default_persona() {
            let plan = EvidencePlanner::new().plan_sources("hello", &[]);
            assert_eq!(plan.persona, Persona::Omniphilosopher);
        }

        #[test]
        fn matching_is_case_insensitive() {
            let plan = EvidencePlanner::new().plan_sources("", &tags(&["ANXIETY"]));
            assert_eq!(plan.persona, Persona::Krishna);
        }

        #[test]
        fn first_matching_rule_wins() {
            // "fear" (rule 1) and "logic" (rule 2) both present
            let plan = EvidencePlanner::new().plan_sources("", &tags(&["logic", "fear"]));
            assert_eq!(plan.persona, Persona::Krishna);
        }

        #[test]
        fn breath_tags_map_to_patanjali() {
            let plan = EvidencePlanner::new().plan_sources("", &tags(&["meditation"]));
            assert_eq!(plan.persona, Persona::Patanjali);
            assert_eq!(plan.work_hint, Some("Yoga Sutra".to_string()));
        }

        #[test]
        fn default_plan_excludes_web_search() {
            let plan = EvidencePlanner::new().plan_sources("", &tags(&["anxiety"]));
            assert!(plan.includes(EvidenceSource::Retrieval));
            assert!(plan.includes(EvidenceSource::Generation));
            assert!(!plan.includes(EvidenceSource::WebSearch));
        }
    }

    mod plan_queries {
        use super::*;

        #[test]
        fn with_work_hint_produces_two_hinted_queries() {
            let queries =
                EvidencePlanner::new().plan_queries("exam stress", Some("Bhagavad Gita"));
            assert_eq!(queries.len(), 2);
            assert_eq!(queries[0], "Bhagavad Gita story meaning for: exam stress");
            assert!(queries[1].starts_with("Bhagavad Gita advice"));
        }

        #[test]
        fn without_hint_produces_generic_queries() {
            let queries = EvidencePlanner::new().plan_queries("exam stress", None);
            assert_eq!(queries.len(), 2);
            assert!(queries[0].contains("exam stress"));
            assert!(queries[1].contains("exam stress"));
        }
    }

    mod adequacy_gate {
        use super::*;

        #[test]
        fn sufficient_with_citations() {
            let gate = EvidencePlanner::new().adequacy_gate(
                "problem",
                &[Citation::new("Bhagavad Gita").with_reference("2.47")],
                &[],
            );
            assert!(gate.sufficient);
            assert!(gate.reason.contains("grounded"));
        }

        #[test]
        fn insufficient_without_citations() {
            let gate = EvidencePlanner::new().adequacy_gate("problem", &[], &[]);
            assert!(!gate.sufficient);
            assert!(gate.reason.contains("web search"));
        }
    }

    mod choose_persona {
        use super::*;

        #[test]
        fn rational_style_wins() {
            let persona = EvidencePlanner::new().choose_persona(
                &tags(&["anxiety"]),
                Some("Bhagavad Gita"),
                Some("rational"),
            );
            assert_eq!(persona, Persona::Jiddu);
        }

        #[test]
        fn gita_work_maps_to_krishna() {
            let persona =
                EvidencePlanner::new().choose_persona(&[], Some("Bhagavad Gita"), None);
            assert_eq!(persona, Persona::Krishna);
        }

        #[test]
        fn anxiety_tag_maps_to_patanjali() {
            let persona = EvidencePlanner::new().choose_persona(&tags(&["anxiety"]), None, None);
            assert_eq!(persona, Persona::Patanjali);
        }

        #[test]
        fn no_context_falls_back_to_default() {
            let persona = EvidencePlanner::new().choose_persona(&[], None, None);
            assert_eq!(persona, Persona::Omniphilosopher);
        }
    }
}
