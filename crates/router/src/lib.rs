use serde::{Deserialize, Serialize};

/// A keyword-to-page-section navigation hint. Compiled once at startup and
/// never mutated; several routes may point at the same section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRoute {
    pub route_id: String,
    pub keywords: Vec<String>,
    pub target_section: String,
    pub prompt_message: String,
}

impl KeywordRoute {
    pub fn new(
        route_id: impl Into<String>,
        keywords: &[&str],
        target_section: impl Into<String>,
        prompt_message: impl Into<String>,
    ) -> Self {
        Self {
            route_id: route_id.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            target_section: target_section.into(),
            prompt_message: prompt_message.into(),
        }
    }
}

/// Ordered route table. Routes are tested in registration order and the
/// first whose keyword list hits wins, so overlapping keyword sets resolve
/// deterministically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteTable {
    routes: Vec<KeywordRoute>,
}

impl RouteTable {
    #[must_use]
    pub fn new(routes: Vec<KeywordRoute>) -> Self {
        Self { routes }
    }

    /// Scans the query for the first route with a matching keyword phrase.
    ///
    /// Matching is case-insensitive raw substring containment, not
    /// word-boundary matching: a keyword hits anywhere inside the query,
    /// including inside longer words. Short keywords like "8 am" can
    /// over-match; that behavior is intentional and must not be tightened
    /// without product guidance.
    #[must_use]
    pub fn route(&self, query: &str) -> Option<&KeywordRoute> {
        let lowered = query.to_lowercase();
        let found = self.routes.iter().find(|route| {
            route
                .keywords
                .iter()
                .any(|keyword| lowered.contains(keyword.as_str()))
        });

        if let Some(route) = found {
            log::debug!("query routed to section {:?}", route.target_section);
        }
        found
    }

    #[must_use]
    pub fn routes(&self) -> &[KeywordRoute] {
        &self.routes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The navigation table of the original wedding page: route order,
    /// keyword lists (English and Indonesian), sections, and prompts.
    #[must_use]
    pub fn wedding_defaults() -> Self {
        Self::new(vec![
            KeywordRoute::new(
                "rsvp",
                &[
                    "rsvp",
                    "respond",
                    "confirmation",
                    "attend",
                    "attending",
                    "confirm attendance",
                    "reply",
                    "guest list",
                ],
                "rsvp",
                "I'll help you with RSVP! Here's the information about confirming your attendance.",
            ),
            KeywordRoute::new(
                "ceremony",
                &[
                    "ceremony",
                    "holy matrimony",
                    "church",
                    "gereja",
                    "santo fransiskus",
                    "fransiskus asisi",
                    "morning",
                    "8 am",
                    "pagi",
                    "nikah",
                ],
                "ceremony",
                "Here's information about the Holy Matrimony ceremony.",
            ),
            KeywordRoute::new(
                "reception",
                &[
                    "reception",
                    "party",
                    "celebration",
                    "bagas raya",
                    "11 am",
                    "siang",
                    "lunch",
                    "resepsi",
                ],
                "reception",
                "Here's information about the wedding reception.",
            ),
            KeywordRoute::new(
                "location",
                &[
                    "where", "location", "venue", "place", "address", "cibinong", "tempat",
                ],
                "venues",
                "Here are the wedding venue locations and details.",
            ),
            KeywordRoute::new(
                "timing",
                &[
                    "when", "time", "date", "schedule", "start", "begin", "hour", "day",
                    "january", "jam", "waktu",
                ],
                "venues",
                "Here are the wedding date and time details.",
            ),
            KeywordRoute::new(
                "maps",
                &[
                    "maps",
                    "direction",
                    "how to get",
                    "navigate",
                    "driving",
                    "location maps",
                    "google maps",
                    "arah",
                ],
                "venues",
                "Here are the Google Maps links for both wedding venues.",
            ),
            KeywordRoute::new(
                "countdown",
                &[
                    "countdown",
                    "how long",
                    "days left",
                    "time left",
                    "until wedding",
                    "berapa hari",
                ],
                "hero",
                "Let me show you the wedding countdown!",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keyword_substring_routes_case_insensitively() {
        let table = RouteTable::wedding_defaults();
        let route = table.route("How do I RSVP for two people?").unwrap();
        assert_eq!(route.route_id, "rsvp");
        assert_eq!(route.target_section, "rsvp");
    }

    #[test]
    fn first_registered_route_wins_on_overlap() {
        let table = RouteTable::new(vec![
            KeywordRoute::new("a", &["wedding"], "one", "first"),
            KeywordRoute::new("b", &["wedding", "party"], "two", "second"),
        ]);

        assert_eq!(table.route("wedding party!").unwrap().route_id, "a");
    }

    #[test]
    fn substring_matches_inside_longer_words() {
        // Deliberate over-matching: "attend" hits inside "unattended".
        let table = RouteTable::wedding_defaults();
        assert_eq!(table.route("my bag was unattended").unwrap().route_id, "rsvp");
    }

    #[test]
    fn no_keyword_means_no_route() {
        let table = RouteTable::wedding_defaults();
        assert!(table.route("completely unrelated gibberish xyz").is_none());
        assert!(table.route("").is_none());
    }

    #[test]
    fn keywords_are_lowercased_at_registration() {
        let table = RouteTable::new(vec![KeywordRoute::new("x", &["RSVP"], "s", "m")]);
        assert!(table.route("please rsvp soon").is_some());
    }

    #[test]
    fn indonesian_keywords_route_too() {
        let table = RouteTable::wedding_defaults();
        assert_eq!(table.route("di mana gereja?").unwrap().route_id, "ceremony");
        assert_eq!(table.route("berapa hari lagi?").unwrap().route_id, "countdown");
    }
}
