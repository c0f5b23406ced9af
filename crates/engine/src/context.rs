use crate::decision::Decision;
use crate::error::{EngineError, Result};
use concierge_matcher::{MatchConfig, QuestionIndex};
use concierge_records::QARecord;
use concierge_router::RouteTable;

/// Questions the presenter offers proactively in its helper panel.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "Who are the bride and groom?",
    "When is the wedding?",
    "Where is the wedding?",
    "What time does the ceremony start?",
    "What time is the reception?",
    "How do I RSVP?",
    "What should I wear?",
    "Is there parking available?",
    "Can I bring children?",
    "What's the dress code?",
];

/// Questions the presenter suggests after an unanswered query.
pub const FALLBACK_QUESTIONS: &[&str] = &[
    "When is the wedding?",
    "Where is the ceremony?",
    "How do I RSVP?",
];

/// Context object owning the record snapshot, the built question index, and
/// the route table. Created not-ready; the caller installs the parsed feed
/// (or signals feed failure) exactly once, after which every `decide` call
/// is a pure read.
#[derive(Debug, Clone)]
pub struct Concierge {
    index: Option<QuestionIndex>,
    routes: RouteTable,
    config: MatchConfig,
}

impl Concierge {
    #[must_use]
    pub fn new(routes: RouteTable) -> Self {
        Self::with_config(routes, MatchConfig::default())
    }

    #[must_use]
    pub fn with_config(routes: RouteTable, config: MatchConfig) -> Self {
        Self {
            index: None,
            routes,
            config,
        }
    }

    /// Installs the parsed feed and builds the question index. The snapshot
    /// is replaced wholesale; records are never patched incrementally.
    pub fn install_records(&mut self, records: Vec<QARecord>) {
        log::info!("installing {} records", records.len());
        self.index = Some(QuestionIndex::build(records, self.config));
    }

    /// Marks the context ready with zero records after a feed failure.
    /// Degraded mode: fuzzy answers are unavailable, keyword routing still
    /// works.
    pub fn feed_failed(&mut self) {
        log::warn!("feed failed to load, answering in degraded mode");
        self.index = Some(QuestionIndex::build(Vec::new(), self.config));
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.index.as_ref().map_or(0, QuestionIndex::len)
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Decides on a response for one query.
    ///
    /// The fuzzy matcher and the keyword router run independently: the best
    /// fuzzy answer (if any) becomes the answer text, and a detected route
    /// is attached whether or not an answer was found. Stateless across
    /// calls. Before the feed is installed this returns `NotReady` so the
    /// caller can distinguish "still loading" from "no answer".
    pub fn decide(&self, query: &str) -> Result<Decision> {
        let index = self.index.as_ref().ok_or(EngineError::NotReady)?;

        let query = query.trim();
        if query.is_empty() {
            return Ok(Decision::unknown());
        }

        let answer_text = index
            .search(query)
            .into_iter()
            .next()
            .map(|best| {
                log::debug!(
                    "answered {query:?} from {:?} (score {:.3})",
                    best.record.question,
                    best.score
                );
                best.record.answer
            });

        let route = self.routes.route(query).cloned();
        let matched = answer_text.is_some() || route.is_some();

        Ok(Decision {
            answer_text,
            route,
            matched,
        })
    }
}
