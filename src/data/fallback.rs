// ============================================================
// Layer 4 — Fallback Corpus
// ============================================================
// The built-in two-entry table used whenever the corpus file
// cannot be loaded, so the bot always has something to answer.

use crate::domain::qa_pair::QaPair;

/// The fallback question/answer table, in fixed order.
pub fn fallback_corpus() -> Vec<QaPair> {
    vec![
        QaPair::new("What is your return policy?", "30 days money back guarantee"),
        QaPair::new("How do I contact support?", "Email us at support@company.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_entries_are_usable() {
        let corpus = fallback_corpus();
        assert_eq!(corpus.len(), 2);
        assert!(corpus.iter().all(QaPair::is_usable));
    }
}
