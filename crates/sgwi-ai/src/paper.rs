//! The paper the assistant answers questions about.
//!
//! The assistant has no retrieval step: everything it may rely on is the
//! summary in [`PaperInfo::context`], folded into the system instruction of
//! every request.

/// Bibliographic data and the context summary handed to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperInfo {
    pub title: String,
    pub authors: String,
    pub doi_url: String,
    pub abstract_text: String,
    pub context: String,
}

impl PaperInfo {
    /// The multi-model Standardized Groundwater Index paper.
    pub fn sgwi() -> Self {
        Self {
            title: "Development of a Multi-Model Framework for Standardized Groundwater \
                    Index Computation"
                .into(),
            authors: "Asha Farsana M., Bharath Kumar Reddy Kadapala, et al.".into(),
            doi_url: "https://doi.org/10.1016/j.gsd.2025.101523".into(),
            abstract_text: "This study presents a novel methodology for monitoring groundwater \
drought using the Standardized Groundwater Index (SGWI). Overcoming the limitations of \
short-term data (16 years) in Andhra Pradesh and Telangana, we employ a multi-model approach \
utilizing Akaike Information Criterion corrected (AICc) to fit optimal probability \
distributions (Gamma, Pearson Type III, etc.). The resulting SGWI demonstrates high \
correlation with long-term indices like SRI and GRACE-DSI, offering a robust framework for \
data-scarce regions."
                .into(),
            context: "\
TITLE: Development of a multi-model framework for standardized groundwater index computation: \
Application to Andhra Pradesh and Telangana states.
AUTHORS: Asha Farsana M, Bharath Kumar Reddy Kadapala, Satya Geetha Vimala Channa, \
Abdul Hakeem K, Chandrasekar K.
JOURNAL: Groundwater for Sustainable Development 31 (2025).

KEY FINDINGS:
- Traditional single-model approaches (like SPI) fail when data isn't normally distributed.
- Shapiro-Wilk tests showed significant non-normality in AP/Telangana groundwater data.
- The Multi-Model approach uses AICc to weight Gamma, Pearson III, and Normal distributions.
- 2019 was identified as a severe drought year; 2021 as a wet year.
- SGWI correlates strongly (R\u{b2} > 0.74) with GRACE-DSI (satellite data) and SRI \
(Standardized Runoff Index)."
                .into(),
        }
    }

    /// System instruction sent with every question.
    pub fn system_instruction(&self) -> String {
        format!(
            "You are a specialized scientific research assistant for the paper titled \"{title}\".

CONTEXT OF THE PAPER:
{context}

YOUR ROLE:
1. Answer questions strictly based on the scientific content of the paper provided above.
2. If the answer is not in the context, explicitly state that the paper does not cover that \
aspect, but you can offer general scientific knowledge if requested.
3. Be concise, professional, and encouraging. Use scientific terminology where appropriate but \
explain complex concepts.
4. Format your response using Markdown.",
            title = self.title,
            context = self.context,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_embeds_title_and_findings() {
        let paper = PaperInfo::sgwi();
        let prompt = paper.system_instruction();
        assert!(prompt.contains(&format!("\"{}\"", paper.title)));
        assert!(prompt.contains("2019 was identified as a severe drought year"));
        assert!(prompt.contains("AICc to weight Gamma, Pearson III, and Normal"));
        assert!(prompt.contains("Format your response using Markdown."));
    }

    #[test]
    fn context_lists_all_authors() {
        let paper = PaperInfo::sgwi();
        for author in ["Asha Farsana M", "Satya Geetha Vimala Channa", "Chandrasekar K"] {
            assert!(paper.context.contains(author), "missing {author}");
        }
    }

    #[test]
    fn doi_is_a_resolver_url() {
        assert!(PaperInfo::sgwi().doi_url.starts_with("https://doi.org/10.1016/"));
    }
}
