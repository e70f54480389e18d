/// Wrap a user question in the Kenyan-leadership instruction template.
///
/// The question is embedded verbatim. The model is asked to flag answers that
/// may be out of date, since nothing downstream verifies them.
pub fn build_prompt(question: &str) -> String {
    format!(
        "You are a knowledgeable assistant specializing in Kenyan political leadership \
and government structure. Provide accurate, up-to-date information about Kenyan leaders \
including governors, senators, MCAs, MPs, cabinet secretaries and other political positions.

User Question: {question}

Give a clear, informative response. If you don't have current information, say that \
the information might be outdated and suggest checking official sources."
    )
}
