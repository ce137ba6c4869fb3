// Analysis pipeline: PDF text extraction, skill detection, match scoring,
// and recommendation lookup. Data flows strictly forward; no stage holds
// state across requests.

pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod recommend;
pub mod scorer;
pub mod vocabulary;
