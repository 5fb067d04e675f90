/// Stable identifier for a source document (shared by all candidates
/// derived from that document).
/// Example: `codeparrot::train::1042`
pub type DocumentId = String;
/// Identifier for the store that produced a batch of documents.
/// Examples: `fixtures`, `scraped_problems`
pub type StoreId = String;
/// Rendered sentence text: section display-tag, raw content, trailing
/// separator.
/// Example: `[ RETURN_STATEMENT ] return max(xs) . `
pub type Sentence = String;
/// Canonical section label name.
/// Examples: `question`, `if_statement`
pub type SectionName = String;
/// Raw label token as it appears on a candidate line, before synonym
/// resolution.
/// Examples: `if`, `expression`, `if_statement`
pub type RawLabel = String;
/// Integer id of a section label; assigned by vocabulary order.
pub type SectionId = usize;
