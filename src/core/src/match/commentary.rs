use serde::Serialize;

/// Category of a transcript line, kept for downstream rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommentaryTag {
    /// Factual narration (goals, milestones, whistle events).
    Narration,
    /// Colour commentary on individual contests.
    Commentary,
    /// A team declaring its attacking intent for the turn.
    Declaration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentaryEntry {
    pub text: String,
    pub tag: CommentaryTag,
}

/// Ordered, append-only transcript of a match. Appending never fails.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentaryLog {
    entries: Vec<CommentaryEntry>,
}

impl CommentaryLog {
    pub fn new() -> Self {
        CommentaryLog::default()
    }

    pub fn append(&mut self, text: impl Into<String>, tag: CommentaryTag) {
        self.entries.push(CommentaryEntry {
            text: text.into(),
            tag,
        });
    }

    pub fn narration(&mut self, text: impl Into<String>) {
        self.append(text, CommentaryTag::Narration);
    }

    pub fn commentary(&mut self, text: impl Into<String>) {
        self.append(text, CommentaryTag::Commentary);
    }

    pub fn declaration(&mut self, text: impl Into<String>) {
        self.append(text, CommentaryTag::Declaration);
    }

    pub fn entries(&self) -> &[CommentaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<CommentaryEntry> {
        self.entries
    }
}
