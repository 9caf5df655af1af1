use std::collections::VecDeque;

/// Severity of a status notice shown above the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "ok",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

/// A one-line status notice (session created, reused, failed, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Error, message)
    }

    fn with_level(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// A bounded queue of notices waiting to be rendered.
/// When full, the oldest notice is dropped.
#[derive(Debug)]
pub struct NoticeQueue {
    items: VecDeque<Notice>,
    capacity: usize,
}

impl NoticeQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notice);
    }

    /// Removes and returns every pending notice, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.items.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_level() {
        assert_eq!(Notice::info("a").level, NoticeLevel::Info);
        assert_eq!(Notice::success("a").level, NoticeLevel::Success);
        assert_eq!(Notice::warning("a").level, NoticeLevel::Warning);
        assert_eq!(Notice::error("a").level, NoticeLevel::Error);
    }

    #[test]
    fn drain_returns_oldest_first_and_empties() {
        let mut q = NoticeQueue::new(4);
        q.push(Notice::info("first"));
        q.push(Notice::warning("second"));
        let drained = q.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].message, "second");
        assert!(q.is_empty());
    }

    #[test]
    fn full_queue_drops_oldest() {
        let mut q = NoticeQueue::new(2);
        q.push(Notice::info("1"));
        q.push(Notice::info("2"));
        q.push(Notice::info("3"));
        assert_eq!(q.len(), 2);
        let messages: Vec<_> = q.drain().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["2", "3"]);
    }

    #[test]
    fn zero_capacity_still_keeps_latest() {
        let mut q = NoticeQueue::new(0);
        q.push(Notice::error("boom"));
        assert_eq!(q.len(), 1);
    }
}
