use std::collections::VecDeque;

/// How many toasts stay on screen at once.
pub const NOTICE_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Destructive,
}

impl Severity {
    pub fn classes(&self) -> &'static str {
        match self {
            Severity::Info => "bg-background border-muted/40 text-foreground",
            Severity::Success => "bg-background border-green-500/40 text-foreground",
            Severity::Destructive => "bg-red-600 border-red-700 text-white",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Bounded queue of visible toasts, newest last.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    toasts: VecDeque<Toast>,
    next_id: u64,
    limit: usize,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::with_limit(NOTICE_LIMIT)
    }
}

impl NoticeBoard {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast { id, notice });
        while self.toasts.len() > self.limit {
            self.toasts.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(title: &str) -> Notice {
        Notice::new(title, "", Severity::Info)
    }

    #[test]
    fn test_oldest_dropped_past_limit() {
        let mut board = NoticeBoard::with_limit(2);
        board.push(notice("a"));
        board.push(notice("b"));
        board.push(notice("c"));
        let titles = board
            .toasts()
            .map(|t| t.notice.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut board = NoticeBoard::default();
        let a = board.push(notice("a"));
        let b = board.push(notice("b"));
        assert_ne!(a, b);
        assert!(board.dismiss(a));
        assert!(!board.dismiss(a));
        assert_eq!(board.len(), 1);
        assert!(board.dismiss(b));
        assert!(board.is_empty());
    }
}
