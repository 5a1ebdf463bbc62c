use std::time::Duration;

/// Time spent "preparing" the file before the browser download starts.
pub const PREPARE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResumeVariant {
    #[default]
    Default,
    Card,
    Minimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-9 px-4 text-sm",
            ButtonSize::Md => "h-10 px-6 text-sm",
            ButtonSize::Lg => "h-12 px-8 text-base",
        }
    }

    pub fn icon_classes(&self) -> &'static str {
        match self {
            ButtonSize::Lg => "h-5 w-5",
            _ => "h-4 w-4",
        }
    }
}

pub fn aria_label(downloading: bool) -> &'static str {
    if downloading {
        "Downloading resume"
    } else {
        "Download my resume as PDF"
    }
}

pub fn button_text(downloading: bool) -> &'static str {
    if downloading {
        "Downloading..."
    } else {
        "Download resume"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes() {
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
        assert_eq!(ButtonSize::Sm.classes(), "h-9 px-4 text-sm");
        assert_eq!(ButtonSize::Lg.icon_classes(), "h-5 w-5");
        assert_eq!(ButtonSize::Md.icon_classes(), ButtonSize::Sm.icon_classes());
    }

    #[test]
    fn test_labels_follow_download_state() {
        assert_ne!(aria_label(true), aria_label(false));
        assert_eq!(button_text(true), "Downloading...");
    }
}
