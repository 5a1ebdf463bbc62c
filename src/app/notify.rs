use std::time::Duration;

use leptos::prelude::*;

use crate::notice::{Notice, NoticeBoard, Severity};

const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Handle to the toast surface, available to every section through context.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    board: RwSignal<NoticeBoard>,
}

impl Notifier {
    pub fn notify(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) {
        self.show(Notice::new(title, description, severity));
    }

    pub fn show(&self, notice: Notice) {
        let Some(id) = self.board.try_update(|b| b.push(notice)) else {
            return;
        };
        let board = self.board;
        set_timeout(
            move || {
                board.try_update(|b| b.dismiss(id));
            },
            TOAST_DURATION,
        );
    }

    fn dismiss(&self, id: u64) {
        self.board.update(|b| {
            b.dismiss(id);
        });
    }
}

pub fn provide_notifier() {
    provide_context(Notifier {
        board: RwSignal::new(NoticeBoard::default()),
    });
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    view! {
        <ol class="fixed bottom-0 right-0 z-[100] flex flex-col gap-2 p-4 w-full sm:max-w-[420px]">
            {move || {
                notifier
                    .board
                    .with(|b| b.toasts().cloned().collect::<Vec<_>>())
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <li
                                role="status"
                                class=format!(
                                    "relative rounded-md border p-4 pr-8 shadow-lg {}",
                                    toast.notice.severity.classes(),
                                )
                            >
                                <div class="text-sm font-semibold">{toast.notice.title}</div>
                                <div class="text-sm opacity-90">{toast.notice.description}</div>
                                <button
                                    class="absolute right-2 top-2 opacity-70 hover:opacity-100"
                                    aria-label="Close"
                                    on:click=move |_| notifier.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ol>
    }
}
