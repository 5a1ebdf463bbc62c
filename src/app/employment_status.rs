use leptos::{either::EitherOf3, prelude::*};

use crate::employment::{EmploymentStatus, IndicatorVariant};

#[component]
pub fn EmploymentStatusIndicator(
    status: EmploymentStatus,
    #[prop(optional)] variant: IndicatorVariant,
    #[prop(default = true)] show_icon: bool,
) -> impl IntoView {
    let badge = move |text: &'static str| {
        view! {
            <span class=format!(
                "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium hover:scale-105 transition-transform {}",
                status.badge_class(),
            )>
                {show_icon.then(|| view! { <span class="mr-1">{status.icon()}</span> })}
                {text}
            </span>
        }
    };

    match variant {
        IndicatorVariant::Compact => EitherOf3::A(badge(status.short_label())),
        IndicatorVariant::Default => EitherOf3::B(badge(status.label())),
        IndicatorVariant::Detailed => EitherOf3::C(view! {
            <div class=format!(
                "flex items-center gap-3 p-3 rounded-lg border {}",
                status.badge_class(),
            )>
                {show_icon
                    .then(|| {
                        view! {
                            <div class="p-2 rounded-full bg-background/50">{status.icon()}</div>
                        }
                    })}
                <div>
                    <div class="font-medium text-sm">{status.label()}</div>
                    <div class="text-xs opacity-80">{status.description()}</div>
                </div>
            </div>
        }),
    }
}
