use std::sync::Arc;

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::viewport::{meets_reveal_amount, RevealLatch};

/// Answers "has enough of this section been scrolled into view yet?".
pub trait VisibilityProbe: Send + Sync {
    fn reveal(&self, target: NodeRef<html::Section>, amount: f64) -> Signal<bool>;
}

/// Probe backed by an `IntersectionObserver`, latched so animations only play once.
struct IntersectionProbe;

impl VisibilityProbe for IntersectionProbe {
    fn reveal(&self, target: NodeRef<html::Section>, amount: f64) -> Signal<bool> {
        let latch = RwSignal::new(RevealLatch::default());
        let observer = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                let seen = entries.iter().any(|entry| {
                    meets_reveal_amount(entry.is_intersecting(), entry.intersection_ratio(), amount)
                });
                if seen && !latch.with_untracked(RevealLatch::is_revealed) {
                    latch.update(|l| {
                        l.observe(true);
                    });
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![amount]),
        );

        // nothing left to watch once the section has been shown
        Effect::new(move |_| {
            if latch.with(RevealLatch::is_revealed) {
                (observer.stop)();
            }
        });

        Signal::derive(move || latch.with(RevealLatch::is_revealed))
    }
}

#[derive(Clone)]
pub struct Visibility(Arc<dyn VisibilityProbe>);

pub fn provide_visibility() {
    provide_context(Visibility(Arc::new(IntersectionProbe)));
}

/// Reveals once `amount` (0.0 to 1.0) of the section is on screen.
pub fn use_reveal(target: NodeRef<html::Section>, amount: f64) -> Signal<bool> {
    expect_context::<Visibility>().0.reveal(target, amount)
}
