use std::time::Duration;

use leptos::{html, prelude::*};

use crate::motion::{Preset, RevealStyle, RevealTrigger, Stagger, DEFAULT_THRESHOLD};

/// What moves a reveal from hidden to visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOn {
    /// First time the element scrolls into the viewport.
    View,
    /// As soon as the page is interactive.
    Mount,
}

/// Wraps its children in an element that fades in once, the first time it is revealed.
#[component]
pub fn Reveal(
    preset: Preset,
    #[prop(default = Duration::ZERO)] delay: Duration,
    #[prop(default = RevealOn::View)] on: RevealOn,
    #[prop(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let trigger = RwSignal::new(RevealTrigger::new(threshold));
    let node = NodeRef::<html::Div>::new();
    let style = RevealStyle::new(preset).delayed(delay).inline();

    arm(node, trigger, on);

    view! {
        <div node_ref=node class=class data-reveal=move || phase(trigger) style=style>
            {children()}
        </div>
    }
}

#[derive(Clone, Copy)]
struct StaggerContext {
    trigger: RwSignal<RevealTrigger>,
    stagger: Stagger,
}

/// A container whose [`StaggerItem`] children follow its reveal, each delayed by its index.
#[component]
pub fn StaggerGroup(
    stagger: Stagger,
    #[prop(default = RevealOn::Mount)] on: RevealOn,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let trigger = RwSignal::new(RevealTrigger::default());
    let node = NodeRef::<html::Div>::new();

    arm(node, trigger, on);
    provide_context(StaggerContext { trigger, stagger });

    view! {
        <div node_ref=node class=class>
            {children()}
        </div>
    }
}

#[component]
pub fn StaggerItem(
    index: usize,
    preset: Preset,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let StaggerContext { trigger, stagger } = expect_context::<StaggerContext>();
    let style = RevealStyle::new(preset)
        .delayed(stagger.delay_for(index))
        .inline();

    view! {
        <div class=class data-reveal=move || phase(trigger) style=style>
            {children()}
        </div>
    }
}

fn phase(trigger: RwSignal<RevealTrigger>) -> &'static str {
    trigger.with(|t| RevealStyle::phase(t.state(), t.motion()))
}

#[cfg(not(feature = "hydrate"))]
fn arm(_node: NodeRef<html::Div>, _trigger: RwSignal<RevealTrigger>, _on: RevealOn) {
    // server output stays in the pre-reveal state; the stylesheet only applies it
    // once the client has enabled the motion layer
}

#[cfg(feature = "hydrate")]
fn arm(node: NodeRef<html::Div>, trigger: RwSignal<RevealTrigger>, on: RevealOn) {
    match on {
        RevealOn::Mount => reveal_after_paint(trigger),
        RevealOn::View => reveal_in_view(node, trigger),
    }
}

#[cfg(feature = "hydrate")]
fn reveal_after_paint(trigger: RwSignal<RevealTrigger>) {
    Effect::new(move |_| {
        // one frame in the pre-reveal pose so the transition has somewhere to start
        request_animation_frame(move || {
            trigger.update(|t| {
                t.reveal_now();
            });
        });
    });
}

#[cfg(feature = "hydrate")]
fn reveal_in_view(node: NodeRef<html::Div>, trigger: RwSignal<RevealTrigger>) {
    use leptos_use::{
        use_intersection_observer_with_options, UseIntersectionObserverOptions,
        UseIntersectionObserverReturn,
    };

    use crate::motion::Intersection;

    let threshold = trigger.with_untracked(|t| t.threshold());
    let UseIntersectionObserverReturn {
        is_supported, stop, ..
    } = use_intersection_observer_with_options(
        node,
        move |entries, _| {
            for entry in entries {
                if !trigger.with_untracked(|t| t.is_observing()) {
                    return;
                }
                let seen = Intersection {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if trigger.try_update(|t| t.observe(seen)).unwrap_or(false) {
                    log::debug!("revealed section at ratio {:.2}", seen.ratio);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        let available = is_supported.get();
        if trigger.with_untracked(|t| t.is_observing())
            && trigger.try_update(|t| t.sync_host(available)).unwrap_or(false)
        {
            log::info!("IntersectionObserver unavailable, showing content without transitions");
        }
    });

    Effect::new(move |_| {
        if !trigger.with(|t| t.is_observing()) {
            stop();
        }
    });
}
