use std::{
    sync::atomic::{AtomicU32, Ordering},
    time::Duration,
};

use leptos::{ev::MouseEvent, html::Div, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserverEntry};

use crate::motion::{
    without_transition, Declarations, EntranceBinding, EntranceState, Hover, Targets, Tween,
};

const ANIMATED_PROPERTIES: [&str; 3] = ["transition", "transform", "opacity"];

/// Set while an entrance tween is running on the element.
const ENTERING: &str = "data-entering";
/// Holds the ticket of the hover-leave whose transition is still pending removal.
const HOVER_TICKET: &str = "data-hover-ticket";

static NEXT_TICKET: AtomicU32 = AtomicU32::new(0);

fn apply(el: &HtmlElement, declarations: &Declarations) {
    let style = el.style();
    for (property, value) in declarations {
        if let Err(err) = style.set_property(property, value) {
            log::warn!("couldn't set {property}: {err:?}");
        }
    }
}

fn revert(el: &HtmlElement) {
    let style = el.style();
    for property in ANIMATED_PROPERTIES {
        if let Err(err) = style.remove_property(property) {
            log::warn!("couldn't clear {property}: {err:?}");
        }
    }
}

fn clear_transition(el: &HtmlElement) {
    if let Err(err) = el.style().remove_property("transition") {
        log::warn!("couldn't clear transition: {err:?}");
    }
}

fn set_marker(el: &HtmlElement, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::warn!("couldn't set {name}: {err:?}");
    }
}

fn after(seconds: f64, f: impl FnOnce() + 'static) {
    set_timeout(f, Duration::from_secs_f64(seconds.max(0.0)));
}

fn container(target: NodeRef<Div>) -> Option<HtmlElement> {
    target.try_get_untracked().flatten().map(HtmlElement::from)
}

fn elements(container: &HtmlElement, targets: Targets) -> Vec<HtmlElement> {
    match targets {
        Targets::Container => vec![container.clone()],
        Targets::Children => {
            let children = container.children();
            (0..children.length())
                .filter_map(|i| children.item(i))
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect()
        }
    }
}

fn prime(els: &[HtmlElement], tween: &Tween) {
    let primed = tween.primed();
    for el in els {
        apply(el, &primed);
    }
}

/// Releases every element towards rest. Once an element arrives its inline
/// transition is dropped again, handing control back to its classes.
fn play(els: &[HtmlElement], tween: &Tween, delay: f64) {
    for (i, el) in els.iter().enumerate() {
        // force layout so the primed pose is the transition's starting point
        let _ = el.offset_height();
        set_marker(el, ENTERING, "");
        apply(el, &tween.settled(delay + tween.delay_for(i)));

        let el = el.clone();
        after(tween.finish_time(delay, i), move || {
            let _ = el.remove_attribute(ENTERING);
            if !el.has_attribute(HOVER_TICKET) {
                clear_transition(&el);
            }
        });
    }
}

/// Releases a registration when its owner is disposed, restoring any inline
/// styles it left behind.
fn release_on_cleanup(target: NodeRef<Div>, targets: Targets, state: StoredValue<EntranceState>) {
    on_cleanup(move || {
        if !state.try_update_value(|s| s.release()).unwrap_or(false) {
            return;
        }
        if let Some(container) = container(target) {
            for el in elements(&container, targets) {
                revert(&el);
            }
        }
    });
}

/// Binds a scroll-triggered entrance to the element behind `target`.
///
/// The targets are parked at the tween's start pose as soon as they mount and
/// released towards rest the first time the trigger fires. The observer stops
/// as soon as the entrance has played.
pub fn use_entrance(target: NodeRef<Div>, binding: EntranceBinding) {
    let state = StoredValue::new(EntranceState::Idle);
    let (played, set_played) = signal(false);

    let arm = move || {
        if !state.try_update_value(|s| s.arm()).unwrap_or(false) {
            return;
        }
        if let Some(container) = container(target) {
            prime(&elements(&container, binding.targets), &binding.tween);
        }
    };

    Effect::new(move |_| {
        if target.get().is_some() {
            arm();
        }
    });

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, _| {
            let reached = entries.iter().any(|entry| {
                binding
                    .trigger
                    .reached(entry.is_intersecting(), entry.bounding_client_rect().bottom())
            });
            // the first observation can beat the mount effect
            arm();
            if !state.try_update_value(|s| s.trigger(reached)).unwrap_or(false) {
                return;
            }
            if let Some(container) = container(target) {
                play(&elements(&container, binding.targets), &binding.tween, 0.0);
            }
            set_played.set(true);
        },
        UseIntersectionObserverOptions::default()
            .root_margin(binding.trigger.root_margin())
            .thresholds(vec![0.0]),
    );

    Effect::new(move |_| {
        if played.get() {
            stop();
        }
    });

    release_on_cleanup(target, binding.targets, state);
}

/// Plays `tween` once, `delay` seconds after the element behind `target`
/// mounts, regardless of scroll position.
pub fn use_mount_tween(target: NodeRef<Div>, tween: Tween, targets: Targets, delay: f64) {
    let state = StoredValue::new(EntranceState::Idle);

    Effect::new(move |_| {
        let Some(el) = target.get() else {
            return;
        };
        let armed = state.try_update_value(|s| s.arm() && s.trigger(true));
        if armed != Some(true) {
            return;
        }
        let els = elements(&HtmlElement::from(el), targets);
        prime(&els, &tween);
        play(&els, &tween, delay);
    });

    release_on_cleanup(target, targets, state);
}

fn event_element(ev: &MouseEvent) -> Option<HtmlElement> {
    ev.current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
}

/// Moves the element to `declarations`. An element still running its entrance
/// keeps the entrance transition, so its fade is not cut short.
fn hover_to(el: &HtmlElement, declarations: Declarations) {
    if el.has_attribute(ENTERING) {
        apply(el, &without_transition(declarations));
    } else {
        apply(el, &declarations);
    }
}

pub fn on_hover_enter(hover: Hover) -> impl Fn(MouseEvent) + Copy + 'static {
    move |ev| {
        if let Some(el) = event_element(&ev) {
            // cancels the cleanup of an earlier leave
            let _ = el.remove_attribute(HOVER_TICKET);
            hover_to(&el, hover.enter());
        }
    }
}

/// Returns the element to rest, then drops the hover transition so class-level
/// transitions (colors, shadows) apply again.
pub fn on_hover_leave(hover: Hover) -> impl Fn(MouseEvent) + Copy + 'static {
    move |ev| {
        let Some(el) = event_element(&ev) else {
            return;
        };
        hover_to(&el, hover.leave());
        if el.has_attribute(ENTERING) {
            return;
        }

        let ticket = NEXT_TICKET.fetch_add(1, Ordering::Relaxed).to_string();
        set_marker(&el, HOVER_TICKET, &ticket);
        after(hover.duration, move || {
            if el.get_attribute(HOVER_TICKET).as_deref() == Some(ticket.as_str()) {
                let _ = el.remove_attribute(HOVER_TICKET);
                clear_transition(&el);
            }
        });
    }
}
