//! Scroll-triggered reveal wrapper used by every content section.
//!
//! Wraps a block of markup and plays a one-shot fade/slide-in the first time
//! the block intersects the viewport past a threshold. The observation is
//! retired after the first reveal, so leaving and re-entering the viewport
//! does nothing further.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be visible before the reveal fires.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Declarative animation settings consumed by the rendering layer.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealConfig {
    pub initial_opacity: f64,
    pub initial_offset_px: f64,
    pub duration_ms: u32,
    pub easing: &'static str,
    pub stagger_delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            initial_opacity: 0.0,
            initial_offset_px: 60.0,
            duration_ms: 800,
            easing: "ease-out",
            stagger_delay_ms: 100,
        }
    }
}

/// One-shot reveal flag for a single mounted section.
///
/// Once a qualifying intersection has been observed the state is latched and
/// every later observation is ignored, including after the owning component
/// retires its observer.
#[derive(Debug, Default)]
pub struct RevealState {
    entered: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Feed one intersection observation. Returns `true` exactly when this
    /// observation causes the false-to-true transition.
    pub fn observe(&mut self, intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if self.entered {
            return false;
        }
        if intersecting && ratio >= threshold {
            self.entered = true;
            return true;
        }
        false
    }

    /// Reveal unconditionally. Used when the observation primitive is not
    /// available: content must never stay hidden.
    pub fn force(&mut self) -> bool {
        if self.entered {
            return false;
        }
        self.entered = true;
        true
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub children: Children,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub config: RevealConfig,
    /// Position within a staggered group; multiplied by the config's
    /// per-child stagger delay.
    #[prop_or(0)]
    pub stagger_index: u32,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_state(|| false);
    let state = use_mut_ref(RevealState::new);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        let state = state.clone();
        let threshold = props.threshold;
        use_effect_with_deps(
            move |_| {
                let mut observer_handle: Option<IntersectionObserver> = None;
                let mut callback_handle: Option<
                    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
                > = None;

                match node_ref.cast::<web_sys::Element>() {
                    Some(element) => {
                        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                            let revealed = revealed.clone();
                            let state = state.clone();
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    if state.borrow_mut().observe(
                                        entry.is_intersecting(),
                                        entry.intersection_ratio(),
                                        threshold,
                                    ) {
                                        revealed.set(true);
                                        // Retire the observation; the reveal is one-shot.
                                        observer.disconnect();
                                        break;
                                    }
                                }
                            }
                        });
                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(threshold));
                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                // The observer delivers an initial record for
                                // elements already in the viewport, so
                                // above-the-fold sections reveal without any
                                // scroll event.
                                observer.observe(&element);
                                observer_handle = Some(observer);
                                callback_handle = Some(callback);
                            }
                            Err(_) => {
                                // Fail open: without the primitive the content
                                // renders fully visible immediately.
                                if state.borrow_mut().force() {
                                    revealed.set(true);
                                }
                            }
                        }
                    }
                    None => {
                        if state.borrow_mut().force() {
                            revealed.set(true);
                        }
                    }
                }

                move || {
                    if let Some(observer) = observer_handle.take() {
                        observer.disconnect();
                    }
                    drop(callback_handle.take());
                }
            },
            (),
        );
    }

    let config = &props.config;
    let delay_ms = props.stagger_index * config.stagger_delay_ms;
    let style = if *revealed {
        format!(
            "opacity: 1; transform: translateY(0); transition: opacity {d}ms {e} {w}ms, transform {d}ms {e} {w}ms;",
            d = config.duration_ms,
            e = config.easing,
            w = delay_ms,
        )
    } else {
        format!(
            "opacity: {}; transform: translateY({}px);",
            config.initial_opacity, config.initial_offset_px,
        )
    };

    html! {
        <div ref={node_ref} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_at_threshold() {
        let mut state = RevealState::new();
        assert!(!state.has_entered());
        assert!(!state.observe(true, 0.05, 0.1));
        assert!(state.observe(true, 0.1, 0.1));
        assert!(state.has_entered());
    }

    #[test]
    fn later_observations_are_ignored() {
        let mut state = RevealState::new();
        assert!(state.observe(true, 0.5, 0.1));
        // Element leaves and re-enters the viewport.
        assert!(!state.observe(false, 0.0, 0.1));
        assert!(!state.observe(true, 1.0, 0.1));
        assert!(state.has_entered());
    }

    #[test]
    fn mount_time_intersection_reveals_without_scroll() {
        // The observer's initial record for an above-the-fold element is an
        // ordinary observation; no scroll event is involved.
        let mut state = RevealState::new();
        assert!(state.observe(true, 1.0, DEFAULT_THRESHOLD));
    }

    #[test]
    fn non_intersecting_record_never_reveals() {
        let mut state = RevealState::new();
        assert!(!state.observe(false, 0.0, DEFAULT_THRESHOLD));
        assert!(!state.has_entered());
    }

    #[test]
    fn force_fails_open_exactly_once() {
        let mut state = RevealState::new();
        assert!(state.force());
        assert!(!state.force());
        assert!(state.has_entered());
    }

    #[test]
    fn default_config_is_fade_and_rise() {
        let config = RevealConfig::default();
        assert_eq!(config.initial_opacity, 0.0);
        assert_eq!(config.initial_offset_px, 60.0);
        assert_eq!(config.duration_ms, 800);
        assert_eq!(config.easing, "ease-out");
    }
}
