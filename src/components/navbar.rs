//! Fixed top navigation bar.
//!
//! Transparent while the page is near the top, opaque with a shadow once the
//! user has scrolled past the threshold. The style is recomputed on every
//! scroll event with no hysteresis.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

/// Visual state of the bar, a pure function of the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    Transparent,
    Opaque,
}

impl NavStyle {
    /// Offsets at exactly the threshold count as scrolled.
    pub fn from_scroll_offset(offset: f64) -> Self {
        if offset >= config::NAV_SCROLL_THRESHOLD {
            NavStyle::Opaque
        } else {
            NavStyle::Transparent
        }
    }
}

const NAV_ITEMS: [(&str, Route); 8] = [
    ("Home", Route::Home),
    ("Solutions", Route::Solutions),
    ("Industries", Route::Industries),
    ("Technology", Route::Technology),
    ("About", Route::About),
    ("Products", Route::Products),
    ("Resources", Route::Resources),
    ("Contact", Route::Contact),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    // Scroll listener with explicit lifecycle: registered on mount, removed
    // in the effect destructor. The initial call makes above-the-fold state
    // correct without waiting for a scroll event.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(offset) = win.scroll_y() {
                                    scrolled
                                        .set(NavStyle::from_scroll_offset(offset) == NavStyle::Opaque);
                                }
                            }
                        }
                    });
                    match window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => {
                            if let Ok(offset) = window.scroll_y() {
                                scrolled
                                    .set(NavStyle::from_scroll_offset(offset) == NavStyle::Opaque);
                            }
                            Box::new(move || {
                                if let Some(win) = web_sys::window() {
                                    let _ = win.remove_event_listener_with_callback(
                                        "scroll",
                                        callback.as_ref().unchecked_ref(),
                                    );
                                }
                            })
                        }
                        Err(_) => {
                            gloo_console::error!("Failed to register scroll listener");
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let nav_class = classes!("navbar", (*scrolled).then_some("navbar-scrolled"));

    html! {
        <nav class={nav_class}>
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="navbar-logo">
                    {"Bhrigu.tech"}
                </Link<Route>>
                <div class="navbar-links">
                    { for NAV_ITEMS.iter().map(|(name, route)| html! {
                        <Link<Route> to={route.clone()} classes="navbar-link">
                            {*name}
                        </Link<Route>>
                    }) }
                </div>
                <button class="navbar-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "\u{2715}" } else { "\u{2630}" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="navbar-mobile">
                            { for NAV_ITEMS.iter().map(|(name, route)| html! {
                                <span onclick={close_menu.clone()}>
                                    <Link<Route> to={route.clone()} classes="navbar-mobile-link">
                                        {*name}
                                    </Link<Route>>
                                </span>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>{NAVBAR_CSS}</style>
        </nav>
    }
}

const NAVBAR_CSS: &str = r#"
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: transparent;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .navbar-scrolled {
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(10px);
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
    }
    .navbar-inner {
        max-width: 80rem;
        margin: 0 auto;
        height: 4rem;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .navbar-logo {
        font-size: 1.5rem;
        font-weight: 700;
        background: linear-gradient(90deg, #2563eb, #9333ea);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .navbar-links {
        display: flex;
        gap: 0.5rem;
    }
    .navbar-link {
        padding: 0.5rem 0.75rem;
        border-radius: 0.375rem;
        font-size: 0.9rem;
        font-weight: 500;
        color: white;
        transition: color 0.3s ease;
    }
    .navbar-link:hover {
        color: #22d3ee;
    }
    .navbar-scrolled .navbar-link {
        color: #374151;
    }
    .navbar-scrolled .navbar-link:hover {
        color: #2563eb;
    }
    .navbar-toggle {
        display: none;
        background: none;
        border: none;
        font-size: 1.4rem;
        color: white;
        cursor: pointer;
    }
    .navbar-scrolled .navbar-toggle {
        color: #374151;
    }
    .navbar-mobile {
        display: flex;
        flex-direction: column;
        background: rgba(255, 255, 255, 0.97);
        backdrop-filter: blur(10px);
        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
        padding: 0.5rem 1rem 1rem;
    }
    .navbar-mobile-link {
        display: block;
        padding: 0.6rem 0.75rem;
        border-radius: 0.375rem;
        color: #374151;
        font-weight: 500;
    }
    .navbar-mobile-link:hover {
        color: #2563eb;
    }
    @media (max-width: 1024px) {
        .navbar-links {
            display: none;
        }
        .navbar-toggle {
            display: block;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_at_and_past_the_threshold() {
        assert_eq!(NavStyle::from_scroll_offset(50.0), NavStyle::Opaque);
        assert_eq!(NavStyle::from_scroll_offset(50.1), NavStyle::Opaque);
        assert_eq!(NavStyle::from_scroll_offset(5_000.0), NavStyle::Opaque);
    }

    #[test]
    fn transparent_below_the_threshold() {
        assert_eq!(NavStyle::from_scroll_offset(0.0), NavStyle::Transparent);
        assert_eq!(NavStyle::from_scroll_offset(49.9), NavStyle::Transparent);
    }

    #[test]
    fn style_is_a_pure_function_of_offset() {
        // No hysteresis: rapid toggling around the boundary is just the
        // function applied to each offset in turn.
        let offsets = [49.0, 51.0, 49.0, 50.0];
        let styles: Vec<NavStyle> = offsets.iter().map(|o| NavStyle::from_scroll_offset(*o)).collect();
        assert_eq!(
            styles,
            vec![
                NavStyle::Transparent,
                NavStyle::Opaque,
                NavStyle::Transparent,
                NavStyle::Opaque,
            ]
        );
    }
}
