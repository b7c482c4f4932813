//! Rotating hero banner for the landing page.
//!
//! Cycles through a fixed set of promotional slides every eight seconds and
//! lets the user jump to a slide directly via the indicator dots. A manual
//! selection restarts the countdown, so the next automatic advance is always
//! a full interval after the last change.

use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

pub struct HeroStat {
    pub number: &'static str,
    pub label: &'static str,
}

pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub background: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
    pub stats: [HeroStat; 3],
}

/// The slide set is fixed at build time; nothing mutates it at runtime.
pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        title: "Engineering Intelligence.",
        subtitle: "Empowering Compliance.",
        description: "Redefining how regulated industries embrace Industry 4.0/5.0 \
            through intelligent, compliant, and future-ready platforms.",
        background: "https://images.pexels.com/photos/6075001/pexels-photo-6075001.jpeg",
        primary_action: "Explore Solutions",
        secondary_action: "Schedule Demo",
        stats: [
            HeroStat { number: "99.9%", label: "Uptime" },
            HeroStat { number: "50+", label: "Implementations" },
            HeroStat { number: "5", label: "Industries" },
        ],
    },
    HeroSlide {
        title: "AI-Powered Manufacturing",
        subtitle: "Predictive Excellence",
        description: "Harness the power of artificial intelligence for predictive \
            maintenance, quality control, and operational optimization.",
        background: "https://images.pexels.com/photos/8532850/pexels-photo-8532850.jpeg",
        primary_action: "View AI Solutions",
        secondary_action: "Watch Demo",
        stats: [
            HeroStat { number: "70%", label: "Efficiency Gain" },
            HeroStat { number: "85%", label: "Quality Improvement" },
            HeroStat { number: "60%", label: "Cost Reduction" },
        ],
    },
    HeroSlide {
        title: "Regulatory Compliance",
        subtitle: "Automated Excellence",
        description: "Streamline compliance with automated GxP protocols, audit \
            trails, and regulatory reporting systems.",
        background: "https://images.pexels.com/photos/7818237/pexels-photo-7818237.jpeg",
        primary_action: "Compliance Solutions",
        secondary_action: "Get Consultation",
        stats: [
            HeroStat { number: "100%", label: "FDA Compliant" },
            HeroStat { number: "24/7", label: "Monitoring" },
            HeroStat { number: "Zero", label: "Audit Failures" },
        ],
    },
];

/// Index state machine behind the carousel: states are `0..len`, the timer
/// advances modulo `len`, and a manual selection jumps directly. There is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroRotation {
    active: usize,
    len: usize,
}

impl HeroRotation {
    /// `len` must be at least 1; the slide set is non-empty by construction.
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 1);
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Timer transition: `active -> (active + 1) mod len`.
    pub fn advance(&mut self) -> usize {
        self.active = (self.active + 1) % self.len;
        self.active
    }

    /// Manual transition. Out-of-range selections are ignored.
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.active = index;
        }
        self.active
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let active = use_state(|| 0usize);

    // Auto-advance. The effect depends on the active index, so any change,
    // whether from the timer or from an indicator click, drops the old
    // interval and starts a fresh eight-second countdown. The destructor also
    // runs on unmount, so no tick ever fires against a torn-down component.
    {
        let deps = *active;
        let active = active.clone();
        use_effect_with_deps(
            move |current: &usize| {
                let mut rotation = HeroRotation::new(HERO_SLIDES.len());
                rotation.select(*current);
                let interval = Interval::new(config::HERO_ROTATION_MS, move || {
                    rotation.advance();
                    active.set(rotation.active());
                });
                move || drop(interval)
            },
            deps,
        );
    }

    let slide = &HERO_SLIDES[*active];

    let indicators = (0..HERO_SLIDES.len()).map(|index| {
        let active_handle = active.clone();
        let is_active = index == *active;
        let onclick = Callback::from(move |_| {
            let mut rotation = HeroRotation::new(HERO_SLIDES.len());
            rotation.select(index);
            active_handle.set(rotation.active());
        });
        html! {
            <button
                class={classes!("hero-indicator", is_active.then_some("active"))}
                {onclick}
                aria-label={format!("Show slide {}", index + 1)}
            />
        }
    });

    html! {
        <section class="hero">
            // Keyed so the layer remounts on every slide change and the
            // cross-fade animation replays.
            <div
                key={*active}
                class="hero-background"
                style={format!(
                    "background-image: linear-gradient(135deg, rgba(0, 102, 255, 0.9) 0%, rgba(139, 92, 246, 0.8) 100%), url('{}');",
                    slide.background
                )}
            />
            <div class="hero-content">
                <span class="hero-badge">{"Industry 4.0/5.0 Platform"}</span>
                <h1 class="hero-title">
                    {slide.title}
                    <br />
                    <span class="hero-accent">{slide.subtitle}</span>
                </h1>
                <p class="hero-description">{slide.description}</p>
                <div class="hero-stats">
                    { for slide.stats.iter().map(|stat| html! {
                        <div class="hero-stat">
                            <div class="hero-stat-number">{stat.number}</div>
                            <div class="hero-stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
                <div class="hero-actions">
                    <Link<Route> to={Route::Solutions}>
                        <button class="cta-primary">{slide.primary_action}</button>
                    </Link<Route>>
                    <Link<Route> to={Route::Contact}>
                        <button class="cta-secondary">{slide.secondary_action}</button>
                    </Link<Route>>
                </div>
                <div class="hero-indicators">
                    { for indicators }
                </div>
            </div>
            <div class="hero-scroll-hint">{"Scroll to explore"}</div>
            <style>{HERO_CSS}</style>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        color: white;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: center;
        background-attachment: fixed;
        animation: hero-crossfade 1.5s ease;
    }
    @keyframes hero-crossfade {
        from { opacity: 0; transform: scale(1.06); }
        to { opacity: 1; transform: scale(1); }
    }
    .hero-content {
        position: relative;
        z-index: 2;
        max-width: 56rem;
        padding: 0 2rem;
        text-align: center;
    }
    .hero-badge {
        display: inline-block;
        background: rgba(255, 255, 255, 0.2);
        backdrop-filter: blur(8px);
        border: 1px solid rgba(255, 255, 255, 0.3);
        border-radius: 9999px;
        padding: 0.5rem 1.25rem;
        font-size: 0.9rem;
        margin-bottom: 1.5rem;
    }
    .hero-title {
        font-size: 3.75rem;
        line-height: 1.1;
        margin-bottom: 1.5rem;
    }
    .hero-description {
        font-size: 1.3rem;
        color: #f3f4f6;
        margin-bottom: 2rem;
    }
    .hero-stats {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        margin-bottom: 2rem;
    }
    .hero-stat-number {
        font-size: 1.8rem;
        font-weight: 700;
        color: #4ade80;
    }
    .hero-stat-label {
        font-size: 0.9rem;
        color: #d1d5db;
    }
    .hero-actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
        margin-bottom: 2rem;
    }
    .hero-indicators {
        display: flex;
        gap: 0.6rem;
        justify-content: center;
    }
    .hero-indicator {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 50%;
        border: none;
        cursor: pointer;
        background: rgba(255, 255, 255, 0.5);
        transition: transform 0.3s ease, background 0.3s ease;
    }
    .hero-indicator:hover {
        background: rgba(255, 255, 255, 0.7);
    }
    .hero-indicator.active {
        background: white;
        transform: scale(1.25);
    }
    .hero-scroll-hint {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        font-size: 0.9rem;
        opacity: 0.7;
        z-index: 2;
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 2.5rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_ticks_cycle_through_all_slides() {
        let mut rotation = HeroRotation::new(3);
        let observed: Vec<usize> = (0..7).map(|_| rotation.advance()).collect();
        assert_eq!(observed, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn manual_selection_takes_effect_immediately() {
        let mut rotation = HeroRotation::new(3);
        assert_eq!(rotation.active(), 0);
        assert_eq!(rotation.select(2), 2);
        assert_eq!(HERO_SLIDES[rotation.active()].title, "Regulatory Compliance");
        assert_eq!(
            HERO_SLIDES[rotation.active()].stats[0].number,
            "100%"
        );
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut rotation = HeroRotation::new(3);
        rotation.select(1);
        assert_eq!(rotation.select(7), 1);
    }

    #[test]
    fn advance_continues_from_manual_selection() {
        let mut rotation = HeroRotation::new(3);
        rotation.select(2);
        assert_eq!(rotation.advance(), 0);
    }

    #[test]
    fn slide_set_is_complete() {
        assert_eq!(HERO_SLIDES.len(), 3);
        for slide in &HERO_SLIDES {
            assert!(!slide.title.is_empty());
            assert!(!slide.background.is_empty());
            assert_eq!(slide.stats.len(), 3);
        }
    }
}
