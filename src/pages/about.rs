use yew::prelude::*;
use yew_router::components::Link;

use crate::components::animated_section::AnimatedSection;
use crate::Route;

const VISION_CARDS: [(&str, &str, &str); 3] = [
    (
        "The Problem",
        "Regulated manufacturers were forced to choose between innovation and compliance, \
         running modern operations on decades-old systems.",
        "\u{26A0}\u{FE0F}",
    ),
    (
        "Our Expertise",
        "Decades of combined experience across pharmaceutical manufacturing, enterprise \
         software, and regulatory affairs.",
        "\u{1F393}",
    ),
    (
        "The Solution",
        "BhriguOne: a single platform where Industry 4.0/5.0 capability and GxP compliance \
         are designed in together, not bolted on.",
        "\u{1F4A1}",
    ),
];

const LEADERSHIP: [(&str, &str, &str); 3] = [
    (
        "Dr. Raj Patel",
        "Chief Executive Officer",
        "Former pharmaceutical operations executive with 20+ years scaling compliant manufacturing.",
    ),
    (
        "Ananya Sharma",
        "Chief Technology Officer",
        "Architect of large-scale industrial data platforms and AI systems.",
    ),
    (
        "Michael Chen",
        "VP of Regulatory Strategy",
        "Ex-auditor turned product leader, translating regulation into software.",
    ),
];

const VALUES: [(&str, &str); 4] = [
    ("Integrity First", "Data integrity and business integrity are the same discipline."),
    ("Engineered Rigor", "We build like the industries we serve: validated, documented, tested."),
    ("Customer Obsession", "Every release starts from a real problem on a real shop floor."),
    ("Relentless Innovation", "Compliance is the floor, not the ceiling."),
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="page">
            <section
                class="page-hero"
                style="background-image: linear-gradient(135deg, rgba(0, 102, 255, 0.9) 0%, rgba(139, 92, 246, 0.8) 100%), url('https://images.pexels.com/photos/7616608/pexels-photo-7616608.jpeg');"
            >
                <div>
                    <h1>
                        {"The Bhrigu"}
                        <br />
                        <span class="hero-accent">{"Story"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Engineering Intelligence. Empowering Compliance. The team redefining what \
                          regulated manufacturing software can be."}
                    </p>
                </div>
            </section>

            <AnimatedSection class="section section-light">
                <div class="section-inner split-section">
                    <div>
                        <h2>{"Our Story"}</h2>
                        <p style="font-size: 1.1rem; color: #374151; margin: 1rem 0;">
                            {"Bhrigu.tech was founded on a simple observation: the industries with the \
                              most to gain from digital transformation were the ones least served by it. \
                              Pharmaceutical plants, medical device lines, and food producers ran on \
                              paper batch records and disconnected legacy systems because nothing modern \
                              met their regulatory bar."}
                        </p>
                        <p style="font-size: 1.1rem; color: #374151;">
                            {"We set out to change that, building BhriguOne from the ground up so that \
                              AI-driven operations and audit-ready compliance come from the same \
                              platform, the same data, and the same team."}
                        </p>
                    </div>
                    <img
                        src="https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg"
                        alt="The Bhrigu team at work"
                        loading="lazy"
                    />
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-tint">
                <div class="section-inner">
                    <h2 class="section-title">{"Founding Vision"}</h2>
                    <div class="card-grid">
                        { for VISION_CARDS.iter().enumerate().map(|(index, (title, desc, icon))| html! {
                            <AnimatedSection stagger_index={index as u32}>
                                <div class="card" style="text-align: center;">
                                    <div class="card-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*desc}</p>
                                </div>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-light">
                <div class="section-inner">
                    <h2 class="section-title">{"Leadership"}</h2>
                    <p class="section-intro">
                        {"Operators, engineers, and regulators who have lived the problem we solve."}
                    </p>
                    <div class="card-grid">
                        { for LEADERSHIP.iter().map(|(name, role, bio)| html! {
                            <div class="card" style="text-align: center;">
                                <h3>{*name}</h3>
                                <p style="color: #2563eb; font-weight: 600; margin-bottom: 0.5rem;">{*role}</p>
                                <p>{*bio}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-dark">
                <div class="section-inner">
                    <h2 class="section-title">{"What We Stand For"}</h2>
                    <div class="card-grid">
                        { for VALUES.iter().map(|(title, desc)| html! {
                            <div class="card-dark">
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-light">
                <div class="section-inner" style="text-align: center;">
                    <h2 class="section-title">{"Build the Future With Us"}</h2>
                    <p class="section-intro">
                        {"Whether as a customer, a partner, or a teammate, there is a place for you \
                          in the Bhrigu story."}
                    </p>
                    <div class="cta-row">
                        <Link<Route> to={Route::Contact}>
                            <button class="cta-primary">{"Get in Touch"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
