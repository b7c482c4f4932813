use yew::prelude::*;
use yew_router::components::Link;

use crate::components::animated_section::AnimatedSection;
use crate::Route;

const CATEGORIES: [(&str, &str, &str, &str); 4] = [
    (
        "Whitepapers",
        "\u{1F4C4}",
        "12 publications",
        "Deep dives on compliance automation, data integrity, and Industry 5.0.",
    ),
    (
        "Case Studies",
        "\u{1F4C8}",
        "8 customer stories",
        "How regulated manufacturers deployed BhriguOne and what changed.",
    ),
    (
        "Webinars",
        "\u{1F3A5}",
        "Monthly sessions",
        "Live walkthroughs with our engineers and regulatory specialists.",
    ),
    (
        "Regulatory Guides",
        "\u{1F4DA}",
        "Updated quarterly",
        "Practical guides to 21 CFR Part 11, EU Annex 11, GAMP 5, and more.",
    ),
];

const FEATURED: [(&str, &str, &str); 3] = [
    (
        "The Paperless Batch Record",
        "Whitepaper",
        "A practical roadmap from paper batch records to validated electronic execution.",
    ),
    (
        "AI Under Audit",
        "Regulatory Guide",
        "Documenting and validating machine learning models in GxP environments.",
    ),
    (
        "From Six Systems to One",
        "Case Study",
        "How a multi-site pharmaceutical manufacturer consolidated onto BhriguOne.",
    ),
];

#[function_component(ResourcesPage)]
pub fn resources_page() -> Html {
    html! {
        <div class="page">
            <section
                class="page-hero"
                style="background-image: linear-gradient(135deg, rgba(0, 102, 255, 0.9) 0%, rgba(139, 92, 246, 0.8) 100%), url('https://images.pexels.com/photos/159711/books-bookstore-book-reading-159711.jpeg');"
            >
                <div>
                    <h1>
                        {"Knowledge &"}
                        <br />
                        <span class="hero-accent">{"Innovation Hub"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Research, guides, and stories from the front lines of regulated \
                          manufacturing transformation."}
                    </p>
                </div>
            </section>

            <AnimatedSection class="section section-light">
                <div class="section-inner">
                    <h2 class="section-title">{"Browse by Category"}</h2>
                    <div class="card-grid">
                        { for CATEGORIES.iter().enumerate().map(|(index, (title, icon, count, desc))| html! {
                            <AnimatedSection stagger_index={index as u32}>
                                <div class="card" style="text-align: center;">
                                    <div class="card-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p style="color: #2563eb; font-weight: 600; margin-bottom: 0.5rem;">{*count}</p>
                                    <p>{*desc}</p>
                                </div>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-tint">
                <div class="section-inner">
                    <h2 class="section-title">{"Featured Reading"}</h2>
                    <div class="card-grid">
                        { for FEATURED.iter().map(|(title, kind, desc)| html! {
                            <div class="card">
                                <p style="color: #2563eb; font-weight: 600; font-size: 0.85rem; text-transform: uppercase;">
                                    {*kind}
                                </p>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-dark">
                <div class="section-inner" style="text-align: center;">
                    <h2 class="section-title">{"Want Something We Haven't Written Yet?"}</h2>
                    <p class="section-intro">
                        {"Ask our team. If it matters to regulated manufacturing, we probably have \
                          an opinion on it."}
                    </p>
                    <div class="cta-row">
                        <Link<Route> to={Route::Contact}>
                            <button class="cta-primary">{"Contact Us"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
