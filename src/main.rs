mod components;
mod config;
mod pages;

use yew::prelude::*;
use yew_router::prelude::*;

use components::footer::Footer;
use components::navbar::Navbar;
use pages::about::AboutPage;
use pages::contact::ContactPage;
use pages::home::HomePage;
use pages::industries::IndustriesPage;
use pages::products::ProductsPage;
use pages::resources::ResourcesPage;
use pages::solutions::SolutionsPage;
use pages::technology::TechnologyPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/solutions")]
    Solutions,
    #[at("/industries")]
    Industries,
    #[at("/technology")]
    Technology,
    #[at("/about")]
    About,
    #[at("/products")]
    Products,
    #[at("/resources")]
    Resources,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Solutions => html! { <SolutionsPage /> },
        Route::Industries => html! { <IndustriesPage /> },
        Route::Technology => html! { <TechnologyPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Products => html! { <ProductsPage /> },
        Route::Resources => html! { <ResourcesPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <style>{BASE_CSS}</style>
        </BrowserRouter>
    }
}

const BASE_CSS: &str = r#"
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }
    body {
        font-family: 'Inter', 'Segoe UI', -apple-system, sans-serif;
        color: #1f2937;
        background: #ffffff;
        line-height: 1.6;
    }
    a {
        text-decoration: none;
        color: inherit;
    }
    .page {
        padding-top: 4rem;
    }
    .page-hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        color: white;
        background-size: cover;
        background-position: center;
        background-attachment: fixed;
    }
    .page-hero h1 {
        font-size: 3.5rem;
        line-height: 1.15;
        margin-bottom: 1.5rem;
    }
    .page-hero .hero-lead {
        font-size: 1.4rem;
        color: #f3f4f6;
        max-width: 48rem;
        margin: 0 auto 2rem;
    }
    .hero-accent {
        background: linear-gradient(90deg, #4ade80, #22d3ee);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .section {
        padding: 6rem 2rem;
    }
    .section-light {
        background: linear-gradient(135deg, #f9fafb, #ffffff);
    }
    .section-tint {
        background: linear-gradient(135deg, #eff6ff, #f5f3ff);
    }
    .section-dark {
        background: linear-gradient(135deg, #111827, #1e3a8a);
        color: white;
    }
    .section-inner {
        max-width: 80rem;
        margin: 0 auto;
    }
    .section-title {
        font-size: 2.75rem;
        text-align: center;
        margin-bottom: 1.5rem;
        background: linear-gradient(90deg, #2563eb, #9333ea);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .section-dark .section-title {
        background: linear-gradient(90deg, #4ade80, #22d3ee);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .section-intro {
        font-size: 1.25rem;
        color: #374151;
        text-align: center;
        max-width: 48rem;
        margin: 0 auto 4rem;
    }
    .section-dark .section-intro {
        color: #d1d5db;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 2rem;
    }
    .card {
        background: white;
        padding: 2rem;
        border-radius: 1rem;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .card:hover {
        transform: translateY(-5px);
        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
    }
    .card h3 {
        font-size: 1.3rem;
        margin-bottom: 0.75rem;
        color: #111827;
    }
    .card p {
        color: #4b5563;
    }
    .card-dark {
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(8px);
        border: 1px solid rgba(255, 255, 255, 0.2);
        padding: 2rem;
        border-radius: 1rem;
        transition: border-color 0.3s ease, transform 0.3s ease;
    }
    .card-dark:hover {
        border-color: rgba(255, 255, 255, 0.4);
        transform: translateY(-5px);
    }
    .card-dark h3 {
        color: white;
        font-size: 1.3rem;
        margin-bottom: 0.75rem;
    }
    .card-dark p {
        color: #d1d5db;
    }
    .card-icon {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1.25rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.6rem;
        background: linear-gradient(90deg, #3b82f6, #8b5cf6);
        color: white;
    }
    .split-section {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .split-section img {
        width: 100%;
        height: 24rem;
        object-fit: cover;
        border-radius: 1rem;
        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
    }
    .split-section h2 {
        font-size: 2.5rem;
        margin-bottom: 1.5rem;
        background: linear-gradient(90deg, #2563eb, #9333ea);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .feature-row {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
        margin-bottom: 1rem;
        font-size: 1.1rem;
        color: #374151;
    }
    .check-list {
        display: flex;
        align-items: flex-start;
        gap: 0.5rem;
        padding: 0.25rem 0;
        color: #4b5563;
    }
    .check-list span:first-child {
        color: #16a34a;
        font-weight: 700;
    }
    .cta-row {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }
    .cta-primary {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        background: linear-gradient(90deg, #2563eb, #9333ea);
        color: white;
        padding: 1rem 2rem;
        border-radius: 9999px;
        font-weight: 600;
        font-size: 1.1rem;
        border: none;
        cursor: pointer;
        box-shadow: 0 10px 20px rgba(37, 99, 235, 0.25);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .cta-primary:hover {
        transform: scale(1.05);
        box-shadow: 0 15px 30px rgba(37, 99, 235, 0.35);
    }
    .cta-secondary {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        background: rgba(255, 255, 255, 0.2);
        backdrop-filter: blur(8px);
        border: 1px solid rgba(255, 255, 255, 0.3);
        color: white;
        padding: 1rem 2rem;
        border-radius: 9999px;
        font-weight: 600;
        font-size: 1.1rem;
        cursor: pointer;
        transition: background 0.3s ease, transform 0.3s ease;
    }
    .cta-secondary:hover {
        background: rgba(255, 255, 255, 0.3);
        transform: scale(1.05);
    }
    .section-light .cta-secondary,
    .section-tint .cta-secondary {
        background: transparent;
        border-color: #2563eb;
        color: #2563eb;
    }
    .section-light .cta-secondary:hover,
    .section-tint .cta-secondary:hover {
        background: rgba(37, 99, 235, 0.08);
    }
    .not-found {
        min-height: 60vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        padding-top: 4rem;
    }
    .not-found h1 {
        font-size: 4rem;
        color: #2563eb;
    }
    @media (max-width: 768px) {
        .page-hero h1 {
            font-size: 2.4rem;
        }
        .section {
            padding: 4rem 1rem;
        }
        .section-title {
            font-size: 2rem;
        }
        .split-section {
            grid-template-columns: 1fr;
        }
    }
"#;

fn main() {
    yew::Renderer::<App>::new().render();
}
