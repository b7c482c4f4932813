use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-logo">{"Bhrigu.tech"}</div>
                        <p>{"Engineering Intelligence. Empowering Compliance."}</p>
                        <p>{"Redefining regulated manufacturing through Industry 4.0/5.0 innovation."}</p>
                    </div>
                    <div>
                        <h3>{"Solutions"}</h3>
                        <ul>
                            <li><Link<Route> to={Route::Solutions}>{"BhriguOne Platform"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Solutions}>{"AI Analytics"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Solutions}>{"IoT Integration"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Solutions}>{"Compliance Automation"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Industries"}</h3>
                        <ul>
                            <li><Link<Route> to={Route::Industries}>{"Pharmaceuticals"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Industries}>{"Medical Devices"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Industries}>{"Food & Beverage"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Industries}>{"Biotech"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Company"}</h3>
                        <ul>
                            <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Resources}>{"Resources"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Products}>{"Products"}</Link<Route>></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    {"\u{00a9} 2025 Bhrigu.tech. All rights reserved. | Privacy Policy | Terms of Service"}
                </div>
            </div>
            <style>{FOOTER_CSS}</style>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .footer {
        background: #111827;
        color: white;
        padding: 3rem 1.5rem;
    }
    .footer-inner {
        max-width: 80rem;
        margin: 0 auto;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 2rem;
    }
    .footer-logo {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
        background: linear-gradient(90deg, #60a5fa, #c084fc);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .footer-grid p {
        color: #9ca3af;
        margin-bottom: 1rem;
    }
    .footer-grid h3 {
        font-size: 1.1rem;
        margin-bottom: 1rem;
    }
    .footer-grid ul {
        list-style: none;
    }
    .footer-grid li {
        margin-bottom: 0.5rem;
    }
    .footer-grid li a {
        color: #9ca3af;
        transition: color 0.3s ease;
    }
    .footer-grid li a:hover {
        color: white;
    }
    .footer-bottom {
        border-top: 1px solid #1f2937;
        margin-top: 2rem;
        padding-top: 2rem;
        text-align: center;
        color: #9ca3af;
    }
"#;
