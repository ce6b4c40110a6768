//! Landing page with a single entry link into the customer list.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <div class="landing-card">
                <div class="landing-card__icon" aria-hidden="true">"💬"</div>
                <h1 class="landing-card__title">"Welcome to Bake Assist!"</h1>
                <p class="landing-card__subtitle">
                    "Your Agentic AI chatbot designed to help grow your bakery business."
                </p>
                <a href="/customers" class="btn btn--primary landing-card__cta">
                    "Get Started"
                </a>
            </div>
            <footer class="landing-page__footer">"Powered by Ollama"</footer>
        </div>
    }
}
