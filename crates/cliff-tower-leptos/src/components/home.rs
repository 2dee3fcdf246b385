//! Landing page hero

use crate::utils::stage_class;
use leptos::prelude::*;

const LOGO: &str = "/images/logo.svg";
const HERO_VIDEO: &str = "/video/hero.mp4";
const HERO_POSTER: &str = "/images/hero.webp";

/// Hero with staged entrance; the stages are CSS classes keyed off `entered`
#[component]
pub fn HomePage() -> impl IntoView {
    let entered = RwSignal::new(false);
    // Flip after the first paint so the transitions actually run
    Effect::new(move |_| entered.set(true));

    let stage = move |base: &'static str| move || stage_class(base, entered.get());

    view! {
        <section class="home-hero relative w-full h-screen overflow-hidden">
            <video
                class=stage("hero-backdrop absolute inset-0 w-full h-full object-cover")
                poster=HERO_POSTER
                autoplay=true
                loop=true
                playsinline=true
                prop:muted=true
            >
                <source src=HERO_VIDEO type="video/mp4" />
            </video>
            <div class="hero-content absolute inset-0 flex flex-col items-center justify-center text-center">
                <img class=stage("hero-logo stage-1") src=LOGO alt="Cliff Tower" />
                <h1 class=stage("hero-title stage-2")>"Cliff Tower"</h1>
                <p class=stage("hero-tagline stage-3")>"Duplex residences above the sea"</p>
                <p class=stage("hero-subtagline stage-4")>"Every floor a private horizon"</p>
                <div class=stage("hero-links stage-5 flex gap-6")>
                    <a href="/floorplan" class="hero-link">"Explore Floors"</a>
                    <a href="/gallery" class="hero-link">"View Gallery"</a>
                </div>
                <h2 class=stage("hero-coming-soon stage-6 uppercase font-bold")>"Coming Soon"</h2>
            </div>
        </section>
    }
}
