//! Story slider - full-screen gallery navigated by wheel, swipe or category
//!
//! The deck order lives in [`StoryDeck`]; the view only animates the
//! transition it reports. The root container captures touches and shares one
//! [`SliderController`] with the slides through context.

use crate::components::image_reveal::ImageReveal;
use crate::state::use_site_state;
use crate::utils::{
    slide_layer, HOP_CSS_EASING, OVERLAY_Z_INDEX, SLIDE_CLIP_HIDDEN, SLIDE_CLIP_SHOWN,
};
use cliff_tower_model::{
    DeckTransition, NavDirection, Slide, StoryDeck, SwipeTracker, WheelAccumulator,
};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, TouchEvent, WheelEvent};

const LOGO: &str = "/images/logo.svg";

/// Navigation state shared by the touch and wheel handlers and the deck view
#[derive(Clone, Copy)]
pub struct SliderController {
    pub deck: RwSignal<StoryDeck>,
    /// Transition being animated, if any
    pub transition: RwSignal<Option<DeckTransition>>,
    /// Slide whose caption is currently shown
    pub caption: RwSignal<Option<usize>>,
    wheel: StoredValue<WheelAccumulator>,
    swipe: StoredValue<SwipeTracker>,
    timers: StoredValue<Vec<Timeout>, LocalStorage>,
    transition_ms: u32,
    caption_delay_ms: u32,
}

impl SliderController {
    pub fn new(deck: StoryDeck) -> Self {
        let settings = use_site_state().data.with_value(|d| d.config.slider.clone());
        let transition_ms = (settings.transition_secs * 1000.0).round() as u32;
        let caption_delay_ms =
            (settings.transition_secs * settings.text_reveal_progress * 1000.0).round() as u32;
        let first = deck.current_index();
        Self {
            deck: RwSignal::new(deck),
            transition: RwSignal::new(None),
            caption: RwSignal::new(Some(first)),
            wheel: StoredValue::new(WheelAccumulator::new(&settings)),
            swipe: StoredValue::new(SwipeTracker::new(&settings)),
            timers: StoredValue::new_local(Vec::new()),
            transition_ms,
            caption_delay_ms,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.deck.with_untracked(|d| d.is_animating())
    }

    pub fn navigate(&self, direction: NavDirection) {
        let transition = self.deck.try_update(|d| d.navigate(direction)).flatten();
        if let Some(transition) = transition {
            self.begin(transition);
        }
    }

    pub fn jump_to_category(&self, category: &str) {
        let transition = self
            .deck
            .try_update(|d| d.jump_to_category(category))
            .flatten();
        if let Some(transition) = transition {
            self.begin(transition);
        }
    }

    pub fn wheel(&self, delta_y: f64) {
        let busy = self.is_busy();
        let step = self
            .wheel
            .try_update_value(|w| w.feed(delta_y, busy))
            .flatten();
        if let Some(direction) = step {
            self.navigate(direction);
        }
    }

    pub fn touch_start(&self, x: f64, y: f64) {
        self.swipe.update_value(|s| s.touch_start(x, y));
    }

    pub fn touch_move(&self, x: f64, y: f64) {
        self.swipe.update_value(|s| s.touch_move(x, y));
    }

    pub fn touch_end(&self) {
        let step = self.swipe.try_update_value(|s| s.touch_end()).flatten();
        if let Some(direction) = step {
            self.navigate(direction);
        }
    }

    /// Animate `transition`: caption swap part way through, unlock at the end
    fn begin(&self, transition: DeckTransition) {
        let this = *self;
        self.transition.set(Some(transition));
        self.caption.set(None);

        let caption = Timeout::new(self.caption_delay_ms, move || {
            this.caption.try_set(Some(transition.to));
        });
        let finish = Timeout::new(self.transition_ms, move || {
            this.deck.try_update(|d| d.finish_transition());
            this.transition.try_set(None);
        });
        // Replacing the list cancels timers of an earlier transition
        self.timers.set_value(vec![caption, finish]);
    }

    /// Cancel pending timers, e.g. on unmount
    pub fn cancel(&self) {
        self.timers.update_value(|timers| timers.clear());
    }
}

/// Access the slider controller provided by [`StorySlider`]
pub fn use_slider_controller() -> SliderController {
    expect_context::<SliderController>()
}

/// Gallery page
#[component]
pub fn StorySlider() -> impl IntoView {
    let site = use_site_state();
    let slides = site.data.with_value(|d| d.slides.clone());
    let deck = match StoryDeck::new(slides) {
        Ok(deck) => deck,
        Err(e) => {
            log::error!("Story slider unavailable: {}", e);
            return view! { <div class="story-slider-empty">"Gallery unavailable"</div> }.into_any();
        }
    };

    let controller = SliderController::new(deck);
    provide_context(controller);

    let wheel = StoredValue::new_local(web_sys::window().map(|window| {
        EventListener::new_with_options(
            &window,
            "wheel",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                event.prevent_default();
                controller.wheel(event.delta_y());
            },
        )
    }));

    on_cleanup(move || {
        controller.cancel();
        wheel.update_value(|listener| {
            listener.take();
        });
    });

    let slides = controller.deck.with_untracked(|d| {
        d.slides()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, slide)| view! { <SlideView index=index slide=slide /> })
            .collect_view()
    });

    let first_touch = |ev: &TouchEvent| {
        ev.touches()
            .get(0)
            .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
    };
    let overlay = format!("z-index: {OVERLAY_Z_INDEX}");

    view! {
        <div
            class="story-slider relative w-full h-screen overflow-hidden"
            on:touchstart=move |ev: TouchEvent| {
                if let Some((x, y)) = first_touch(&ev) {
                    controller.touch_start(x, y);
                }
            }
            on:touchmove=move |ev: TouchEvent| {
                if let Some((x, y)) = first_touch(&ev) {
                    controller.touch_move(x, y);
                }
            }
            on:touchend=move |_| controller.touch_end()
        >
            <div class="story-logo fixed top-2 left-2 p-4" style=overlay.clone()>
                <a href="/">
                    <img src=LOGO alt="Cliff Tower" class="h-12 w-auto" />
                </a>
            </div>
            <div class="story-slides absolute inset-0">{slides}</div>
            <div class="story-overlay absolute left-0 right-0 bottom-6" style=overlay>
                <CategoryNav />
                <ProgressBar />
            </div>
        </div>
    }
    .into_any()
}

/// One slide, stacked by its position in the deck
#[component]
fn SlideView(index: usize, slide: Slide) -> impl IntoView {
    let controller = use_slider_controller();
    let transition_secs = f64::from(controller.transition_ms) / 1000.0;

    let style = move || {
        let front = controller.deck.with(|d| d.current_index() == index);
        let transition = controller.transition.get();
        let leaving = transition.is_some_and(|t| t.from == index);
        let layer = slide_layer(front, leaving, transition.is_some());
        let clip = if layer.shown {
            SLIDE_CLIP_SHOWN
        } else {
            SLIDE_CLIP_HIDDEN
        };
        if layer.animated {
            format!(
                "z-index: {}; clip-path: {clip}; transition: clip-path {transition_secs}s {HOP_CSS_EASING}",
                layer.z_index
            )
        } else {
            format!("z-index: {}; clip-path: {clip}", layer.z_index)
        }
    };
    let caption_class = move || {
        if controller.caption.get() == Some(index) {
            "slide-caption visible"
        } else {
            "slide-caption"
        }
    };

    let media = match slide.reveal_image.clone() {
        Some(reveal) => view! { <ImageReveal base_image=slide.src.clone() reveal_image=reveal /> }.into_any(),
        None => view! {
            <img class="w-full h-full object-cover" src=slide.src.clone() alt=slide.heading.clone() />
        }
        .into_any(),
    };
    let layout = if slide.portrait {
        "story-slide portrait absolute inset-0 flex"
    } else {
        "story-slide absolute inset-0"
    };
    let subtext = slide
        .subtext
        .clone()
        .map(|subtext| view! { <p class="slide-subtext">{subtext}</p> });

    view! {
        <div class=layout style=style>
            <div class="slide-media w-full h-full">{media}</div>
            <div class=caption_class>
                <h2 class="slide-heading">{slide.heading.clone()}</h2>
                <p class="slide-text">{slide.text.clone()}</p>
                {subtext}
            </div>
        </div>
    }
}

/// Category buttons, the current one highlighted
#[component]
fn CategoryNav() -> impl IntoView {
    let controller = use_slider_controller();
    let categories: Vec<String> = controller
        .deck
        .with_untracked(|d| d.categories().into_iter().map(str::to_string).collect());

    let buttons = categories
        .into_iter()
        .map(|category| {
            let active_category = category.clone();
            let class = move || {
                let active = controller
                    .deck
                    .with(|d| d.current_category() == active_category);
                if active {
                    "category-button active"
                } else {
                    "category-button"
                }
            };
            let label = category.to_uppercase();
            view! {
                <button
                    class=class
                    on:click=move |_| controller.jump_to_category(&category)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! { <nav class="story-categories flex justify-center gap-4 mb-4">{buttons}</nav> }
}

/// Progress bar with a tick where each category starts
#[component]
fn ProgressBar() -> impl IntoView {
    let controller = use_slider_controller();
    let (total, marks) = controller
        .deck
        .with_untracked(|d| (d.len(), d.category_marks()));

    let fill = move || {
        let percent = controller.deck.with(|d| d.progress_percent());
        format!("width: {percent}%")
    };
    let counter = move || {
        let index = controller.deck.with(|d| d.current_index());
        format!("{:02} / {:02}", index + 1, total)
    };
    let ticks = marks
        .into_iter()
        .filter(|mark| mark.start_percent > 0.0)
        .map(|mark| {
            view! {
                <span
                    class="progress-mark absolute top-0 h-full"
                    title=mark.category
                    style=format!("left: {}%", mark.start_percent)
                ></span>
            }
        })
        .collect_view();

    view! {
        <div class="story-progress flex items-center gap-4 mx-auto">
            <div class="progress-track relative flex-1">
                <div class="progress-fill h-full" style=fill></div>
                {ticks}
            </div>
            <span class="progress-counter">{counter}</span>
        </div>
    }
}
