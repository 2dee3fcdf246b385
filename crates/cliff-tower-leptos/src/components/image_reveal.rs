//! Image reveal - a circular mask that uncovers a second image
//!
//! Wide viewports drive [`RevealGesture`] from pointer events and a
//! requestAnimationFrame loop that only runs while the mask is moving.
//! Narrow viewports get a Day View / Night View toggle.

use crate::platform;
use crate::state::use_site_state;
use crate::utils::{reveal_image_style, reveal_ring_style, reveal_sources};
use cliff_tower_model::{FrameRequest, RevealGesture, RevealMode};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use leptos::prelude::*;
use web_sys::MouseEvent;

/// Pending frame of one reveal instance; dropping the handle cancels it
type FrameSlot = StoredValue<Option<AnimationFrame>, LocalStorage>;

/// Request the next frame unless one is already queued
fn schedule_frame(gesture: RwSignal<RevealGesture>, frame: FrameSlot) {
    if frame.with_value(Option::is_some) {
        return;
    }
    let handle = request_animation_frame(move |timestamp| {
        frame.update_value(|slot| {
            slot.take();
        });
        let request = gesture
            .try_update(|g| g.tick(timestamp))
            .unwrap_or(FrameRequest::Idle);
        if request == FrameRequest::Continue {
            schedule_frame(gesture, frame);
        }
    });
    frame.set_value(Some(handle));
}

/// Pointer position relative to the container, plus the container size
fn local_position(container: &web_sys::HtmlDivElement, ev: &MouseEvent) -> (f64, f64, f64, f64) {
    let rect = container.get_bounding_client_rect();
    (
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
        rect.width(),
        rect.height(),
    )
}

/// Two stacked images with a pointer-following reveal
#[component]
pub fn ImageReveal(
    #[prop(into)] base_image: String,
    #[prop(into)] reveal_image: String,
    #[prop(optional, into)] alt: Option<String>,
) -> impl IntoView {
    let site = use_site_state();
    let settings = site.data.with_value(|d| d.config.reveal.clone());
    let gesture = RwSignal::new(RevealGesture::new(&settings, platform::viewport_width()));
    let frame: FrameSlot = StoredValue::new_local(None);
    let container = NodeRef::<leptos::html::Div>::new();
    let alt = alt.unwrap_or_else(|| "Residence view".to_string());

    // Coarse views so that the image layers only re-render on a swap
    let mode = Memo::new(move |_| gesture.with(|g| g.mode()));
    let swapped = Memo::new(move |_| gesture.with(|g| g.is_swapped()));
    let compact_alternate = Memo::new(move |_| gesture.with(|g| g.compact_shows_alternate()));
    let mask = Memo::new(move |_| gesture.with(|g| g.mask()));

    let resize = StoredValue::new_local(web_sys::window().map(|window| {
        EventListener::new(&window, "resize", move |_| {
            let width = platform::viewport_width();
            if gesture.try_update(|g| g.resize(width)) == Some(true) {
                // Leaving pointer mode drops any queued frame
                if gesture.with_untracked(|g| g.mode()) == RevealMode::Compact {
                    frame.update_value(|slot| {
                        slot.take();
                    });
                }
            }
        })
    }));

    on_cleanup(move || {
        gesture.try_update(|g| g.stop());
        frame.update_value(|slot| {
            slot.take();
        });
        resize.update_value(|listener| {
            listener.take();
        });
    });

    let on_enter = move |_: MouseEvent| {
        if gesture.try_update(|g| g.pointer_enter()) == Some(true) {
            schedule_frame(gesture, frame);
        }
    };
    let on_leave = move |_: MouseEvent| {
        if gesture.try_update(|g| g.pointer_leave()) == Some(true) {
            schedule_frame(gesture, frame);
        }
    };
    let on_move = move |ev: MouseEvent| {
        let Some(el) = container.get_untracked() else {
            return;
        };
        let (x, y, _, _) = local_position(&el, &ev);
        if gesture.try_update(|g| g.pointer_move(x, y)) == Some(true) {
            schedule_frame(gesture, frame);
        }
    };
    let on_click = move |ev: MouseEvent| {
        let Some(el) = container.get_untracked() else {
            return;
        };
        let (x, y, width, height) = local_position(&el, &ev);
        let now = platform::now_ms();
        if gesture.try_update(|g| g.click(x, y, width, height, now)) == Some(true) {
            schedule_frame(gesture, frame);
        }
    };

    let base = StoredValue::new(base_image);
    let reveal = StoredValue::new(reveal_image);
    let alt = StoredValue::new(alt);

    let pointer_view = move || {
        // Sources track the swap on their own so the container is not rebuilt
        let under = move || {
            let swapped = swapped.get();
            base.with_value(|b| reveal.with_value(|r| reveal_sources(swapped, b, r).0.to_string()))
        };
        let over = move || {
            let swapped = swapped.get();
            base.with_value(|b| reveal.with_value(|r| reveal_sources(swapped, b, r).1.to_string()))
        };
        let mask_style = move || mask.with(reveal_image_style);
        let ring_style = move || mask.with(reveal_ring_style);
        view! {
            <div
                node_ref=container
                class="image-reveal relative w-full h-full overflow-hidden"
                on:mouseenter=on_enter
                on:mouseleave=on_leave
                on:mousemove=on_move
                on:click=on_click
            >
                <img class="image-reveal-base absolute inset-0 w-full h-full object-cover" src=under alt=alt.get_value() />
                <img
                    class="image-reveal-mask absolute inset-0 w-full h-full object-cover pointer-events-none"
                    src=over
                    alt=""
                    style=mask_style
                />
                <div class="image-reveal-ring absolute top-0 left-0 rounded-full pointer-events-none" style=ring_style></div>
            </div>
        }
    };

    let compact_view = move || {
        let image = move || {
            if compact_alternate.get() {
                reveal.get_value()
            } else {
                base.get_value()
            }
        };
        let caption = move || {
            if compact_alternate.get() {
                "Night View"
            } else {
                "Day View"
            }
        };
        view! {
            <div class="image-reveal compact relative w-full h-full overflow-hidden">
                <img class="absolute inset-0 w-full h-full object-cover" src=image alt=alt.get_value() />
                <button
                    class="image-reveal-toggle absolute"
                    on:click=move |_| gesture.update(|g| g.toggle_compact())
                >
                    {caption}
                </button>
            </div>
        }
    };

    move || match mode.get() {
        RevealMode::Pointer => pointer_view().into_any(),
        RevealMode::Compact => compact_view().into_any(),
    }
}
