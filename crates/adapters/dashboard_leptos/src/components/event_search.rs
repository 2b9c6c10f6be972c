//! Searchable event lists: recent events from the page and live events from
//! the tracked site.

use leptos::prelude::*;
use leptos::task::spawn_local;
use trackerdash_app::services::event_service::EventService;
use trackerdash_domain::events::EventItem;
use trackerdash_domain::search::filter_items;

use crate::components::{EmptyState, Loading};
use crate::context::use_dashboard;

fn event_row(event: EventItem, shown: bool) -> impl IntoView {
    let has_link = !event.link.is_empty();
    view! {
        <li class=if shown { "event-item" } else { "event-item d-none" }>
            <span class="event-title">{event.title}</span>
            <span class="event-date text-muted">{event.date}</span>
            <Show when=move || has_link>
                <a class="event-link" href=event.link.clone() target="_blank" rel="noopener">
                    <i class="bi bi-box-arrow-up-right"></i>
                </a>
            </Show>
        </li>
    }
}

/// A search box over `events`. Hidden rows stay in the list so the count
/// caption and the filter agree.
#[component]
pub fn EventSearch(
    #[prop(into)] events: Signal<Vec<EventItem>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let outcome = Memo::new(move |_| events.with(|items| filter_items(items, &query.get())));

    view! {
        <div class="search-box">
            <i class="bi bi-search"></i>
            <input
                type="search"
                class="form-control"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || outcome.with(|o| o.show_clear)>
                <button class="btn btn-sm btn-link" on:click=move |_| query.set(String::new())>
                    <i class="bi bi-x-lg"></i>
                </button>
            </Show>
        </div>
        <Show when=move || outcome.with(|o| o.caption.is_some())>
            <p class="search-caption">{move || outcome.with(|o| o.caption.clone())}</p>
        </Show>
        <ul class="event-list">
            {move || {
                let visible = outcome.with(|o| o.visible.clone());
                events
                    .get()
                    .into_iter()
                    .zip(visible)
                    .map(|(event, shown)| event_row(event, shown))
                    .collect_view()
            }}
        </ul>
    }
}

/// Events seen before this page load, newest first.
#[component]
pub fn RecentEvents() -> impl IntoView {
    let events = use_dashboard().page(|p| p.recent_events.clone());
    let empty = events.is_empty();

    view! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">
                    <i class="bi bi-calendar-event"></i>
                    " Recent events"
                </h2>
            </div>
            {if empty {
                view! { <EmptyState message="No events seen yet"/> }.into_any()
            } else {
                view! {
                    <EventSearch events=Signal::stored(events) placeholder="Search recent events"/>
                }
                    .into_any()
            }}
        </section>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LivePhase {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Events currently listed on the tracked site, fetched on demand.
#[component]
pub fn LiveEvents() -> impl IntoView {
    let dashboard = use_dashboard();
    let phase = RwSignal::new(LivePhase::Idle);
    let events = RwSignal::new(Vec::<EventItem>::new());

    let refresh = move |_| {
        phase.set(LivePhase::Loading);
        spawn_local(async move {
            match EventService::new(dashboard.api).live_events().await {
                Ok(list) => {
                    events.set(list);
                    phase.set(LivePhase::Ready);
                }
                Err(message) => phase.set(LivePhase::Failed(message)),
            }
        });
    };

    view! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">
                    <i class="bi bi-broadcast"></i>
                    " Live events"
                </h2>
                <button class="btn btn-sm btn-secondary" on:click=refresh>
                    <i class="bi bi-arrow-clockwise"></i>
                    " Fetch"
                </button>
            </div>
            {move || match phase.get() {
                LivePhase::Idle => {
                    view! { <EmptyState message="Press fetch to list live events"/> }.into_any()
                }
                LivePhase::Loading => {
                    view! { <Loading message="Fetching live events\u{2026}"/> }.into_any()
                }
                LivePhase::Ready if events.with(Vec::is_empty) => {
                    view! { <EmptyState message="No live events"/> }.into_any()
                }
                LivePhase::Ready => {
                    view! { <EventSearch events=events placeholder="Search live events"/> }.into_any()
                }
                LivePhase::Failed(message) => view! { <p class="text-danger">{message}</p> }.into_any(),
            }}
        </section>
    }
}
