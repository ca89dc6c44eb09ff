//! Logs page view.
//!
//! # Design
//! - Fetch the payload once on mount; the store records the outcome once.
//! - Fire one icon request per distinct slug as soon as the payload lands.
//! - Icon answers after unmount are dropped and their object URLs revoked.

use crate::app::api::ApiCtx;
use crate::components::log_card::LogCard;
use crate::components::status::{EmptyState, ErrorPanel, LoadingPanel};
use crate::components::theme_toggle::ThemeToggle;
use crate::core::cards::build_cards;
use crate::core::config::ViewerConfig;
use crate::core::error::LoadError;
use crate::core::icons::IconCache;
use crate::core::logic::LogSource;
use crate::core::store::{LoadState, ViewerStore, finish_load};
use crate::core::theme::ThemeMode;
use crate::services::api::{ApiClient, IconHandle};
use blocklog_models::FetchResult;
use gloo::console;
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::use_location;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct LogsPageProps {
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
}

#[derive(Debug, Default, Deserialize)]
struct ViewerQuery {
    #[serde(rename = "d")]
    selector: Option<String>,
}

type SharedIcons = Rc<RefCell<IconCache<IconHandle>>>;

#[function_component(LogsPage)]
pub(crate) fn logs_page(props: &LogsPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(ViewerConfig::default()));
    let dispatch = Dispatch::<ViewerStore>::new();
    let load = use_selector(|store: &ViewerStore| store.load.clone());
    let icons_ref = use_mut_ref(IconCache::<IconHandle>::default);
    let alive = use_mut_ref(|| true);
    let render_tick = use_state(|| 0u64);
    let selector = use_location()
        .and_then(|location| location.query::<ViewerQuery>().ok())
        .and_then(|query| query.selector);

    {
        let client = api_ctx.client.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    let outcome = load_payload(&client, selector.as_deref()).await;
                    let mut outcome = Some(outcome);
                    dispatch.reduce_mut(|store| {
                        if let Some(outcome) = outcome.take() {
                            finish_load(store, outcome);
                        }
                    });
                });
                || ()
            },
            (),
        );
    }
    {
        let client = api_ctx.client.clone();
        let icons_ref = icons_ref.clone();
        let alive = alive.clone();
        let render_tick = render_tick.clone();
        use_effect_with_deps(
            move |load| {
                if let Some(result) = load.payload() {
                    let on_settled = Callback::from(move |()| {
                        render_tick.set((*render_tick).wrapping_add(1));
                    });
                    resolve_icons(&client, result, &icons_ref, &alive, &on_settled);
                }
                || ()
            },
            load.clone(),
        );
    }
    {
        let icons_ref = icons_ref.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    *alive.borrow_mut() = false;
                    icons_ref.borrow_mut().clear();
                }
            },
            (),
        );
    }

    let body = match &*load {
        LoadState::Loading => html! { <LoadingPanel /> },
        LoadState::Failed(message) => html! { <ErrorPanel message={message.clone()} /> },
        LoadState::Loaded(result) => {
            let cards = build_cards(result, &icons_ref.borrow());
            html! {
                <>
                    <header class="mb-6">
                        <h1 class="text-2xl font-bold">{result.player.name.clone()}</h1>
                        <p class="text-sm opacity-70 font-mono">{result.player.uuid.clone()}</p>
                    </header>
                    {if cards.is_empty() {
                        html! {
                            <EmptyState
                                title="No logs"
                                description={AttrValue::from("Nothing has been recorded for this player yet.")}
                            />
                        }
                    } else {
                        html! {
                            <>
                                {for cards.into_iter().map(|card| html! {
                                    <LogCard key={card.index} card={card} />
                                })}
                            </>
                        }
                    }}
                </>
            }
        }
    };

    let surface = match props.theme {
        ThemeMode::Dark => "bg-gray-900 text-white",
        ThemeMode::Light => "bg-gray-100 text-gray-900",
    };
    html! {
        <div class={classes!("min-h-screen", surface)}>
            <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
            <main class="max-w-3xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                {body}
            </main>
        </div>
    }
}

async fn load_payload(
    client: &ApiClient,
    selector: Option<&str>,
) -> Result<FetchResult, LoadError> {
    let outcome = match LogSource::from_selector(selector) {
        Ok(source) => {
            console::debug!("loading logs", client.logs_url(&source));
            client.fetch_logs(&source).await
        }
        Err(err) => Err(err),
    };
    if let Err(err) = &outcome {
        console::warn!("log fetch failed", err.to_string());
    }
    outcome
}

fn resolve_icons(
    client: &Rc<ApiClient>,
    result: &FetchResult,
    icons_ref: &SharedIcons,
    alive: &Rc<RefCell<bool>>,
    on_settled: &Callback<()>,
) {
    let slugs = icons_ref
        .borrow_mut()
        .claim_all(result.logs.iter().map(|log| log.block.as_str()));
    for slug in slugs {
        let client = client.clone();
        let icons_ref = icons_ref.clone();
        let alive = alive.clone();
        let on_settled = on_settled.clone();
        yew::platform::spawn_local(async move {
            let handle = match client.fetch_icon(&slug).await {
                Ok(handle) => Some(handle),
                Err(err) => {
                    console::error!("Error fetching block icon:", slug.clone(), err.to_string());
                    None
                }
            };
            if !*alive.borrow() {
                return;
            }
            if icons_ref.borrow_mut().resolve(&slug, handle) {
                on_settled.emit(());
            }
        });
    }
}
