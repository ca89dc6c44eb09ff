//! Single log entry card.

use crate::components::badge::Badge;
use crate::core::cards::LogCardView;
use crate::core::logic::format_timestamp_utc;
use js_sys::Date;
use wasm_bindgen::JsValue;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LogCardProps {
    pub card: LogCardView,
}

#[function_component(LogCard)]
pub(crate) fn log_card(props: &LogCardProps) -> Html {
    let card = &props.card;
    let icon = card.icon_url.clone().map(|src| {
        html! {
            <img
                src={src}
                alt={format!("{} icon", card.block)}
                width="24"
                height="24"
                class="inline-block"
            />
        }
    });
    html! {
        <div class="card bg-base-100 shadow mb-4">
            <div class="card-body p-4 gap-1">
                <div class="flex justify-between items-start mb-2">
                    <Badge tone={Some(card.tone.badge_class())}>{card.kind.clone()}</Badge>
                    <span class="text-sm opacity-70">{localized_timestamp(card.date)}</span>
                </div>
                <p class="font-semibold">{card.player_name.clone()}</p>
                <div class="flex items-center gap-2">
                    <p>{format!("Block: {}", card.block_label)}</p>
                    {icon.unwrap_or_default()}
                </div>
                <p>{format!("Server: {}", card.server_name)}</p>
                <p>{format!("World: {}", card.world)}</p>
                <p>{format!("Coordinates: {}", card.coordinates)}</p>
                {if card.staff {
                    html! { <Badge outline={true} class="mt-2">{"Staff"}</Badge> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

#[allow(clippy::cast_precision_loss)]
fn localized_timestamp(epoch_ms: i64) -> String {
    let date = Date::new(&JsValue::from_f64(epoch_ms as f64));
    if date.get_time().is_nan() {
        return format_timestamp_utc(epoch_ms);
    }
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}
