use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BadgeProps {
    #[prop_or_default]
    pub children: Children,
    /// Tone class such as `badge-primary`.
    #[prop_or_default]
    pub tone: Option<&'static str>,
    #[prop_or_default]
    pub outline: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Badge)]
pub(crate) fn badge(props: &BadgeProps) -> Html {
    let classes = classes!(
        "badge",
        props.tone,
        props.outline.then_some("badge-outline"),
        props.class.clone()
    );

    html! {
        <span class={classes}>
            { for props.children.iter() }
        </span>
    }
}
