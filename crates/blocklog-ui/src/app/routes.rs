//! Routing definitions for the viewer.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Logs,
    #[not_found]
    #[at("/404")]
    NotFound,
}
