//! Brochure popup: the lead form with its two submit paths.
//!
//! The component owns the form contents and the pending reset timer; the
//! submission itself runs through [`BrochureFlow`](crate::services::BrochureFlow),
//! whose outcome comes back as [`Msg::Finished`].

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::BrochurePopupProps;
pub use state::BrochurePopup;

impl Component for BrochurePopup {
    type Message = Msg;
    type Properties = BrochurePopupProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BrochurePopup::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
