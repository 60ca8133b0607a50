//! Job detail modal with the application form.
//!
//! Submissions go through [`JobApplicationFlow`](crate::services::JobApplicationFlow),
//! which writes the record to the browser's application log.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::JobApplicationProps;
pub use state::JobApplicationModal;

impl Component for JobApplicationModal {
    type Message = Msg;
    type Properties = JobApplicationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        JobApplicationModal::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
